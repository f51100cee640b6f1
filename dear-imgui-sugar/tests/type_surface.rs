//! Compile-time checks on the guard types and overload-dispatch traits.

use dear_imgui_sugar::{BoolGuard, StyleColorValue, StyleVarValue, VoidGuard};
use static_assertions::{assert_impl_all, assert_not_impl_any};

// Guards belong to the single UI thread.
assert_not_impl_any!(BoolGuard<true>: Send, Sync, Clone);
assert_not_impl_any!(BoolGuard<false>: Send, Sync, Clone);
assert_not_impl_any!(VoidGuard: Send, Sync, Clone);

// The style color stack takes a packed integer or a four-component vector,
// and nothing else; the style var stack takes a scalar or a two-component
// vector. The trait impls are what select the sys-level overload.
assert_impl_all!(u32: StyleColorValue);
assert_impl_all!([f32; 4]: StyleColorValue);
assert_not_impl_any!(f32: StyleColorValue);
assert_not_impl_any!([f32; 2]: StyleColorValue);

assert_impl_all!(f32: StyleVarValue);
assert_impl_all!([f32; 2]: StyleVarValue);
assert_not_impl_any!(u32: StyleVarValue);
assert_not_impl_any!([f32; 4]: StyleVarValue);
