//! RAII scope guards for paired begin/end calls
//!
//! Dear ImGui's paired calls come in two shapes: begin functions returning a
//! `bool` that gates the body, and push/begin functions returning nothing.
//! [`BoolGuard`] and [`VoidGuard`] cover both, binding the matching end/pop
//! call to object lifetime so it runs on every exit path, at most once.
//!
//! These types are normally instantiated by the `with_*!`/`set_*!` macros
//! rather than by hand:
//!
//! ```no_run
//! # use dear_imgui_sugar::*;
//! # let mut ctx = Context::create_or_panic();
//! # let ui = ctx.frame();
//! with_window!(ui, "Hello" => {
//!     ui.text("guarded");
//! });
//! ```

use std::marker::PhantomData;

/// The release half of a paired call: a plain function pointer, never a
/// closure and never owning state.
pub type EndFn = fn();

/// Scope guard for begin functions returning `bool`.
///
/// `ALWAYS_END` selects the release policy at compile time:
///
/// - `true`: the end call runs on drop no matter what the begin call
///   returned (`Begin`/`BeginChild`, whose `false` only means "don't bother
///   rendering" while the stack still needs balancing);
/// - `false`: the end call runs only if the begin call returned `true`
///   (popups, combos, menus, tables, tree nodes, ..., which push nothing when
///   they decline).
#[must_use]
pub struct BoolGuard<const ALWAYS_END: bool> {
    state: bool,
    end: EndFn,
    // Dear ImGui assumes a single UI thread; keep the guard on it.
    _not_send: PhantomData<*const ()>,
}

impl<const ALWAYS_END: bool> BoolGuard<ALWAYS_END> {
    /// Wraps the result of an already-executed begin call together with its
    /// release function.
    #[inline]
    pub fn new(state: bool, end: EndFn) -> Self {
        BoolGuard {
            state,
            end,
            _not_send: PhantomData,
        }
    }

    /// Whether the guarded body should run.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state
    }

    /// Releases the scope now instead of waiting for drop.
    #[inline]
    pub fn end(self) {
        // left empty for drop
    }
}

impl<const ALWAYS_END: bool> Drop for BoolGuard<ALWAYS_END> {
    fn drop(&mut self) {
        if ALWAYS_END || self.state {
            (self.end)();
        }
    }
}

/// Scope guard for push/begin functions returning nothing.
///
/// The begin call runs eagerly in [`VoidGuard::new`]; arguments are forwarded
/// by closure capture, so each call site monomorphizes to a direct call with
/// no allocation or dynamic dispatch. Only the end pointer is stored, and it
/// always runs on drop.
#[must_use]
pub struct VoidGuard {
    end: EndFn,
    _not_send: PhantomData<*const ()>,
}

impl VoidGuard {
    /// Invokes `begin` immediately and arms `end` to run on drop.
    #[inline]
    pub fn new(begin: impl FnOnce(), end: EndFn) -> Self {
        begin();
        VoidGuard {
            end,
            _not_send: PhantomData,
        }
    }

    /// Always `true`; lets void scopes share the bool-guard block idiom.
    #[inline]
    pub fn is_active(&self) -> bool {
        true
    }

    /// Releases the scope now instead of waiting for drop.
    #[inline]
    pub fn end(self) {
        // left empty for drop
    }
}

impl Drop for VoidGuard {
    fn drop(&mut self) {
        (self.end)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    thread_local! {
        static END_CALLS: Cell<usize> = const { Cell::new(0) };
        static TRACE: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    }

    fn count_end() {
        END_CALLS.with(|c| c.set(c.get() + 1));
    }

    fn trace(label: &'static str) {
        TRACE.with(|t| t.borrow_mut().push(label));
    }

    fn end_a() {
        trace("a");
    }
    fn end_b() {
        trace("b");
    }
    fn end_c() {
        trace("c");
    }

    fn reset() {
        END_CALLS.with(|c| c.set(0));
        TRACE.with(|t| t.borrow_mut().clear());
    }

    fn end_calls() -> usize {
        END_CALLS.with(|c| c.get())
    }

    #[test]
    fn conditional_guard_releases_only_when_active() {
        reset();
        {
            let g = BoolGuard::<false>::new(true, count_end);
            assert!(g.is_active());
        }
        assert_eq!(end_calls(), 1);

        {
            let g = BoolGuard::<false>::new(false, count_end);
            assert!(!g.is_active());
        }
        assert_eq!(end_calls(), 1);
    }

    #[test]
    fn always_guard_releases_regardless_of_state() {
        reset();
        {
            let g = BoolGuard::<true>::new(false, count_end);
            assert!(!g.is_active());
        }
        assert_eq!(end_calls(), 1);

        {
            let _g = BoolGuard::<true>::new(true, count_end);
        }
        assert_eq!(end_calls(), 2);
    }

    #[test]
    fn explicit_end_releases_exactly_once() {
        reset();
        let g = BoolGuard::<true>::new(true, count_end);
        g.end();
        assert_eq!(end_calls(), 1);
    }

    #[test]
    fn void_guard_runs_begin_eagerly_and_always_releases() {
        reset();
        {
            let g = VoidGuard::new(|| trace("begin"), end_a);
            assert!(g.is_active());
            trace("body");
        }
        TRACE.with(|t| assert_eq!(*t.borrow(), ["begin", "body", "a"]));
    }

    #[test]
    fn nested_guards_release_in_reverse_order() {
        reset();
        {
            let _a = BoolGuard::<false>::new(true, end_a);
            let _b = BoolGuard::<true>::new(false, end_b);
            let _c = VoidGuard::new(|| {}, end_c);
        }
        TRACE.with(|t| assert_eq!(*t.borrow(), ["c", "b", "a"]));
    }

    #[test]
    fn guards_release_during_unwind() {
        reset();
        let result = std::panic::catch_unwind(|| {
            let _a = BoolGuard::<false>::new(true, end_a);
            let _b = VoidGuard::new(|| {}, end_b);
            panic!("boom");
        });
        assert!(result.is_err());
        TRACE.with(|t| assert_eq!(*t.borrow(), ["b", "a"]));
    }
}
