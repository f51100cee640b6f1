//! Parameter stacks
//!
//! Push/pop pairs for fonts, item flags, widths, IDs, clip rects, textures
//! and style state. Pushes live on [`Ui`]; each pop is a free function usable
//! as an [`EndFn`](crate::EndFn). The `set_*!` statement constructs keep a
//! push in effect until the enclosing block ends:
//!
//! ```no_run
//! # use dear_imgui_sugar::*;
//! # let mut ctx = Context::create_or_panic();
//! # let ui = ctx.frame();
//! with_window!(ui, "Styled" => {
//!     set_item_width!(ui, 120.0);
//!     set_style_var!(ui, StyleVar::Alpha, 0.8f32);
//!     ui.text("both pushes pop when the window body ends");
//! });
//! ```

use crate::style::{StyleColor, StyleVar};
use crate::sys;
use crate::ui::Ui;

/// A font obtained from the active context.
///
/// Only a handle; atlas management belongs to the collaborating library.
#[derive(Copy, Clone, Debug)]
pub struct Font(*mut sys::ImFont);

impl Font {
    /// Wraps a raw font pointer.
    ///
    /// The pointer must come from the active context's font atlas.
    pub fn from_raw(raw: *mut sys::ImFont) -> Self {
        Font(raw)
    }

    /// The underlying raw pointer
    pub fn raw(&self) -> *mut sys::ImFont {
        self.0
    }
}

/// An opaque backend texture identifier
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(u64);

impl TextureId {
    /// Creates a texture ID from a raw backend handle
    pub fn new(id: u64) -> Self {
        TextureId(id)
    }

    /// The raw backend handle
    pub fn id(&self) -> u64 {
        self.0
    }

    fn to_ref(self) -> sys::ImTextureRef {
        sys::ImTextureRef {
            _TexData: std::ptr::null_mut(),
            _TexID: self.0 as sys::ImTextureID,
        }
    }
}

/// An identifier that can be pushed to the ID stack
#[derive(Copy, Clone, Debug)]
pub enum Id<'a> {
    /// Integer identifier
    Int(i32),
    /// String identifier
    Str(&'a str),
    /// Pointer identifier
    Ptr(*const std::ffi::c_void),
}

impl From<i32> for Id<'_> {
    fn from(i: i32) -> Self {
        Id::Int(i)
    }
}

impl From<usize> for Id<'_> {
    fn from(i: usize) -> Self {
        Id::Int(i as i32)
    }
}

impl<'a> From<&'a str> for Id<'a> {
    fn from(s: &'a str) -> Self {
        Id::Str(s)
    }
}

impl<'a> From<&'a String> for Id<'a> {
    fn from(s: &'a String) -> Self {
        Id::Str(s.as_str())
    }
}

impl<T> From<*const T> for Id<'_> {
    fn from(p: *const T) -> Self {
        Id::Ptr(p as *const std::ffi::c_void)
    }
}

impl<T> From<*mut T> for Id<'_> {
    fn from(p: *mut T) -> Self {
        Id::Ptr(p as *const std::ffi::c_void)
    }
}

/// A value accepted by the style color stack.
///
/// Picks the packed-integer or four-component push overload from the argument
/// type at compile time; implemented for `u32` (packed ABGR) and `[f32; 4]`.
pub trait StyleColorValue {
    /// Pushes `self` for the given color slot.
    #[doc(hidden)]
    fn push_color(self, idx: StyleColor);
}

impl StyleColorValue for u32 {
    fn push_color(self, idx: StyleColor) {
        unsafe { sys::igPushStyleColor_U32(idx as i32, self) }
    }
}

impl StyleColorValue for [f32; 4] {
    fn push_color(self, idx: StyleColor) {
        let col = sys::ImVec4 {
            x: self[0],
            y: self[1],
            z: self[2],
            w: self[3],
        };
        unsafe { sys::igPushStyleColor_Vec4(idx as i32, col) }
    }
}

/// A value accepted by the style variable stack.
///
/// Picks the scalar or two-component push overload from the argument type at
/// compile time; implemented for `f32` and `[f32; 2]`. Which shape a given
/// [`StyleVar`] expects is documented on its variant.
pub trait StyleVarValue {
    /// Pushes `self` for the given style variable.
    #[doc(hidden)]
    fn push_var(self, idx: StyleVar);
}

impl StyleVarValue for f32 {
    fn push_var(self, idx: StyleVar) {
        unsafe { sys::igPushStyleVar_Float(idx as i32, self) }
    }
}

impl StyleVarValue for [f32; 2] {
    fn push_var(self, idx: StyleVar) {
        let val = sys::ImVec2 {
            x: self[0],
            y: self[1],
        };
        unsafe { sys::igPushStyleVar_Vec2(idx as i32, val) }
    }
}

/// # Parameter stacks
impl Ui {
    /// Switches to the given font by pushing it to the font stack.
    ///
    /// A `size` of `0.0` keeps the current font size.
    #[doc(alias = "PushFont")]
    pub fn push_font(&self, font: Font, size: f32) {
        unsafe { sys::igPushFont(font.raw(), size) }
    }

    /// The font currently used for rendering
    #[doc(alias = "GetFont")]
    pub fn current_font(&self) -> Font {
        Font::from_raw(unsafe { sys::igGetFont() })
    }

    /// Allows or forbids keyboard tabbing focus on subsequent widgets.
    ///
    /// Internally uses `PushItemFlag(ImGuiItemFlags_NoTabStop, !allow)`.
    #[doc(alias = "PushAllowKeyboardFocus")]
    pub fn push_allow_keyboard_focus(&self, allow: bool) {
        unsafe { sys::igPushItemFlag(sys::ImGuiItemFlags_NoTabStop as i32, !allow) }
    }

    /// Enables/disables repeating behavior for subsequent buttons.
    ///
    /// Internally uses `PushItemFlag(ImGuiItemFlags_ButtonRepeat, repeat)`.
    #[doc(alias = "PushButtonRepeat")]
    pub fn push_button_repeat(&self, repeat: bool) {
        unsafe { sys::igPushItemFlag(sys::ImGuiItemFlags_ButtonRepeat as i32, repeat) }
    }

    /// Changes the width of subsequent items.
    ///
    /// - `> 0.0`: width in pixels
    /// - `= 0.0`: default (~2/3 of window width)
    /// - `< 0.0`: relative to the right of the window
    #[doc(alias = "PushItemWidth")]
    pub fn push_item_width(&self, item_width: f32) {
        unsafe { sys::igPushItemWidth(item_width) }
    }

    /// Sets the position where text will wrap around.
    ///
    /// - `< 0.0`: no wrapping
    /// - `= 0.0`: wrap to end of window (or column)
    /// - `> 0.0`: wrap at that position in window-local space
    #[doc(alias = "PushTextWrapPos")]
    pub fn push_text_wrap_pos(&self, wrap_pos_x: f32) {
        unsafe { sys::igPushTextWrapPos(wrap_pos_x) }
    }

    /// Pushes an identifier to the ID stack.
    ///
    /// Useful when creating widgets in a loop, so equal labels stay unique:
    ///
    /// ```no_run
    /// # use dear_imgui_sugar::*;
    /// # let mut ctx = Context::create_or_panic();
    /// # let ui = ctx.frame();
    /// for i in 0..10 {
    ///     with_id!(ui, i => {
    ///         ui.text("entry");
    ///     });
    /// }
    /// ```
    #[doc(alias = "PushID")]
    pub fn push_id<'a>(&self, id: impl Into<Id<'a>>) {
        unsafe {
            match id.into() {
                Id::Int(i) => sys::igPushID_Int(i),
                Id::Str(s) => sys::igPushID_Str(self.scratch_txt(s)),
                Id::Ptr(p) => sys::igPushID_Ptr(p),
            }
        }
    }

    /// Pushes a clip rectangle, optionally intersecting the current one.
    #[doc(alias = "PushClipRect")]
    pub fn push_clip_rect(&self, min: [f32; 2], max: [f32; 2], intersect_with_current: bool) {
        let min_vec = sys::ImVec2 {
            x: min[0],
            y: min[1],
        };
        let max_vec = sys::ImVec2 {
            x: max[0],
            y: max[1],
        };
        unsafe { sys::igPushClipRect(min_vec, max_vec, intersect_with_current) }
    }

    /// Pushes a texture onto the current window draw list's texture stack.
    ///
    /// While pushed, images and primitives use this texture unless otherwise
    /// specified.
    #[doc(alias = "PushTexture")]
    pub fn push_texture(&self, texture: TextureId) {
        unsafe { sys::ImDrawList_PushTexture(sys::igGetWindowDrawList(), texture.to_ref()) }
    }

    /// Changes a style color by pushing a change onto the color stack.
    ///
    /// Accepts a packed `u32` or an `[f32; 4]`; the overload is selected at
    /// compile time from the argument type.
    #[doc(alias = "PushStyleColor")]
    pub fn push_style_color(&self, idx: StyleColor, color: impl StyleColorValue) {
        color.push_color(idx);
    }

    /// Changes a style variable by pushing a change onto the style stack.
    ///
    /// Accepts an `f32` or an `[f32; 2]`; the overload is selected at compile
    /// time from the argument type.
    #[doc(alias = "PushStyleVar")]
    pub fn push_style_var(&self, idx: StyleVar, value: impl StyleVarValue) {
        value.push_var(idx);
    }
}

/// Pops the most recent font change.
#[doc(alias = "PopFont")]
pub fn pop_font() {
    unsafe { sys::igPopFont() }
}

/// Pops the most recent item-flag change (keyboard focus or button repeat).
#[doc(alias = "PopItemFlag")]
pub fn pop_item_flag() {
    unsafe { sys::igPopItemFlag() }
}

/// Pops the most recent item-width change.
#[doc(alias = "PopItemWidth")]
pub fn pop_item_width() {
    unsafe { sys::igPopItemWidth() }
}

/// Pops the most recent text-wrap-position change.
#[doc(alias = "PopTextWrapPos")]
pub fn pop_text_wrap_pos() {
    unsafe { sys::igPopTextWrapPos() }
}

/// Pops the most recent ID stack entry.
#[doc(alias = "PopID")]
pub fn pop_id() {
    unsafe { sys::igPopID() }
}

/// Pops the most recent clip-rect change.
#[doc(alias = "PopClipRect")]
pub fn pop_clip_rect() {
    unsafe { sys::igPopClipRect() }
}

/// Pops the most recent texture from the current window draw list.
///
/// The window that was current at push time must still be current.
#[doc(alias = "PopTexture")]
pub fn pop_texture() {
    unsafe { sys::ImDrawList_PopTexture(sys::igGetWindowDrawList()) }
}

/// Pops one entry from the style color stack.
#[doc(alias = "PopStyleColor")]
pub fn pop_style_color() {
    unsafe { sys::igPopStyleColor(1) }
}

/// Pops one entry from the style variable stack.
#[doc(alias = "PopStyleVar")]
pub fn pop_style_var() {
    unsafe { sys::igPopStyleVar(1) }
}
