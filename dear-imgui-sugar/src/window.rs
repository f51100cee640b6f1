//! Window and child-region scopes
//!
//! The begin half of each pair lives on [`Ui`]; the end half is a free
//! function usable as an [`EndFn`](crate::EndFn). Prefer the
//! [`with_window!`](crate::with_window), [`with_child!`](crate::with_child)
//! and [`with_child_frame!`](crate::with_child_frame) constructs over calling
//! these directly.

use crate::sys;
use crate::ui::Ui;

bitflags::bitflags! {
    /// Window configuration flags
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WindowFlags: i32 {
        /// Disable the title bar
        const NO_TITLE_BAR = sys::ImGuiWindowFlags_NoTitleBar;
        /// Disable resizing with the lower-right grip
        const NO_RESIZE = sys::ImGuiWindowFlags_NoResize;
        /// Disable moving the window
        const NO_MOVE = sys::ImGuiWindowFlags_NoMove;
        /// Disable scrollbars (scrolling is still possible with mouse or programmatically)
        const NO_SCROLLBAR = sys::ImGuiWindowFlags_NoScrollbar;
        /// Disable vertical scrolling with the mouse wheel
        const NO_SCROLL_WITH_MOUSE = sys::ImGuiWindowFlags_NoScrollWithMouse;
        /// Disable collapsing the window by double-clicking the title bar
        const NO_COLLAPSE = sys::ImGuiWindowFlags_NoCollapse;
        /// Resize every window to its content every frame
        const ALWAYS_AUTO_RESIZE = sys::ImGuiWindowFlags_AlwaysAutoResize;
        /// Disable drawing the background color and outside border
        const NO_BACKGROUND = sys::ImGuiWindowFlags_NoBackground;
        /// Never load/save settings in the .ini file
        const NO_SAVED_SETTINGS = sys::ImGuiWindowFlags_NoSavedSettings;
        /// Disable catching mouse input
        const NO_MOUSE_INPUTS = sys::ImGuiWindowFlags_NoMouseInputs;
        /// Has a menu bar
        const MENU_BAR = sys::ImGuiWindowFlags_MenuBar;
        /// Allow horizontal scrollbar to appear
        const HORIZONTAL_SCROLLBAR = sys::ImGuiWindowFlags_HorizontalScrollbar;
        /// Disable taking focus when transitioning from hidden to visible state
        const NO_FOCUS_ON_APPEARING = sys::ImGuiWindowFlags_NoFocusOnAppearing;
        /// Disable bringing window to front when taking focus
        const NO_BRING_TO_FRONT_ON_FOCUS = sys::ImGuiWindowFlags_NoBringToFrontOnFocus;
        /// Always show vertical scrollbar
        const ALWAYS_VERTICAL_SCROLLBAR = sys::ImGuiWindowFlags_AlwaysVerticalScrollbar;
        /// Always show horizontal scrollbar
        const ALWAYS_HORIZONTAL_SCROLLBAR = sys::ImGuiWindowFlags_AlwaysHorizontalScrollbar;
        /// Disable gamepad/keyboard navigation within the window
        const NO_NAV_INPUTS = sys::ImGuiWindowFlags_NoNavInputs;
        /// Disable focusing toward this window with gamepad/keyboard navigation
        const NO_NAV_FOCUS = sys::ImGuiWindowFlags_NoNavFocus;
        /// Display a dot next to the title
        const UNSAVED_DOCUMENT = sys::ImGuiWindowFlags_UnsavedDocument;
        /// Disable gamepad/keyboard navigation and focusing
        const NO_NAV = Self::NO_NAV_INPUTS.bits() | Self::NO_NAV_FOCUS.bits();
        /// Disable all decorations
        const NO_DECORATION = Self::NO_TITLE_BAR.bits() | Self::NO_RESIZE.bits()
            | Self::NO_SCROLLBAR.bits() | Self::NO_COLLAPSE.bits();
        /// Disable all inputs
        const NO_INPUTS = Self::NO_MOUSE_INPUTS.bits() | Self::NO_NAV_INPUTS.bits();
    }
}

bitflags::bitflags! {
    /// Configuration flags for child regions
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChildFlags: u32 {
        /// No flags
        const NONE = 0;
        /// Show an outer border and enable WindowPadding
        const BORDERS = sys::ImGuiChildFlags_Borders as u32;
        /// Pad with style.WindowPadding even if no border is drawn
        const ALWAYS_USE_WINDOW_PADDING = sys::ImGuiChildFlags_AlwaysUseWindowPadding as u32;
        /// Allow resize from right border
        const RESIZE_X = sys::ImGuiChildFlags_ResizeX as u32;
        /// Allow resize from bottom border
        const RESIZE_Y = sys::ImGuiChildFlags_ResizeY as u32;
        /// Enable auto-resizing width
        const AUTO_RESIZE_X = sys::ImGuiChildFlags_AutoResizeX as u32;
        /// Enable auto-resizing height
        const AUTO_RESIZE_Y = sys::ImGuiChildFlags_AutoResizeY as u32;
        /// Combined with AutoResizeX/AutoResizeY, measure size even when hidden
        const ALWAYS_AUTO_RESIZE = sys::ImGuiChildFlags_AlwaysAutoResize as u32;
        /// Style the child window like a framed item
        const FRAME_STYLE = sys::ImGuiChildFlags_FrameStyle as u32;
        /// Share focus scope, allow keyboard/gamepad navigation to cross over parent border
        const NAV_FLATTENED = sys::ImGuiChildFlags_NavFlattened as u32;
    }
}

impl Ui {
    /// Opens a window scope.
    ///
    /// The return value only signals whether the window contents are visible;
    /// [`end_window`] must run regardless, which is why the window construct
    /// uses the always-release policy.
    #[doc(alias = "Begin")]
    pub fn begin_window(&self, name: impl AsRef<str>, flags: WindowFlags) -> bool {
        let name_ptr = self.scratch_txt(name);
        unsafe { sys::igBegin(name_ptr, std::ptr::null_mut(), flags.bits()) }
    }

    /// Opens a scrollable child region inside the current window.
    ///
    /// Like `begin_window`, the result is advisory and [`end_child`] must
    /// always run.
    #[doc(alias = "BeginChild")]
    pub fn begin_child(
        &self,
        str_id: impl AsRef<str>,
        size: [f32; 2],
        child_flags: ChildFlags,
        window_flags: WindowFlags,
    ) -> bool {
        let id_ptr = self.scratch_txt(str_id);
        let size_vec = sys::ImVec2 {
            x: size[0],
            y: size[1],
        };
        unsafe {
            sys::igBeginChild_Str(
                id_ptr,
                size_vec,
                child_flags.bits() as i32,
                window_flags.bits(),
            )
        }
    }

    /// Opens a child region styled like a framed item.
    ///
    /// Upstream folded `BeginChildFrame` into `BeginChild` with the
    /// frame-style child flag; this keeps the old pairing as a convenience.
    #[doc(alias = "BeginChild")]
    pub fn begin_child_frame(&self, str_id: impl AsRef<str>, size: [f32; 2]) -> bool {
        self.begin_child(str_id, size, ChildFlags::FRAME_STYLE, WindowFlags::empty())
    }
}

/// Closes the window scope opened by the most recent [`Ui::begin_window`].
#[doc(alias = "End")]
pub fn end_window() {
    unsafe { sys::igEnd() }
}

/// Closes the child scope opened by the most recent [`Ui::begin_child`].
#[doc(alias = "EndChild")]
pub fn end_child() {
    unsafe { sys::igEndChild() }
}
