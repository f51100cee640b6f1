//! Popup scopes
//!
//! Popups are conditional scopes: when a begin call returns false, nothing
//! was pushed and [`end_popup`] must not run. The `with_popup*!` constructs
//! encode that policy.

use crate::sys;
use crate::ui::Ui;
use crate::window::WindowFlags;

bitflags::bitflags! {
    /// Flags for popup functions
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PopupFlags: i32 {
        /// No flags
        const NONE = sys::ImGuiPopupFlags_None;
        /// For context popups: open on left mouse release
        const MOUSE_BUTTON_LEFT = sys::ImGuiPopupFlags_MouseButtonLeft;
        /// For context popups: open on right mouse release (default)
        const MOUSE_BUTTON_RIGHT = sys::ImGuiPopupFlags_MouseButtonRight;
        /// For context popups: open on middle mouse release
        const MOUSE_BUTTON_MIDDLE = sys::ImGuiPopupFlags_MouseButtonMiddle;
        /// Don't open if there's already a popup at the same level of the popup stack
        const NO_OPEN_OVER_EXISTING_POPUP = sys::ImGuiPopupFlags_NoOpenOverExistingPopup;
        /// For context-window popups: don't return true when hovering items, only empty space
        const NO_OPEN_OVER_ITEMS = sys::ImGuiPopupFlags_NoOpenOverItems;
    }
}

impl Ui {
    /// Signals that the popup with the given ID should open.
    ///
    /// Call this once (e.g. on a click); the matching
    /// [`with_popup!`](crate::with_popup) runs per frame.
    #[doc(alias = "OpenPopup")]
    pub fn open_popup(&self, str_id: impl AsRef<str>) {
        let str_id_ptr = self.scratch_txt(str_id);
        unsafe {
            sys::igOpenPopup_Str(str_id_ptr, sys::ImGuiPopupFlags_None);
        }
    }

    /// Closes the popup currently being built
    #[doc(alias = "CloseCurrentPopup")]
    pub fn close_current_popup(&self) {
        unsafe {
            sys::igCloseCurrentPopup();
        }
    }

    /// Opens a popup scope; true only while the popup is open.
    #[doc(alias = "BeginPopup")]
    pub fn begin_popup(&self, str_id: impl AsRef<str>, flags: WindowFlags) -> bool {
        let str_id_ptr = self.scratch_txt(str_id);
        unsafe { sys::igBeginPopup(str_id_ptr, flags.bits()) }
    }

    /// Opens a modal popup scope, blocking interaction with the rest of the UI.
    #[doc(alias = "BeginPopupModal")]
    pub fn begin_popup_modal(&self, name: impl AsRef<str>, flags: WindowFlags) -> bool {
        let name_ptr = self.scratch_txt(name);
        unsafe { sys::igBeginPopupModal(name_ptr, std::ptr::null_mut(), flags.bits()) }
    }

    /// Opens a context-menu popup scope attached to the last item.
    #[doc(alias = "BeginPopupContextItem")]
    pub fn begin_popup_context_item(
        &self,
        str_id: Option<impl AsRef<str>>,
        flags: PopupFlags,
    ) -> bool {
        let str_id_ptr = self.scratch_txt_opt(str_id);
        unsafe { sys::igBeginPopupContextItem(str_id_ptr, flags.bits()) }
    }

    /// Opens a context-menu popup scope attached to the current window.
    #[doc(alias = "BeginPopupContextWindow")]
    pub fn begin_popup_context_window(
        &self,
        str_id: Option<impl AsRef<str>>,
        flags: PopupFlags,
    ) -> bool {
        let str_id_ptr = self.scratch_txt_opt(str_id);
        unsafe { sys::igBeginPopupContextWindow(str_id_ptr, flags.bits()) }
    }

    /// Opens a context-menu popup scope for empty space.
    #[doc(alias = "BeginPopupContextVoid")]
    pub fn begin_popup_context_void(
        &self,
        str_id: Option<impl AsRef<str>>,
        flags: PopupFlags,
    ) -> bool {
        let str_id_ptr = self.scratch_txt_opt(str_id);
        unsafe { sys::igBeginPopupContextVoid(str_id_ptr, flags.bits()) }
    }
}

/// Closes the popup scope opened by a successful popup begin call.
///
/// Shared by plain, modal and context popups.
#[doc(alias = "EndPopup")]
pub fn end_popup() {
    unsafe { sys::igEndPopup() }
}
