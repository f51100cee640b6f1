//! Tab-bar and tab-item scopes

use crate::sys;
use crate::ui::Ui;

bitflags::bitflags! {
    /// Flags for tab bar widgets
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TabBarFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Allow manually dragging tabs to re-order them
        const REORDERABLE = sys::ImGuiTabBarFlags_Reorderable;
        /// Automatically select new tabs when they appear
        const AUTO_SELECT_NEW_TABS = sys::ImGuiTabBarFlags_AutoSelectNewTabs;
        /// Enable the button to open the tab list popup
        const TAB_LIST_POPUP_BUTTON = sys::ImGuiTabBarFlags_TabListPopupButton;
        /// Disable closing tabs with the middle mouse button
        const NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON = sys::ImGuiTabBarFlags_NoCloseWithMiddleMouseButton;
        /// Disable scrolling buttons
        const NO_TAB_LIST_SCROLLING_BUTTONS = sys::ImGuiTabBarFlags_NoTabListScrollingButtons;
        /// Disable tooltips when hovering a tab
        const NO_TOOLTIP = sys::ImGuiTabBarFlags_NoTooltip;
        /// Shrink tabs when they don't fit
        const FITTING_POLICY_SHRINK = sys::ImGuiTabBarFlags_FittingPolicyShrink;
        /// Add scroll buttons when tabs don't fit
        const FITTING_POLICY_SCROLL = sys::ImGuiTabBarFlags_FittingPolicyScroll;
    }
}

bitflags::bitflags! {
    /// Flags for tab item widgets
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TabItemFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Display a dot next to the title
        const UNSAVED_DOCUMENT = sys::ImGuiTabItemFlags_UnsavedDocument;
        /// Programmatically make the tab selected
        const SET_SELECTED = sys::ImGuiTabItemFlags_SetSelected;
        /// Disable closing tabs with the middle mouse button
        const NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON = sys::ImGuiTabItemFlags_NoCloseWithMiddleMouseButton;
        /// Don't call PushID()/PopID() around the tab item
        const NO_PUSH_ID = sys::ImGuiTabItemFlags_NoPushId;
        /// Disable tooltip for the given tab
        const NO_TOOLTIP = sys::ImGuiTabItemFlags_NoTooltip;
        /// Disable reordering this tab
        const NO_REORDER = sys::ImGuiTabItemFlags_NoReorder;
        /// Enforce the tab position to the left of the tab bar
        const LEADING = sys::ImGuiTabItemFlags_Leading;
        /// Enforce the tab position to the right of the tab bar
        const TRAILING = sys::ImGuiTabItemFlags_Trailing;
    }
}

impl Ui {
    /// Opens a tab-bar scope; true only when the bar is visible.
    #[doc(alias = "BeginTabBar")]
    pub fn begin_tab_bar(&self, str_id: impl AsRef<str>, flags: TabBarFlags) -> bool {
        let id_ptr = self.scratch_txt(str_id);
        unsafe { sys::igBeginTabBar(id_ptr, flags.bits()) }
    }

    /// Opens a tab-item scope; true only while the tab is selected.
    #[doc(alias = "BeginTabItem")]
    pub fn begin_tab_item(&self, label: impl AsRef<str>, flags: TabItemFlags) -> bool {
        let label_ptr = self.scratch_txt(label);
        unsafe { sys::igBeginTabItem(label_ptr, std::ptr::null_mut(), flags.bits()) }
    }
}

/// Closes a tab bar opened by a successful [`Ui::begin_tab_bar`].
#[doc(alias = "EndTabBar")]
pub fn end_tab_bar() {
    unsafe { sys::igEndTabBar() }
}

/// Closes a tab item opened by a successful [`Ui::begin_tab_item`].
#[doc(alias = "EndTabItem")]
pub fn end_tab_item() {
    unsafe { sys::igEndTabItem() }
}
