//! Combo-box scopes

use crate::sys;
use crate::ui::Ui;

bitflags::bitflags! {
    /// Flags for combo box widgets
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ComboBoxFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Align the popup toward the left by default
        const POPUP_ALIGN_LEFT = sys::ImGuiComboFlags_PopupAlignLeft;
        /// Max ~4 items visible
        const HEIGHT_SMALL = sys::ImGuiComboFlags_HeightSmall;
        /// Max ~8 items visible (default)
        const HEIGHT_REGULAR = sys::ImGuiComboFlags_HeightRegular;
        /// Max ~20 items visible
        const HEIGHT_LARGE = sys::ImGuiComboFlags_HeightLarge;
        /// As many fitting items as possible
        const HEIGHT_LARGEST = sys::ImGuiComboFlags_HeightLargest;
        /// Display on the preview box without the square arrow button
        const NO_ARROW_BUTTON = sys::ImGuiComboFlags_NoArrowButton;
        /// Display only a square arrow button
        const NO_PREVIEW = sys::ImGuiComboFlags_NoPreview;
        /// Width dynamically calculated from preview contents
        const WIDTH_FIT_PREVIEW = sys::ImGuiComboFlags_WidthFitPreview;
    }
}

impl Ui {
    /// Opens a combo-box scope; true only while the popup list is open.
    #[doc(alias = "BeginCombo")]
    pub fn begin_combo(
        &self,
        label: impl AsRef<str>,
        preview_value: impl AsRef<str>,
        flags: ComboBoxFlags,
    ) -> bool {
        let (label_ptr, preview_ptr) = self.scratch_txt_two(label, preview_value);
        unsafe { sys::igBeginCombo(label_ptr, preview_ptr, flags.bits()) }
    }
}

/// Closes a combo box opened by a successful [`Ui::begin_combo`].
#[doc(alias = "EndCombo")]
pub fn end_combo() {
    unsafe { sys::igEndCombo() }
}
