//! Group and tooltip scopes

use crate::sys;
use crate::ui::Ui;

impl Ui {
    /// Opens a layout group; the items inside can be treated as one unit.
    ///
    /// Returns nothing; [`end_group`] must always run.
    #[doc(alias = "BeginGroup")]
    pub fn begin_group(&self) {
        unsafe { sys::igBeginGroup() }
    }

    /// Opens a tooltip scope; true only when the tooltip should be submitted
    /// this frame, and [`end_tooltip`] must only run in that case.
    #[doc(alias = "BeginTooltip")]
    pub fn begin_tooltip(&self) -> bool {
        unsafe { sys::igBeginTooltip() }
    }
}

/// Closes the group opened by the most recent [`Ui::begin_group`].
#[doc(alias = "EndGroup")]
pub fn end_group() {
    unsafe { sys::igEndGroup() }
}

/// Closes a tooltip opened by a successful [`Ui::begin_tooltip`].
#[doc(alias = "EndTooltip")]
pub fn end_tooltip() {
    unsafe { sys::igEndTooltip() }
}
