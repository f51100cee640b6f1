//! List-box scopes

use crate::sys;
use crate::ui::Ui;

impl Ui {
    /// Opens a list-box scope; true only when the box is visible.
    ///
    /// `size` of `[0.0, 0.0]` uses a sensible default height.
    #[doc(alias = "BeginListBox")]
    pub fn begin_list_box(&self, label: impl AsRef<str>, size: [f32; 2]) -> bool {
        let label_ptr = self.scratch_txt(label);
        let size_vec = sys::ImVec2 {
            x: size[0],
            y: size[1],
        };
        unsafe { sys::igBeginListBox(label_ptr, size_vec) }
    }
}

/// Closes a list box opened by a successful [`Ui::begin_list_box`].
#[doc(alias = "EndListBox")]
pub fn end_list_box() {
    unsafe { sys::igEndListBox() }
}
