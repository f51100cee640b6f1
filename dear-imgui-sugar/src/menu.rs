//! Menu-bar and menu scopes

use crate::sys;
use crate::ui::Ui;

impl Ui {
    /// Opens the menu bar of the current window.
    ///
    /// Requires the window to have been created with
    /// [`WindowFlags::MENU_BAR`](crate::WindowFlags::MENU_BAR).
    #[doc(alias = "BeginMenuBar")]
    pub fn begin_menu_bar(&self) -> bool {
        unsafe { sys::igBeginMenuBar() }
    }

    /// Opens the global menu bar at the top of the screen.
    #[doc(alias = "BeginMainMenuBar")]
    pub fn begin_main_menu_bar(&self) -> bool {
        unsafe { sys::igBeginMainMenuBar() }
    }

    /// Opens a sub-menu scope; true only while the menu is open.
    #[doc(alias = "BeginMenu")]
    pub fn begin_menu(&self, label: impl AsRef<str>, enabled: bool) -> bool {
        let label_ptr = self.scratch_txt(label);
        unsafe { sys::igBeginMenu_Str(label_ptr, enabled) }
    }
}

/// Closes a menu bar opened by a successful [`Ui::begin_menu_bar`].
#[doc(alias = "EndMenuBar")]
pub fn end_menu_bar() {
    unsafe { sys::igEndMenuBar() }
}

/// Closes the main menu bar opened by a successful [`Ui::begin_main_menu_bar`].
#[doc(alias = "EndMainMenuBar")]
pub fn end_main_menu_bar() {
    unsafe { sys::igEndMainMenuBar() }
}

/// Closes a menu opened by a successful [`Ui::begin_menu`].
#[doc(alias = "EndMenu")]
pub fn end_menu() {
    unsafe { sys::igEndMenu() }
}
