//! Drag-and-drop source/target scopes
//!
//! Only the scope pairing lives here; payload transport is the collaborating
//! library's domain and is not wrapped.

use crate::sys;
use crate::ui::Ui;

bitflags::bitflags! {
    /// Flags for drag-and-drop sources and targets
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DragDropFlags: u32 {
        /// No flags
        const NONE = 0;
        /// Hide the preview tooltip while dragging
        const SOURCE_NO_PREVIEW_TOOLTIP = sys::ImGuiDragDropFlags_SourceNoPreviewTooltip as u32;
        /// Keep the source displayed as hovered
        const SOURCE_NO_DISABLE_HOVER = sys::ImGuiDragDropFlags_SourceNoDisableHover as u32;
        /// Disable opening tree nodes and collapsing headers by holding over them
        const SOURCE_NO_HOLD_TO_OPEN_OTHERS = sys::ImGuiDragDropFlags_SourceNoHoldToOpenOthers as u32;
        /// Allow items without a unique identifier to be used as sources
        const SOURCE_ALLOW_NULL_ID = sys::ImGuiDragDropFlags_SourceAllowNullID as u32;
        /// External source (from outside of Dear ImGui)
        const SOURCE_EXTERN = sys::ImGuiDragDropFlags_SourceExtern as u32;
        /// Automatically expire the payload if the source ceases to be submitted
        const PAYLOAD_AUTO_EXPIRE = sys::ImGuiDragDropFlags_PayloadAutoExpire as u32;
    }
}

impl Ui {
    /// Opens a drag-drop source scope; true only while a drag from the last
    /// item is in flight.
    #[doc(alias = "BeginDragDropSource")]
    pub fn begin_drag_drop_source(&self, flags: DragDropFlags) -> bool {
        unsafe { sys::igBeginDragDropSource(flags.bits() as i32) }
    }

    /// Opens a drag-drop target scope on the last item; true only while a
    /// payload hovers it.
    #[doc(alias = "BeginDragDropTarget")]
    pub fn begin_drag_drop_target(&self) -> bool {
        unsafe { sys::igBeginDragDropTarget() }
    }
}

/// Closes a source scope opened by a successful [`Ui::begin_drag_drop_source`].
#[doc(alias = "EndDragDropSource")]
pub fn end_drag_drop_source() {
    unsafe { sys::igEndDragDropSource() }
}

/// Closes a target scope opened by a successful [`Ui::begin_drag_drop_target`].
#[doc(alias = "EndDragDropTarget")]
pub fn end_drag_drop_target() {
    unsafe { sys::igEndDragDropTarget() }
}
