//! Table scopes

use crate::sys;
use crate::ui::Ui;

bitflags::bitflags! {
    /// Flags for table widgets
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TableFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Enable resizing columns
        const RESIZABLE = sys::ImGuiTableFlags_Resizable;
        /// Enable reordering columns in the header row
        const REORDERABLE = sys::ImGuiTableFlags_Reorderable;
        /// Enable hiding/disabling columns in the context menu
        const HIDEABLE = sys::ImGuiTableFlags_Hideable;
        /// Enable sorting
        const SORTABLE = sys::ImGuiTableFlags_Sortable;
        /// Disable persisting columns order, width and sort settings
        const NO_SAVED_SETTINGS = sys::ImGuiTableFlags_NoSavedSettings;
        /// Right-click on columns body/contents will display the table context menu
        const CONTEXT_MENU_IN_BODY = sys::ImGuiTableFlags_ContextMenuInBody;
        /// Alternate row background colors
        const ROW_BG = sys::ImGuiTableFlags_RowBg;
        /// Draw horizontal borders between rows
        const BORDERS_INNER_H = sys::ImGuiTableFlags_BordersInnerH;
        /// Draw horizontal borders at the top and bottom
        const BORDERS_OUTER_H = sys::ImGuiTableFlags_BordersOuterH;
        /// Draw vertical borders between columns
        const BORDERS_INNER_V = sys::ImGuiTableFlags_BordersInnerV;
        /// Draw vertical borders on the left and right sides
        const BORDERS_OUTER_V = sys::ImGuiTableFlags_BordersOuterV;
        /// Draw horizontal borders
        const BORDERS_H = Self::BORDERS_INNER_H.bits() | Self::BORDERS_OUTER_H.bits();
        /// Draw vertical borders
        const BORDERS_V = Self::BORDERS_INNER_V.bits() | Self::BORDERS_OUTER_V.bits();
        /// Draw inner borders
        const BORDERS_INNER = Self::BORDERS_INNER_V.bits() | Self::BORDERS_INNER_H.bits();
        /// Draw outer borders
        const BORDERS_OUTER = Self::BORDERS_OUTER_V.bits() | Self::BORDERS_OUTER_H.bits();
        /// Draw all borders
        const BORDERS = Self::BORDERS_INNER.bits() | Self::BORDERS_OUTER.bits();
        /// Columns default to a fixed width matching their contents
        const SIZING_FIXED_FIT = sys::ImGuiTableFlags_SizingFixedFit;
        /// Columns default to a fixed width matching the widest column
        const SIZING_FIXED_SAME = sys::ImGuiTableFlags_SizingFixedSame;
        /// Columns default to stretching with weights proportional to contents
        const SIZING_STRETCH_PROP = sys::ImGuiTableFlags_SizingStretchProp;
        /// Columns default to stretching with equal weights
        const SIZING_STRETCH_SAME = sys::ImGuiTableFlags_SizingStretchSame;
        /// Enable horizontal scrolling
        const SCROLL_X = sys::ImGuiTableFlags_ScrollX;
        /// Enable vertical scrolling
        const SCROLL_Y = sys::ImGuiTableFlags_ScrollY;
    }
}

impl Ui {
    /// Opens a table scope with the given column count; true only when the
    /// table is visible.
    #[doc(alias = "BeginTable")]
    pub fn begin_table(
        &self,
        str_id: impl AsRef<str>,
        columns: i32,
        flags: TableFlags,
        outer_size: [f32; 2],
        inner_width: f32,
    ) -> bool {
        let id_ptr = self.scratch_txt(str_id);
        let outer_vec = sys::ImVec2 {
            x: outer_size[0],
            y: outer_size[1],
        };
        unsafe { sys::igBeginTable(id_ptr, columns, flags.bits(), outer_vec, inner_width) }
    }

    /// Advances to the next column (or the first column of the next row).
    ///
    /// Provided so table bodies can lay out their cells; true when the column
    /// is visible.
    #[doc(alias = "TableNextColumn")]
    pub fn table_next_column(&self) -> bool {
        unsafe { sys::igTableNextColumn() }
    }
}

/// Closes a table opened by a successful [`Ui::begin_table`].
#[doc(alias = "EndTable")]
pub fn end_table() {
    unsafe { sys::igEndTable() }
}
