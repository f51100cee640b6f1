//! Tree-node scopes and collapsing headers

use crate::sys;
use crate::ui::Ui;

bitflags::bitflags! {
    /// Flags for tree nodes and collapsing headers
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TreeNodeFlags: i32 {
        /// No flags
        const NONE = 0;
        /// Draw as selected
        const SELECTED = sys::ImGuiTreeNodeFlags_Selected;
        /// Draw frame with background (e.g. for CollapsingHeader)
        const FRAMED = sys::ImGuiTreeNodeFlags_Framed;
        /// Hit testing to allow subsequent widgets to overlap this one
        const ALLOW_OVERLAP = sys::ImGuiTreeNodeFlags_AllowOverlap;
        /// Don't push on the ID stack or add extra indent when open
        const NO_TREE_PUSH_ON_OPEN = sys::ImGuiTreeNodeFlags_NoTreePushOnOpen;
        /// Don't automatically open the node when logging is active
        const NO_AUTO_OPEN_ON_LOG = sys::ImGuiTreeNodeFlags_NoAutoOpenOnLog;
        /// Default node to be open
        const DEFAULT_OPEN = sys::ImGuiTreeNodeFlags_DefaultOpen;
        /// Need double-click to open node
        const OPEN_ON_DOUBLE_CLICK = sys::ImGuiTreeNodeFlags_OpenOnDoubleClick;
        /// Only open when clicking on the arrow part
        const OPEN_ON_ARROW = sys::ImGuiTreeNodeFlags_OpenOnArrow;
        /// No collapsing, no arrow (convenience for leaf nodes)
        const LEAF = sys::ImGuiTreeNodeFlags_Leaf;
        /// Display a bullet instead of arrow
        const BULLET = sys::ImGuiTreeNodeFlags_Bullet;
        /// Use FramePadding to vertically align text baseline to regular widget height
        const FRAME_PADDING = sys::ImGuiTreeNodeFlags_FramePadding;
        /// Extend hit box to the right-most edge, even if not framed
        const SPAN_AVAIL_WIDTH = sys::ImGuiTreeNodeFlags_SpanAvailWidth;
        /// Extend hit box to the left-most and right-most edges
        const SPAN_FULL_WIDTH = sys::ImGuiTreeNodeFlags_SpanFullWidth;
        /// Combination of Framed and NoTreePushOnOpen
        const COLLAPSING_HEADER = Self::FRAMED.bits() | Self::NO_TREE_PUSH_ON_OPEN.bits();
    }
}

impl Ui {
    /// Opens a tree-node scope; true only while the node is open.
    ///
    /// Format-string upstream variants (`TreeNodeV` and friends) collapse
    /// into `format!` at the call site.
    #[doc(alias = "TreeNode")]
    pub fn tree_node(&self, label: impl AsRef<str>) -> bool {
        self.tree_node_ex(label, TreeNodeFlags::NONE)
    }

    /// Opens a tree-node scope with flags; true only while the node is open.
    ///
    /// With [`TreeNodeFlags::NO_TREE_PUSH_ON_OPEN`] nothing is pushed and
    /// [`tree_pop`] must not run; keep that flag out of the guarded
    /// constructs.
    #[doc(alias = "TreeNodeEx")]
    pub fn tree_node_ex(&self, label: impl AsRef<str>, flags: TreeNodeFlags) -> bool {
        let label_ptr = self.scratch_txt(label);
        unsafe { sys::igTreeNodeEx_Str(label_ptr, flags.bits()) }
    }

    /// Collapsing header; a plain query with no matching end call.
    #[doc(alias = "CollapsingHeader")]
    pub fn collapsing_header(&self, label: impl AsRef<str>, flags: TreeNodeFlags) -> bool {
        let label_ptr = self.scratch_txt(label);
        unsafe { sys::igCollapsingHeader_TreeNodeFlags(label_ptr, flags.bits()) }
    }
}

/// Closes a tree node opened by a successful [`Ui::tree_node`].
#[doc(alias = "TreePop")]
pub fn tree_pop() {
    unsafe { sys::igTreePop() }
}
