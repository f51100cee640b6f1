//! Style identifiers
//!
//! Index enums naming the entries of the style color and style variable
//! stacks. The pushed values themselves go through the
//! [`StyleColorValue`](crate::StyleColorValue) /
//! [`StyleVarValue`](crate::StyleVarValue) dispatch traits.

use crate::sys;

/// Style color identifier
#[repr(i32)]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum StyleColor {
    Text = sys::ImGuiCol_Text,
    TextDisabled = sys::ImGuiCol_TextDisabled,
    WindowBg = sys::ImGuiCol_WindowBg,
    ChildBg = sys::ImGuiCol_ChildBg,
    PopupBg = sys::ImGuiCol_PopupBg,
    Border = sys::ImGuiCol_Border,
    BorderShadow = sys::ImGuiCol_BorderShadow,
    FrameBg = sys::ImGuiCol_FrameBg,
    FrameBgHovered = sys::ImGuiCol_FrameBgHovered,
    FrameBgActive = sys::ImGuiCol_FrameBgActive,
    TitleBg = sys::ImGuiCol_TitleBg,
    TitleBgActive = sys::ImGuiCol_TitleBgActive,
    TitleBgCollapsed = sys::ImGuiCol_TitleBgCollapsed,
    MenuBarBg = sys::ImGuiCol_MenuBarBg,
    ScrollbarBg = sys::ImGuiCol_ScrollbarBg,
    ScrollbarGrab = sys::ImGuiCol_ScrollbarGrab,
    ScrollbarGrabHovered = sys::ImGuiCol_ScrollbarGrabHovered,
    ScrollbarGrabActive = sys::ImGuiCol_ScrollbarGrabActive,
    CheckMark = sys::ImGuiCol_CheckMark,
    SliderGrab = sys::ImGuiCol_SliderGrab,
    SliderGrabActive = sys::ImGuiCol_SliderGrabActive,
    Button = sys::ImGuiCol_Button,
    ButtonHovered = sys::ImGuiCol_ButtonHovered,
    ButtonActive = sys::ImGuiCol_ButtonActive,
    Header = sys::ImGuiCol_Header,
    HeaderHovered = sys::ImGuiCol_HeaderHovered,
    HeaderActive = sys::ImGuiCol_HeaderActive,
    Separator = sys::ImGuiCol_Separator,
    SeparatorHovered = sys::ImGuiCol_SeparatorHovered,
    SeparatorActive = sys::ImGuiCol_SeparatorActive,
    ResizeGrip = sys::ImGuiCol_ResizeGrip,
    ResizeGripHovered = sys::ImGuiCol_ResizeGripHovered,
    ResizeGripActive = sys::ImGuiCol_ResizeGripActive,
    Tab = sys::ImGuiCol_Tab,
    TabHovered = sys::ImGuiCol_TabHovered,
    TabSelected = sys::ImGuiCol_TabSelected,
    TabDimmed = sys::ImGuiCol_TabDimmed,
    TabDimmedSelected = sys::ImGuiCol_TabDimmedSelected,
    PlotLines = sys::ImGuiCol_PlotLines,
    PlotLinesHovered = sys::ImGuiCol_PlotLinesHovered,
    PlotHistogram = sys::ImGuiCol_PlotHistogram,
    PlotHistogramHovered = sys::ImGuiCol_PlotHistogramHovered,
    TableHeaderBg = sys::ImGuiCol_TableHeaderBg,
    TableBorderStrong = sys::ImGuiCol_TableBorderStrong,
    TableBorderLight = sys::ImGuiCol_TableBorderLight,
    TableRowBg = sys::ImGuiCol_TableRowBg,
    TableRowBgAlt = sys::ImGuiCol_TableRowBgAlt,
    TextSelectedBg = sys::ImGuiCol_TextSelectedBg,
    DragDropTarget = sys::ImGuiCol_DragDropTarget,
    NavWindowingHighlight = sys::ImGuiCol_NavWindowingHighlight,
    NavWindowingDimBg = sys::ImGuiCol_NavWindowingDimBg,
    ModalWindowDimBg = sys::ImGuiCol_ModalWindowDimBg,
}

/// Style variable identifier
#[repr(i32)]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum StyleVar {
    /// Global alpha (`f32`)
    Alpha = sys::ImGuiStyleVar_Alpha,
    /// Alpha applied to disabled items (`f32`)
    DisabledAlpha = sys::ImGuiStyleVar_DisabledAlpha,
    /// Window padding (`[f32; 2]`)
    WindowPadding = sys::ImGuiStyleVar_WindowPadding,
    /// Window corner rounding (`f32`)
    WindowRounding = sys::ImGuiStyleVar_WindowRounding,
    /// Window border size (`f32`)
    WindowBorderSize = sys::ImGuiStyleVar_WindowBorderSize,
    /// Minimum window size (`[f32; 2]`)
    WindowMinSize = sys::ImGuiStyleVar_WindowMinSize,
    /// Window title alignment (`[f32; 2]`)
    WindowTitleAlign = sys::ImGuiStyleVar_WindowTitleAlign,
    /// Child window corner rounding (`f32`)
    ChildRounding = sys::ImGuiStyleVar_ChildRounding,
    /// Child window border size (`f32`)
    ChildBorderSize = sys::ImGuiStyleVar_ChildBorderSize,
    /// Popup corner rounding (`f32`)
    PopupRounding = sys::ImGuiStyleVar_PopupRounding,
    /// Popup border size (`f32`)
    PopupBorderSize = sys::ImGuiStyleVar_PopupBorderSize,
    /// Frame padding (`[f32; 2]`)
    FramePadding = sys::ImGuiStyleVar_FramePadding,
    /// Frame corner rounding (`f32`)
    FrameRounding = sys::ImGuiStyleVar_FrameRounding,
    /// Frame border size (`f32`)
    FrameBorderSize = sys::ImGuiStyleVar_FrameBorderSize,
    /// Spacing between items (`[f32; 2]`)
    ItemSpacing = sys::ImGuiStyleVar_ItemSpacing,
    /// Spacing within a composed item (`[f32; 2]`)
    ItemInnerSpacing = sys::ImGuiStyleVar_ItemInnerSpacing,
    /// Horizontal indentation of tree nodes (`f32`)
    IndentSpacing = sys::ImGuiStyleVar_IndentSpacing,
    /// Table cell padding (`[f32; 2]`)
    CellPadding = sys::ImGuiStyleVar_CellPadding,
    /// Scrollbar width (`f32`)
    ScrollbarSize = sys::ImGuiStyleVar_ScrollbarSize,
    /// Scrollbar corner rounding (`f32`)
    ScrollbarRounding = sys::ImGuiStyleVar_ScrollbarRounding,
    /// Minimum grab size (`f32`)
    GrabMinSize = sys::ImGuiStyleVar_GrabMinSize,
    /// Grab corner rounding (`f32`)
    GrabRounding = sys::ImGuiStyleVar_GrabRounding,
    /// Tab corner rounding (`f32`)
    TabRounding = sys::ImGuiStyleVar_TabRounding,
    /// Button text alignment (`[f32; 2]`)
    ButtonTextAlign = sys::ImGuiStyleVar_ButtonTextAlign,
    /// Selectable text alignment (`[f32; 2]`)
    SelectableTextAlign = sys::ImGuiStyleVar_SelectableTextAlign,
}
