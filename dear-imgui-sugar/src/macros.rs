//! The `with_*!` / `set_*!` construct catalogue
//!
//! Every paired Dear ImGui call gets one block-introducing construct. Three
//! hidden generator macros hold the shared guard-instantiation logic; the
//! public entries are one-line bindings of a begin wrapper, an end function
//! and a release policy, mirroring how the pairs are catalogued upstream.
//!
//! Self-scoped `with_*!` constructs evaluate to `Option<R>`, where `R` is the
//! value of the body block and `None` means the body did not run:
//!
//! ```no_run
//! # use dear_imgui_sugar::*;
//! # let mut ctx = Context::create_or_panic();
//! # let ui = ctx.frame();
//! let picked = with_combo!(ui, "Fruit", "apple" => {
//!     // runs only while the combo list is open
//!     "apple"
//! });
//! ```
//!
//! Parent-scoped `set_*!` constructs are plain statements; the push stays in
//! effect until the enclosing block ends. Uniqueness of the hidden guard
//! binding across repeated uses in one block comes from macro hygiene.

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Binds a bool-returning begin call to a conditional block.
///
/// `$always` selects the release policy; see
/// [`BoolGuard`](crate::BoolGuard).
#[doc(hidden)]
#[macro_export]
macro_rules! __scope_bool {
    ($always:literal, $state:expr, $end:expr, $body:block) => {{
        let _scope = $crate::BoolGuard::<{ $always }>::new($state, $end);
        if _scope.is_active() {
            ::core::option::Option::Some($body)
        } else {
            ::core::option::Option::None
        }
    }};
}

/// Binds a void begin call to a block that always runs.
#[doc(hidden)]
#[macro_export]
macro_rules! __scope_void {
    ($begin:expr, $end:expr, $body:block) => {{
        let _scope = $crate::VoidGuard::new($begin, $end);
        if _scope.is_active() {
            ::core::option::Option::Some($body)
        } else {
            ::core::option::Option::None
        }
    }};
}

/// Binds a void begin call to the enclosing block (statement form).
#[doc(hidden)]
#[macro_export]
macro_rules! __set_void {
    ($begin:expr, $end:expr) => {
        let _scope = $crate::VoidGuard::new($begin, $end);
    };
}

// ---------------------------------------------------------------------------
// Windows and child regions (always-release)
// ---------------------------------------------------------------------------

/// Window scope. The body runs only while the window contents are visible;
/// the matching `End` always runs.
///
/// ```no_run
/// # use dear_imgui_sugar::*;
/// # let mut ctx = Context::create_or_panic();
/// # let ui = ctx.frame();
/// with_window!(ui, "Tools", WindowFlags::NO_COLLAPSE => {
///     ui.text("body");
/// });
/// ```
#[macro_export]
macro_rules! with_window {
    ($ui:expr, $name:expr => $body:block) => {
        $crate::with_window!($ui, $name, $crate::WindowFlags::empty() => $body)
    };
    ($ui:expr, $name:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(true, $ui.begin_window($name, $flags), $crate::end_window, $body)
    };
}

/// Child-region scope inside the current window. Always releases.
#[macro_export]
macro_rules! with_child {
    ($ui:expr, $id:expr => $body:block) => {
        $crate::with_child!($ui, $id, [0.0, 0.0] => $body)
    };
    ($ui:expr, $id:expr, $size:expr => $body:block) => {
        $crate::with_child!($ui, $id, $size, $crate::ChildFlags::NONE => $body)
    };
    ($ui:expr, $id:expr, $size:expr, $child_flags:expr => $body:block) => {
        $crate::with_child!($ui, $id, $size, $child_flags, $crate::WindowFlags::empty() => $body)
    };
    ($ui:expr, $id:expr, $size:expr, $child_flags:expr, $window_flags:expr => $body:block) => {
        $crate::__scope_bool!(
            true,
            $ui.begin_child($id, $size, $child_flags, $window_flags),
            $crate::end_child,
            $body
        )
    };
}

/// Framed child-region scope. Always releases.
#[macro_export]
macro_rules! with_child_frame {
    ($ui:expr, $id:expr, $size:expr => $body:block) => {
        $crate::__scope_bool!(true, $ui.begin_child_frame($id, $size), $crate::end_child, $body)
    };
}

// ---------------------------------------------------------------------------
// Conditional scopes (release only on a successful begin)
// ---------------------------------------------------------------------------

/// Combo-box scope; the body runs only while the popup list is open.
#[macro_export]
macro_rules! with_combo {
    ($ui:expr, $label:expr, $preview:expr => $body:block) => {
        $crate::with_combo!($ui, $label, $preview, $crate::ComboBoxFlags::NONE => $body)
    };
    ($ui:expr, $label:expr, $preview:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_combo($label, $preview, $flags),
            $crate::end_combo,
            $body
        )
    };
}

/// List-box scope.
#[macro_export]
macro_rules! with_list_box {
    ($ui:expr, $label:expr => $body:block) => {
        $crate::with_list_box!($ui, $label, [0.0, 0.0] => $body)
    };
    ($ui:expr, $label:expr, $size:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.begin_list_box($label, $size), $crate::end_list_box, $body)
    };
}

/// Menu bar of the current window (requires [`WindowFlags::MENU_BAR`](crate::WindowFlags::MENU_BAR)).
#[macro_export]
macro_rules! with_menu_bar {
    ($ui:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.begin_menu_bar(), $crate::end_menu_bar, $body)
    };
}

/// Global menu bar at the top of the screen.
#[macro_export]
macro_rules! with_main_menu_bar {
    ($ui:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.begin_main_menu_bar(), $crate::end_main_menu_bar, $body)
    };
}

/// Sub-menu scope; the body runs only while the menu is open.
#[macro_export]
macro_rules! with_menu {
    ($ui:expr, $label:expr => $body:block) => {
        $crate::with_menu!($ui, $label, true => $body)
    };
    ($ui:expr, $label:expr, $enabled:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.begin_menu($label, $enabled), $crate::end_menu, $body)
    };
}

/// Popup scope; pair with [`Ui::open_popup`](crate::Ui::open_popup).
///
/// ```no_run
/// # use dear_imgui_sugar::*;
/// # let mut ctx = Context::create_or_panic();
/// # let ui = ctx.frame();
/// ui.open_popup("confirm");
/// with_popup!(ui, "confirm" => {
///     ui.text("Sure?");
///     ui.close_current_popup();
/// });
/// ```
#[macro_export]
macro_rules! with_popup {
    ($ui:expr, $id:expr => $body:block) => {
        $crate::with_popup!($ui, $id, $crate::WindowFlags::empty() => $body)
    };
    ($ui:expr, $id:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.begin_popup($id, $flags), $crate::end_popup, $body)
    };
}

/// Modal popup scope.
#[macro_export]
macro_rules! with_popup_modal {
    ($ui:expr, $name:expr => $body:block) => {
        $crate::with_popup_modal!($ui, $name, $crate::WindowFlags::empty() => $body)
    };
    ($ui:expr, $name:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.begin_popup_modal($name, $flags), $crate::end_popup, $body)
    };
}

/// Context-menu popup on the last item (right-click by default).
#[macro_export]
macro_rules! with_popup_context_item {
    ($ui:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_popup_context_item(
                ::core::option::Option::<&str>::None,
                $crate::PopupFlags::MOUSE_BUTTON_RIGHT
            ),
            $crate::end_popup,
            $body
        )
    };
    ($ui:expr, $id:expr => $body:block) => {
        $crate::with_popup_context_item!($ui, $id, $crate::PopupFlags::MOUSE_BUTTON_RIGHT => $body)
    };
    ($ui:expr, $id:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_popup_context_item(::core::option::Option::Some($id), $flags),
            $crate::end_popup,
            $body
        )
    };
}

/// Context-menu popup on the current window.
#[macro_export]
macro_rules! with_popup_context_window {
    ($ui:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_popup_context_window(
                ::core::option::Option::<&str>::None,
                $crate::PopupFlags::MOUSE_BUTTON_RIGHT
            ),
            $crate::end_popup,
            $body
        )
    };
    ($ui:expr, $id:expr => $body:block) => {
        $crate::with_popup_context_window!($ui, $id, $crate::PopupFlags::MOUSE_BUTTON_RIGHT => $body)
    };
    ($ui:expr, $id:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_popup_context_window(::core::option::Option::Some($id), $flags),
            $crate::end_popup,
            $body
        )
    };
}

/// Context-menu popup on empty space.
#[macro_export]
macro_rules! with_popup_context_void {
    ($ui:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_popup_context_void(
                ::core::option::Option::<&str>::None,
                $crate::PopupFlags::MOUSE_BUTTON_RIGHT
            ),
            $crate::end_popup,
            $body
        )
    };
    ($ui:expr, $id:expr => $body:block) => {
        $crate::with_popup_context_void!($ui, $id, $crate::PopupFlags::MOUSE_BUTTON_RIGHT => $body)
    };
    ($ui:expr, $id:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_popup_context_void(::core::option::Option::Some($id), $flags),
            $crate::end_popup,
            $body
        )
    };
}

/// Table scope with a fixed column count.
#[macro_export]
macro_rules! with_table {
    ($ui:expr, $id:expr, $columns:expr => $body:block) => {
        $crate::with_table!($ui, $id, $columns, $crate::TableFlags::NONE => $body)
    };
    ($ui:expr, $id:expr, $columns:expr, $flags:expr => $body:block) => {
        $crate::with_table!($ui, $id, $columns, $flags, [0.0, 0.0], 0.0 => $body)
    };
    ($ui:expr, $id:expr, $columns:expr, $flags:expr, $outer_size:expr, $inner_width:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_table($id, $columns, $flags, $outer_size, $inner_width),
            $crate::end_table,
            $body
        )
    };
}

/// Tab-bar scope.
#[macro_export]
macro_rules! with_tab_bar {
    ($ui:expr, $id:expr => $body:block) => {
        $crate::with_tab_bar!($ui, $id, $crate::TabBarFlags::NONE => $body)
    };
    ($ui:expr, $id:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.begin_tab_bar($id, $flags), $crate::end_tab_bar, $body)
    };
}

/// Tab-item scope; the body runs only while the tab is selected.
#[macro_export]
macro_rules! with_tab_item {
    ($ui:expr, $label:expr => $body:block) => {
        $crate::with_tab_item!($ui, $label, $crate::TabItemFlags::NONE => $body)
    };
    ($ui:expr, $label:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.begin_tab_item($label, $flags), $crate::end_tab_item, $body)
    };
}

/// Drag-drop source scope on the last item.
#[macro_export]
macro_rules! with_drag_drop_source {
    ($ui:expr => $body:block) => {
        $crate::with_drag_drop_source!($ui, $crate::DragDropFlags::NONE => $body)
    };
    ($ui:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_drag_drop_source($flags),
            $crate::end_drag_drop_source,
            $body
        )
    };
}

/// Drag-drop target scope on the last item.
#[macro_export]
macro_rules! with_drag_drop_target {
    ($ui:expr => $body:block) => {
        $crate::__scope_bool!(
            false,
            $ui.begin_drag_drop_target(),
            $crate::end_drag_drop_target,
            $body
        )
    };
}

/// Tree-node scope; the body runs only while the node is open.
#[macro_export]
macro_rules! with_tree_node {
    ($ui:expr, $label:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.tree_node($label), $crate::tree_pop, $body)
    };
}

/// Tree-node scope with flags.
///
/// Do not pass [`TreeNodeFlags::NO_TREE_PUSH_ON_OPEN`](crate::TreeNodeFlags::NO_TREE_PUSH_ON_OPEN)
/// here; use [`with_collapsing_header!`](crate::with_collapsing_header) for
/// unguarded headers instead.
#[macro_export]
macro_rules! with_tree_node_ex {
    ($ui:expr, $label:expr, $flags:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.tree_node_ex($label, $flags), $crate::tree_pop, $body)
    };
}

/// Tooltip scope; the body runs only when the tooltip should be submitted.
#[macro_export]
macro_rules! with_tooltip {
    ($ui:expr => $body:block) => {
        $crate::__scope_bool!(false, $ui.begin_tooltip(), $crate::end_tooltip, $body)
    };
}

/// Collapsing header; a plain conditional with no end call to balance.
#[macro_export]
macro_rules! with_collapsing_header {
    ($ui:expr, $label:expr => $body:block) => {
        $crate::with_collapsing_header!($ui, $label, $crate::TreeNodeFlags::NONE => $body)
    };
    ($ui:expr, $label:expr, $flags:expr => $body:block) => {{
        if $ui.collapsing_header($label, $flags) {
            ::core::option::Option::Some($body)
        } else {
            ::core::option::Option::None
        }
    }};
}

// ---------------------------------------------------------------------------
// Void scopes
// ---------------------------------------------------------------------------

/// Layout-group scope; the body always runs.
#[macro_export]
macro_rules! with_group {
    ($ui:expr => $body:block) => {
        $crate::__scope_void!(|| $ui.begin_group(), $crate::end_group, $body)
    };
}

/// Font scope; pops when the block ends. A missing `size` keeps the current
/// font size.
#[macro_export]
macro_rules! with_font {
    ($ui:expr, $font:expr => $body:block) => {
        $crate::with_font!($ui, $font, 0.0 => $body)
    };
    ($ui:expr, $font:expr, $size:expr => $body:block) => {
        $crate::__scope_void!(|| $ui.push_font($font, $size), $crate::pop_font, $body)
    };
}

/// Keyboard-focus scope.
#[macro_export]
macro_rules! with_allow_keyboard_focus {
    ($ui:expr, $allow:expr => $body:block) => {
        $crate::__scope_void!(
            || $ui.push_allow_keyboard_focus($allow),
            $crate::pop_item_flag,
            $body
        )
    };
}

/// Button-repeat scope.
#[macro_export]
macro_rules! with_button_repeat {
    ($ui:expr, $repeat:expr => $body:block) => {
        $crate::__scope_void!(|| $ui.push_button_repeat($repeat), $crate::pop_item_flag, $body)
    };
}

/// Item-width scope.
#[macro_export]
macro_rules! with_item_width {
    ($ui:expr, $width:expr => $body:block) => {
        $crate::__scope_void!(|| $ui.push_item_width($width), $crate::pop_item_width, $body)
    };
}

/// Text-wrap-position scope. A missing position wraps at the end of the
/// window.
#[macro_export]
macro_rules! with_text_wrap_pos {
    ($ui:expr => $body:block) => {
        $crate::with_text_wrap_pos!($ui, 0.0 => $body)
    };
    ($ui:expr, $pos:expr => $body:block) => {
        $crate::__scope_void!(|| $ui.push_text_wrap_pos($pos), $crate::pop_text_wrap_pos, $body)
    };
}

/// ID-stack scope.
#[macro_export]
macro_rules! with_id {
    ($ui:expr, $id:expr => $body:block) => {
        $crate::__scope_void!(|| $ui.push_id($id), $crate::pop_id, $body)
    };
}

/// Clip-rect scope.
#[macro_export]
macro_rules! with_clip_rect {
    ($ui:expr, $min:expr, $max:expr, $intersect:expr => $body:block) => {
        $crate::__scope_void!(
            || $ui.push_clip_rect($min, $max, $intersect),
            $crate::pop_clip_rect,
            $body
        )
    };
}

/// Draw-list texture scope.
#[macro_export]
macro_rules! with_texture {
    ($ui:expr, $texture:expr => $body:block) => {
        $crate::__scope_void!(|| $ui.push_texture($texture), $crate::pop_texture, $body)
    };
}

/// Style-color scope; accepts a packed `u32` or an `[f32; 4]`.
#[macro_export]
macro_rules! with_style_color {
    ($ui:expr, $idx:expr, $color:expr => $body:block) => {
        $crate::__scope_void!(
            || $ui.push_style_color($idx, $color),
            $crate::pop_style_color,
            $body
        )
    };
}

/// Style-variable scope; accepts an `f32` or an `[f32; 2]`.
#[macro_export]
macro_rules! with_style_var {
    ($ui:expr, $idx:expr, $value:expr => $body:block) => {
        $crate::__scope_void!(|| $ui.push_style_var($idx, $value), $crate::pop_style_var, $body)
    };
}

// ---------------------------------------------------------------------------
// Parent-scoped statements
// ---------------------------------------------------------------------------

/// Pushes a font until the enclosing block ends.
#[macro_export]
macro_rules! set_font {
    ($ui:expr, $font:expr) => {
        $crate::set_font!($ui, $font, 0.0);
    };
    ($ui:expr, $font:expr, $size:expr) => {
        $crate::__set_void!(|| $ui.push_font($font, $size), $crate::pop_font);
    };
}

/// Allows or forbids keyboard tabbing focus until the enclosing block ends.
#[macro_export]
macro_rules! set_allow_keyboard_focus {
    ($ui:expr, $allow:expr) => {
        $crate::__set_void!(|| $ui.push_allow_keyboard_focus($allow), $crate::pop_item_flag);
    };
}

/// Sets button-repeat behavior until the enclosing block ends.
#[macro_export]
macro_rules! set_button_repeat {
    ($ui:expr, $repeat:expr) => {
        $crate::__set_void!(|| $ui.push_button_repeat($repeat), $crate::pop_item_flag);
    };
}

/// Sets the item width until the enclosing block ends.
#[macro_export]
macro_rules! set_item_width {
    ($ui:expr, $width:expr) => {
        $crate::__set_void!(|| $ui.push_item_width($width), $crate::pop_item_width);
    };
}

/// Sets the text-wrap position until the enclosing block ends.
#[macro_export]
macro_rules! set_text_wrap_pos {
    ($ui:expr) => {
        $crate::set_text_wrap_pos!($ui, 0.0);
    };
    ($ui:expr, $pos:expr) => {
        $crate::__set_void!(|| $ui.push_text_wrap_pos($pos), $crate::pop_text_wrap_pos);
    };
}

/// Pushes an ID until the enclosing block ends.
#[macro_export]
macro_rules! set_id {
    ($ui:expr, $id:expr) => {
        $crate::__set_void!(|| $ui.push_id($id), $crate::pop_id);
    };
}

/// Pushes a clip rect until the enclosing block ends.
#[macro_export]
macro_rules! set_clip_rect {
    ($ui:expr, $min:expr, $max:expr, $intersect:expr) => {
        $crate::__set_void!(|| $ui.push_clip_rect($min, $max, $intersect), $crate::pop_clip_rect);
    };
}

/// Pushes a draw-list texture until the enclosing block ends.
#[macro_export]
macro_rules! set_texture {
    ($ui:expr, $texture:expr) => {
        $crate::__set_void!(|| $ui.push_texture($texture), $crate::pop_texture);
    };
}

/// Pushes a style color until the enclosing block ends.
///
/// ```no_run
/// # use dear_imgui_sugar::*;
/// # let mut ctx = Context::create_or_panic();
/// # let ui = ctx.frame();
/// with_window!(ui, "Alert" => {
///     set_style_color!(ui, StyleColor::Text, 0xFF00_00FFu32); // packed overload
///     set_style_color!(ui, StyleColor::Border, [1.0, 0.0, 0.0, 1.0]); // vector overload
///     ui.text("red on red");
/// });
/// ```
#[macro_export]
macro_rules! set_style_color {
    ($ui:expr, $idx:expr, $color:expr) => {
        $crate::__set_void!(|| $ui.push_style_color($idx, $color), $crate::pop_style_color);
    };
}

/// Pushes a style variable until the enclosing block ends.
#[macro_export]
macro_rules! set_style_var {
    ($ui:expr, $idx:expr, $value:expr) => {
        $crate::__set_void!(|| $ui.push_style_var($idx, $value), $crate::pop_style_var);
    };
}
