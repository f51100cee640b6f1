//! Smoke tests driving the constructs against a live (headless) context.

use dear_imgui_sugar::*;
use std::sync::{Mutex, MutexGuard, OnceLock};

fn test_guard() -> MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().unwrap()
}

fn headless_context() -> Context {
    let mut ctx = Context::create_or_panic();
    {
        let io = ctx.io_mut();
        io.set_display_size([800.0, 600.0]);
        io.set_delta_time(1.0 / 60.0);
    }
    ctx.set_ini_filename::<std::path::PathBuf>(None).unwrap();
    ctx
}

#[test]
fn window_and_stack_constructs_build_a_frame() {
    let _guard = test_guard();
    let mut ctx = headless_context();
    let ui = ctx.frame();

    let shown = with_window!(ui, "Main", WindowFlags::MENU_BAR => {
        with_menu_bar!(ui => {
            with_menu!(ui, "File" => {
                ui.text("Open...");
            });
        });

        set_item_width!(ui, 120.0);
        set_text_wrap_pos!(ui);
        ui.text("some wrapped content");

        with_group!(ui => {
            ui.text("grouped");
            ui.separator();
        });

        with_id!(ui, 42 => {
            ui.text("identified");
        });

        with_item_width!(ui, -1.0 => {
            ui.text("wide");
        });

        with_clip_rect!(ui, [0.0, 0.0], [100.0, 100.0], true => {
            ui.text("clipped");
        });

        with_child!(ui, "region", [0.0, 120.0], ChildFlags::BORDERS => {
            ui.text("child content");
        });

        with_child_frame!(ui, "framed", [100.0, 50.0] => {
            ui.text("framed content");
        });
    });
    assert!(shown.is_some());

    ctx.render();
}

#[test]
fn conditional_constructs_skip_their_bodies_when_closed() {
    let _guard = test_guard();
    let mut ctx = headless_context();
    let ui = ctx.frame();

    with_window!(ui, "Host" => {
        // Never opened, so the begin call declines and the body must not run.
        let ran = with_popup!(ui, "never-opened" => {
            ui.text("unreachable");
            true
        });
        assert_eq!(ran, None);

        let modal = with_popup_modal!(ui, "also-never-opened" => { true });
        assert_eq!(modal, None);

        // No drag in flight either.
        let source = with_drag_drop_source!(ui => { true });
        assert_eq!(source, None);
    });

    ctx.render();
}

#[test]
fn style_and_font_scopes_balance_their_stacks() {
    let _guard = test_guard();
    let mut ctx = headless_context();
    let ui = ctx.frame();

    with_window!(ui, "Styled" => {
        // Packed and vector color overloads, scalar and vector var overloads.
        set_style_color!(ui, StyleColor::Text, 0xFF00_FFFFu32);
        set_style_color!(ui, StyleColor::Border, [1.0, 0.0, 0.0, 1.0]);
        set_style_var!(ui, StyleVar::Alpha, 0.75f32);
        set_style_var!(ui, StyleVar::FramePadding, [4.0, 2.0]);
        ui.text("styled");

        with_style_color!(ui, StyleColor::Text, [0.0, 1.0, 0.0, 1.0] => {
            ui.text("green");
        });
        with_style_var!(ui, StyleVar::IndentSpacing, 30.0f32 => {
            ui.text("indented differently");
        });

        let font = ui.current_font();
        with_font!(ui, font => {
            ui.text("same font, pushed");
        });
        set_font!(ui, font);
        ui.text("still pushed until the window body ends");

        with_allow_keyboard_focus!(ui, false => {
            ui.text("not tabbable");
        });
        set_button_repeat!(ui, true);
        ui.text("repeat enabled for the rest of the window");
    });

    ctx.render();
}

#[test]
fn container_constructs_nest_and_unwind_cleanly() {
    let _guard = test_guard();
    let mut ctx = headless_context();
    let ui = ctx.frame();

    with_window!(ui, "Containers" => {
        with_tab_bar!(ui, "tabs" => {
            with_tab_item!(ui, "First" => {
                ui.text("tab contents");
            });
            with_tab_item!(ui, "Second" => {
                ui.text("other contents");
            });
        });

        with_table!(ui, "grid", 2, TableFlags::BORDERS => {
            ui.table_next_column();
            ui.text("cell 0");
            ui.table_next_column();
            ui.text("cell 1");
        });

        with_tree_node!(ui, "node" => {
            ui.text("inner");
        });
        with_tree_node_ex!(ui, "open-node", TreeNodeFlags::DEFAULT_OPEN => {
            ui.text("expanded by default");
        });

        with_collapsing_header!(ui, "header", TreeNodeFlags::DEFAULT_OPEN => {
            ui.text("under header");
        });

        with_list_box!(ui, "list", [0.0, 60.0] => {
            ui.text("item");
        });

        with_combo!(ui, "combo", "preview" => {
            ui.text("choice");
        });
    });

    ctx.render();
}
