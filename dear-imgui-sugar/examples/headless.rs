//! Builds a few frames headlessly (no rendering backend) to show the
//! construct catalogue in use. Run with `cargo run --example headless`.

use dear_imgui_sugar::*;

fn main() {
    logging::init_tracing();

    let mut ctx = Context::create_or_panic();
    ctx.io_mut().set_display_size([1280.0, 720.0]);
    ctx.set_ini_filename::<std::path::PathBuf>(None).unwrap();

    for frame in 0..3 {
        ctx.io_mut().set_delta_time(1.0 / 60.0);
        let ui = ctx.frame();

        with_window!(ui, "Demo", WindowFlags::MENU_BAR => {
            with_menu_bar!(ui => {
                with_menu!(ui, "File" => {
                    ui.text("Nothing to open here");
                });
            });

            set_item_width!(ui, 160.0);
            ui.text(format!("frame #{frame}"));

            with_style_color!(ui, StyleColor::Text, [1.0, 0.6, 0.0, 1.0] => {
                ui.text("orange");
            });

            with_tree_node_ex!(ui, "details", TreeNodeFlags::DEFAULT_OPEN => {
                ui.text("nested content");
                with_group!(ui => {
                    ui.text("grouped");
                    ui.separator();
                });
            });

            with_table!(ui, "stats", 2, TableFlags::BORDERS => {
                for (name, value) in [("fps", "60"), ("frame", "16.6ms")] {
                    ui.table_next_column();
                    ui.text(name);
                    ui.table_next_column();
                    ui.text(value);
                }
            });
        });

        ctx.render();
    }

    println!("built 3 frames");
}
