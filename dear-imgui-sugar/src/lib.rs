//! # Dear ImGui Sugar
//!
//! Block-scoped, automatically-balanced constructs for Dear ImGui's paired
//! `Begin*/End*` and `Push*/Pop*` calls.
//!
//! Every pair in the catalogue becomes either a self-scoped `with_*!` block
//! (the guard lives exactly as long as the block that follows) or a
//! parent-scoped `set_*!` statement (the push stays in effect until the
//! enclosing block ends). The matching end/pop call is bound to guard drop,
//! so it runs on every exit path (fall-through, early `return`, `?`, `break`
//! or panic) and can never be forgotten or mismatched.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dear_imgui_sugar::*;
//!
//! let mut ctx = Context::create_or_panic();
//! ctx.io_mut().set_display_size([1280.0, 720.0]);
//! let ui = ctx.frame();
//!
//! with_window!(ui, "Hello" => {
//!     set_item_width!(ui, 120.0);
//!     ui.text("Hello, world!");
//!     with_tree_node!(ui, "Details" => {
//!         ui.text("only while open");
//!     });
//! });
//! ```
//!
//! Whether an end call runs unconditionally (windows, child regions) or only
//! after a successful begin (popups, combos, tables, tree nodes, ...) is a
//! fixed per-entry policy matching Dear ImGui's own stack contract; see
//! [`BoolGuard`] for the two disciplines.

#![deny(rust_2018_idioms)]

// Re-export the sys crate for advanced users
pub extern crate dear_imgui_sys as sys;

pub use self::combo::*;
pub use self::context::*;
pub use self::drag_drop::*;
pub use self::error::*;
pub use self::guard::*;
pub use self::io::*;
pub use self::layout::*;
pub use self::list_box::*;
pub use self::menu::*;
pub use self::popup::*;
pub use self::stacks::*;
pub use self::string::*;
pub use self::style::*;
pub use self::tab::*;
pub use self::table::*;
pub use self::tree::*;
pub use self::ui::*;
pub use self::window::*;

mod combo;
mod context;
mod drag_drop;
mod error;
mod guard;
mod io;
mod layout;
mod list_box;
pub mod logging;
mod macros;
mod menu;
mod popup;
mod stacks;
mod string;
mod style;
mod tab;
mod table;
mod tree;
mod ui;
mod window;

/// Version information for this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
