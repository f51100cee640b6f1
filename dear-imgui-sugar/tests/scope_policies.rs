//! Behavior of the scope generators against call-counting stubs.
//!
//! These tests bind the same generator macros the `with_*!`/`set_*!` entries
//! use to stub begin/end functions, so release policies and ordering can be
//! verified without a live Dear ImGui context.

use pretty_assertions::assert_eq;
use std::cell::RefCell;

thread_local! {
    static TRACE: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn trace(label: &'static str) {
    TRACE.with(|t| t.borrow_mut().push(label));
}

fn taken() -> Vec<&'static str> {
    TRACE.with(|t| std::mem::take(&mut *t.borrow_mut()))
}

fn end_a() {
    trace("end_a");
}
fn end_b() {
    trace("end_b");
}
fn end_c() {
    trace("end_c");
}

#[test]
fn active_scope_runs_body_once_then_releases() {
    let _ = taken();
    let result = dear_imgui_sugar::__scope_bool!(false, true, end_a, {
        trace("body");
        42
    });
    assert_eq!(result, Some(42));
    assert_eq!(taken(), ["body", "end_a"]);
}

#[test]
fn inactive_conditional_scope_skips_body_and_release() {
    let _ = taken();
    let result: Option<()> = dear_imgui_sugar::__scope_bool!(false, false, end_a, {
        trace("body");
    });
    assert_eq!(result, None);
    assert_eq!(taken(), Vec::<&str>::new());
}

#[test]
fn inactive_always_scope_skips_body_but_still_releases() {
    let _ = taken();
    let result: Option<()> = dear_imgui_sugar::__scope_bool!(true, false, end_a, {
        trace("body");
    });
    assert_eq!(result, None);
    assert_eq!(taken(), ["end_a"]);
}

#[test]
fn void_scope_begins_eagerly_and_always_releases() {
    let _ = taken();
    let result = dear_imgui_sugar::__scope_void!(|| trace("begin"), end_a, {
        trace("body");
        "done"
    });
    assert_eq!(result, Some("done"));
    assert_eq!(taken(), ["begin", "body", "end_a"]);
}

#[test]
fn parent_scoped_push_releases_at_enclosing_block_close() {
    let _ = taken();
    {
        dear_imgui_sugar::__set_void!(|| trace("begin"), end_a);
        trace("statement-after-push");
        trace("another-statement");
    }
    assert_eq!(
        taken(),
        ["begin", "statement-after-push", "another-statement", "end_a"]
    );
}

#[test]
fn repeated_parent_scoped_pushes_release_in_reverse_order() {
    let _ = taken();
    {
        dear_imgui_sugar::__set_void!(|| trace("begin_a"), end_a);
        dear_imgui_sugar::__set_void!(|| trace("begin_b"), end_b);
        trace("body");
    }
    assert_eq!(taken(), ["begin_a", "begin_b", "body", "end_b", "end_a"]);
}

#[test]
fn nested_scopes_release_in_reverse_order_of_acquisition() {
    let _ = taken();
    let _ = dear_imgui_sugar::__scope_bool!(true, true, end_a, {
        let _ = dear_imgui_sugar::__scope_void!(|| trace("begin_b"), end_b, {
            let _ = dear_imgui_sugar::__scope_bool!(false, true, end_c, {
                trace("innermost");
            });
        });
    });
    assert_eq!(taken(), ["begin_b", "innermost", "end_c", "end_b", "end_a"]);
}

#[test]
fn nested_scopes_release_in_reverse_order_during_unwind() {
    let _ = taken();
    let result = std::panic::catch_unwind(|| {
        let _ = dear_imgui_sugar::__scope_bool!(true, true, end_a, {
            let _ = dear_imgui_sugar::__scope_bool!(false, true, end_b, {
                let _ = dear_imgui_sugar::__scope_void!(|| (), end_c, {
                    panic!("boom");
                });
            });
        });
    });
    assert!(result.is_err());
    assert_eq!(taken(), ["end_c", "end_b", "end_a"]);
}

#[test]
fn early_return_from_body_still_releases() {
    fn guarded() -> i32 {
        let _ = dear_imgui_sugar::__scope_bool!(false, true, end_a, {
            return 7;
        });
        unreachable!()
    }
    let _ = taken();
    assert_eq!(guarded(), 7);
    assert_eq!(taken(), ["end_a"]);
}

#[test]
fn break_out_of_body_still_releases() {
    let _ = taken();
    for _ in 0..3 {
        let _ = dear_imgui_sugar::__scope_void!(|| trace("begin"), end_a, {
            break;
        });
    }
    // A single iteration: the guard released exactly once despite the break.
    assert_eq!(taken(), ["begin", "end_a"]);
}

#[test]
fn scope_yields_none_without_evaluating_body_expression() {
    let _ = taken();
    let result = dear_imgui_sugar::__scope_bool!(false, false, end_a, {
        trace("body");
        "value"
    });
    assert_eq!(result, None);
    assert_eq!(taken(), Vec::<&str>::new());
}
