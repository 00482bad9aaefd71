//! Tests for the overlay state owner and the report snapshot.

use super::*;

fn resolved(method: &str, expanded: bool) -> StackFrame {
    StackFrame::captured("webpack-internal:///bundle.js", method)
        .with_original(
            FrameLocation {
                file: Some(format!("app/{method}.tsx")),
                method_name: method.to_string(),
                line_number: Some(10),
                column: Some(5),
                ..Default::default()
            },
            format!("> 10 | {method}()"),
        )
        .with_expanded(expanded)
}

fn library(method: &str) -> StackFrame {
    StackFrame::captured("node_modules/react-dom/cjs/react-dom.development.js", method)
        .with_source_package("react")
}

fn error_with(frames: Vec<StackFrame>) -> RuntimeError {
    RuntimeError {
        id: 7,
        error: ErrorInfo {
            name: "Error".to_string(),
            message: "boom".to_string(),
        },
        frames,
        component_stack_frames: None,
    }
}

// -- Overlay state --

#[test]
fn test_overlay_starts_collapsed_with_culprit() {
    let overlay = RuntimeErrorOverlay::new(error_with(vec![
        resolved("Page", true),
        library("renderWithHooks"),
    ]));
    assert_eq!(overlay.disclosure(), Disclosure::Collapsed);
}

#[test]
fn test_overlay_starts_expanded_without_culprit() {
    let overlay = RuntimeErrorOverlay::new(error_with(vec![
        resolved("Page", false),
        library("renderWithHooks"),
    ]));
    assert_eq!(overlay.disclosure(), Disclosure::Expanded);
}

#[test]
fn test_overlay_toggle_round_trip() {
    let mut overlay = RuntimeErrorOverlay::new(error_with(vec![
        library("a"),
        resolved("Page", true),
        library("b"),
        library("c"),
    ]));

    let before = overlay.view();
    let leading_before = before.leading.len();
    let call_stack_before = before.call_stack.len();
    drop(before);

    assert_eq!(overlay.toggle(), Disclosure::Expanded);
    {
        let view = overlay.view();
        assert_eq!(view.leading.len(), 1);
        assert_eq!(view.call_stack.len(), 2);
        assert_eq!(view.toggle_label(), Some("Hide collapsed frames"));
    }

    assert_eq!(overlay.toggle(), Disclosure::Collapsed);
    let after = overlay.view();
    assert_eq!(after.leading.len(), leading_before);
    assert_eq!(after.call_stack.len(), call_stack_before);
    assert_eq!(after.toggle_label(), Some("Show collapsed frames"));
}

#[test]
fn test_replace_error_resets_disclosure() {
    let mut overlay = RuntimeErrorOverlay::new(error_with(vec![
        resolved("Page", true),
        library("b"),
    ]));
    overlay.toggle();
    assert_eq!(overlay.disclosure(), Disclosure::Expanded);

    overlay.replace_error(error_with(vec![resolved("Layout", true), library("c")]));
    assert_eq!(overlay.disclosure(), Disclosure::Collapsed);
    assert_eq!(
        overlay.view().culprit.unwrap().frame.source_stack_frame.method_name,
        "Layout"
    );
}

#[test]
fn test_expand_sets_rather_than_flips() {
    let mut with_culprit = RuntimeErrorOverlay::new(error_with(vec![
        resolved("Page", true),
        library("b"),
    ]));
    assert_eq!(with_culprit.expand(), Disclosure::Expanded);
    assert_eq!(with_culprit.expand(), Disclosure::Expanded);

    let mut without = RuntimeErrorOverlay::new(error_with(vec![library("a"), library("b")]));
    assert_eq!(without.expand(), Disclosure::Expanded);
    assert_eq!(without.view().call_stack.len(), 2);
}

#[test]
fn test_overlays_do_not_share_state() {
    let frames = vec![resolved("Page", true), library("b")];
    let mut first = RuntimeErrorOverlay::new(error_with(frames.clone()));
    let second = RuntimeErrorOverlay::new(error_with(frames));

    first.toggle();
    assert_eq!(first.disclosure(), Disclosure::Expanded);
    assert_eq!(second.disclosure(), Disclosure::Collapsed);
}

#[test]
fn test_overlay_uses_custom_denylist() {
    let denylist = NoiseDenylist::default().with_rule(NoiseRule {
        file: "node:internal/process/task_queues".to_string(),
        method_names: vec!["processTicksAndRejections".to_string()],
    });
    let overlay = RuntimeErrorOverlay::with_denylist(
        error_with(vec![
            resolved("Page", true),
            StackFrame::captured(
                "node:internal/process/task_queues",
                "processTicksAndRejections",
            ),
        ]),
        denylist,
    );
    assert!(overlay.triage().call_stack().is_empty());
    assert!(!overlay.view().can_reveal_more);
}

#[test]
fn test_view_is_idempotent() {
    let overlay = RuntimeErrorOverlay::new(error_with(vec![
        library("a"),
        resolved("Page", true),
        library("b"),
    ]));
    let first = overlay.view();
    let second = overlay.view();
    assert_eq!(first.leading, second.leading);
    assert_eq!(first.call_stack, second.call_stack);
    assert_eq!(first.can_reveal_more, second.can_reveal_more);
    assert_eq!(
        first.culprit.map(|c| c.frame),
        second.culprit.map(|c| c.frame)
    );
}

// -- Report --

#[test]
fn test_report_counts_hidden_frames() {
    let overlay = RuntimeErrorOverlay::new(error_with(vec![
        StackFrame::captured("<anonymous>", "stringify"),
        library("a"),
        resolved("Page", true),
        library("b"),
        resolved("helper", true),
    ]));
    let report = TriageReport::from_overlay(&overlay);

    assert_eq!(report.error_id, 7);
    assert_eq!(report.disclosure, Disclosure::Collapsed);
    assert_eq!(
        report.culprit.as_ref().map(|f| f.source_stack_frame.method_name.as_str()),
        Some("Page")
    );
    assert!(report.leading_frames.is_empty());
    assert_eq!(report.call_stack_frames.len(), 1);
    // library a and library b are hidden; the noise frame is not counted
    assert_eq!(report.hidden_frame_count, 2);
    assert!(report.can_reveal_more);
    assert_eq!(report.toggle_label.as_deref(), Some("Show collapsed frames"));
}

#[test]
fn test_report_json_shape() {
    let overlay = RuntimeErrorOverlay::new(error_with(vec![library("a")]));
    let json = TriageReport::from_overlay(&overlay).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["disclosure"], "expanded");
    assert_eq!(value["culprit"], serde_json::Value::Null);
    assert_eq!(value["callStackFrames"].as_array().unwrap().len(), 1);
    assert_eq!(value["canRevealMore"], false);
    assert!(value.get("toggleLabel").is_none());
}
