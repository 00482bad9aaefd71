//! Shared integration test helpers for frame-triage.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{resolved, third_party, noise};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use frame_triage::triage::{ComponentStackFrame, ErrorInfo, FrameLocation, RuntimeError, StackFrame};

/// First-party frame with resolved source: eligible as culprit.
pub fn resolved(method: &str) -> StackFrame {
    resolved_with(method, true)
}

/// Frame with resolved source and an explicit first-party flag.
pub fn resolved_with(method: &str, expanded: bool) -> StackFrame {
    StackFrame::captured("webpack-internal:///./app/bundle.js", method)
        .with_original(
            FrameLocation {
                file: Some(format!("app/{method}.tsx")),
                method_name: method.to_string(),
                line_number: Some(12),
                column: Some(3),
                ..Default::default()
            },
            format!("> 12 | {method}()\n     |   ^"),
        )
        .with_expanded(expanded)
}

/// First-party frame whose source could not be resolved.
pub fn unresolved_first_party(file: &str, method: &str) -> StackFrame {
    StackFrame::captured(file, method).with_expanded(true)
}

/// Library frame: not first-party, no resolved source.
pub fn third_party(file: &str, method: &str) -> StackFrame {
    StackFrame::captured(file, method)
}

/// Engine-synthesized frame removed by the default denylist.
pub fn noise(method: &str) -> StackFrame {
    StackFrame::captured("<anonymous>", method)
}

/// Component-stack entries with just a component name.
pub fn component_stack(names: &[&str]) -> Vec<ComponentStackFrame> {
    names
        .iter()
        .map(|n| ComponentStackFrame {
            component: n.to_string(),
            file: Some(format!("app/{n}.tsx")),
            line_number: Some(1),
            column: Some(1),
        })
        .collect()
}

/// Runtime error with a fixed header.
pub fn runtime_error(frames: Vec<StackFrame>) -> RuntimeError {
    RuntimeError {
        id: 42,
        error: ErrorInfo {
            name: "Error".to_string(),
            message: "something broke".to_string(),
        },
        frames,
        component_stack_frames: None,
    }
}

/// Method names of a frame list, for compact assertions.
pub fn names(frames: &[&StackFrame]) -> Vec<String> {
    frames
        .iter()
        .map(|f| f.source_stack_frame.method_name.clone())
        .collect()
}

/// A spread of frame sequences covering noise, culprit position, and
/// first-party mixes.
pub fn sample_sequences() -> Vec<Vec<StackFrame>> {
    vec![
        vec![],
        vec![noise("stringify")],
        vec![noise("stringify"), noise("<unknown>")],
        vec![third_party("a.js", "a"), third_party("b.js", "b")],
        vec![resolved("Page")],
        vec![
            noise("stringify"),
            resolved("Page"),
            third_party("b.js", "b"),
        ],
        vec![
            third_party("lib.js", "lib"),
            unresolved_first_party("app/util.ts", "util"),
            noise("<unknown>"),
            resolved("Page"),
            third_party("react-dom.js", "commitRoot"),
            resolved("Layout"),
        ],
        vec![
            resolved_with("NotMine", false),
            unresolved_first_party("app/x.ts", "x"),
            third_party("c.js", "c"),
        ],
        vec![
            resolved("A"),
            resolved("B"),
            resolved("C"),
        ],
        vec![
            noise("stringify"),
            third_party("<anonymous>", "parse"),
            third_party("other.js", "stringify"),
        ],
    ]
}
