//! Visibility under a disclosure state, and the per-render derived view.

use super::culprit::{Culprit, FrameTriage};
use super::disclosure::Disclosure;
use super::types::StackFrame;

/// Frames visible under `disclosure`: all of them when expanded, otherwise
/// only those individually marked `expanded`.
pub fn visible_subset<'a>(frames: &[&'a StackFrame], disclosure: Disclosure) -> Vec<&'a StackFrame> {
    frames
        .iter()
        .copied()
        .filter(|f| disclosure.is_expanded() || f.expanded)
        .collect()
}

/// Whether a show/hide control should be offered.
///
/// True when something in the call stack is hidden, or when everything is
/// shown and a culprit exists to collapse back to.
pub fn can_reveal_more(
    trailing: &[&StackFrame],
    visible_trailing: &[&StackFrame],
    disclosure: Disclosure,
    has_culprit: bool,
) -> bool {
    visible_trailing.len() < trailing.len() || (disclosure.is_expanded() && has_culprit)
}

/// Everything a host needs to draw one runtime error.
///
/// Recomputed from scratch for each `(frames, disclosure)` pair; deriving
/// twice from the same pair yields equal views.
#[derive(Debug, Clone)]
pub struct TriageView<'a> {
    pub disclosure: Disclosure,
    pub culprit: Option<Culprit<'a>>,
    /// Visible frames before the culprit.
    pub leading: Vec<&'a StackFrame>,
    /// Visible frames after the culprit.
    pub call_stack: Vec<&'a StackFrame>,
    pub can_reveal_more: bool,
}

impl<'a> TriageView<'a> {
    pub(crate) fn derive(triage: &FrameTriage<'a>, disclosure: Disclosure) -> Self {
        let leading = visible_subset(triage.leading(), disclosure);
        let call_stack = visible_subset(triage.call_stack(), disclosure);
        let can_reveal_more = can_reveal_more(
            triage.call_stack(),
            &call_stack,
            disclosure,
            triage.has_culprit(),
        );
        Self {
            disclosure,
            culprit: triage.culprit(),
            leading,
            call_stack,
            can_reveal_more,
        }
    }

    /// Label for the show/hide control, or `None` when it must not be offered.
    pub fn toggle_label(&self) -> Option<&'static str> {
        self.can_reveal_more
            .then_some(self.disclosure.toggle_label())
    }
}
