//! Serializable snapshot of a derived view, for machine-readable output.

use serde::Serialize;

use super::disclosure::Disclosure;
use super::overlay::RuntimeErrorOverlay;
use super::types::{ComponentStackFrame, StackFrame};

/// Owned copy of one overlay's derived view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageReport {
    pub error_id: u64,
    pub name: String,
    pub message: String,
    pub disclosure: Disclosure,
    pub culprit: Option<StackFrame>,
    pub leading_frames: Vec<StackFrame>,
    pub call_stack_frames: Vec<StackFrame>,
    pub component_stack_frames: Vec<ComponentStackFrame>,
    /// Filtered frames not visible under the current disclosure state.
    pub hidden_frame_count: usize,
    pub can_reveal_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_label: Option<String>,
}

impl TriageReport {
    pub fn from_overlay(overlay: &RuntimeErrorOverlay) -> Self {
        let triage = overlay.triage();
        let view = triage.view(overlay.disclosure());
        let culprit_len = usize::from(view.culprit.is_some());
        let shown = view.leading.len() + view.call_stack.len() + culprit_len;
        let error = overlay.error();

        Self {
            error_id: error.id,
            name: error.error.name.clone(),
            message: error.error.message.clone(),
            disclosure: view.disclosure,
            culprit: view.culprit.map(|c| c.frame.clone()),
            leading_frames: view.leading.iter().map(|f| (*f).clone()).collect(),
            call_stack_frames: view.call_stack.iter().map(|f| (*f).clone()).collect(),
            component_stack_frames: error.component_stack().to_vec(),
            hidden_frame_count: triage.filtered().len() - shown,
            can_reveal_more: view.can_reveal_more,
            toggle_label: view.toggle_label().map(str::to_string),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
