//! Collaborator seams between the triage core and whatever draws it.
//!
//! The triage core decides which frames are handed out; these traits decide
//! how they are grouped and drawn.

use crate::triage::{ComponentStackFrame, Culprit, Disclosure, ErrorInfo, StackFrame};

use super::types::StyledLine;

/// A run of frames sharing one owning framework tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameGroup<'a> {
    /// Framework tag of every frame in the group; `None` for untagged frames.
    pub source_package: Option<&'a str>,
    pub frames: Vec<&'a StackFrame>,
}

/// Groups visible frames by owning framework.
///
/// Called once for the visible leading frames and once for the visible
/// call-stack frames of each render.
pub trait FrameGrouper {
    fn group<'a>(&self, frames: &[&'a StackFrame]) -> Vec<FrameGroup<'a>>;
}

/// Draws the pieces of a runtime error overlay.
pub trait OverlayRenderer {
    /// Error name and message.
    fn header(&self, error: &ErrorInfo, out: &mut Vec<StyledLine>);

    /// The culprit frame with its source snippet. Only ever called with a
    /// culprit, which always carries both the location and the snippet.
    fn code_frame(&self, culprit: &Culprit<'_>, out: &mut Vec<StyledLine>);

    /// One component-stack entry.
    fn component_stack_row(&self, frame: &ComponentStackFrame, out: &mut Vec<StyledLine>);

    /// Grouped leading or call-stack frames.
    fn frame_groups(
        &self,
        groups: &[FrameGroup<'_>],
        disclosure: Disclosure,
        out: &mut Vec<StyledLine>,
    );

    /// The show/hide control. Only called when the view offers one.
    fn toggle_control(&self, label: &str, out: &mut Vec<StyledLine>);
}
