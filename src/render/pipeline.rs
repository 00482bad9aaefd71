//! Drives the collaborators over one derived view.

use crate::triage::RuntimeErrorOverlay;

use super::traits::{FrameGrouper, OverlayRenderer};
use super::types::RenderedOverlay;

/// Render one overlay in display order: header, leading frames and the
/// culprit snippet (when there is a culprit), component stack, call stack,
/// then the show/hide control when the view offers one.
pub fn render_runtime_error<G, R>(
    overlay: &RuntimeErrorOverlay,
    grouper: &G,
    renderer: &R,
) -> RenderedOverlay
where
    G: FrameGrouper + ?Sized,
    R: OverlayRenderer + ?Sized,
{
    let error = overlay.error();
    let view = overlay.view();
    let leading_groups = grouper.group(&view.leading);
    let call_stack_groups = grouper.group(&view.call_stack);

    let mut lines = Vec::new();
    renderer.header(&error.error, &mut lines);

    if let Some(culprit) = &view.culprit {
        renderer.frame_groups(&leading_groups, view.disclosure, &mut lines);
        renderer.code_frame(culprit, &mut lines);
    }

    for frame in error.component_stack() {
        renderer.component_stack_row(frame, &mut lines);
    }

    if !call_stack_groups.is_empty() {
        renderer.frame_groups(&call_stack_groups, view.disclosure, &mut lines);
    }

    if let Some(label) = view.toggle_label() {
        renderer.toggle_control(label, &mut lines);
    }

    log::trace!(
        "rendered error {} into {} line(s)",
        error.id,
        lines.len()
    );
    RenderedOverlay { lines }
}
