//! Rendering of triaged runtime errors.
//!
//! Sub-modules:
//! - [`traits`]   — collaborator seams: `FrameGrouper`, `OverlayRenderer`
//! - [`grouping`] — `SourcePackageGrouper`
//! - [`text`]     — `TextOverlayRenderer`, styled terminal output
//! - [`pipeline`] — `render_runtime_error`, the driver
//! - [`types`]    — `StyledLine`, `StyledSegment`, `OverlayTheme`, `RenderedOverlay`

pub mod grouping;
pub mod pipeline;
pub mod text;
pub mod traits;
pub mod types;


pub use grouping::SourcePackageGrouper;
pub use pipeline::render_runtime_error;
pub use text::TextOverlayRenderer;
pub use traits::{FrameGroup, FrameGrouper, OverlayRenderer};
pub use types::{OverlayTheme, RenderedOverlay, StyledLine, StyledSegment};

/// Push a styled line built from segments.
pub(crate) fn push_line(lines: &mut Vec<StyledLine>, segments: Vec<StyledSegment>) {
    lines.push(StyledLine::new(segments));
}
