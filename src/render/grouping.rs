//! Grouping of consecutive frames by their upstream framework tag.

use crate::triage::StackFrame;

use super::traits::{FrameGroup, FrameGrouper};

/// Groups consecutive frames that carry the same `source_package`.
///
/// The tag is read as delivered; frames are never classified here.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourcePackageGrouper;

impl FrameGrouper for SourcePackageGrouper {
    fn group<'a>(&self, frames: &[&'a StackFrame]) -> Vec<FrameGroup<'a>> {
        let mut groups: Vec<FrameGroup<'a>> = Vec::new();
        for &frame in frames {
            let package = frame.source_package.as_deref();
            if let Some(last) = groups
                .last_mut()
                .filter(|g| g.source_package == package)
            {
                last.frames.push(frame);
                continue;
            }
            groups.push(FrameGroup {
                source_package: package,
                frames: vec![frame],
            });
        }
        groups
    }
}
