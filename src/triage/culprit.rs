//! Culprit selection and the leading / call-stack partition around it.

use super::disclosure::Disclosure;
use super::noise::{NoiseDenylist, filter_noise_frames};
use super::types::{FrameLocation, StackFrame};
use super::view::TriageView;

/// Index of the first frame that is first-party and has resolved source.
///
/// Frames without a resolved snippet cannot be shown expanded, so they are
/// skipped even when marked `expanded`.
pub fn locate_culprit(frames: &[&StackFrame]) -> Option<usize> {
    frames
        .iter()
        .position(|f| f.expanded && f.has_resolved_source())
}

/// Split `frames` around the culprit, excluding the culprit itself.
///
/// Without a culprit every frame is call-stack context.
pub fn partition<T>(frames: &[T], culprit: Option<usize>) -> (&[T], &[T]) {
    match culprit {
        Some(i) => (&frames[..i], &frames[i + 1..]),
        None => (&frames[..0], frames),
    }
}

/// The frame shown expanded with its source snippet.
///
/// Holds the original location and snippet as plain references so a snippet
/// renderer can never be handed one without the other.
#[derive(Debug, Clone, Copy)]
pub struct Culprit<'a> {
    pub frame: &'a StackFrame,
    pub original_stack_frame: &'a FrameLocation,
    pub original_code_frame: &'a str,
}

impl<'a> Culprit<'a> {
    /// `None` unless both halves of the resolved source are present.
    pub fn from_frame(frame: &'a StackFrame) -> Option<Self> {
        if !frame.has_resolved_source() {
            return None;
        }
        let (Some(location), Some(code)) = (&frame.original_stack_frame, &frame.original_code_frame)
        else {
            return None;
        };
        Some(Self {
            frame,
            original_stack_frame: location,
            original_code_frame: code,
        })
    }
}

/// Filtered frames of one error plus the culprit position among them.
///
/// Depends only on the frame sequence; the disclosure state is applied later
/// by [`FrameTriage::view`].
#[derive(Debug, Clone)]
pub struct FrameTriage<'a> {
    filtered: Vec<&'a StackFrame>,
    culprit_index: Option<usize>,
}

impl<'a> FrameTriage<'a> {
    /// Filter noise and locate the culprit.
    pub fn new(frames: &'a [StackFrame], denylist: &NoiseDenylist) -> Self {
        let filtered = filter_noise_frames(frames, denylist);
        let culprit_index = locate_culprit(&filtered);
        log::debug!(
            "triage: {} frame(s), {} noise, culprit={:?}",
            frames.len(),
            frames.len() - filtered.len(),
            culprit_index
        );
        Self {
            filtered,
            culprit_index,
        }
    }

    /// Frames left after noise removal, in call order.
    pub fn filtered(&self) -> &[&'a StackFrame] {
        &self.filtered
    }

    /// Position of the culprit within [`FrameTriage::filtered`].
    pub fn culprit_index(&self) -> Option<usize> {
        self.culprit_index
    }

    pub fn culprit(&self) -> Option<Culprit<'a>> {
        let frame = self.filtered[self.culprit_index?];
        let culprit = Culprit::from_frame(frame);
        debug_assert!(culprit.is_some(), "culprit selected without resolved source");
        culprit
    }

    pub fn has_culprit(&self) -> bool {
        self.culprit_index.is_some()
    }

    /// Frames before the culprit (empty without a culprit).
    pub fn leading(&self) -> &[&'a StackFrame] {
        partition(&self.filtered, self.culprit_index).0
    }

    /// Frames after the culprit (all filtered frames without a culprit).
    pub fn call_stack(&self) -> &[&'a StackFrame] {
        partition(&self.filtered, self.culprit_index).1
    }

    /// Disclosure state a fresh overlay starts in for these frames.
    pub fn initial_disclosure(&self) -> Disclosure {
        Disclosure::initial(self.has_culprit())
    }

    /// Apply a disclosure state.
    pub fn view(&self, disclosure: Disclosure) -> TriageView<'a> {
        TriageView::derive(self, disclosure)
    }
}
