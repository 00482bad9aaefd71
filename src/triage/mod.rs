//! Runtime error frame triage.
//!
//! Given the captured frames of a runtime error, decides:
//!
//! - **Noise**: engine-synthesized frames dropped before anything else
//! - **Culprit**: the first first-party frame with resolved source, shown
//!   expanded with its code snippet
//! - **Leading frames**: context before the culprit, collapsible
//! - **Call stack**: everything after the culprit
//! - **Disclosure**: whether non-first-party frames are shown, and whether a
//!   show/hide control is offered at all
//!
//! Sub-modules:
//! - [`types`]      — `StackFrame`, `FrameLocation`, `RuntimeError`, `ComponentStackFrame`
//! - [`noise`]      — `NoiseDenylist` and `filter_noise_frames`
//! - [`culprit`]    — `locate_culprit`, `partition`, `FrameTriage`
//! - [`view`]       — `visible_subset`, `can_reveal_more`, `TriageView`
//! - [`disclosure`] — the two-state `Disclosure` toggle
//! - [`overlay`]    — `RuntimeErrorOverlay`, one error plus its own disclosure state
//! - [`report`]     — `TriageReport` JSON snapshot

pub mod culprit;
pub mod disclosure;
mod error;
pub mod noise;
pub mod overlay;
pub mod report;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use culprit::{Culprit, FrameTriage, locate_culprit, partition};
pub use disclosure::Disclosure;
pub use error::TriageError;
pub use noise::{NoiseDenylist, NoiseRule, filter_noise_frames};
pub use overlay::RuntimeErrorOverlay;
pub use report::TriageReport;
pub use types::{ComponentStackFrame, ErrorInfo, FrameLocation, RuntimeError, StackFrame};
pub use view::{TriageView, can_reveal_more, visible_subset};
