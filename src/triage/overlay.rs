//! `RuntimeErrorOverlay`: one displayed error and its own disclosure state.

use super::culprit::FrameTriage;
use super::disclosure::Disclosure;
use super::noise::NoiseDenylist;
use super::types::RuntimeError;
use super::view::TriageView;

/// Owns a runtime error and the disclosure state of its display.
///
/// Each overlay keeps its own state; nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct RuntimeErrorOverlay {
    error: RuntimeError,
    denylist: NoiseDenylist,
    disclosure: Disclosure,
}

impl RuntimeErrorOverlay {
    /// Overlay using the built-in noise denylist.
    pub fn new(error: RuntimeError) -> Self {
        Self::with_denylist(error, NoiseDenylist::default())
    }

    pub fn with_denylist(error: RuntimeError, denylist: NoiseDenylist) -> Self {
        check_contract(&error);
        let disclosure = FrameTriage::new(&error.frames, &denylist).initial_disclosure();
        log::debug!("overlay for error {}: initial disclosure {:?}", error.id, disclosure);
        Self {
            error,
            denylist,
            disclosure,
        }
    }

    pub fn error(&self) -> &RuntimeError {
        &self.error
    }

    pub fn denylist(&self) -> &NoiseDenylist {
        &self.denylist
    }

    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    /// Flip between collapsed and expanded. Returns the new state.
    pub fn toggle(&mut self) -> Disclosure {
        self.disclosure.toggle();
        log::debug!("error {}: disclosure now {:?}", self.error.id, self.disclosure);
        self.disclosure
    }

    /// Show every frame. Leaves an already expanded overlay as it is.
    pub fn expand(&mut self) -> Disclosure {
        if !self.disclosure.is_expanded() {
            self.toggle();
        }
        self.disclosure
    }

    /// Show a different error, resetting disclosure to its initial value
    /// for the new frames.
    pub fn replace_error(&mut self, error: RuntimeError) {
        *self = Self::with_denylist(error, self.denylist.clone());
    }

    /// Filter and locate the culprit for the current error.
    pub fn triage(&self) -> FrameTriage<'_> {
        FrameTriage::new(&self.error.frames, &self.denylist)
    }

    /// Derive the view for the current error and disclosure state.
    pub fn view(&self) -> TriageView<'_> {
        self.triage().view(self.disclosure)
    }
}

/// Report frames whose snippet lacks its location. Such frames are never
/// chosen as culprit, but the upstream producer is broken.
fn check_contract(error: &RuntimeError) {
    let result = error.validate();
    if let Err(e) = &result {
        log::warn!("runtime error {}: {e}", error.id);
    }
    debug_assert!(
        result.is_ok(),
        "runtime error {} breaks the frame data contract",
        error.id
    );
}
