//! Two-state "show all frames" toggle.

use serde::Serialize;

/// Whether frames not marked first-party are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disclosure {
    /// Only first-party frames are visible.
    Collapsed,
    /// Every frame is visible.
    Expanded,
}

impl Disclosure {
    /// Start collapsed only when there is a culprit to focus on.
    pub fn initial(has_culprit: bool) -> Self {
        if has_culprit {
            Disclosure::Collapsed
        } else {
            Disclosure::Expanded
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Disclosure::Expanded
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Label for the control that flips this state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Disclosure::Collapsed => "Show collapsed frames",
            Disclosure::Expanded => "Hide collapsed frames",
        }
    }
}
