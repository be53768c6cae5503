//! Two-phase confirmation gate
//!
//! Skip-token and send-alert both go `Idle -> Pending -> (applied | cancelled) -> Idle`.
//! Only one action can be pending at a time.

use serde::Serialize;

/// Actions that must be confirmed before they take effect.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ConfirmAction {
    SkipToken,
    SendAlert,
}

/// How a pending confirmation was resolved.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Resolution {
    Applied,
    Cancelled,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Confirmation {
    #[default]
    Idle,
    Pending(ConfirmAction),
}

impl Confirmation {
    /// Opens the gate for `action`. Returns false if anything is already pending,
    /// including `action` itself.
    pub fn request(&mut self, action: ConfirmAction) -> bool {
        match self {
            Confirmation::Idle => {
                *self = Confirmation::Pending(action);
                true
            }
            Confirmation::Pending(_) => false,
        }
    }

    /// Resolves the gate if `action` is the pending one.
    pub fn resolve(&mut self, action: ConfirmAction, resolution: Resolution) -> Option<Resolution> {
        if self.is_pending(action) {
            *self = Confirmation::Idle;
            Some(resolution)
        } else {
            None
        }
    }

    pub fn pending(&self) -> Option<ConfirmAction> {
        match self {
            Confirmation::Idle => None,
            Confirmation::Pending(action) => Some(*action),
        }
    }

    pub fn is_pending(&self, action: ConfirmAction) -> bool {
        self.pending() == Some(action)
    }
}
