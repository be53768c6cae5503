//! User intents accepted by the dashboard view model

use super::model::{DoctorId, DoctorStatus, LabId, LabStatus};
use super::state::DashboardState;

/// An action requested by the view layer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Intent {
    SetDoctorStatus(DoctorId, DoctorStatus),
    SetLabStatus(LabId, LabStatus),
    StartQueue,
    PauseQueue,
    RequestSkip,
    ConfirmSkip,
    CancelSkip,
    SetOverrideDept(String),
    SetOverrideStatus(String),
    SetOverrideNotes(String),
    ApplyOverride,
    SetAlertType(String),
    SetAffectedDept(String),
    /// Preset alert label, or `None` to keep the current selection.
    RequestAlert(Option<String>),
    ConfirmSendAlert,
    CancelSendAlert,
}

impl DashboardState {
    /// Route an intent to its transition.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::SetDoctorStatus(id, status) => self.set_doctor_status(id, status),
            Intent::SetLabStatus(id, status) => self.set_lab_status(id, status),
            Intent::StartQueue => self.start_queue(),
            Intent::PauseQueue => self.pause_queue(),
            Intent::RequestSkip => self.request_skip(),
            Intent::ConfirmSkip => self.confirm_skip(),
            Intent::CancelSkip => self.cancel_skip(),
            Intent::SetOverrideDept(value) => self.set_override_dept(value),
            Intent::SetOverrideStatus(value) => self.set_override_status(value),
            Intent::SetOverrideNotes(value) => self.set_override_notes(value),
            Intent::ApplyOverride => self.apply_override(),
            Intent::SetAlertType(value) => self.set_alert_type(value),
            Intent::SetAffectedDept(value) => self.set_affected_dept(value),
            Intent::RequestAlert(Some(label)) => self.request_alert(label),
            Intent::RequestAlert(None) => self.open_alert_confirmation(),
            Intent::ConfirmSendAlert => self.confirm_send_alert(),
            Intent::CancelSendAlert => self.cancel_send_alert(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::tests::new_state;
    use super::*;

    #[tokio::test]
    async fn test_dispatch_routes_override_flow() {
        let (mut state, _rx) = new_state();
        state.dispatch(Intent::SetOverrideDept("xray".to_string()));
        state.dispatch(Intent::SetOverrideStatus("closed".to_string()));
        state.dispatch(Intent::ApplyOverride);
        assert_eq!(state.notification(), Some("Override applied successfully"));
    }

    #[tokio::test]
    async fn test_dispatch_routes_skip_flow() {
        let (mut state, _rx) = new_state();
        state.dispatch(Intent::RequestSkip);
        state.dispatch(Intent::ConfirmSkip);
        assert_eq!(state.queue().current_token, 46);
    }

    #[tokio::test]
    async fn test_dispatch_alert_without_preset() {
        let (mut state, _rx) = new_state();
        state.dispatch(Intent::SetAlertType("delay".to_string()));
        state.dispatch(Intent::RequestAlert(None));
        assert!(state.alert_pending());
        assert_eq!(state.alert_draft().alert_type, "delay");
        state.dispatch(Intent::CancelSendAlert);
        assert!(!state.alert_pending());
    }
}
