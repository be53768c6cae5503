//! Dashboard state update logic
//!
//! Contains every transition the view layer can trigger, plus the handling
//! of events posted by timer tasks. None of these fail: unknown ids,
//! incomplete forms and out-of-phase confirmations are silent no-ops.

use super::confirm::{ConfirmAction, Resolution};
use super::model::{DoctorId, DoctorStatus, LabId, LabStatus, QueueStatus};
use super::state::DashboardState;

use crate::consts::cli_consts::messages;
use crate::events::DashboardEvent;

use log::{debug, warn};

impl DashboardState {
    /// Apply an event posted by the clock or notification timer.
    pub fn handle_event(&mut self, event: DashboardEvent) {
        debug!("Dashboard event: {}", event);
        match event {
            DashboardEvent::ClockTick(label) => self.clock_label = label,
            DashboardEvent::NotificationExpired(generation) => {
                self.notification_mut().expire(generation);
            }
        }
    }

    /// Replace the banner message and restart its expiry timer.
    pub fn show(&mut self, message: impl Into<String>) {
        self.notification_mut().show(message);
    }

    pub fn set_doctor_status(&mut self, doctor_id: DoctorId, status: DoctorStatus) {
        match self.doctors_mut().iter_mut().find(|d| d.id == doctor_id) {
            Some(doctor) => {
                debug!("Doctor {} -> {}", doctor.name, status);
                doctor.status = status;
            }
            None => debug!("No doctor with id {:?}", doctor_id),
        }
        self.show(messages::DOCTOR_STATUS_UPDATED);
    }

    /// Equipment status is reported externally and is left untouched.
    pub fn set_lab_status(&mut self, lab_id: LabId, status: LabStatus) {
        match self.labs_mut().iter_mut().find(|l| l.id == lab_id) {
            Some(lab) => {
                debug!("Lab {} -> {}", lab.name, status);
                lab.status = status;
            }
            None => debug!("No lab with id {:?}", lab_id),
        }
        self.show(messages::LAB_STATUS_UPDATED);
    }

    pub fn start_queue(&mut self) {
        self.queue_mut().status = QueueStatus::Active;
        self.show(messages::QUEUE_STARTED);
    }

    pub fn pause_queue(&mut self) {
        self.queue_mut().status = QueueStatus::Paused;
        self.show(messages::QUEUE_PAUSED);
    }

    /// Ask for confirmation before skipping the current token.
    pub fn request_skip(&mut self) {
        if !self.confirmation_mut().request(ConfirmAction::SkipToken) {
            debug!("Skip request ignored, another confirmation is pending");
        }
    }

    pub fn confirm_skip(&mut self) {
        if self
            .confirmation_mut()
            .resolve(ConfirmAction::SkipToken, Resolution::Applied)
            .is_none()
        {
            debug!("Skip confirmation without a pending request");
            return;
        }
        let queue = self.queue_mut();
        match queue.current_token.checked_add(1) {
            Some(next) => {
                queue.current_token = next;
                self.show(messages::TOKEN_SKIPPED);
            }
            None => warn!("Token counter is at its ceiling, not advancing"),
        }
    }

    pub fn cancel_skip(&mut self) {
        self.confirmation_mut()
            .resolve(ConfirmAction::SkipToken, Resolution::Cancelled);
    }

    pub fn set_override_dept(&mut self, department: impl Into<String>) {
        self.override_draft_mut().department = department.into();
    }

    pub fn set_override_status(&mut self, status: impl Into<String>) {
        self.override_draft_mut().status = status.into();
    }

    pub fn set_override_notes(&mut self, notes: impl Into<String>) {
        self.override_draft_mut().notes = notes.into();
    }

    /// Apply the drafted override. Silently ignored unless department and status are both chosen.
    pub fn apply_override(&mut self) {
        if !self.override_draft().is_complete() {
            debug!("Override ignored, department or status missing");
            return;
        }
        let draft = std::mem::take(self.override_draft_mut());
        debug!(
            "Override {} -> {} ({} chars of notes)",
            draft.department,
            draft.status,
            draft.notes.len()
        );
        self.show(messages::OVERRIDE_APPLIED);
    }

    pub fn set_alert_type(&mut self, alert_type: impl Into<String>) {
        self.alert_draft_mut().alert_type = alert_type.into();
    }

    pub fn set_affected_dept(&mut self, affected_dept: impl Into<String>) {
        self.alert_draft_mut().affected_dept = affected_dept.into();
    }

    /// Preset `label` as the alert type and ask for confirmation.
    pub fn request_alert(&mut self, label: impl Into<String>) {
        if self.confirmation_mut().request(ConfirmAction::SendAlert) {
            self.set_alert_type(label);
        } else {
            debug!("Alert request ignored, another confirmation is pending");
        }
    }

    /// Ask for confirmation, keeping whatever alert type was last selected.
    pub fn open_alert_confirmation(&mut self) {
        if !self.confirmation_mut().request(ConfirmAction::SendAlert) {
            debug!("Alert confirmation ignored, another confirmation is pending");
        }
    }

    pub fn confirm_send_alert(&mut self) {
        if self
            .confirmation_mut()
            .resolve(ConfirmAction::SendAlert, Resolution::Applied)
            .is_none()
        {
            debug!("Alert confirmation without a pending request");
            return;
        }
        let draft = std::mem::take(self.alert_draft_mut());
        debug!(
            "Alert '{}' broadcast to '{}'",
            draft.alert_type, draft.affected_dept
        );
        self.show(messages::alert_sent());
    }

    pub fn cancel_send_alert(&mut self) {
        self.confirmation_mut()
            .resolve(ConfirmAction::SendAlert, Resolution::Cancelled);
    }
}
