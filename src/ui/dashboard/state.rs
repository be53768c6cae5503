//! Dashboard state management
//!
//! Contains the main dashboard state struct and the keyboard focus model

use super::confirm::{ConfirmAction, Confirmation};
use super::model::{
    AlertDraft, Doctor, Lab, OverrideDraft, QueueState, seed_doctors, seed_labs,
};
use super::notification::NotificationSlot;
use crate::clock::{self, ClockTicker};
use crate::consts::cli_consts::timing;
use crate::events::DashboardEvent;
use crate::locale::Locale;
use crate::ui::app::UIConfig;

use log::info;
use serde::Serialize;
use tokio::sync::mpsc;

/// Dashboard panels that can hold keyboard focus, in tab order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Panel {
    Doctors,
    Queue,
    Labs,
    Override,
    Alerts,
}

impl Panel {
    const ORDER: [Panel; 5] = [
        Panel::Doctors,
        Panel::Queue,
        Panel::Labs,
        Panel::Override,
        Panel::Alerts,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Rows of the manual override form.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OverrideRow {
    Department,
    Status,
    Notes,
    Apply,
}

/// Rows of the patient alert form.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlertRow {
    AlertType,
    AffectedDept,
    QuickMessages,
    Send,
}

/// Where keyboard input currently lands.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Focus {
    pub panel: Panel,
    /// Selected row inside the focused panel.
    pub row: usize,
    /// Selected entry on the quick message row.
    pub quick_message: usize,
}

impl Default for Focus {
    fn default() -> Self {
        Self {
            panel: Panel::Doctors,
            row: 0,
            quick_message: 0,
        }
    }
}

impl Focus {
    pub fn override_row(&self) -> OverrideRow {
        match self.row {
            0 => OverrideRow::Department,
            1 => OverrideRow::Status,
            2 => OverrideRow::Notes,
            _ => OverrideRow::Apply,
        }
    }

    pub fn alert_row(&self) -> AlertRow {
        match self.row {
            0 => AlertRow::AlertType,
            1 => AlertRow::AffectedDept,
            2 => AlertRow::QuickMessages,
            _ => AlertRow::Send,
        }
    }

    /// Whether typed characters go into the notes field.
    pub fn is_editing_notes(&self) -> bool {
        self.panel == Panel::Override && self.override_row() == OverrideRow::Notes
    }
}

/// The view model: every piece of state the dashboard renders.
#[derive(Debug)]
pub struct DashboardState {
    /// Display locale for the clock label.
    pub locale: Locale,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Latest formatted clock label.
    pub clock_label: String,
    /// Viewer's time zone name, if known.
    pub timezone: Option<String>,
    /// Keyboard focus.
    pub focus: Focus,

    doctors: Vec<Doctor>,
    labs: Vec<Lab>,
    queue: QueueState,
    override_draft: OverrideDraft,
    alert_draft: AlertDraft,
    confirmation: Confirmation,
    notification: NotificationSlot,
    /// Sender handed to timer tasks.
    events: mpsc::Sender<DashboardEvent>,
    /// Running while the dashboard is mounted.
    clock: Option<ClockTicker>,
}

/// Serializable copy of the output state.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub locale: String,
    pub clock: String,
    pub doctors: Vec<Doctor>,
    pub labs: Vec<Lab>,
    pub queue: QueueState,
    pub notification: Option<String>,
    pub pending_confirmation: Option<ConfirmAction>,
    pub skip_pending: bool,
    pub alert_pending: bool,
    pub override_draft: OverrideDraft,
    pub alert_draft: AlertDraft,
}

impl DashboardState {
    /// Creates a freshly seeded dashboard. Timer events are posted to `events`.
    pub fn new(ui_config: UIConfig, events: mpsc::Sender<DashboardEvent>) -> Self {
        Self {
            locale: ui_config.locale,
            with_background_color: ui_config.with_background_color,
            clock_label: clock::current_label(ui_config.locale),
            timezone: clock::local_timezone(),
            focus: Focus::default(),
            doctors: seed_doctors(),
            labs: seed_labs(),
            queue: QueueState::default(),
            override_draft: OverrideDraft::default(),
            alert_draft: AlertDraft::default(),
            confirmation: Confirmation::default(),
            notification: NotificationSlot::new(timing::notification_ttl(), events.clone()),
            events,
            clock: None,
        }
    }

    /// Starts the clock ticker. Calling it while mounted does nothing.
    pub fn mount(&mut self) {
        if self.clock.is_none() {
            info!("Dashboard mounted (locale {})", self.locale);
            self.clock = Some(ClockTicker::start(
                self.locale,
                timing::clock_tick(),
                self.events.clone(),
            ));
        }
    }

    /// Stops the clock ticker.
    pub fn unmount(&mut self) {
        if let Some(clock) = self.clock.take() {
            clock.stop();
            info!("Dashboard unmounted");
        }
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.clock.as_ref().is_some_and(|c| c.is_running())
    }

    // Getter methods for private fields
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    pub fn queue(&self) -> &QueueState {
        &self.queue
    }

    pub fn override_draft(&self) -> &OverrideDraft {
        &self.override_draft
    }

    pub fn alert_draft(&self) -> &AlertDraft {
        &self.alert_draft
    }

    pub fn pending_confirmation(&self) -> Option<ConfirmAction> {
        self.confirmation.pending()
    }

    pub fn skip_pending(&self) -> bool {
        self.confirmation.is_pending(ConfirmAction::SkipToken)
    }

    pub fn alert_pending(&self) -> bool {
        self.confirmation.is_pending(ConfirmAction::SendAlert)
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.message()
    }

    // Mutable access for updaters
    pub(super) fn doctors_mut(&mut self) -> &mut Vec<Doctor> {
        &mut self.doctors
    }

    pub(super) fn labs_mut(&mut self) -> &mut Vec<Lab> {
        &mut self.labs
    }

    pub(super) fn queue_mut(&mut self) -> &mut QueueState {
        &mut self.queue
    }

    pub(super) fn override_draft_mut(&mut self) -> &mut OverrideDraft {
        &mut self.override_draft
    }

    pub(super) fn alert_draft_mut(&mut self) -> &mut AlertDraft {
        &mut self.alert_draft
    }

    pub(super) fn confirmation_mut(&mut self) -> &mut Confirmation {
        &mut self.confirmation
    }

    pub(super) fn notification_mut(&mut self) -> &mut NotificationSlot {
        &mut self.notification
    }

    /// Number of selectable rows in the focused panel.
    pub fn row_count(&self, panel: Panel) -> usize {
        match panel {
            Panel::Doctors => self.doctors.len(),
            Panel::Labs => self.labs.len(),
            Panel::Queue => 1,
            Panel::Override | Panel::Alerts => 4,
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            locale: self.locale.to_string(),
            clock: self.clock_label.clone(),
            doctors: self.doctors.clone(),
            labs: self.labs.clone(),
            queue: self.queue,
            notification: self.notification().map(str::to_string),
            pending_confirmation: self.pending_confirmation(),
            skip_pending: self.skip_pending(),
            alert_pending: self.alert_pending(),
            override_draft: self.override_draft.clone(),
            alert_draft: self.alert_draft.clone(),
        }
    }
}

impl Drop for DashboardState {
    fn drop(&mut self) {
        self.unmount();
    }
}
