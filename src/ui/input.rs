//! Keyboard control surface
//!
//! Translates key presses into dashboard intents and focus movement

use crate::ui::dashboard::confirm::ConfirmAction;
use crate::ui::dashboard::intents::Intent;
use crate::ui::dashboard::model::{DoctorStatus, LabStatus};
use crate::ui::dashboard::options::{
    AFFECTED_DEPARTMENTS, ALERT_TYPES, OVERRIDE_DEPARTMENTS, OVERRIDE_STATUSES, QUICK_MESSAGES,
    cycle,
};
use crate::ui::dashboard::state::{AlertRow, DashboardState, OverrideRow, Panel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the UI loop should do after a key press.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Handle one key press on the splash screen. `Continue` means open the dashboard.
pub fn handle_splash_key(key: KeyEvent) -> KeyOutcome {
    if is_interrupt(&key) || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        KeyOutcome::Quit
    } else {
        KeyOutcome::Continue
    }
}

/// Handle one key press on the dashboard screen.
pub fn handle_key(state: &mut DashboardState, key: KeyEvent) -> KeyOutcome {
    if is_interrupt(&key) {
        return KeyOutcome::Quit;
    }

    // The confirmation modal captures all input.
    if let Some(action) = state.pending_confirmation() {
        let confirm = matches!(key.code, KeyCode::Char('y' | 'Y') | KeyCode::Enter);
        let cancel = matches!(key.code, KeyCode::Char('n' | 'N') | KeyCode::Esc);
        let intent = match (action, confirm, cancel) {
            (ConfirmAction::SkipToken, true, _) => Some(Intent::ConfirmSkip),
            (ConfirmAction::SkipToken, _, true) => Some(Intent::CancelSkip),
            (ConfirmAction::SendAlert, true, _) => Some(Intent::ConfirmSendAlert),
            (ConfirmAction::SendAlert, _, true) => Some(Intent::CancelSendAlert),
            _ => None,
        };
        if let Some(intent) = intent {
            state.dispatch(intent);
        }
        return KeyOutcome::Continue;
    }

    if state.focus.is_editing_notes() && handle_notes_key(state, key) {
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Tab => focus_panel(state, state.focus.panel.next()),
        KeyCode::BackTab => focus_panel(state, state.focus.panel.prev()),
        KeyCode::Up => move_row(state, false),
        KeyCode::Down => move_row(state, true),
        _ => handle_panel_key(state, key.code),
    }
    KeyOutcome::Continue
}

/// Keys that edit the notes row. Returns false for keys handled elsewhere.
fn handle_notes_key(state: &mut DashboardState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => {
            let mut notes = state.override_draft().notes.clone();
            notes.push(c);
            state.dispatch(Intent::SetOverrideNotes(notes));
            true
        }
        KeyCode::Backspace => {
            let mut notes = state.override_draft().notes.clone();
            notes.pop();
            state.dispatch(Intent::SetOverrideNotes(notes));
            true
        }
        KeyCode::Enter | KeyCode::Esc => {
            move_row(state, true);
            true
        }
        _ => false,
    }
}

fn focus_panel(state: &mut DashboardState, panel: Panel) {
    state.focus.panel = panel;
    state.focus.row = 0;
}

fn move_row(state: &mut DashboardState, down: bool) {
    let count = state.row_count(state.focus.panel);
    let row = state.focus.row;
    state.focus.row = if down {
        (row + 1).min(count.saturating_sub(1))
    } else {
        row.saturating_sub(1)
    };
}

fn handle_panel_key(state: &mut DashboardState, code: KeyCode) {
    let row = state.focus.row;
    match state.focus.panel {
        Panel::Doctors => {
            let status = match code {
                KeyCode::Char('1') => DoctorStatus::Available,
                KeyCode::Char('2') => DoctorStatus::Busy,
                KeyCode::Char('3') => DoctorStatus::NotAvailable,
                _ => return,
            };
            if let Some(doctor) = state.doctors().get(row) {
                let id = doctor.id;
                state.dispatch(Intent::SetDoctorStatus(id, status));
            }
        }
        Panel::Labs => {
            let status = match code {
                KeyCode::Char('1') => LabStatus::Open,
                KeyCode::Char('2') => LabStatus::Busy,
                KeyCode::Char('3') => LabStatus::Closed,
                _ => return,
            };
            if let Some(lab) = state.labs().get(row) {
                let id = lab.id;
                state.dispatch(Intent::SetLabStatus(id, status));
            }
        }
        Panel::Queue => {
            let active = state.queue().is_active();
            match code {
                // Start and pause are disabled in the state they would re-enter.
                KeyCode::Char('s') if !active => state.dispatch(Intent::StartQueue),
                KeyCode::Char('p') if active => state.dispatch(Intent::PauseQueue),
                KeyCode::Char('k') => state.dispatch(Intent::RequestSkip),
                _ => {}
            }
        }
        Panel::Override => handle_override_key(state, code),
        Panel::Alerts => handle_alert_key(state, code),
    }
}

fn handle_override_key(state: &mut DashboardState, code: KeyCode) {
    let forward = match code {
        KeyCode::Right => true,
        KeyCode::Left => false,
        KeyCode::Enter => {
            if state.focus.override_row() == OverrideRow::Apply {
                state.dispatch(Intent::ApplyOverride);
            } else {
                move_row(state, true);
            }
            return;
        }
        _ => return,
    };
    let draft = state.override_draft();
    match state.focus.override_row() {
        OverrideRow::Department => {
            let value = cycle(OVERRIDE_DEPARTMENTS, &draft.department, forward);
            state.dispatch(Intent::SetOverrideDept(value.to_string()));
        }
        OverrideRow::Status => {
            let value = cycle(OVERRIDE_STATUSES, &draft.status, forward);
            state.dispatch(Intent::SetOverrideStatus(value.to_string()));
        }
        OverrideRow::Notes | OverrideRow::Apply => {}
    }
}

fn handle_alert_key(state: &mut DashboardState, code: KeyCode) {
    let row = state.focus.alert_row();
    let forward = match code {
        KeyCode::Right => true,
        KeyCode::Left => false,
        KeyCode::Enter => {
            match row {
                AlertRow::QuickMessages => {
                    let label = QUICK_MESSAGES[state.focus.quick_message % QUICK_MESSAGES.len()];
                    state.dispatch(Intent::RequestAlert(Some(label.to_string())));
                }
                AlertRow::Send => state.dispatch(Intent::RequestAlert(None)),
                AlertRow::AlertType | AlertRow::AffectedDept => move_row(state, true),
            }
            return;
        }
        _ => return,
    };
    let draft = state.alert_draft();
    match row {
        AlertRow::AlertType => {
            let value = cycle(ALERT_TYPES, &draft.alert_type, forward);
            state.dispatch(Intent::SetAlertType(value.to_string()));
        }
        AlertRow::AffectedDept => {
            let value = cycle(AFFECTED_DEPARTMENTS, &draft.affected_dept, forward);
            state.dispatch(Intent::SetAffectedDept(value.to_string()));
        }
        AlertRow::QuickMessages => {
            let len = QUICK_MESSAGES.len();
            let current = state.focus.quick_message % len;
            state.focus.quick_message = if forward {
                (current + 1) % len
            } else {
                (current + len - 1) % len
            };
        }
        AlertRow::Send => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::model::QueueStatus;
    use crate::ui::dashboard::state::tests::new_state;

    fn press(state: &mut DashboardState, code: KeyCode) -> KeyOutcome {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let (mut state, _rx) = new_state();
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyOutcome::Quit);
        assert_eq!(press(&mut state, KeyCode::Esc), KeyOutcome::Quit);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            KeyOutcome::Quit
        );
    }

    #[test]
    fn test_splash_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_splash_key(ctrl_c), KeyOutcome::Quit);
        assert_eq!(
            handle_splash_key(KeyEvent::from(KeyCode::Esc)),
            KeyOutcome::Quit
        );
        assert_eq!(
            handle_splash_key(KeyEvent::from(KeyCode::Char('c'))),
            KeyOutcome::Continue
        );
        assert_eq!(
            handle_splash_key(KeyEvent::from(KeyCode::Enter)),
            KeyOutcome::Continue
        );
    }

    #[tokio::test]
    async fn test_number_keys_set_selected_doctor() {
        let (mut state, _rx) = new_state();
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.doctors()[1].status, DoctorStatus::NotAvailable);
        assert_eq!(state.doctors()[0].status, DoctorStatus::Available);
    }

    #[tokio::test]
    async fn test_row_selection_is_clamped() {
        let (mut state, _rx) = new_state();
        for _ in 0..10 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.focus.row, 2);
        for _ in 0..10 {
            press(&mut state, KeyCode::Up);
        }
        assert_eq!(state.focus.row, 0);
    }

    #[tokio::test]
    async fn test_lab_keys_after_tabbing() {
        let (mut state, _rx) = new_state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus.panel, Panel::Labs);
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.labs()[0].status, LabStatus::Closed);
    }

    #[tokio::test]
    // Start is disabled while active, pause while paused.
    async fn test_queue_controls_respect_disabled_state() {
        let (mut state, _rx) = new_state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.notification(), None);

        press(&mut state, KeyCode::Char('p'));
        assert_eq!(state.queue().status, QueueStatus::Paused);
        assert_eq!(state.notification(), Some("Queue paused"));

        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.queue().status, QueueStatus::Active);
        assert_eq!(state.notification(), Some("Queue started"));
    }

    #[tokio::test]
    // The modal swallows everything except confirm and cancel.
    async fn test_skip_modal_captures_input() {
        let (mut state, _rx) = new_state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Char('k'));
        assert!(state.skip_pending());

        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyOutcome::Continue);
        assert_eq!(press(&mut state, KeyCode::Esc), KeyOutcome::Continue);
        assert!(!state.skip_pending());
        assert_eq!(state.queue().current_token, 45);

        press(&mut state, KeyCode::Char('k'));
        press(&mut state, KeyCode::Char('y'));
        assert_eq!(state.queue().current_token, 46);
    }

    #[tokio::test]
    async fn test_override_form_by_keyboard() {
        let (mut state, _rx) = new_state();
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus.panel, Panel::Override);

        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.override_draft().department, "opd");
        assert_eq!(state.override_draft().status, "busy");

        press(&mut state, KeyCode::Down);
        type_str(&mut state, "quit soon");
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.override_draft().notes, "quit soo");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus.override_row(), OverrideRow::Apply);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.notification(), Some("Override applied successfully"));
        assert!(state.override_draft().notes.is_empty());
    }

    #[tokio::test]
    async fn test_apply_with_missing_status_stays_silent() {
        let (mut state, _rx) = new_state();
        state.focus.panel = Panel::Override;
        press(&mut state, KeyCode::Right);
        state.focus.row = 3;
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.notification(), None);
        assert_eq!(state.override_draft().department, "opd");
    }

    #[tokio::test]
    async fn test_quick_message_opens_confirmation() {
        let (mut state, _rx) = new_state();
        state.focus.panel = Panel::Alerts;
        state.focus.row = 2;
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        assert!(state.alert_pending());
        assert_eq!(state.alert_draft().alert_type, "Lab Closed");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.notification(), Some("Alert sent to 127 patients"));
        assert!(state.alert_draft().alert_type.is_empty());
    }

    #[tokio::test]
    async fn test_send_row_uses_dropdown_selection() {
        let (mut state, _rx) = new_state();
        state.focus.panel = Panel::Alerts;
        press(&mut state, KeyCode::Left);
        assert_eq!(state.alert_draft().alert_type, "custom");
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.alert_draft().affected_dept, "all");

        state.focus.row = 3;
        press(&mut state, KeyCode::Enter);
        assert!(state.alert_pending());
        press(&mut state, KeyCode::Char('n'));
        assert!(!state.alert_pending());
        assert_eq!(state.alert_draft().alert_type, "custom");
    }
}
