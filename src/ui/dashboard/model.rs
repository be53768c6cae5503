//! Front-desk entities and their seed data

use crate::consts::cli_consts::INITIAL_TOKEN;
use serde::Serialize;

/// Identifies a doctor. Distinct from [`LabId`] so the two id sets never mix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct DoctorId(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct LabId(pub u32);

/// Availability of a doctor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, strum::Display, strum::EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DoctorStatus {
    Available,
    Busy,
    NotAvailable,
}

impl DoctorStatus {
    /// Button label used by the doctor panel.
    pub fn label(&self) -> &'static str {
        match self {
            DoctorStatus::Available => "Available",
            DoctorStatus::Busy => "Busy",
            DoctorStatus::NotAvailable => "Not Avail.",
        }
    }
}

/// Operational status of a lab.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, strum::Display, strum::EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LabStatus {
    Open,
    Busy,
    Closed,
}

impl LabStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LabStatus::Open => "Open",
            LabStatus::Busy => "Busy",
            LabStatus::Closed => "Closed",
        }
    }
}

/// Externally reported health of a lab's instruments.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EquipmentStatus {
    Working,
    Maintenance,
    // Reported by lab systems; the seed data never uses it.
    #[allow(dead_code)]
    OutOfService,
}

impl EquipmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentStatus::Working => "Working",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::OutOfService => "Out of Service",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum QueueStatus {
    Active,
    Paused,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub status: DoctorStatus,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Lab {
    pub id: LabId,
    pub name: String,
    pub status: LabStatus,
    pub equipment: EquipmentStatus,
}

/// OPD token queue.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct QueueState {
    /// Token currently being served. Never decreases within a session.
    pub current_token: u64,
    pub status: QueueStatus,
}

impl QueueState {
    /// Token that will be served after the current one.
    pub fn next_token(&self) -> u64 {
        self.current_token.saturating_add(1)
    }

    pub fn is_active(&self) -> bool {
        self.status == QueueStatus::Active
    }
}

impl Default for QueueState {
    fn default() -> Self {
        Self {
            current_token: INITIAL_TOKEN,
            status: QueueStatus::Active,
        }
    }
}

/// Pending manual override form input. Empty strings mean "not selected".
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct OverrideDraft {
    pub department: String,
    pub status: String,
    pub notes: String,
}

impl OverrideDraft {
    /// Both dropdowns carry a selection.
    pub fn is_complete(&self) -> bool {
        !self.department.is_empty() && !self.status.is_empty()
    }
}

/// Pending patient alert form input. Empty strings mean "not selected".
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct AlertDraft {
    pub alert_type: String,
    pub affected_dept: String,
}

pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: DoctorId(1),
            name: "Dr. Rajesh Kumar".to_string(),
            status: DoctorStatus::Available,
        },
        Doctor {
            id: DoctorId(2),
            name: "Dr. Priya Sharma".to_string(),
            status: DoctorStatus::Busy,
        },
        Doctor {
            id: DoctorId(3),
            name: "Dr. Amit Patel".to_string(),
            status: DoctorStatus::NotAvailable,
        },
    ]
}

pub fn seed_labs() -> Vec<Lab> {
    vec![
        Lab {
            id: LabId(1),
            name: "Blood Test Lab".to_string(),
            status: LabStatus::Open,
            equipment: EquipmentStatus::Working,
        },
        Lab {
            id: LabId(2),
            name: "X-Ray Department".to_string(),
            status: LabStatus::Busy,
            equipment: EquipmentStatus::Maintenance,
        },
        Lab {
            id: LabId(3),
            name: "Ultrasound Lab".to_string(),
            status: LabStatus::Open,
            equipment: EquipmentStatus::Working,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names_are_kebab_case() {
        assert_eq!(DoctorStatus::NotAvailable.to_string(), "not-available");
        assert_eq!(EquipmentStatus::OutOfService.to_string(), "out-of-service");
        assert_eq!(
            serde_json::to_string(&DoctorStatus::NotAvailable).unwrap(),
            "\"not-available\""
        );
        assert_eq!(serde_json::to_string(&QueueStatus::Paused).unwrap(), "\"paused\"");
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let doctors = seed_doctors();
        let labs = seed_labs();
        let mut doctor_ids: Vec<DoctorId> = doctors.iter().map(|d| d.id).collect();
        doctor_ids.dedup();
        assert_eq!(doctor_ids.len(), doctors.len());
        let mut lab_ids: Vec<LabId> = labs.iter().map(|l| l.id).collect();
        lab_ids.dedup();
        assert_eq!(lab_ids.len(), labs.len());
    }

    #[test]
    fn test_queue_defaults() {
        let queue = QueueState::default();
        assert_eq!(queue.current_token, 45);
        assert_eq!(queue.next_token(), 46);
        assert!(queue.is_active());
    }

    #[test]
    fn test_override_draft_requires_both_selections() {
        let mut draft = OverrideDraft::default();
        assert!(!draft.is_complete());
        draft.department = "opd".to_string();
        assert!(!draft.is_complete());
        draft.status = "busy".to_string();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_equipment_labels() {
        assert_eq!(EquipmentStatus::OutOfService.label(), "Out of Service");
        assert_eq!(DoctorStatus::NotAvailable.label(), "Not Avail.");
    }
}
