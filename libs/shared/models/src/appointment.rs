use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Appointment record as fetched for slot computation.
///
/// `scheduled_at` is local clinic time; the source data model stores no
/// timezone on appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Appointment lifecycle status. Wire tokens are the French vocabulary of
/// the stored records; accent-less spellings are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[serde(rename = "en_attente")]
    Pending,
    #[serde(rename = "confirmé", alias = "confirme")]
    Confirmed,
    #[serde(rename = "terminé", alias = "termine")]
    Completed,
    #[serde(rename = "annulé", alias = "annule")]
    Cancelled,
    #[serde(rename = "no_show")]
    NoShow,
}

impl AppointmentStatus {
    /// Whether an appointment with this status occupies its slot.
    /// Cancelled and no-show bookings never block.
    pub fn blocks_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled | AppointmentStatus::NoShow)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "en_attente"),
            AppointmentStatus::Confirmed => write!(f, "confirmé"),
            AppointmentStatus::Completed => write!(f, "terminé"),
            AppointmentStatus::Cancelled => write!(f, "annulé"),
            AppointmentStatus::NoShow => write!(f, "no_show"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_statuses_block_their_slot() {
        assert!(AppointmentStatus::Pending.blocks_slot());
        assert!(AppointmentStatus::Confirmed.blocks_slot());
        assert!(AppointmentStatus::Completed.blocks_slot());
        assert!(!AppointmentStatus::Cancelled.blocks_slot());
        assert!(!AppointmentStatus::NoShow.blocks_slot());
    }

    #[test]
    fn status_round_trips_through_french_wire_tokens() {
        let status: AppointmentStatus = serde_json::from_str("\"annulé\"").unwrap();
        assert_eq!(status, AppointmentStatus::Cancelled);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"annulé\"");

        let alias: AppointmentStatus = serde_json::from_str("\"annule\"").unwrap();
        assert_eq!(alias, AppointmentStatus::Cancelled);
    }
}
