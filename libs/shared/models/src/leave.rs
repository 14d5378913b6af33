use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full-day unavailability (vacation, sick day, conference).
///
/// Inclusive on both bounds and overrides the weekly schedule entirely.
/// Lifecycle is independent of schedule entries; creating one does not
/// cancel bookings already made inside the interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveInterval {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LeaveInterval {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}
