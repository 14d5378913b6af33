use chrono::{NaiveTime, Utc};
use tracing::debug;
use uuid::Uuid;

use shared_models::{
    AvailabilityError, CreateLeaveRequest, DayOfWeek, LeaveInterval, WeeklySchedule,
};

use crate::models::UpdateScheduleRequest;

/// Write-side operations on a doctor's schedule and leave data. Unlike the
/// read path, which tolerates malformed entries, writes are validated
/// strictly so bad ranges never enter the stored schedule in the first
/// place.
pub struct ScheduleService;

impl ScheduleService {
    /// Replace one day's working hours. Every range must be a well-formed
    /// `"HH:MM-HH:MM"` with start strictly before end; on any failure the
    /// schedule is left untouched. An empty list clears the day.
    pub fn set_working_hours(
        schedule: &mut WeeklySchedule,
        request: UpdateScheduleRequest,
    ) -> Result<(), AvailabilityError> {
        for range in &request.ranges {
            Self::validate_range(range)?;
        }

        debug!(day = %request.day, ranges = request.ranges.len(), "updating working hours");
        schedule.set_day(request.day, request.ranges);
        Ok(())
    }

    pub fn clear_working_hours(schedule: &mut WeeklySchedule, day: DayOfWeek) {
        schedule.clear_day(day);
    }

    /// Register a leave interval. Rejects an inverted date range and a
    /// request whose span is already covered by an existing interval. Does
    /// not touch bookings already made inside the span.
    pub fn add_leave(
        leaves: &mut Vec<LeaveInterval>,
        doctor_id: Uuid,
        request: CreateLeaveRequest,
    ) -> Result<LeaveInterval, AvailabilityError> {
        if request.start_date > request.end_date {
            return Err(AvailabilityError::Validation(format!(
                "Leave start date {} is after end date {}",
                request.start_date, request.end_date
            )));
        }

        let already_covered = leaves.iter().any(|leave| {
            leave.contains(request.start_date) && leave.contains(request.end_date)
        });
        if already_covered {
            return Err(AvailabilityError::Validation(
                "Leave already registered for this period".to_string(),
            ));
        }

        let interval = LeaveInterval {
            id: Uuid::new_v4(),
            doctor_id,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason,
            created_at: Utc::now(),
        };

        debug!(leave_id = %interval.id, %doctor_id, "leave interval created");
        leaves.push(interval.clone());
        Ok(interval)
    }

    pub fn cancel_leave(
        leaves: &mut Vec<LeaveInterval>,
        leave_id: Uuid,
    ) -> Result<(), AvailabilityError> {
        let before = leaves.len();
        leaves.retain(|leave| leave.id != leave_id);

        if leaves.len() == before {
            return Err(AvailabilityError::NotFound(format!(
                "Leave interval {leave_id}"
            )));
        }
        Ok(())
    }

    fn validate_range(raw: &str) -> Result<(), AvailabilityError> {
        let (start_raw, end_raw) = raw.split_once('-').ok_or_else(|| {
            AvailabilityError::Validation(format!("Time range '{raw}' is missing the '-' separator"))
        })?;

        let start = NaiveTime::parse_from_str(start_raw.trim(), "%H:%M").map_err(|_| {
            AvailabilityError::Validation(format!("Invalid start time in range '{raw}'"))
        })?;
        let end = NaiveTime::parse_from_str(end_raw.trim(), "%H:%M").map_err(|_| {
            AvailabilityError::Validation(format!("Invalid end time in range '{raw}'"))
        })?;

        if start >= end {
            return Err(AvailabilityError::Validation(format!(
                "Start time must be before end time in range '{raw}'"
            )));
        }
        Ok(())
    }
}
