use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use tracing::{debug, warn};

use shared_models::{Appointment, AvailabilityError, DayOfWeek, LeaveInterval, WeeklySchedule};

use crate::models::{Slot, SlotConfig, SlotQuery};

/// Pure slot computation over an already-fetched snapshot of schedule,
/// leave and booking data. Performs no I/O of its own, so it is safe to
/// call concurrently for any number of (doctor, date) pairs; the caller is
/// responsible for snapshot consistency, and the write-side uniqueness
/// constraint on (doctor, timestamp) remains the backstop against a booking
/// racing this computation.
pub struct AvailabilityService {
    config: SlotConfig,
}

impl Default for AvailabilityService {
    fn default() -> Self {
        Self::new(SlotConfig::default())
    }
}

impl AvailabilityService {
    pub fn new(config: SlotConfig) -> Self {
        Self { config }
    }

    /// Compute bookable slots for the date named by `query`.
    ///
    /// The only error condition is an unparseable date (or an out-of-range
    /// per-request duration override); malformed schedule entries degrade
    /// to fewer slots instead of failing the call.
    pub fn available_slots(
        &self,
        schedule: &WeeklySchedule,
        leaves: &[LeaveInterval],
        appointments: &[Appointment],
        query: &SlotQuery,
    ) -> Result<Vec<Slot>, AvailabilityError> {
        let date = NaiveDate::parse_from_str(query.date.trim(), "%Y-%m-%d")
            .map_err(|_| AvailabilityError::InvalidDate(query.date.clone()))?;

        let config = match query.duration_minutes {
            Some(minutes) => SlotConfig::new(minutes)?,
            None => self.config,
        };

        Ok(compute_slots(&config, schedule, leaves, appointments, date))
    }

    /// Same computation over an already-parsed date. Infallible: every
    /// degenerate input is a valid empty result.
    pub fn slots_for_date(
        &self,
        schedule: &WeeklySchedule,
        leaves: &[LeaveInterval],
        appointments: &[Appointment],
        date: NaiveDate,
    ) -> Vec<Slot> {
        compute_slots(&self.config, schedule, leaves, appointments, date)
    }
}

fn compute_slots(
    config: &SlotConfig,
    schedule: &WeeklySchedule,
    leaves: &[LeaveInterval],
    appointments: &[Appointment],
    date: NaiveDate,
) -> Vec<Slot> {
    // Leave takes absolute precedence over the schedule.
    if let Some(interval) = leaves.iter().find(|leave| leave.contains(date)) {
        debug!(%date, leave_id = %interval.id, "date falls inside a leave interval");
        return Vec::new();
    }

    let day = DayOfWeek::from_weekday(date.weekday());
    let ranges = schedule.ranges_for(day);
    if ranges.is_empty() {
        debug!(%date, %day, "no working hours configured for this day");
        return Vec::new();
    }

    // Booked times are matched to minute precision; stored timestamps may
    // carry seconds.
    let taken: HashSet<NaiveTime> = appointments
        .iter()
        .filter(|apt| apt.status.blocks_slot() && apt.scheduled_at.date() == date)
        .filter_map(|apt| {
            let time = apt.scheduled_at.time();
            NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
        })
        .collect();

    let step = Duration::minutes(config.slot_minutes());
    let mut slots = Vec::new();

    for raw in ranges {
        match parse_range(raw) {
            Some((start, end)) => push_slots(start, end, step, &mut slots),
            None => warn!(range = raw.as_str(), %day, "skipping malformed schedule range"),
        }
    }

    slots.retain(|slot| !taken.contains(&slot.0));
    slots
}

/// Split a `"HH:MM-HH:MM"` entry into its bounds. `None` for anything
/// malformed: missing separator, or either side failing to parse.
fn parse_range(raw: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (start_raw, end_raw) = raw.split_once('-')?;
    let start = NaiveTime::parse_from_str(start_raw.trim(), "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end_raw.trim(), "%H:%M").ok()?;
    Some((start, end))
}

/// Emit slot marks from `start` every `step`, strictly below `end`. The end
/// bound itself is never a bookable start. Stepping stops on midnight
/// wrap-around so a late range cannot cycle through the next day.
/// Requires a positive step; anything else yields no slots.
fn push_slots(start: NaiveTime, end: NaiveTime, step: Duration, out: &mut Vec<Slot>) {
    if step <= Duration::zero() {
        return;
    }

    let mut current = start;
    while current < end {
        out.push(Slot(current));
        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        current = next;
    }
}
