use std::collections::BTreeMap;
use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Closed weekday vocabulary used as schedule keys.
///
/// Kept locale-neutral internally (constructed from `chrono::Weekday`); the
/// lowercase tokens only appear at the serialization boundary, matching the
/// stored schedule JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recurring weekly working hours, keyed by day.
///
/// Each day maps to an ordered list of `"HH:MM-HH:MM"` range strings; more
/// than one range on a day models a split shift. A missing key (or an empty
/// list) means no working hours that day. Serializes as the plain JSON
/// object the persistence layer stores, e.g.
/// `{"monday": ["09:00-12:00", "14:00-17:00"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: BTreeMap<DayOfWeek, Vec<String>>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Range strings for a day, empty when the day is absent.
    pub fn ranges_for(&self, day: DayOfWeek) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replace a day's ranges. No format validation here; the write path
    /// (`ScheduleService`) validates before calling, the read path
    /// tolerates malformed entries.
    pub fn set_day(&mut self, day: DayOfWeek, ranges: Vec<String>) {
        if ranges.is_empty() {
            self.days.remove(&day);
        } else {
            self.days.insert(day, ranges);
        }
    }

    pub fn clear_day(&mut self, day: DayOfWeek) {
        self.days.remove(&day);
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &[String])> {
        self.days.iter().map(|(day, ranges)| (*day, ranges.as_slice()))
    }
}
