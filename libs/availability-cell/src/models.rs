use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use shared_models::{AvailabilityError, DayOfWeek};

pub const DEFAULT_SLOT_MINUTES: i64 = 30;

/// Engine policy knobs. Slot duration is a per-clinic (eventually
/// per-specialty) decision, so it is configuration rather than a literal.
///
/// `slot_minutes` is only reachable through `new` and deserialization, both
/// of which enforce a positive duration of at most one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SlotConfigWire")]
pub struct SlotConfig {
    slot_minutes: i64,
}

#[derive(Deserialize)]
struct SlotConfigWire {
    slot_minutes: i64,
}

impl SlotConfig {
    pub fn new(slot_minutes: i64) -> Result<Self, AvailabilityError> {
        if slot_minutes <= 0 || slot_minutes > 24 * 60 {
            return Err(AvailabilityError::InvalidSlotDuration(slot_minutes));
        }
        Ok(Self { slot_minutes })
    }

    pub fn slot_minutes(&self) -> i64 {
        self.slot_minutes
    }
}

impl TryFrom<SlotConfigWire> for SlotConfig {
    type Error = AvailabilityError;

    fn try_from(wire: SlotConfigWire) -> Result<Self, Self::Error> {
        Self::new(wire.slot_minutes)
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

/// A bookable start time-of-day for one specific date. Derived on every
/// request, never persisted; serialized as the `"HH:MM"` string the HTTP
/// layer returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(pub NaiveTime);

impl Slot {
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .map(Slot)
            .map_err(serde::de::Error::custom)
    }
}

/// Query parameters for the slot computation, as received from the HTTP
/// layer. The date arrives as a raw string so that an unparseable value can
/// be rejected as an invalid argument rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotQuery {
    pub date: String,
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    pub day: DayOfWeek,
    pub ranges: Vec<String>,
}
