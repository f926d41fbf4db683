//! Punch model and per-date day-kind overrides.
//!
//! A punch is one day's recorded check-in/check-out pair for a single
//! employee. At most one punch exists per (employee, date).

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::leave::LeaveType;

/// The shift a check-in belongs to.
///
/// Classification is a single shared rule (see
/// [`classify_shift`](crate::calculation::classify_shift)): a check-in inside
/// the configured day window is [`ShiftType::Day`], anything outside is
/// [`ShiftType::Night`]. [`ShiftType::Unknown`] is used when no check-in time
/// and no recorded shift is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Check-in within the day window.
    Day,
    /// Check-in outside the day window (evening through early morning).
    Night,
    /// No usable check-in time and no recorded shift.
    Unknown,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Day => write!(f, "Day"),
            ShiftType::Night => write!(f, "Night"),
            ShiftType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A single day's recorded check-in/check-out for one employee.
///
/// Punches are created and edited by administrative input or bulk import.
/// Either time may be absent: a missing check-out marks a day still in
/// progress, and a day with neither time is evaluated purely from leave data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Punch {
    /// Identifier of the employee this punch belongs to.
    pub employee_id: String,
    /// The calendar date of the punch.
    pub date: NaiveDate,
    /// Check-in time, if recorded.
    pub check_in: Option<NaiveTime>,
    /// Check-out time, if recorded. A check-out clock time earlier than the
    /// check-in is interpreted as crossing midnight.
    pub check_out: Option<NaiveTime>,
    /// Administrative leave override for the day. A day carrying an override
    /// is excluded from work-time categorization.
    #[serde(default)]
    pub leave_type_override: Option<LeaveType>,
    /// Shift recorded for the day, used when the check-in time is absent or
    /// unusable.
    #[serde(default)]
    pub recorded_shift_type: Option<ShiftType>,
    /// Administrative override crediting this many hours directly to the
    /// holiday bucket, bypassing categorization (compensatory/special work).
    #[serde(default)]
    pub special_work_hours: Option<Decimal>,
}

impl Punch {
    /// Returns true if the punch has both a check-in and a check-out.
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Returns true if the punch has at least one recorded time.
    pub fn has_any_time(&self) -> bool {
        self.check_in.is_some() || self.check_out.is_some()
    }
}

/// Whether a manually toggled date counts as a working day or a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// The date is treated as an ordinary working day.
    Weekday,
    /// The date is treated as a holiday.
    Holiday,
}

/// A manual override of whether a calendar date is a working day or a
/// holiday, independent of the holiday calendar.
///
/// When present, the setting takes precedence over calendar-derived holiday
/// status for categorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWorkTypeSetting {
    /// The date the override applies to.
    pub date: NaiveDate,
    /// Whether the date counts as a weekday or a holiday.
    pub kind: DayKind,
}
