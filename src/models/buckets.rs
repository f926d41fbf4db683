//! Paid-time buckets.
//!
//! A day's worked time is split into a closed set of mutually exclusive
//! buckets. The set is a closed enum so that adding or removing a bucket
//! kind is a compile-time-checked change: every accumulator and multiplier
//! lookup matches exhaustively.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of a paid-time bucket.
///
/// Combination kinds (overtime+night, holiday+overtime, ...) are distinct
/// buckets rather than overlapping tallies: every worked minute lands in
/// exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    /// Ordinary scheduled minutes on a working day.
    Basic,
    /// Minutes worked before the scheduled start on a working day.
    EarlyStart,
    /// Minutes worked after the scheduled end on a working day.
    Overtime,
    /// Scheduled minutes falling in the deep-night window.
    Night,
    /// Overtime minutes falling in the deep-night window.
    OvertimeNight,
    /// Ordinary scheduled minutes on a holiday.
    Holiday,
    /// Minutes worked before the scheduled start on a holiday.
    HolidayEarlyStart,
    /// Overtime minutes on a holiday.
    HolidayOvertime,
    /// Overtime minutes on a holiday falling in the deep-night window.
    HolidayOvertimeNight,
}

impl BucketKind {
    /// All bucket kinds in declaration order.
    pub const ALL: [BucketKind; 9] = [
        BucketKind::Basic,
        BucketKind::EarlyStart,
        BucketKind::Overtime,
        BucketKind::Night,
        BucketKind::OvertimeNight,
        BucketKind::Holiday,
        BucketKind::HolidayEarlyStart,
        BucketKind::HolidayOvertime,
        BucketKind::HolidayOvertimeNight,
    ];
}

impl std::fmt::Display for BucketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BucketKind::Basic => "basic",
            BucketKind::EarlyStart => "early_start",
            BucketKind::Overtime => "overtime",
            BucketKind::Night => "night",
            BucketKind::OvertimeNight => "overtime_night",
            BucketKind::Holiday => "holiday",
            BucketKind::HolidayEarlyStart => "holiday_early_start",
            BucketKind::HolidayOvertime => "holiday_overtime",
            BucketKind::HolidayOvertimeNight => "holiday_overtime_night",
        };
        write!(f, "{}", name)
    }
}

/// Hour values for every bucket kind, all non-negative.
///
/// The sum of all buckets for a day equals the elapsed check-in to check-out
/// time minus unpaid breaks, to the tolerance of the per-bucket half-hour
/// floor rounding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeBuckets {
    /// Ordinary hours.
    #[serde(default)]
    pub basic: Decimal,
    /// Early-start hours.
    #[serde(default)]
    pub early_start: Decimal,
    /// Overtime hours.
    #[serde(default)]
    pub overtime: Decimal,
    /// Deep-night hours within the ordinary schedule.
    #[serde(default)]
    pub night: Decimal,
    /// Overtime hours in the deep-night window.
    #[serde(default)]
    pub overtime_night: Decimal,
    /// Ordinary hours worked on a holiday.
    #[serde(default)]
    pub holiday: Decimal,
    /// Early-start hours on a holiday.
    #[serde(default)]
    pub holiday_early_start: Decimal,
    /// Overtime hours on a holiday.
    #[serde(default)]
    pub holiday_overtime: Decimal,
    /// Holiday overtime hours in the deep-night window.
    #[serde(default)]
    pub holiday_overtime_night: Decimal,
}

impl WorkTimeBuckets {
    /// Returns an all-zero bucket set.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the hours for one bucket kind.
    pub fn get(&self, kind: BucketKind) -> Decimal {
        match kind {
            BucketKind::Basic => self.basic,
            BucketKind::EarlyStart => self.early_start,
            BucketKind::Overtime => self.overtime,
            BucketKind::Night => self.night,
            BucketKind::OvertimeNight => self.overtime_night,
            BucketKind::Holiday => self.holiday,
            BucketKind::HolidayEarlyStart => self.holiday_early_start,
            BucketKind::HolidayOvertime => self.holiday_overtime,
            BucketKind::HolidayOvertimeNight => self.holiday_overtime_night,
        }
    }

    /// Sets the hours for one bucket kind.
    pub fn set(&mut self, kind: BucketKind, hours: Decimal) {
        match kind {
            BucketKind::Basic => self.basic = hours,
            BucketKind::EarlyStart => self.early_start = hours,
            BucketKind::Overtime => self.overtime = hours,
            BucketKind::Night => self.night = hours,
            BucketKind::OvertimeNight => self.overtime_night = hours,
            BucketKind::Holiday => self.holiday = hours,
            BucketKind::HolidayEarlyStart => self.holiday_early_start = hours,
            BucketKind::HolidayOvertime => self.holiday_overtime = hours,
            BucketKind::HolidayOvertimeNight => self.holiday_overtime_night = hours,
        }
    }

    /// Adds hours to one bucket kind.
    pub fn add(&mut self, kind: BucketKind, hours: Decimal) {
        self.set(kind, self.get(kind) + hours);
    }

    /// Adds every bucket of `other` into `self`.
    pub fn accumulate(&mut self, other: &WorkTimeBuckets) {
        for kind in BucketKind::ALL {
            self.add(kind, other.get(kind));
        }
    }

    /// Returns the sum of all bucket hours.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{BucketKind, WorkTimeBuckets};
    /// use rust_decimal::Decimal;
    ///
    /// let mut buckets = WorkTimeBuckets::zero();
    /// buckets.set(BucketKind::Basic, Decimal::new(80, 1));
    /// buckets.set(BucketKind::Overtime, Decimal::new(10, 1));
    /// assert_eq!(buckets.total_hours(), Decimal::new(90, 1)); // 9.0
    /// ```
    pub fn total_hours(&self) -> Decimal {
        BucketKind::ALL.iter().map(|&kind| self.get(kind)).sum()
    }

    /// Iterates all (kind, hours) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (BucketKind, Decimal)> + '_ {
        BucketKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}
