//! Leave record model and related types.
//!
//! Leave records participate in attendance-status decisions only when
//! approved; pending and rejected records are ignored by the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of a leave record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Annual (paid) leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Official/excused leave.
    Official,
    /// Half-day leave covering the morning.
    HalfDayMorning,
    /// Half-day leave covering the afternoon.
    HalfDayAfternoon,
    /// Outing during working hours; the day still counts as present.
    Outing,
    /// Approved early departure; the day still counts as present.
    EarlyLeave,
    /// Furlough; attendance status is suppressed entirely for the period.
    Furlough,
    /// Recorded absence; counts toward the absence total.
    Absence,
}

impl LeaveType {
    /// Returns true for the half-day leave kinds.
    pub fn is_half_day(&self) -> bool {
        matches!(self, LeaveType::HalfDayMorning | LeaveType::HalfDayAfternoon)
    }

    /// Returns true if a day on this leave still counts as present when a
    /// punch exists (outing / approved early departure).
    pub fn is_presence_override(&self) -> bool {
        matches!(self, LeaveType::Outing | LeaveType::EarlyLeave)
    }

    /// Returns true if a punch-free day on this leave counts as an absence
    /// rather than on-leave.
    pub fn counts_as_absence(&self) -> bool {
        matches!(self, LeaveType::Absence)
    }
}

/// Approval status of a leave record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting review; not yet effective.
    Pending,
    /// Approved; effective for status and categorization decisions.
    Approved,
    /// Rejected; never effective.
    Rejected,
}

/// A leave record for one employee over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Identifier of the employee the record belongs to.
    pub employee_id: String,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval status. Only approved records are consulted by the engine.
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Checks whether a given date falls within this leave, inclusive of
    /// both endpoints.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{LeaveRecord, LeaveStatus, LeaveType};
    /// use chrono::NaiveDate;
    ///
    /// let leave = LeaveRecord {
    ///     employee_id: "emp_001".to_string(),
    ///     leave_type: LeaveType::Annual,
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     status: LeaveStatus::Approved,
    /// };
    ///
    /// assert!(leave.covers(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()));
    /// assert!(leave.covers(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
    /// assert!(!leave.covers(NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()));
    /// ```
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if this record is approved and covers the given date.
    pub fn effective_on(&self, date: NaiveDate) -> bool {
        self.status == LeaveStatus::Approved && self.covers(date)
    }
}
