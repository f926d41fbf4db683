//! Attendance status classification result.

use serde::{Deserialize, Serialize};

/// The attendance status assigned to a single day.
///
/// Some days carry no status at all (furlough periods, punch-free rest
/// days); callers represent that as `Option<AttendanceStatus>` with `None`
/// meaning suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Worked the day within the expected windows.
    Present,
    /// Checked in after the shift's late threshold.
    Late,
    /// Checked out before the shift's early-leave threshold.
    EarlyLeave,
    /// Both late and early-leave triggered.
    LateEarlyLeave,
    /// Covered by an approved leave record, no punch.
    OnLeave,
    /// No punch and no covering leave (or leave of the absence kind).
    Absent,
    /// Checked in but not yet checked out.
    InProgress,
}

impl AttendanceStatus {
    /// Returns true for statuses that count as a worked day.
    pub fn is_worked(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::Present
                | AttendanceStatus::Late
                | AttendanceStatus::EarlyLeave
                | AttendanceStatus::LateEarlyLeave
                | AttendanceStatus::InProgress
        )
    }

    /// Returns true if the status includes a late arrival.
    pub fn is_late(&self) -> bool {
        matches!(self, AttendanceStatus::Late | AttendanceStatus::LateEarlyLeave)
    }

    /// Returns true if the status includes an early departure.
    pub fn is_early_leave(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::EarlyLeave | AttendanceStatus::LateEarlyLeave
        )
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::EarlyLeave => "early_leave",
            AttendanceStatus::LateEarlyLeave => "late_early_leave",
            AttendanceStatus::OnLeave => "on_leave",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::InProgress => "in_progress",
        };
        write!(f, "{}", name)
    }
}
