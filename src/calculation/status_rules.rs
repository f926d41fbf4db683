//! Attendance-status analysis.
//!
//! A day's status is decided by a fixed, ordered rule list: the first rule
//! that matches wins, so the priority chain is visible as data rather than
//! buried in nested conditionals. Rules may also suppress the day entirely
//! (furlough periods, punch-free rest days), which callers see as `None`.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::EngineConfig;
use crate::models::{AttendanceStatus, LeaveRecord, LeaveType, Punch, ShiftType};

use super::shift::clock_minutes;

/// Everything a status rule may consult about one day.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    /// The day's punch, if one exists.
    pub punch: Option<&'a Punch>,
    /// The calendar date under evaluation.
    pub date: NaiveDate,
    /// The shift the day is evaluated against.
    pub shift: ShiftType,
    /// Whether the date resolved as a holiday.
    pub is_holiday: bool,
    /// The employee's leave records; the rules filter for approved records
    /// covering the date.
    pub leaves: &'a [LeaveRecord],
    /// Engine configuration (shift schedules and thresholds).
    pub config: &'a EngineConfig,
}

impl<'a> DayContext<'a> {
    /// Leave types effective for this day: approved records covering the
    /// date, plus the punch's administrative leave override.
    fn effective_leave_types(&self) -> impl Iterator<Item = LeaveType> + '_ {
        self.leaves
            .iter()
            .filter(|leave| leave.effective_on(self.date))
            .map(|leave| leave.leave_type)
            .chain(self.punch.and_then(|punch| punch.leave_type_override))
    }

    fn has_leave(&self, predicate: impl Fn(LeaveType) -> bool) -> bool {
        self.effective_leave_types().any(predicate)
    }

    fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// What a matching rule decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The day gets this status.
    Status(AttendanceStatus),
    /// The day carries no status at all.
    Suppressed,
}

/// One entry in the ordered rule list.
pub struct StatusRule {
    /// Name of the rule, for tracing and tests.
    pub name: &'static str,
    /// Returns `None` when the rule does not apply to the day.
    pub apply: fn(&DayContext<'_>) -> Option<RuleOutcome>,
}

fn furlough(ctx: &DayContext<'_>) -> Option<RuleOutcome> {
    if ctx.has_leave(|leave| leave == LeaveType::Furlough) {
        Some(RuleOutcome::Suppressed)
    } else {
        None
    }
}

fn rest_day(ctx: &DayContext<'_>) -> Option<RuleOutcome> {
    if !ctx.is_weekend() && !ctx.is_holiday {
        return None;
    }
    let checked_in = ctx.punch.is_some_and(|punch| punch.check_in.is_some());
    if checked_in {
        Some(RuleOutcome::Status(AttendanceStatus::Present))
    } else {
        // a punch-free rest day is neither worked nor absent
        Some(RuleOutcome::Suppressed)
    }
}

fn presence_override(ctx: &DayContext<'_>) -> Option<RuleOutcome> {
    let punched = ctx.punch.is_some_and(|punch| punch.has_any_time());
    if punched && ctx.has_leave(|leave| leave.is_presence_override()) {
        Some(RuleOutcome::Status(AttendanceStatus::Present))
    } else {
        None
    }
}

fn in_progress(ctx: &DayContext<'_>) -> Option<RuleOutcome> {
    let punch = ctx.punch?;
    if punch.check_in.is_some() && punch.check_out.is_none() {
        Some(RuleOutcome::Status(AttendanceStatus::InProgress))
    } else {
        None
    }
}

/// Late/early evaluation for a complete punch.
///
/// Thresholds are plain same-day clock comparisons: a check-in is late when
/// it falls strictly inside the `(scheduled_start, late_until]` interval, and
/// a check-out is early when strictly before `early_leave_before`. A schedule
/// whose late cutoff precedes its start (the night schedule) therefore yields
/// no late flags. An approved half-day-morning leave suppresses the late
/// flag only, never the early-leave flag.
fn late_early(ctx: &DayContext<'_>) -> Option<RuleOutcome> {
    let punch = ctx.punch?;
    let (check_in, check_out) = (punch.check_in?, punch.check_out?);

    let schedule = ctx.config.schedule_for(ctx.shift);
    let in_minutes = clock_minutes(check_in);
    let out_minutes = clock_minutes(check_out);

    let mut late = in_minutes > clock_minutes(schedule.scheduled_start)
        && in_minutes <= clock_minutes(schedule.late_until);
    if late && ctx.has_leave(|leave| leave == LeaveType::HalfDayMorning) {
        late = false;
    }
    let early = out_minutes < clock_minutes(schedule.early_leave_before);

    let status = match (late, early) {
        (true, true) => AttendanceStatus::LateEarlyLeave,
        (true, false) => AttendanceStatus::Late,
        (false, true) => AttendanceStatus::EarlyLeave,
        (false, false) => AttendanceStatus::Present,
    };
    Some(RuleOutcome::Status(status))
}

fn punched_without_check_in(ctx: &DayContext<'_>) -> Option<RuleOutcome> {
    let punch = ctx.punch?;
    if punch.check_in.is_none() && punch.check_out.is_some() {
        Some(RuleOutcome::Status(AttendanceStatus::Present))
    } else {
        None
    }
}

fn leave_fallback(ctx: &DayContext<'_>) -> Option<RuleOutcome> {
    if ctx.punch.is_some_and(|punch| punch.has_any_time()) {
        return None;
    }
    if ctx.has_leave(|leave| leave.is_half_day()) {
        return Some(RuleOutcome::Status(AttendanceStatus::OnLeave));
    }
    let mut any_leave = false;
    for leave_type in ctx.effective_leave_types() {
        if leave_type.counts_as_absence() {
            return Some(RuleOutcome::Status(AttendanceStatus::Absent));
        }
        any_leave = true;
    }
    if any_leave {
        Some(RuleOutcome::Status(AttendanceStatus::OnLeave))
    } else {
        None
    }
}

fn absent_default(_ctx: &DayContext<'_>) -> Option<RuleOutcome> {
    Some(RuleOutcome::Status(AttendanceStatus::Absent))
}

/// The ordered rule list; earlier rules take priority.
pub const STATUS_RULES: &[StatusRule] = &[
    StatusRule { name: "furlough", apply: furlough },
    StatusRule { name: "rest_day", apply: rest_day },
    StatusRule { name: "presence_override", apply: presence_override },
    StatusRule { name: "in_progress", apply: in_progress },
    StatusRule { name: "late_early", apply: late_early },
    StatusRule { name: "check_out_only", apply: punched_without_check_in },
    StatusRule { name: "leave_fallback", apply: leave_fallback },
    StatusRule { name: "absent_default", apply: absent_default },
];

/// Classifies one day's attendance status.
///
/// Returns `None` when the day carries no status (furlough periods and
/// punch-free rest days).
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{analyze_status, DayContext};
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{AttendanceStatus, ShiftType};
/// use chrono::NaiveDate;
///
/// let config = EngineConfig::default();
/// let ctx = DayContext {
///     punch: None,
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(), // a Wednesday
///     shift: ShiftType::Day,
///     is_holiday: false,
///     leaves: &[],
///     config: &config,
/// };
/// assert_eq!(analyze_status(&ctx), Some(AttendanceStatus::Absent));
/// ```
pub fn analyze_status(ctx: &DayContext<'_>) -> Option<AttendanceStatus> {
    for rule in STATUS_RULES {
        if let Some(outcome) = (rule.apply)(ctx) {
            return match outcome {
                RuleOutcome::Status(status) => Some(status),
                RuleOutcome::Suppressed => None,
            };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::parse_clock;
    use crate::models::LeaveStatus;
    use chrono::NaiveTime;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> Option<NaiveTime> {
        parse_clock(s)
    }

    fn make_punch(check_in: Option<NaiveTime>, check_out: Option<NaiveTime>) -> Punch {
        Punch {
            employee_id: "emp_001".to_string(),
            date: make_date("2026-01-14"),
            check_in,
            check_out,
            leave_type_override: None,
            recorded_shift_type: None,
            special_work_hours: None,
        }
    }

    fn make_leave(leave_type: LeaveType, status: LeaveStatus) -> LeaveRecord {
        LeaveRecord {
            employee_id: "emp_001".to_string(),
            leave_type,
            start_date: make_date("2026-01-01"),
            end_date: make_date("2026-01-31"),
            status,
        }
    }

    fn analyze(
        punch: Option<&Punch>,
        date: &str,
        shift: ShiftType,
        is_holiday: bool,
        leaves: &[LeaveRecord],
    ) -> Option<AttendanceStatus> {
        let config = EngineConfig::default();
        analyze_status(&DayContext {
            punch,
            date: make_date(date),
            shift,
            is_holiday,
            leaves,
            config: &config,
        })
    }

    // 2026-01-14 is a Wednesday; 2026-01-17/18 are Saturday/Sunday.

    // ==========================================================================
    // AS-001..004: day-shift late boundary
    // ==========================================================================
    #[test]
    fn test_as_001_check_in_0830_is_not_late() {
        let punch = make_punch(t("08:30"), t("17:30"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::Present)
        );
    }

    #[test]
    fn test_as_002_check_in_0831_is_late() {
        let punch = make_punch(t("08:31"), t("17:30"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::Late)
        );
    }

    #[test]
    fn test_as_003_check_in_1500_is_late() {
        let punch = make_punch(t("15:00"), t("17:30"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::Late)
        );
    }

    #[test]
    fn test_as_004_check_in_1501_is_outside_late_window() {
        let punch = make_punch(t("15:01"), t("17:30"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::Present)
        );
    }

    // ==========================================================================
    // AS-005..006: day-shift early leave
    // ==========================================================================
    #[test]
    fn test_as_005_check_out_1719_is_early_leave() {
        let punch = make_punch(t("08:30"), t("17:19"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::EarlyLeave)
        );
    }

    #[test]
    fn test_as_006_check_out_1720_is_not_early_leave() {
        let punch = make_punch(t("08:30"), t("17:20"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::Present)
        );
    }

    #[test]
    fn test_late_and_early_combine() {
        let punch = make_punch(t("09:00"), t("16:00"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::LateEarlyLeave)
        );
    }

    // ==========================================================================
    // AS-007: night-shift evaluation
    // ==========================================================================
    #[test]
    fn test_as_007_night_check_in_2300_is_not_late() {
        let punch = make_punch(t("23:00"), t("07:30"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Night, false, &[]),
            Some(AttendanceStatus::Present)
        );
    }

    #[test]
    fn test_night_check_out_before_0350_is_early_leave() {
        let punch = make_punch(t("23:00"), t("03:20"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Night, false, &[]),
            Some(AttendanceStatus::EarlyLeave)
        );
    }

    #[test]
    fn test_night_check_out_0350_is_not_early_leave() {
        let punch = make_punch(t("23:00"), t("03:50"));
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Night, false, &[]),
            Some(AttendanceStatus::Present)
        );
    }

    // ==========================================================================
    // Half-day-morning carve-out: suppresses late only, never early-leave
    // ==========================================================================
    #[test]
    fn test_half_day_morning_suppresses_late() {
        let punch = make_punch(t("10:00"), t("17:30"));
        let leaves = [make_leave(LeaveType::HalfDayMorning, LeaveStatus::Approved)];
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &leaves),
            Some(AttendanceStatus::Present)
        );
    }

    #[test]
    fn test_half_day_morning_does_not_suppress_early_leave() {
        let punch = make_punch(t("10:00"), t("16:00"));
        let leaves = [make_leave(LeaveType::HalfDayMorning, LeaveStatus::Approved)];
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &leaves),
            Some(AttendanceStatus::EarlyLeave)
        );
    }

    #[test]
    fn test_pending_half_day_morning_does_not_suppress_late() {
        let punch = make_punch(t("10:00"), t("17:30"));
        let leaves = [make_leave(LeaveType::HalfDayMorning, LeaveStatus::Pending)];
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &leaves),
            Some(AttendanceStatus::Late)
        );
    }

    // ==========================================================================
    // Rest days, furlough, in-progress
    // ==========================================================================
    #[test]
    fn test_weekend_with_check_in_is_present() {
        let punch = make_punch(t("11:00"), None);
        assert_eq!(
            analyze(Some(&punch), "2026-01-17", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::Present)
        );
    }

    #[test]
    fn test_weekend_without_punch_is_suppressed() {
        assert_eq!(
            analyze(None, "2026-01-18", ShiftType::Day, false, &[]),
            None
        );
    }

    #[test]
    fn test_holiday_without_punch_is_suppressed_not_absent() {
        assert_eq!(
            analyze(None, "2026-01-14", ShiftType::Day, true, &[]),
            None
        );
    }

    #[test]
    fn test_furlough_suppresses_even_with_punch() {
        let punch = make_punch(t("09:00"), t("18:00"));
        let leaves = [make_leave(LeaveType::Furlough, LeaveStatus::Approved)];
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &leaves),
            None
        );
    }

    #[test]
    fn test_check_in_without_check_out_is_in_progress() {
        let punch = make_punch(t("08:30"), None);
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::InProgress)
        );
    }

    #[test]
    fn test_outing_with_punch_is_present_despite_late_check_in() {
        let punch = make_punch(t("10:00"), t("17:30"));
        let leaves = [make_leave(LeaveType::Outing, LeaveStatus::Approved)];
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &leaves),
            Some(AttendanceStatus::Present)
        );
    }

    // ==========================================================================
    // Punch-free days: leave fallback and default absence
    // ==========================================================================
    #[test]
    fn test_no_punch_half_day_leave_is_on_leave() {
        let leaves = [make_leave(LeaveType::HalfDayAfternoon, LeaveStatus::Approved)];
        assert_eq!(
            analyze(None, "2026-01-14", ShiftType::Day, false, &leaves),
            Some(AttendanceStatus::OnLeave)
        );
    }

    #[test]
    fn test_no_punch_annual_leave_is_on_leave() {
        let leaves = [make_leave(LeaveType::Annual, LeaveStatus::Approved)];
        assert_eq!(
            analyze(None, "2026-01-14", ShiftType::Day, false, &leaves),
            Some(AttendanceStatus::OnLeave)
        );
    }

    #[test]
    fn test_no_punch_absence_leave_is_absent() {
        let leaves = [make_leave(LeaveType::Absence, LeaveStatus::Approved)];
        assert_eq!(
            analyze(None, "2026-01-14", ShiftType::Day, false, &leaves),
            Some(AttendanceStatus::Absent)
        );
    }

    #[test]
    fn test_no_punch_no_leave_is_absent() {
        assert_eq!(
            analyze(None, "2026-01-14", ShiftType::Day, false, &[]),
            Some(AttendanceStatus::Absent)
        );
    }

    #[test]
    fn test_rejected_leave_is_ignored() {
        let leaves = [make_leave(LeaveType::Annual, LeaveStatus::Rejected)];
        assert_eq!(
            analyze(None, "2026-01-14", ShiftType::Day, false, &leaves),
            Some(AttendanceStatus::Absent)
        );
    }

    #[test]
    fn test_punch_data_takes_precedence_over_leave() {
        // a complete punch is evaluated normally even when an annual leave
        // overlaps the day
        let punch = make_punch(t("09:00"), t("17:30"));
        let leaves = [make_leave(LeaveType::Annual, LeaveStatus::Approved)];
        assert_eq!(
            analyze(Some(&punch), "2026-01-14", ShiftType::Day, false, &leaves),
            Some(AttendanceStatus::Late)
        );
    }

    #[test]
    fn test_rule_order_is_stable() {
        let names: Vec<&str> = STATUS_RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            vec![
                "furlough",
                "rest_day",
                "presence_override",
                "in_progress",
                "late_early",
                "check_out_only",
                "leave_fallback",
                "absent_default",
            ]
        );
    }
}
