//! Shift classification.
//!
//! A check-in inside the configured day window belongs to the day shift;
//! anything outside is the night shift. This single rule is shared by the
//! categorizer, the status analyzer, and any display layer, so holiday and
//! shift judgments never drift between call sites.

use chrono::{NaiveTime, Timelike};

use crate::config::ShiftConfig;
use crate::models::{Employee, Punch, ShiftType};

/// Converts a clock time to minutes from local midnight (0..=1439).
pub fn clock_minutes(time: NaiveTime) -> i32 {
    (time.num_seconds_from_midnight() / 60) as i32
}

/// Parses a lenient `HH:MM` or `HH:MM:SS` clock string.
///
/// Malformed input (non-numeric parts, out-of-range values) yields `None`
/// rather than an error; callers fall back to a recorded shift type.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_clock;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
/// assert_eq!(parse_clock("08:30:15"), NaiveTime::from_hms_opt(8, 30, 15));
/// assert_eq!(parse_clock("8:5"), NaiveTime::from_hms_opt(8, 5, 0));
/// assert_eq!(parse_clock("25:00"), None);
/// assert_eq!(parse_clock("soon"), None);
/// ```
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    let mut parts = value.trim().splitn(3, ':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    let seconds: u32 = match parts.next() {
        Some(part) => part.trim().parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hours, minutes, seconds)
}

/// Classifies a check-in time into a shift.
///
/// If `check_in` is absent the previously recorded shift type on the punch
/// is used; with neither available the result is [`ShiftType::Unknown`].
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{classify_shift, parse_clock};
/// use attendance_engine::config::ShiftConfig;
/// use attendance_engine::models::ShiftType;
///
/// let config = ShiftConfig::default();
/// assert_eq!(classify_shift(parse_clock("04:00"), None, &config), ShiftType::Day);
/// assert_eq!(classify_shift(parse_clock("03:59"), None, &config), ShiftType::Night);
/// assert_eq!(classify_shift(None, Some(ShiftType::Night), &config), ShiftType::Night);
/// assert_eq!(classify_shift(None, None, &config), ShiftType::Unknown);
/// ```
pub fn classify_shift(
    check_in: Option<NaiveTime>,
    recorded: Option<ShiftType>,
    config: &ShiftConfig,
) -> ShiftType {
    match check_in {
        Some(time) => {
            let minutes = clock_minutes(time);
            if minutes >= clock_minutes(config.day_window_start)
                && minutes <= clock_minutes(config.day_window_end)
            {
                ShiftType::Day
            } else {
                ShiftType::Night
            }
        }
        None => recorded.unwrap_or(ShiftType::Unknown),
    }
}

/// Resolves the shift for a punch, honoring inference-eligibility rules.
///
/// Employees whose sub-department or salary type is excluded from automatic
/// shift inference use the punch's recorded shift type only; everyone else
/// is classified from the check-in time with the recorded type as fallback.
pub fn effective_shift(employee: &Employee, punch: &Punch, config: &ShiftConfig) -> ShiftType {
    let excluded = config
        .inference_excluded_sub_departments
        .contains(&employee.sub_department)
        || config
            .inference_excluded_salary_types
            .contains(&employee.salary_type);

    if excluded {
        punch.recorded_shift_type.unwrap_or(ShiftType::Unknown)
    } else {
        classify_shift(punch.check_in, punch.recorded_shift_type, config)
    }
}

/// Resolves the shift for a punch with an optional employee record.
///
/// With an employee the exclusion rules of [`effective_shift`] apply;
/// without one the punch is classified from its own times.
pub fn resolve_shift(
    employee: Option<&Employee>,
    punch: &Punch,
    config: &ShiftConfig,
) -> ShiftType {
    match employee {
        Some(employee) => effective_shift(employee, punch, config),
        None => classify_shift(punch.check_in, punch.recorded_shift_type, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SalaryType, WorkType};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn config() -> ShiftConfig {
        ShiftConfig::default()
    }

    fn t(s: &str) -> Option<NaiveTime> {
        parse_clock(s)
    }

    // ==========================================================================
    // SC-001..004: window boundaries
    // ==========================================================================
    #[test]
    fn test_sc_001_window_start_is_day() {
        assert_eq!(classify_shift(t("04:00"), None, &config()), ShiftType::Day);
    }

    #[test]
    fn test_sc_002_before_window_start_is_night() {
        assert_eq!(classify_shift(t("03:59"), None, &config()), ShiftType::Night);
    }

    #[test]
    fn test_sc_003_window_end_is_day() {
        assert_eq!(classify_shift(t("17:30"), None, &config()), ShiftType::Day);
    }

    #[test]
    fn test_sc_004_after_window_end_is_night() {
        assert_eq!(classify_shift(t("17:31"), None, &config()), ShiftType::Night);
    }

    #[test]
    fn test_midnight_is_night() {
        assert_eq!(classify_shift(t("00:00"), None, &config()), ShiftType::Night);
    }

    #[test]
    fn test_midday_is_day() {
        assert_eq!(classify_shift(t("12:00"), None, &config()), ShiftType::Day);
    }

    #[test]
    fn test_absent_time_falls_back_to_recorded_shift() {
        assert_eq!(
            classify_shift(None, Some(ShiftType::Night), &config()),
            ShiftType::Night
        );
        assert_eq!(
            classify_shift(None, Some(ShiftType::Day), &config()),
            ShiftType::Day
        );
    }

    #[test]
    fn test_no_time_no_recorded_is_unknown() {
        assert_eq!(classify_shift(None, None, &config()), ShiftType::Unknown);
    }

    #[test]
    fn test_parse_clock_rejects_malformed_input() {
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("0830"), None);
        assert_eq!(parse_clock("ab:cd"), None);
        assert_eq!(parse_clock("12:60"), None);
        assert_eq!(parse_clock("-1:30"), None);
    }

    #[test]
    fn test_parse_clock_accepts_single_digits() {
        assert_eq!(parse_clock("9:5"), NaiveTime::from_hms_opt(9, 5, 0));
    }

    fn make_employee(sub_department: &str, salary_type: SalaryType) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            department: "operations".to_string(),
            sub_department: sub_department.to_string(),
            position: String::new(),
            salary_type,
            work_type: WorkType::Regular,
            base_wage: Decimal::new(10_000, 0),
        }
    }

    fn make_punch(check_in: Option<NaiveTime>, recorded: Option<ShiftType>) -> Punch {
        Punch {
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            check_in,
            check_out: None,
            leave_type_override: None,
            recorded_shift_type: recorded,
            special_work_hours: None,
        }
    }

    #[test]
    fn test_effective_shift_infers_from_check_in() {
        let employee = make_employee("floor", SalaryType::Hourly);
        let punch = make_punch(t("23:00"), Some(ShiftType::Day));
        assert_eq!(
            effective_shift(&employee, &punch, &config()),
            ShiftType::Night
        );
    }

    #[test]
    fn test_excluded_sub_department_uses_recorded_only() {
        let mut cfg = config();
        cfg.inference_excluded_sub_departments
            .push("management".to_string());
        let employee = make_employee("management", SalaryType::Hourly);
        // check-in would classify as night, but inference is disabled
        let punch = make_punch(t("23:00"), Some(ShiftType::Day));
        assert_eq!(effective_shift(&employee, &punch, &cfg), ShiftType::Day);
    }

    #[test]
    fn test_excluded_salary_type_without_recorded_is_unknown() {
        let mut cfg = config();
        cfg.inference_excluded_salary_types.push(SalaryType::Monthly);
        let employee = make_employee("floor", SalaryType::Monthly);
        let punch = make_punch(t("09:00"), None);
        assert_eq!(effective_shift(&employee, &punch, &cfg), ShiftType::Unknown);
    }
}
