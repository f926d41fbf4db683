//! Wage computation.
//!
//! Converts categorized hours into a monetary amount: each bucket's hours
//! earn the base hourly rate times that bucket's multiplier from the
//! configured table. The table is configuration so company-specific wage
//! rules never touch this code.

use rust_decimal::Decimal;

use crate::config::{EngineConfig, WageConfig};
use crate::holiday::{HolidayRepository, HolidayResolver};
use crate::models::{Employee, Punch, ShiftType, WorkTimeBuckets};

use super::categorizer::{categorize_punch, categorize_work_time};
use super::shift::resolve_shift;

/// Prices a set of categorized hours.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::wage_for_buckets;
/// use attendance_engine::config::WageConfig;
/// use attendance_engine::models::{BucketKind, WorkTimeBuckets};
/// use rust_decimal::Decimal;
///
/// let mut buckets = WorkTimeBuckets::zero();
/// buckets.set(BucketKind::Basic, Decimal::new(80, 1)); // 8.0h
/// buckets.set(BucketKind::Overtime, Decimal::new(10, 1)); // 1.0h
///
/// let amount = wage_for_buckets(&buckets, Decimal::new(10_000, 0), &WageConfig::default());
/// assert_eq!(amount, Decimal::new(95_000, 0)); // 8h at 1.0x + 1h at 1.5x
/// ```
pub fn wage_for_buckets(
    buckets: &WorkTimeBuckets,
    hourly_rate: Decimal,
    wage: &WageConfig,
) -> Decimal {
    buckets
        .iter()
        .map(|(kind, hours)| hours * hourly_rate * wage.bucket_multiplier(kind))
        .sum()
}

/// Computes one day's wage from raw punch times.
///
/// Categorizes the worked interval and prices the resulting buckets.
pub fn daily_wage(
    check_in: chrono::NaiveTime,
    check_out: chrono::NaiveTime,
    shift: ShiftType,
    is_holiday: bool,
    hourly_rate: Decimal,
    config: &EngineConfig,
) -> Decimal {
    let buckets = categorize_work_time(check_in, check_out, shift, is_holiday, config);
    wage_for_buckets(&buckets, hourly_rate, &config.wage)
}

/// Sums daily wages over a set of punches.
///
/// Each punch resolves its own holiday status and shift (honoring the
/// employee's inference-exclusion rules when a record is given); punches
/// without a complete check-in/check-out pair contribute only through the
/// special-work-hours override.
pub fn monthly_wage<R: HolidayRepository>(
    punches: &[Punch],
    hourly_rate: Decimal,
    employee: Option<&Employee>,
    resolver: &mut HolidayResolver<R>,
    config: &EngineConfig,
) -> Decimal {
    punches
        .iter()
        .map(|punch| {
            let shift = resolve_shift(employee, punch, &config.shift);
            let is_holiday = resolver.is_holiday(punch.date);
            let buckets = categorize_punch(punch, shift, is_holiday, config);
            wage_for_buckets(&buckets, hourly_rate, &config.wage)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::parse_clock;
    use crate::holiday::InMemoryHolidayRepository;
    use chrono::{NaiveDate, NaiveTime};

    fn t(s: &str) -> NaiveTime {
        parse_clock(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn rate() -> Decimal {
        Decimal::new(10_000, 0)
    }

    // ==========================================================================
    // WG-001: weekday with early start and overtime
    // ==========================================================================
    #[test]
    fn test_wg_001_weekday_daily_wage() {
        let config = EngineConfig::default();
        let amount = daily_wage(t("08:00"), t("18:30"), ShiftType::Day, false, rate(), &config);
        // early 0.5h at 1.5x + basic 8h at 1.0x + overtime 1h at 1.5x
        assert_eq!(amount, Decimal::new(102_500, 0));
    }

    #[test]
    fn test_plain_day_wage() {
        let config = EngineConfig::default();
        let amount = daily_wage(t("08:30"), t("17:30"), ShiftType::Day, false, rate(), &config);
        assert_eq!(amount, Decimal::new(80_000, 0));
    }

    #[test]
    fn test_holiday_wage_uses_holiday_multiplier() {
        let config = EngineConfig::default();
        let amount = daily_wage(t("09:00"), t("13:00"), ShiftType::Day, true, rate(), &config);
        // 4h at 1.5x
        assert_eq!(amount, Decimal::new(60_000, 0));
    }

    #[test]
    fn test_night_shift_wage_includes_night_premium() {
        let config = EngineConfig::default();
        let amount = daily_wage(t("23:00"), t("07:30"), ShiftType::Night, false, rate(), &config);
        // night 4h at 1.5x + overtime+night 2h at 2.0x + overtime 1.5h at 1.5x
        assert_eq!(amount, Decimal::new(122_500, 0));
    }

    #[test]
    fn test_zero_rate_yields_zero_wage() {
        let config = EngineConfig::default();
        let amount = daily_wage(
            t("08:30"),
            t("17:30"),
            ShiftType::Day,
            false,
            Decimal::ZERO,
            &config,
        );
        assert_eq!(amount, Decimal::ZERO);
    }

    fn make_punch(date: &str, check_in: &str, check_out: &str) -> Punch {
        Punch {
            employee_id: "emp_001".to_string(),
            date: make_date(date),
            check_in: Some(t(check_in)),
            check_out: Some(t(check_out)),
            leave_type_override: None,
            recorded_shift_type: None,
            special_work_hours: None,
        }
    }

    #[test]
    fn test_monthly_wage_sums_daily_wages() {
        let config = EngineConfig::default();
        let mut resolver = HolidayResolver::new(InMemoryHolidayRepository::new());
        resolver
            .repository_mut()
            .load_year(2026, Vec::new());

        let punches = vec![
            make_punch("2026-01-13", "08:30", "17:30"),
            make_punch("2026-01-14", "08:00", "18:30"),
        ];
        let amount = monthly_wage(&punches, rate(), None, &mut resolver, &config);
        assert_eq!(amount, Decimal::new(80_000 + 102_500, 0));
    }

    #[test]
    fn test_monthly_wage_routes_system_holiday_to_holiday_rate() {
        let config = EngineConfig::default();
        let mut resolver = HolidayResolver::new(InMemoryHolidayRepository::new());
        resolver.repository_mut().load_year(
            2026,
            vec![crate::holiday::HolidayEntry {
                key: "01-01".to_string(),
                label: "New Year's Day".to_string(),
            }],
        );

        let punches = vec![make_punch("2026-01-01", "09:00", "13:00")];
        let amount = monthly_wage(&punches, rate(), None, &mut resolver, &config);
        assert_eq!(amount, Decimal::new(60_000, 0));
    }

    #[test]
    fn test_monthly_wage_includes_special_work_hours() {
        let config = EngineConfig::default();
        let mut resolver = HolidayResolver::new(InMemoryHolidayRepository::new());
        resolver.repository_mut().load_year(2026, Vec::new());

        let mut punch = make_punch("2026-01-13", "09:00", "09:00");
        punch.check_in = None;
        punch.check_out = None;
        punch.special_work_hours = Some(Decimal::new(40, 1)); // 4.0h
        let amount = monthly_wage(&[punch], rate(), None, &mut resolver, &config);
        // special hours credit the holiday bucket: 4h at 1.5x
        assert_eq!(amount, Decimal::new(60_000, 0));
    }
}
