//! Monthly attendance aggregation.
//!
//! Walks every calendar day of a month, runs the status analyzer and the
//! work-time categorizer over the employee's punches and leaves, and folds
//! the results into one [`MonthlyStats`]. The cached entry points memoize by
//! punch-date fingerprint so repeated queries for an unchanged month skip
//! the day walk entirely.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayContext, analyze_status, categorize_punch, resolve_shift};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::holiday::{HolidayRepository, HolidayResolver};
use crate::models::{Employee, LeaveRecord, LeaveType, Punch, ShiftType, WorkTimeBuckets};

use super::cache::{CachedStats, StatsCache, StatsKey};

/// One employee's aggregated attendance for a calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Days with a worked status (present, late, early-leave, in-progress).
    pub total_work_days: u32,
    /// Categorized hours summed over the month.
    pub buckets: WorkTimeBuckets,
    /// Days flagged late (including late-and-early-leave days).
    pub late_count: u32,
    /// Days flagged early-leave (including late-and-early-leave days).
    pub early_leave_count: u32,
    /// Days classified absent.
    pub absence_count: u32,
    /// Days covered by approved annual leave.
    pub annual_leave_count: u32,
    /// Sum of all bucket hours.
    pub total_hours: Decimal,
}

/// Number of days in a calendar month.
///
/// # Example
///
/// ```
/// use attendance_engine::stats::days_in_month;
///
/// assert_eq!(days_in_month(2026, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2028, 2).unwrap(), 29);
/// assert!(days_in_month(2026, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { year, month })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(EngineError::InvalidMonth { year, month })?;
    Ok((next_first - first).num_days() as u32)
}

/// Aggregates punches and leaves into monthly statistics.
///
/// Borrows the holiday resolver mutably because day walks may queue loads
/// for years whose system holiday table is not yet in memory.
pub struct MonthlyAggregator<'a, R: HolidayRepository> {
    config: &'a EngineConfig,
    resolver: &'a mut HolidayResolver<R>,
    employee: Option<&'a Employee>,
}

impl<'a, R: HolidayRepository> MonthlyAggregator<'a, R> {
    /// Creates an aggregator over the given configuration and resolver.
    pub fn new(config: &'a EngineConfig, resolver: &'a mut HolidayResolver<R>) -> Self {
        Self {
            config,
            resolver,
            employee: None,
        }
    }

    /// Attaches the employee's registry record, enabling the
    /// shift-inference exclusion rules during the day walk.
    pub fn with_employee(mut self, employee: Option<&'a Employee>) -> Self {
        self.employee = employee;
        self
    }

    /// Computes one employee's statistics for one month, uncached.
    ///
    /// `punches` and `leaves` may contain records for other employees or
    /// other months; they are filtered here. An employee with no records at
    /// all still gets a result (every weekday classifies as absent).
    pub fn compute(
        &mut self,
        employee_id: &str,
        year: i32,
        month: u32,
        punches: &[Punch],
        leaves: &[LeaveRecord],
    ) -> EngineResult<MonthlyStats> {
        let day_count = days_in_month(year, month)?;
        let employee_leaves: Vec<LeaveRecord> = leaves
            .iter()
            .filter(|leave| leave.employee_id == employee_id)
            .cloned()
            .collect();

        let mut stats = MonthlyStats::default();
        for day in 1..=day_count {
            // day_count came from a validated first-of-month date
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(EngineError::InvalidMonth { year, month })?;
            let punch = punches
                .iter()
                .find(|punch| punch.employee_id == employee_id && punch.date == date);
            self.fold_day(&mut stats, date, punch, &employee_leaves);
        }
        stats.total_hours = stats.buckets.total_hours();
        Ok(stats)
    }

    fn fold_day(
        &mut self,
        stats: &mut MonthlyStats,
        date: NaiveDate,
        punch: Option<&Punch>,
        leaves: &[LeaveRecord],
    ) {
        let is_holiday = self.resolver.is_holiday(date);
        let shift = match punch {
            Some(punch) => resolve_shift(self.employee, punch, &self.config.shift),
            None => ShiftType::Unknown,
        };

        // An administrative leave override on the punch replaces the day's
        // evaluation outright: no hours, only the matching leave counter.
        if let Some(override_type) = punch.and_then(|punch| punch.leave_type_override) {
            match override_type {
                LeaveType::Annual => stats.annual_leave_count += 1,
                LeaveType::Absence => stats.absence_count += 1,
                _ => {}
            }
            return;
        }

        if let Some(punch) = punch {
            let buckets = categorize_punch(punch, shift, is_holiday, self.config);
            stats.buckets.accumulate(&buckets);
        }

        let status = analyze_status(&DayContext {
            punch,
            date,
            shift,
            is_holiday,
            leaves,
            config: self.config,
        });
        let Some(status) = status else {
            return;
        };

        if status.is_worked() {
            stats.total_work_days += 1;
        }
        if status.is_late() {
            stats.late_count += 1;
        }
        if status.is_early_leave() {
            stats.early_leave_count += 1;
        }
        match status {
            crate::models::AttendanceStatus::Absent => stats.absence_count += 1,
            crate::models::AttendanceStatus::OnLeave => {
                let annual = leaves.iter().any(|leave| {
                    leave.leave_type == LeaveType::Annual && leave.effective_on(date)
                });
                if annual {
                    stats.annual_leave_count += 1;
                }
            }
            _ => {}
        }
    }

    /// Cached statistics lookup.
    ///
    /// A cache hit is served only when the stored punch-date fingerprint
    /// still matches the current punches; otherwise the month is recomputed
    /// and the entry replaced.
    pub fn stats(
        &mut self,
        cache: &mut dyn StatsCache,
        employee_id: &str,
        year: i32,
        month: u32,
        punches: &[Punch],
        leaves: &[LeaveRecord],
    ) -> EngineResult<MonthlyStats> {
        let key = StatsKey::new(employee_id, year, month);
        let fingerprint = punch_fingerprint(employee_id, year, month, punches);
        if let Some(entry) = cache.get(&key) {
            if entry.punch_dates == fingerprint {
                return Ok(entry.stats.clone());
            }
        }
        let stats = self.compute(employee_id, year, month, punches, leaves)?;
        cache.put(
            key,
            CachedStats {
                stats: stats.clone(),
                punch_dates: fingerprint,
            },
        );
        Ok(stats)
    }

    /// Cached lookup with an authoritative override.
    ///
    /// When a precomputed result exists (a closed payroll period, say), it
    /// wins over both the cache and a fresh computation.
    pub fn stats_with_authoritative(
        &mut self,
        cache: &mut dyn StatsCache,
        authoritative: Option<MonthlyStats>,
        employee_id: &str,
        year: i32,
        month: u32,
        punches: &[Punch],
        leaves: &[LeaveRecord],
    ) -> EngineResult<MonthlyStats> {
        match authoritative {
            Some(stats) => Ok(stats),
            None => self.stats(cache, employee_id, year, month, punches, leaves),
        }
    }

    /// Computes statistics for a batch of employees over the same month.
    ///
    /// Results come back in input order; an employee with no records gets a
    /// result like any other.
    pub fn batch(
        &mut self,
        cache: &mut dyn StatsCache,
        employee_ids: &[String],
        year: i32,
        month: u32,
        punches: &[Punch],
        leaves: &[LeaveRecord],
    ) -> EngineResult<Vec<(String, MonthlyStats)>> {
        employee_ids
            .iter()
            .map(|employee_id| {
                let stats = self.stats(cache, employee_id, year, month, punches, leaves)?;
                Ok((employee_id.clone(), stats))
            })
            .collect()
    }
}

/// Sorted dates of an employee's punches within one month.
///
/// Night shifts straddle midnight in wall-clock terms but each punch is
/// anchored to a single date, so the month filter is a plain date range.
fn punch_fingerprint(
    employee_id: &str,
    year: i32,
    month: u32,
    punches: &[Punch],
) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = punches
        .iter()
        .filter(|punch| {
            punch.employee_id == employee_id
                && punch.date.year() == year
                && punch.date.month() == month
        })
        .map(|punch| punch.date)
        .collect();
    dates.sort_unstable();
    dates
}
