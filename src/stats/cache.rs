//! Monthly statistics cache.
//!
//! A plain in-memory key/value store with explicit, caller-driven
//! invalidation. There is no dependency tracking: any mutation to punches,
//! leave approvals, or holiday data touching a month must be followed by an
//! invalidation call for that month. The cache assumes a single logical
//! writer and needs no locking of its own.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::aggregator::MonthlyStats;

/// Cache key: one employee's statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatsKey {
    /// The employee the statistics belong to.
    pub employee_id: String,
    /// Target year.
    pub year: i32,
    /// Target month, 1-based.
    pub month: u32,
}

impl StatsKey {
    /// Builds a key.
    pub fn new(employee_id: impl Into<String>, year: i32, month: u32) -> Self {
        Self {
            employee_id: employee_id.into(),
            year,
            month,
        }
    }
}

impl std::fmt::Display for StatsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.employee_id, self.year, self.month)
    }
}

/// A cached statistics entry plus the punch-date fingerprint it was computed
/// from. A changed fingerprint (punches added, removed, or moved within the
/// month) makes the entry stale.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedStats {
    /// The memoized statistics.
    pub stats: MonthlyStats,
    /// Sorted dates of the punches the statistics were computed from.
    pub punch_dates: Vec<NaiveDate>,
}

/// Storage seam for memoized monthly statistics.
pub trait StatsCache {
    /// Returns the cached entry for a key, if present.
    fn get(&self, key: &StatsKey) -> Option<&CachedStats>;

    /// Stores an entry, replacing any previous one for the key.
    fn put(&mut self, key: StatsKey, entry: CachedStats);

    /// Drops the entry for one key.
    fn invalidate(&mut self, key: &StatsKey);

    /// Drops every entry belonging to an employee.
    fn invalidate_employee(&mut self, employee_id: &str);

    /// Drops every entry for one calendar month, across employees.
    fn invalidate_month(&mut self, year: i32, month: u32);

    /// Drops everything.
    fn clear(&mut self);
}

/// In-memory [`StatsCache`].
#[derive(Debug, Default, Clone)]
pub struct InMemoryStatsCache {
    entries: HashMap<StatsKey, CachedStats>,
}

impl InMemoryStatsCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StatsCache for InMemoryStatsCache {
    fn get(&self, key: &StatsKey) -> Option<&CachedStats> {
        self.entries.get(key)
    }

    fn put(&mut self, key: StatsKey, entry: CachedStats) {
        self.entries.insert(key, entry);
    }

    fn invalidate(&mut self, key: &StatsKey) {
        self.entries.remove(key);
    }

    fn invalidate_employee(&mut self, employee_id: &str) {
        self.entries.retain(|key, _| key.employee_id != employee_id);
    }

    fn invalidate_month(&mut self, year: i32, month: u32) {
        self.entries
            .retain(|key, _| !(key.year == year && key.month == month));
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Returns the next local midnight after `now`, the boundary at which the
/// daily resynchronization runs.
///
/// A host schedules a recurring task for this instant (recomputing it after
/// each tick) instead of a self-rescheduling timer closure; the sync itself
/// is [`resync_at`], testable with a fixed date.
///
/// # Example
///
/// ```
/// use attendance_engine::stats::resync_boundary;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let now = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
///     .and_hms_opt(22, 41, 0).unwrap();
/// let boundary = resync_boundary(now);
/// assert_eq!(
///     boundary,
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap().and_hms_opt(0, 0, 0).unwrap()
/// );
/// ```
pub fn resync_boundary(now: NaiveDateTime) -> NaiveDateTime {
    let next_day = now
        .date()
        .checked_add_days(Days::new(1))
        .expect("date within chrono range");
    NaiveDateTime::new(next_day, NaiveTime::MIN)
}

/// Duration from `now` until the next resync boundary.
pub fn until_resync(now: NaiveDateTime) -> chrono::Duration {
    resync_boundary(now) - now
}

/// Daily resynchronization: drops cached statistics for the months touching
/// `today`, i.e. the current month and, across a month boundary, the
/// previous day's month.
pub fn resync_at(today: NaiveDate, cache: &mut dyn StatsCache) {
    cache.invalidate_month(today.year(), today.month());
    if let Some(yesterday) = today.pred_opt() {
        if yesterday.month() != today.month() {
            cache.invalidate_month(yesterday.year(), yesterday.month());
        }
    }
}
