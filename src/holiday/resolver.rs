//! Holiday resolution.
//!
//! Decides whether a calendar date is a non-working day by merging the
//! per-date manual weekday/holiday toggle, the custom holiday table, and the
//! year-keyed system table, in that precedence order. The resolver is the
//! single holiday judgment in the engine; the categorizer, the status
//! analyzer, and display layers must all consult it.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{DayKind, DayWorkTypeSetting};

use super::repository::HolidayRepository;

/// Resolves holiday status for calendar dates.
///
/// A lookup against a year whose system table is not loaded answers
/// "not a holiday" immediately and queues the year on the repository; there
/// is no blocking wait, and callers re-query once the host completes the
/// load.
#[derive(Debug)]
pub struct HolidayResolver<R: HolidayRepository> {
    repository: R,
    day_settings: HashMap<NaiveDate, DayKind>,
}

impl<R: HolidayRepository> HolidayResolver<R> {
    /// Creates a resolver over the given repository with no manual toggles.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            day_settings: HashMap::new(),
        }
    }

    /// Creates a resolver seeded with manual per-date toggles.
    pub fn with_day_settings(repository: R, settings: &[DayWorkTypeSetting]) -> Self {
        let mut resolver = Self::new(repository);
        for setting in settings {
            resolver.set_day_kind(setting.date, setting.kind);
        }
        resolver
    }

    /// Sets or replaces the manual weekday/holiday toggle for a date.
    pub fn set_day_kind(&mut self, date: NaiveDate, kind: DayKind) {
        self.day_settings.insert(date, kind);
    }

    /// Removes the manual toggle for a date.
    pub fn clear_day_kind(&mut self, date: NaiveDate) {
        self.day_settings.remove(&date);
    }

    /// Returns the manual toggle for a date, if any.
    pub fn day_kind(&self, date: NaiveDate) -> Option<DayKind> {
        self.day_settings.get(&date).copied()
    }

    /// Decides whether a date is a holiday.
    ///
    /// Precedence: the manual toggle wins outright; then the custom table;
    /// then the system table. An unloaded system-table year resolves to
    /// `false` for this call and queues a load on the repository.
    pub fn is_holiday(&mut self, date: NaiveDate) -> bool {
        if let Some(kind) = self.day_settings.get(&date) {
            return *kind == DayKind::Holiday;
        }
        if self.repository.is_custom_holiday(date) {
            return true;
        }
        match self.repository.is_system_holiday(date) {
            Some(is_holiday) => is_holiday,
            None => {
                self.repository.request_load(date.year());
                false
            }
        }
    }

    /// Shared access to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Mutable access to the underlying repository.
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }
}
