//! Holiday table storage.
//!
//! The repository merges a year-keyed system holiday table with
//! administrator overrides: a custom table of added holidays, label edits,
//! and delete/restore/permanently-delete sets. Override sets are applied
//! when a year's table is loaded, not at lookup time; a delete therefore
//! takes effect the next time the year is loaded.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One holiday table entry.
///
/// The key is either an exact date (`YYYY-MM-DD`) or a short recurring date
/// (`MM-DD`) that matches the same day in any year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// Exact (`YYYY-MM-DD`) or recurring (`MM-DD`) date key.
    pub key: String,
    /// Human-readable label (e.g. "New Year's Day").
    pub label: String,
}

fn full_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn short_key(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// Storage seam between the resolver and the holiday tables.
///
/// Injected into the engine rather than referenced as ambient state, so
/// hosts can substitute their own persistence.
pub trait HolidayRepository {
    /// True if the date is in the custom (administrator-added) table.
    fn is_custom_holiday(&self, date: NaiveDate) -> bool;

    /// Whether the date is in the system table for its year.
    ///
    /// Returns `None` when the year's table has not been loaded; the caller
    /// decides how to degrade.
    fn is_system_holiday(&self, date: NaiveDate) -> Option<bool>;

    /// Records that a year's table needs loading. Idempotent: a year already
    /// loaded or already pending is not queued again. Returns true when the
    /// year was newly queued.
    fn request_load(&mut self, year: i32) -> bool;

    /// Adds or replaces a custom holiday. Effective immediately.
    fn upsert_custom(&mut self, date: NaiveDate, label: &str);

    /// Records a label substitution for a system entry, applied at load time.
    fn edit_entry(&mut self, key: &str, label: &str);

    /// Marks a system entry deleted, applied at load time.
    fn delete(&mut self, key: &str);

    /// Undoes a non-permanent delete.
    fn restore(&mut self, key: &str);

    /// Marks a system entry permanently deleted; `restore` does not undo it.
    fn purge(&mut self, key: &str);
}

/// In-memory [`HolidayRepository`] with an explicit pending-load queue.
///
/// Loading is decoupled from lookups: a lookup against an unloaded year
/// queues the year via [`HolidayRepository::request_load`], and the host
/// drains the queue with [`InMemoryHolidayRepository::take_pending_loads`],
/// fetches each year's entries, and hands them to
/// [`InMemoryHolidayRepository::load_year`]. A stale load for a year that
/// was re-requested in the meantime can simply be dropped; the newer load
/// overwrites the table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryHolidayRepository {
    custom: HashMap<NaiveDate, String>,
    system_by_year: HashMap<i32, HashMap<String, String>>,
    loaded: HashSet<i32>,
    pending: HashSet<i32>,
    deleted: HashSet<String>,
    purged: HashSet<String>,
    edited: HashMap<String, String>,
}

impl InMemoryHolidayRepository {
    /// Creates an empty repository with no years loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads (or reloads) one year's system table, applying the delete,
    /// permanent-delete, and edit override sets to the incoming entries.
    pub fn load_year(&mut self, year: i32, entries: Vec<HolidayEntry>) {
        let mut table = HashMap::new();
        for entry in entries {
            if self.deleted.contains(&entry.key) || self.purged.contains(&entry.key) {
                continue;
            }
            let label = self
                .edited
                .get(&entry.key)
                .cloned()
                .unwrap_or(entry.label);
            table.insert(entry.key, label);
        }
        self.system_by_year.insert(year, table);
        self.loaded.insert(year);
        self.pending.remove(&year);
    }

    /// True if the year's system table has been loaded.
    pub fn is_loaded(&self, year: i32) -> bool {
        self.loaded.contains(&year)
    }

    /// Drains and returns the set of years queued for loading.
    pub fn take_pending_loads(&mut self) -> Vec<i32> {
        let mut years: Vec<i32> = self.pending.drain().collect();
        years.sort_unstable();
        years
    }

    /// Returns the label of a system holiday, if the date is one.
    pub fn system_label(&self, date: NaiveDate) -> Option<&str> {
        let table = self.system_by_year.get(&date.year())?;
        table
            .get(&full_key(date))
            .or_else(|| table.get(&short_key(date)))
            .map(String::as_str)
    }

    /// Returns the label of a custom holiday, if the date is one.
    pub fn custom_label(&self, date: NaiveDate) -> Option<&str> {
        self.custom.get(&date).map(String::as_str)
    }
}

impl HolidayRepository for InMemoryHolidayRepository {
    fn is_custom_holiday(&self, date: NaiveDate) -> bool {
        self.custom.contains_key(&date)
    }

    fn is_system_holiday(&self, date: NaiveDate) -> Option<bool> {
        if !self.loaded.contains(&date.year()) {
            return None;
        }
        Some(self.system_label(date).is_some())
    }

    fn request_load(&mut self, year: i32) -> bool {
        if self.loaded.contains(&year) || self.pending.contains(&year) {
            return false;
        }
        self.pending.insert(year)
    }

    fn upsert_custom(&mut self, date: NaiveDate, label: &str) {
        self.custom.insert(date, label.to_string());
    }

    fn edit_entry(&mut self, key: &str, label: &str) {
        self.edited.insert(key.to_string(), label.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.deleted.insert(key.to_string());
    }

    fn restore(&mut self, key: &str) {
        self.deleted.remove(key);
    }

    fn purge(&mut self, key: &str) {
        self.purged.insert(key.to_string());
    }
}
