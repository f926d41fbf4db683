//! Attendance classification and wage computation engine.
//!
//! This crate classifies daily punch records into shifts and attendance
//! statuses, splits worked time into paid-time buckets, resolves holidays
//! from layered calendars, aggregates monthly statistics, and prices
//! categorized hours into wages.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holiday;
pub mod models;
pub mod stats;
