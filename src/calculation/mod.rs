//! Calculation logic for the attendance engine.
//!
//! This module contains the shared shift classifier, the work-time
//! categorizer that splits a worked interval into paid-time buckets, the
//! ordered-rule attendance-status analyzer, and the wage calculator.

mod categorizer;
mod shift;
mod status_rules;
mod wage;

pub use categorizer::{categorize_punch, categorize_work_time};
pub use shift::{classify_shift, clock_minutes, effective_shift, parse_clock, resolve_shift};
pub use status_rules::{DayContext, RuleOutcome, STATUS_RULES, StatusRule, analyze_status};
pub use wage::{daily_wage, monthly_wage, wage_for_buckets};
