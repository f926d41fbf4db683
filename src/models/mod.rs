//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod buckets;
mod employee;
mod leave;
mod punch;
mod status;

pub use buckets::{BucketKind, WorkTimeBuckets};
pub use employee::{Employee, SalaryType, WorkType};
pub use leave::{LeaveRecord, LeaveStatus, LeaveType};
pub use punch::{DayKind, DayWorkTypeSetting, Punch, ShiftType};
pub use status::AttendanceStatus;
