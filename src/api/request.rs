//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the `/monthly-stats`,
//! `/daily-wage`, and `/classify` endpoints. Clock times travel as `"HH:MM"`
//! or `"HH:MM:SS"` strings; an unparseable time converts to a missing time
//! rather than failing the whole request, matching how raw punch feeds
//! behave.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_clock;
use crate::holiday::{HolidayEntry, HolidayRepository, HolidayResolver, InMemoryHolidayRepository};
use crate::models::{DayKind, Employee, LeaveRecord, LeaveStatus, LeaveType, Punch, ShiftType};

/// A punch in a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// Identifier of the employee the punch belongs to.
    pub employee_id: String,
    /// The calendar date of the punch.
    pub date: NaiveDate,
    /// Check-in clock time, if recorded.
    #[serde(default)]
    pub check_in: Option<String>,
    /// Check-out clock time, if recorded.
    #[serde(default)]
    pub check_out: Option<String>,
    /// Administrative leave override for the day.
    #[serde(default)]
    pub leave_type_override: Option<LeaveType>,
    /// Shift recorded for the day.
    #[serde(default)]
    pub recorded_shift_type: Option<ShiftType>,
    /// Hours credited directly to the holiday bucket.
    #[serde(default)]
    pub special_work_hours: Option<Decimal>,
}

impl From<PunchRequest> for Punch {
    fn from(req: PunchRequest) -> Self {
        Punch {
            employee_id: req.employee_id,
            date: req.date,
            check_in: req.check_in.as_deref().and_then(parse_clock),
            check_out: req.check_out.as_deref().and_then(parse_clock),
            leave_type_override: req.leave_type_override,
            recorded_shift_type: req.recorded_shift_type,
            special_work_hours: req.special_work_hours,
        }
    }
}

/// A leave record in a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Identifier of the employee the record belongs to.
    pub employee_id: String,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval status; defaults to approved.
    #[serde(default = "default_leave_status")]
    pub status: LeaveStatus,
}

fn default_leave_status() -> LeaveStatus {
    LeaveStatus::Approved
}

impl From<LeaveRequest> for LeaveRecord {
    fn from(req: LeaveRequest) -> Self {
        LeaveRecord {
            employee_id: req.employee_id,
            leave_type: req.leave_type,
            start_date: req.start_date,
            end_date: req.end_date,
            status: req.status,
        }
    }
}

/// One year of system holidays in a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemHolidayYearRequest {
    /// The calendar year the entries cover.
    pub year: i32,
    /// The holiday entries; keys are `"YYYY-MM-DD"` or recurring `"MM-DD"`.
    pub entries: Vec<HolidayEntryRequest>,
}

/// A single system-holiday entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayEntryRequest {
    /// `"YYYY-MM-DD"` for a one-off date, `"MM-DD"` for a recurring one.
    pub key: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
}

impl From<HolidayEntryRequest> for HolidayEntry {
    fn from(req: HolidayEntryRequest) -> Self {
        HolidayEntry {
            key: req.key,
            label: req.label,
        }
    }
}

/// A custom (company) holiday in a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomHolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// Display label.
    #[serde(default)]
    pub label: String,
}

/// A manual weekday/holiday toggle for one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySettingRequest {
    /// The date the toggle applies to.
    pub date: NaiveDate,
    /// Whether the date counts as a weekday or a holiday.
    pub kind: DayKind,
}

/// Holiday data supplied with a request.
///
/// The engine is stateless across requests, so each request carries the
/// holiday tables it wants consulted; anything omitted falls back to
/// "not loaded" semantics (the lookup answers false and queues the year).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayDataRequest {
    /// System holiday tables, keyed by year.
    #[serde(default)]
    pub system_holidays: Vec<SystemHolidayYearRequest>,
    /// Company-specific holidays.
    #[serde(default)]
    pub custom_holidays: Vec<CustomHolidayRequest>,
    /// Manual per-date weekday/holiday toggles.
    #[serde(default)]
    pub day_settings: Vec<DaySettingRequest>,
}

impl HolidayDataRequest {
    /// Builds a resolver seeded with this request's holiday data.
    pub fn into_resolver(self) -> HolidayResolver<InMemoryHolidayRepository> {
        let mut repository = InMemoryHolidayRepository::new();
        for year in self.system_holidays {
            repository.load_year(year.year, year.entries.into_iter().map(Into::into).collect());
        }
        for custom in self.custom_holidays {
            repository.upsert_custom(custom.date, &custom.label);
        }
        let mut resolver = HolidayResolver::new(repository);
        for setting in self.day_settings {
            resolver.set_day_kind(setting.date, setting.kind);
        }
        resolver
    }
}

/// Request body for the `/monthly-stats` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStatsRequest {
    /// The employee to aggregate.
    pub employee_id: String,
    /// The employee's registry record. When present, shift inference honors
    /// the exclusion rules and a monthly salary converts to an hourly rate
    /// when `hourly_rate` is absent.
    #[serde(default)]
    pub employee: Option<Employee>,
    /// Target year.
    pub year: i32,
    /// Target month, 1-based.
    pub month: u32,
    /// The employee's punches (records for other employees are ignored).
    #[serde(default)]
    pub punches: Vec<PunchRequest>,
    /// Leave records overlapping the month.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// Holiday data to consult while aggregating.
    #[serde(default)]
    pub holidays: HolidayDataRequest,
    /// Hourly rate; when present the response also carries the month's wage.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

/// Request body for the `/daily-wage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWageRequest {
    /// Check-in clock time.
    pub check_in: String,
    /// Check-out clock time; earlier than check-in means crossing midnight.
    pub check_out: String,
    /// Shift override; inferred from the check-in time when absent.
    #[serde(default)]
    pub shift_type: Option<ShiftType>,
    /// Whether the day counts as a holiday.
    #[serde(default)]
    pub is_holiday: bool,
    /// The employee's hourly rate.
    pub hourly_rate: Decimal,
}

/// Request body for the `/classify` endpoint: one day's full evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The employee under evaluation.
    pub employee_id: String,
    /// The employee's registry record; enables the shift-inference
    /// exclusion rules when present.
    #[serde(default)]
    pub employee: Option<Employee>,
    /// The calendar date under evaluation.
    pub date: NaiveDate,
    /// The day's punch, if one exists.
    #[serde(default)]
    pub punch: Option<PunchRequest>,
    /// Leave records to consult.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// Holiday data to consult.
    #[serde(default)]
    pub holidays: HolidayDataRequest,
}
