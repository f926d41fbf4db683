//! Configuration types for the attendance engine.
//!
//! All rule thresholds live here rather than in the calculation code:
//! shift windows, per-shift schedules and break windows, the deep-night
//! window, and the wage multiplier table. Every section has compiled-in
//! defaults so the engine is usable without a configuration file; a YAML
//! file overrides only the sections it names.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BucketKind, SalaryType};

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid clock time")
}

/// Shift-window configuration shared by the classifier, the categorizer,
/// and the status analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftConfig {
    /// First check-in time (inclusive) that counts as the day shift.
    pub day_window_start: NaiveTime,
    /// Last check-in time (inclusive) that counts as the day shift.
    pub day_window_end: NaiveTime,
    /// Sub-departments excluded from automatic shift inference; their
    /// punches use the recorded shift type only.
    pub inference_excluded_sub_departments: Vec<String>,
    /// Salary types excluded from automatic shift inference.
    pub inference_excluded_salary_types: Vec<SalaryType>,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            day_window_start: time(4, 0),
            day_window_end: time(17, 30),
            inference_excluded_sub_departments: Vec::new(),
            inference_excluded_salary_types: Vec::new(),
        }
    }
}

/// Per-shift schedule: scheduled working window, status thresholds, and the
/// unpaid break window.
///
/// For the night shift the schedule wraps midnight: `basic_end`, `late_until`,
/// `early_leave_before`, and the break window carry clock times on the
/// following day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftSchedule {
    /// Scheduled start of the shift; earlier worked minutes are early-start.
    pub scheduled_start: NaiveTime,
    /// End of the ordinary working window; later minutes are overtime.
    pub basic_end: NaiveTime,
    /// A check-in strictly after `scheduled_start` and no later than this
    /// time is flagged late.
    pub late_until: NaiveTime,
    /// A check-out strictly before this time is flagged early-leave.
    pub early_leave_before: NaiveTime,
    /// Start of the unpaid break window.
    pub break_start: NaiveTime,
    /// End of the unpaid break window.
    pub break_end: NaiveTime,
}

impl Default for ShiftSchedule {
    fn default() -> Self {
        Self::day()
    }
}

impl ShiftSchedule {
    /// Default day-shift schedule: 08:30-17:30 with a 13:00-14:00 break.
    pub fn day() -> Self {
        Self {
            scheduled_start: time(8, 30),
            basic_end: time(17, 30),
            late_until: time(15, 0),
            early_leave_before: time(17, 20),
            break_start: time(13, 0),
            break_end: time(14, 0),
        }
    }

    /// Default night-shift schedule: 19:00-04:00 with a 03:00-04:00 break.
    ///
    /// `late_until` precedes `scheduled_start` on the clock, and the status
    /// thresholds compare same-day clock times, so this schedule flags no
    /// check-in as late. That is intentional: night check-ins are never
    /// penalized, only post-midnight early check-outs are.
    pub fn night() -> Self {
        Self {
            scheduled_start: time(19, 0),
            basic_end: time(4, 0),
            late_until: time(3, 0),
            early_leave_before: time(3, 50),
            break_start: time(3, 0),
            break_end: time(4, 0),
        }
    }
}

/// The deep-night clock window. Minutes inside it earn the night premium
/// regardless of shift; the window wraps midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NightWindow {
    /// Start of the deep-night window.
    pub start: NaiveTime,
    /// End of the deep-night window (on the following day when wrapping).
    pub end: NaiveTime,
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start: time(22, 0),
            end: time(6, 0),
        }
    }
}

/// Wage multiplier components.
///
/// Combination buckets sum their component multipliers: the night premium is
/// additive on top of the basic or overtime component, and holiday
/// combinations add the holiday component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WageConfig {
    /// Multiplier for ordinary hours.
    pub basic: Decimal,
    /// Multiplier for early-start hours.
    pub early_start: Decimal,
    /// Multiplier for overtime hours.
    pub overtime: Decimal,
    /// Additive premium for deep-night hours.
    pub night_premium: Decimal,
    /// Multiplier for holiday hours.
    pub holiday: Decimal,
    /// Hours used to convert a monthly salary to an hourly rate.
    pub standard_monthly_hours: Decimal,
}

impl Default for WageConfig {
    fn default() -> Self {
        Self {
            basic: Decimal::ONE,
            early_start: Decimal::new(15, 1),
            overtime: Decimal::new(15, 1),
            night_premium: Decimal::new(5, 1),
            holiday: Decimal::new(15, 1),
            standard_monthly_hours: Decimal::new(209, 0),
        }
    }
}

impl WageConfig {
    /// Returns the effective multiplier for a bucket kind.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::config::WageConfig;
    /// use attendance_engine::models::BucketKind;
    /// use rust_decimal::Decimal;
    ///
    /// let wage = WageConfig::default();
    /// assert_eq!(wage.bucket_multiplier(BucketKind::Basic), Decimal::ONE);
    /// assert_eq!(wage.bucket_multiplier(BucketKind::OvertimeNight), Decimal::new(20, 1));
    /// ```
    pub fn bucket_multiplier(&self, kind: BucketKind) -> Decimal {
        match kind {
            BucketKind::Basic => self.basic,
            BucketKind::EarlyStart => self.early_start,
            BucketKind::Overtime => self.overtime,
            BucketKind::Night => self.basic + self.night_premium,
            BucketKind::OvertimeNight => self.overtime + self.night_premium,
            BucketKind::Holiday => self.holiday,
            BucketKind::HolidayEarlyStart => self.holiday + self.early_start,
            BucketKind::HolidayOvertime => self.holiday + self.overtime,
            BucketKind::HolidayOvertimeNight => {
                self.holiday + self.overtime + self.night_premium
            }
        }
    }
}

/// The full engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shift window and inference-eligibility settings.
    pub shift: ShiftConfig,
    /// Day-shift schedule.
    pub day_schedule: ShiftSchedule,
    /// Night-shift schedule.
    #[serde(default = "ShiftSchedule::night")]
    pub night_schedule: ShiftSchedule,
    /// Deep-night premium window.
    pub night_window: NightWindow,
    /// Wage multiplier table.
    pub wage: WageConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shift: ShiftConfig::default(),
            day_schedule: ShiftSchedule::day(),
            night_schedule: ShiftSchedule::night(),
            night_window: NightWindow::default(),
            wage: WageConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Returns the schedule for a shift type. Unknown shifts fall back to
    /// the day schedule.
    pub fn schedule_for(&self, shift: crate::models::ShiftType) -> &ShiftSchedule {
        match shift {
            crate::models::ShiftType::Night => &self.night_schedule,
            _ => &self.day_schedule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;

    #[test]
    fn test_default_day_window() {
        let config = ShiftConfig::default();
        assert_eq!(config.day_window_start, time(4, 0));
        assert_eq!(config.day_window_end, time(17, 30));
    }

    #[test]
    fn test_default_wage_multipliers() {
        let wage = WageConfig::default();
        assert_eq!(wage.bucket_multiplier(BucketKind::Basic), Decimal::ONE);
        assert_eq!(
            wage.bucket_multiplier(BucketKind::Overtime),
            Decimal::new(15, 1)
        );
        assert_eq!(
            wage.bucket_multiplier(BucketKind::Night),
            Decimal::new(15, 1)
        );
        assert_eq!(
            wage.bucket_multiplier(BucketKind::OvertimeNight),
            Decimal::new(20, 1)
        );
        assert_eq!(
            wage.bucket_multiplier(BucketKind::Holiday),
            Decimal::new(15, 1)
        );
        assert_eq!(
            wage.bucket_multiplier(BucketKind::HolidayOvertimeNight),
            Decimal::new(35, 1)
        );
    }

    #[test]
    fn test_combination_multipliers_sum_components() {
        let wage = WageConfig {
            basic: Decimal::ONE,
            early_start: Decimal::new(12, 1),
            overtime: Decimal::new(14, 1),
            night_premium: Decimal::new(3, 1),
            holiday: Decimal::new(16, 1),
            standard_monthly_hours: Decimal::new(209, 0),
        };
        assert_eq!(
            wage.bucket_multiplier(BucketKind::HolidayEarlyStart),
            Decimal::new(28, 1)
        );
        assert_eq!(
            wage.bucket_multiplier(BucketKind::HolidayOvertime),
            Decimal::new(30, 1)
        );
    }

    #[test]
    fn test_schedule_for_shift() {
        let config = EngineConfig::default();
        assert_eq!(
            config.schedule_for(ShiftType::Day).scheduled_start,
            time(8, 30)
        );
        assert_eq!(
            config.schedule_for(ShiftType::Night).scheduled_start,
            time(19, 0)
        );
        // unknown shifts are evaluated against the day schedule
        assert_eq!(
            config.schedule_for(ShiftType::Unknown).scheduled_start,
            time(8, 30)
        );
    }

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.day_schedule.scheduled_start, time(8, 30));
        assert_eq!(config.night_schedule.scheduled_start, time(19, 0));
        assert_eq!(config.wage.standard_monthly_hours, Decimal::new(209, 0));
    }

    #[test]
    fn test_partial_yaml_overrides_one_section() {
        let yaml = r#"
wage:
  overtime: "2.0"
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.wage.overtime, Decimal::new(20, 1));
        // untouched sections keep their defaults
        assert_eq!(config.wage.basic, Decimal::ONE);
        assert_eq!(config.day_schedule.basic_end, time(17, 30));
    }
}
