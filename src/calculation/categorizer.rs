//! Work-time categorization.
//!
//! Splits one day's check-in/check-out interval, minus the shift's unpaid
//! break window, into paid-time buckets. The split is interval arithmetic on
//! a minute line anchored at the punch day's midnight, so midnight-crossing
//! shifts need no special casing beyond extending the line into the next
//! day. Every bucket is rounded down to the nearest half hour independently;
//! rounding the total instead would change wage amounts.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{BucketKind, Punch, ShiftType, WorkTimeBuckets};

use super::shift::clock_minutes;

/// A half-open interval of minutes on the punch-day minute line.
type Span = (i32, i32);

fn span_len(span: Span) -> i32 {
    (span.1 - span.0).max(0)
}

fn intersect(a: Span, b: Span) -> Span {
    (a.0.max(b.0), a.1.min(b.1))
}

fn overlap_total(span: Span, windows: &[Span]) -> i32 {
    windows
        .iter()
        .map(|&window| span_len(intersect(span, window)))
        .sum()
}

/// Instantiates a clock window across adjacent days of the minute line.
/// A window whose end does not follow its start wraps midnight.
fn clock_windows(start: i32, end: i32) -> Vec<Span> {
    let end = if end <= start { end + 1440 } else { end };
    (-2..=1).map(|day| (start + day * 1440, end + day * 1440)).collect()
}

/// Raw per-bucket minute tallies before rounding. The sum of all tallies is
/// exactly the elapsed time minus break overlap.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct MinuteTally {
    minutes: [i32; 9],
}

impl MinuteTally {
    fn add(&mut self, kind: BucketKind, minutes: i32) {
        let index = BucketKind::ALL
            .iter()
            .position(|&k| k == kind)
            .expect("kind in ALL");
        self.minutes[index] += minutes;
    }

    fn total(&self) -> i32 {
        self.minutes.iter().sum()
    }

    fn rounded(&self) -> WorkTimeBuckets {
        let mut buckets = WorkTimeBuckets::zero();
        for (index, kind) in BucketKind::ALL.into_iter().enumerate() {
            buckets.set(kind, floor_half_hour(self.minutes[index]));
        }
        buckets
    }
}

/// Rounds a minute count down to the nearest half hour, as Decimal hours.
fn floor_half_hour(minutes: i32) -> Decimal {
    Decimal::new((minutes / 30) as i64 * 5, 1)
}

fn tally(
    check_in: chrono::NaiveTime,
    check_out: chrono::NaiveTime,
    shift: ShiftType,
    is_holiday: bool,
    config: &EngineConfig,
) -> MinuteTally {
    let mut result = MinuteTally::default();

    let m_in = clock_minutes(check_in);
    let mut m_out = clock_minutes(check_out);
    if m_out < m_in {
        // check-out clock time before check-in means the shift crossed midnight
        m_out += 1440;
    }
    if m_out == m_in {
        return result;
    }

    let schedule = config.schedule_for(shift);
    let mut sched_start = clock_minutes(schedule.scheduled_start);
    let mut basic_end = clock_minutes(schedule.basic_end);
    if basic_end <= sched_start {
        basic_end += 1440;
    }
    // A night punch-in after midnight belongs to the previous evening's
    // schedule; shift the schedule back one day on the minute line.
    if shift == ShiftType::Night && m_in < clock_minutes(config.shift.day_window_start) {
        sched_start -= 1440;
        basic_end -= 1440;
    }

    let breaks = clock_windows(
        clock_minutes(schedule.break_start),
        clock_minutes(schedule.break_end),
    );
    let nights = clock_windows(
        clock_minutes(config.night_window.start),
        clock_minutes(config.night_window.end),
    );

    let worked = (m_in, m_out);
    let segments = [
        intersect(worked, (i32::MIN / 2, sched_start)),
        intersect(worked, (sched_start, basic_end)),
        intersect(worked, (basic_end, i32::MAX / 2)),
    ];

    for (segment_index, segment) in segments.into_iter().enumerate() {
        if span_len(segment) == 0 {
            continue;
        }

        let break_minutes = overlap_total(segment, &breaks);
        let net = span_len(segment) - break_minutes;

        // deep-night minutes net of breaks, via the triple intersection
        let mut night_minutes = overlap_total(segment, &nights);
        for &break_window in &breaks {
            let inside_break = intersect(segment, break_window);
            if span_len(inside_break) > 0 {
                night_minutes -= overlap_total(inside_break, &nights);
            }
        }
        let plain_minutes = net - night_minutes;

        match (segment_index, is_holiday) {
            // early-start: the night premium does not combine here
            (0, false) => result.add(BucketKind::EarlyStart, net),
            (0, true) => result.add(BucketKind::HolidayEarlyStart, net),
            (1, false) => {
                result.add(BucketKind::Night, night_minutes);
                result.add(BucketKind::Basic, plain_minutes);
            }
            // holiday re-routing: scheduled minutes all go to the holiday
            // bucket; there is no holiday+night combination
            (1, true) => result.add(BucketKind::Holiday, net),
            (2, false) => {
                result.add(BucketKind::OvertimeNight, night_minutes);
                result.add(BucketKind::Overtime, plain_minutes);
            }
            (2, true) => {
                result.add(BucketKind::HolidayOvertimeNight, night_minutes);
                result.add(BucketKind::HolidayOvertime, plain_minutes);
            }
            _ => unreachable!("three segments"),
        }
    }

    result
}

/// Splits a worked interval into paid-time buckets.
///
/// A check-out clock time earlier than the check-in is treated as crossing
/// midnight. The shift's unpaid break window is subtracted before
/// partitioning, deep-night minutes earn their own (additive-premium)
/// buckets, and on holidays scheduled and overtime minutes re-route to the
/// holiday bucket family. Each bucket rounds down to the nearest half hour.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::categorize_work_time;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::ShiftType;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// let buckets = categorize_work_time(
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
///     ShiftType::Day,
///     false,
///     &config,
/// );
/// assert_eq!(buckets.early_start, Decimal::new(5, 1)); // 0.5
/// assert_eq!(buckets.basic, Decimal::new(80, 1)); // 8.0
/// assert_eq!(buckets.overtime, Decimal::new(10, 1)); // 1.0
/// ```
pub fn categorize_work_time(
    check_in: chrono::NaiveTime,
    check_out: chrono::NaiveTime,
    shift: ShiftType,
    is_holiday: bool,
    config: &EngineConfig,
) -> WorkTimeBuckets {
    tally(check_in, check_out, shift, is_holiday, config).rounded()
}

/// Categorizes a punch, honoring the administrative overrides.
///
/// A punch with `special_work_hours` set is credited entirely to the holiday
/// bucket without categorization. A punch carrying a leave override, or one
/// missing a check-in or check-out, yields zero buckets.
pub fn categorize_punch(
    punch: &Punch,
    shift: ShiftType,
    is_holiday: bool,
    config: &EngineConfig,
) -> WorkTimeBuckets {
    if let Some(hours) = punch.special_work_hours {
        let mut buckets = WorkTimeBuckets::zero();
        buckets.set(BucketKind::Holiday, hours);
        return buckets;
    }
    if punch.leave_type_override.is_some() {
        return WorkTimeBuckets::zero();
    }
    match (punch.check_in, punch.check_out) {
        (Some(check_in), Some(check_out)) => {
            categorize_work_time(check_in, check_out, shift, is_holiday, config)
        }
        _ => WorkTimeBuckets::zero(),
    }
}
