use chrono::{DateTime, Datelike, Duration, Local, Months};

/// Time left until a target instant.
///
/// `Past` is a distinct state rather than a zeroed breakdown so displays can
/// switch to their elapsed rendering instead of showing `0d 0h 0m 0s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainingTime {
    /// The target is now or already behind us.
    Past,
    Until(TimeBreakdown),
}

impl RemainingTime {
    pub fn is_past(&self) -> bool {
        matches!(self, RemainingTime::Past)
    }
}

/// Calendar-aware decomposition of a positive delta: whole years, whole
/// months within the remaining year, whole days within the remaining month,
/// then clock components within the remaining day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

/// Decompose the time between `now` and `target`.
///
/// Month steps use clamped calendar addition (Jan 31 plus one month lands on
/// the last day of February), so a "month" is a crossed month boundary, not
/// a fixed-length unit. Reconstruction holds to the second: adding the
/// returned components back onto `now` yields `target`.
pub fn remaining(target: DateTime<Local>, now: DateTime<Local>) -> RemainingTime {
    if target <= now {
        return RemainingTime::Past;
    }

    let mut total_months =
        (target.year() - now.year()) * 12 + target.month() as i32 - now.month() as i32;
    while total_months > 0 && add_months(now, total_months as u32) > target {
        total_months -= 1;
    }
    let total_months = total_months.max(0) as u32;

    let after_months = add_months(now, total_months);
    let days = (target - after_months).num_days();
    let after_days = after_months + Duration::days(days);
    let rest = target - after_days;

    RemainingTime::Until(TimeBreakdown {
        years: total_months / 12,
        months: total_months % 12,
        days: days as u32,
        hours: rest.num_hours() as u32,
        minutes: (rest.num_minutes() % 60) as u32,
        seconds: (rest.num_seconds() % 60) as u32,
    })
}

/// Calendar-day difference between `now` and `target`, negative once the
/// target date is behind the current date. Time of day does not matter,
/// only the dates themselves.
pub fn days_remaining(target: DateTime<Local>, now: DateTime<Local>) -> i64 {
    (target.date_naive() - now.date_naive()).num_days()
}

/// Remaining share of a one-year horizon as a percentage, for progress bars.
pub fn progress(target: DateTime<Local>, now: DateTime<Local>) -> u8 {
    let days = days_remaining(target, now) as f64;
    ((days / 365.0) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Badge classification by closeness of the target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// Target date is behind the current date
    Past,
    /// Within a week
    VerySoon,
    /// Within a month
    Approaching,
    /// Within a quarter
    Standard,
    /// Further out
    LongTerm,
}

impl EventStatus {
    pub fn of(target: DateTime<Local>, now: DateTime<Local>) -> Self {
        Self::for_days(days_remaining(target, now))
    }

    pub fn for_days(days: i64) -> Self {
        if days < 0 {
            EventStatus::Past
        } else if days <= 7 {
            EventStatus::VerySoon
        } else if days <= 30 {
            EventStatus::Approaching
        } else if days <= 90 {
            EventStatus::Standard
        } else {
            EventStatus::LongTerm
        }
    }

    /// Badge label in the application's fixed locale.
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Past => "GEÇMİŞ",
            EventStatus::VerySoon => "ÇOK YAKINDA",
            EventStatus::Approaching => "YAKLAŞIYOR",
            EventStatus::Standard => "STANDART",
            EventStatus::LongTerm => "UZUN DÖNEM",
        }
    }
}

fn add_months(instant: DateTime<Local>, months: u32) -> DateTime<Local> {
    instant
        .checked_add_months(Months::new(months))
        .unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::local_datetime;
    use chrono::Duration;
    use test_case::test_case;

    #[test]
    fn test_thirteen_days_out() {
        let now = local_datetime(2026, 6, 1, 0, 0);
        let target = local_datetime(2026, 6, 14, 9, 0);

        let breakdown = match remaining(target, now) {
            RemainingTime::Until(b) => b,
            RemainingTime::Past => panic!("target is in the future"),
        };

        assert_eq!(breakdown.years, 0);
        assert_eq!(breakdown.months, 0);
        assert_eq!(breakdown.days, 13);
        assert_eq!(breakdown.hours, 9);
        assert_eq!(breakdown.minutes, 0);
        assert_eq!(breakdown.seconds, 0);
        assert_eq!(days_remaining(target, now), 13);
    }

    #[test]
    fn test_exact_equality_is_past() {
        let instant = local_datetime(2026, 6, 14, 9, 0);
        assert_eq!(remaining(instant, instant), RemainingTime::Past);
    }

    #[test]
    fn test_one_second_either_side_of_the_boundary() {
        let target = local_datetime(2026, 6, 14, 9, 0);

        assert_eq!(remaining(target, target + Duration::seconds(1)), RemainingTime::Past);

        let just_before = remaining(target, target - Duration::seconds(1));
        assert_eq!(
            just_before,
            RemainingTime::Until(TimeBreakdown {
                seconds: 1,
                ..TimeBreakdown::default()
            })
        );
    }

    #[test]
    fn test_month_end_clamping() {
        // Jan 31 -> Mar 1 is one clamped month (landing on Feb 28) plus a day.
        let now = local_datetime(2026, 1, 31, 12, 0);
        let target = local_datetime(2026, 3, 1, 12, 0);

        let breakdown = match remaining(target, now) {
            RemainingTime::Until(b) => b,
            RemainingTime::Past => panic!("target is in the future"),
        };

        assert_eq!(breakdown.months, 1);
        assert_eq!(breakdown.days, 1);
        assert_eq!(breakdown.hours, 0);
    }

    #[test]
    fn test_leap_february_lengths() {
        // 2028 is a leap year: Jan 31 + 1 month clamps to Feb 29.
        let now = local_datetime(2028, 1, 31, 0, 0);
        let target = local_datetime(2028, 3, 1, 0, 0);

        let breakdown = match remaining(target, now) {
            RemainingTime::Until(b) => b,
            RemainingTime::Past => panic!("target is in the future"),
        };

        assert_eq!(breakdown.months, 1);
        assert_eq!(breakdown.days, 1);
    }

    #[test]
    fn test_multi_year_breakdown() {
        let now = local_datetime(2026, 1, 10, 8, 0);
        let target = local_datetime(2028, 3, 12, 10, 30);

        let breakdown = match remaining(target, now) {
            RemainingTime::Until(b) => b,
            RemainingTime::Past => panic!("target is in the future"),
        };

        assert_eq!(breakdown.years, 2);
        assert_eq!(breakdown.months, 2);
        assert_eq!(breakdown.days, 2);
        assert_eq!(breakdown.hours, 2);
        assert_eq!(breakdown.minutes, 30);
        assert_eq!(breakdown.seconds, 0);
    }

    #[test]
    fn test_days_remaining_ignores_time_of_day() {
        let now = local_datetime(2026, 6, 1, 23, 59);
        let target = local_datetime(2026, 6, 2, 0, 1);
        assert_eq!(days_remaining(target, now), 1);
    }

    #[test]
    fn test_days_remaining_negative_for_past_events() {
        let now = local_datetime(2026, 6, 10, 12, 0);
        let target = local_datetime(2026, 6, 7, 9, 0);
        assert_eq!(days_remaining(target, now), -3);
    }

    #[test_case(-1, EventStatus::Past; "yesterday")]
    #[test_case(0, EventStatus::VerySoon; "today")]
    #[test_case(7, EventStatus::VerySoon; "one week")]
    #[test_case(8, EventStatus::Approaching; "over a week")]
    #[test_case(30, EventStatus::Approaching; "one month")]
    #[test_case(31, EventStatus::Standard; "over a month")]
    #[test_case(90, EventStatus::Standard; "one quarter")]
    #[test_case(91, EventStatus::LongTerm; "over a quarter")]
    fn test_status_thresholds(days: i64, expected: EventStatus) {
        assert_eq!(EventStatus::for_days(days), expected);
    }

    #[test]
    fn test_status_of_uses_calendar_days() {
        let now = local_datetime(2026, 6, 1, 23, 0);
        let target = local_datetime(2026, 6, 8, 1, 0);

        // Seven calendar days out, even though less than 7x24h remain.
        assert_eq!(EventStatus::of(target, now), EventStatus::VerySoon);
        assert_eq!(EventStatus::of(target, now).label(), "ÇOK YAKINDA");
    }

    #[test]
    fn test_progress_clamps_to_percent_range() {
        let now = local_datetime(2026, 6, 1, 0, 0);

        assert_eq!(progress(now + Duration::days(730), now), 100);
        assert_eq!(progress(now - Duration::days(10), now), 0);

        // ~half a year out rounds to 50%.
        assert_eq!(progress(now + Duration::days(183), now), 50);
    }
}
