//! Next-occurrence resolution for recurring series.
//!
//! The stored window is never advanced in place; projection is computed on
//! every call, so callers observing different `now` values always see the
//! same series history.

use chrono::{DateTime, Months, TimeDelta, Utc};

use crate::error::{ScheduleError, ScheduleResult};
use crate::schedule::rule::{EndPolicy, RecurrencePattern, RecurrenceRule};
use crate::schedule::window::EventWindow;

/// ## Summary
/// Computes the next occurrence of a series whose `end` is still at or after
/// `now`, or `None` once the series is permanently over.
///
/// The original window counts as occurrence 1 and is returned unchanged while
/// it is still live. Each step advances both edges of the window by one rule
/// interval; the loop terminates because every step strictly advances time.
///
/// ## Errors
/// Returns `ScheduleError` if the rule fails validation (zero interval or
/// occurrence count) or a step leaves chrono's representable range.
pub fn resolve_next_occurrence(
    original: &EventWindow,
    rule: &RecurrenceRule,
    now: DateTime<Utc>,
) -> ScheduleResult<Option<EventWindow>> {
    rule.validate()?;

    if !original.ended_before(now) {
        return Ok(Some(*original));
    }

    // A fixed series end date already behind `now` means no later occurrence
    // can still be live; skip stepping entirely.
    if let EndPolicy::OnDate { date } = rule.end
        && date < now
    {
        tracing::trace!(%date, "series end date already passed");
        return Ok(None);
    }

    let mut window = *original;
    let mut occurrence = 1_u32;

    loop {
        window = step(&window, rule)?;
        occurrence = occurrence.saturating_add(1);

        match rule.end {
            EndPolicy::AfterCount { count } if occurrence > count => {
                tracing::trace!(count, "series exhausted by occurrence count");
                return Ok(None);
            }
            EndPolicy::OnDate { date } if window.start > date => {
                tracing::trace!(%date, "series exhausted by end date");
                return Ok(None);
            }
            EndPolicy::Never | EndPolicy::AfterCount { .. } | EndPolicy::OnDate { .. } => {}
        }

        if !window.ended_before(now) {
            tracing::trace!(occurrence, start = %window.start, "resolved next occurrence");
            return Ok(Some(window));
        }
    }
}

/// Advances both edges of a window by one rule interval.
///
/// Month and year steps clamp a day-of-month that does not exist in the
/// target month (Jan 31 + 1 month lands on the last day of February). The
/// clamped window is taken as-is; only authored windows go through
/// `EventWindow::new` validation.
fn step(window: &EventWindow, rule: &RecurrenceRule) -> ScheduleResult<EventWindow> {
    Ok(EventWindow {
        start: advance(window.start, rule)?,
        end: advance(window.end, rule)?,
    })
}

fn advance(instant: DateTime<Utc>, rule: &RecurrenceRule) -> ScheduleResult<DateTime<Utc>> {
    let stepped = match rule.pattern {
        RecurrencePattern::Daily => {
            instant.checked_add_signed(TimeDelta::days(i64::from(rule.interval)))
        }
        RecurrencePattern::Weekly => {
            instant.checked_add_signed(TimeDelta::days(i64::from(rule.interval) * 7))
        }
        RecurrencePattern::Monthly => instant.checked_add_months(Months::new(rule.interval)),
        RecurrencePattern::Yearly => {
            let months = rule
                .interval
                .checked_mul(12)
                .ok_or(ScheduleError::TimeOverflow)?;
            instant.checked_add_months(Months::new(months))
        }
    };

    stepped.ok_or(ScheduleError::TimeOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const NOW_YMD: (i32, u32, u32) = (2024, 6, 15);

    fn dt(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }

    /// Fixed reference clock: 2024-06-15T00:00:00Z.
    fn now() -> DateTime<Utc> {
        dt(NOW_YMD.0, NOW_YMD.1, NOW_YMD.2, 0)
    }

    fn window(start: DateTime<Utc>, end: DateTime<Utc>) -> EventWindow {
        EventWindow::new(start, end).expect("valid window")
    }

    /// Saturday-evening party, 18:00 to 22:00 on 2024-06-01.
    fn june_party() -> EventWindow {
        window(dt(2024, 6, 1, 18), dt(2024, 6, 1, 22))
    }

    #[test]
    fn test_live_original_returned_unchanged() {
        let original = window(dt(2024, 6, 20, 18), dt(2024, 6, 20, 22));
        let rule = RecurrenceRule::new(RecurrencePattern::Weekly);

        let resolved = resolve_next_occurrence(&original, &rule, now()).unwrap();
        assert_eq!(resolved, Some(original));
    }

    #[test]
    fn test_original_ending_exactly_now_is_still_live() {
        let original = window(dt(2024, 6, 14, 20), dt(2024, 6, 15, 0));
        let rule = RecurrenceRule::new(RecurrencePattern::Daily);

        let resolved = resolve_next_occurrence(&original, &rule, now()).unwrap();
        assert_eq!(resolved, Some(original));
    }

    #[test]
    fn test_weekly_steps_to_first_live_occurrence() {
        let rule = RecurrenceRule::new(RecurrencePattern::Weekly);

        let resolved = resolve_next_occurrence(&june_party(), &rule, now())
            .unwrap()
            .expect("series is endless");
        assert_eq!(resolved.start, dt(2024, 6, 15, 18));
        assert_eq!(resolved.end, dt(2024, 6, 15, 22));
    }

    #[test]
    fn test_returned_occurrence_starts_after_original() {
        let rule = RecurrenceRule::new(RecurrencePattern::Daily).with_interval(3);

        let resolved = resolve_next_occurrence(&june_party(), &rule, now())
            .unwrap()
            .expect("series is endless");
        assert!(resolved.start > june_party().start);
        assert_eq!(resolved.duration(), june_party().duration());
    }

    #[test]
    fn test_interval_multiplies_the_step() {
        let rule = RecurrenceRule::new(RecurrencePattern::Weekly).with_interval(2);

        // 2024-06-01 + 2 weeks = 2024-06-15, live at NOW.
        let resolved = resolve_next_occurrence(&june_party(), &rule, now())
            .unwrap()
            .expect("series is endless");
        assert_eq!(resolved.start, dt(2024, 6, 15, 18));
    }

    #[test]
    fn test_after_count_exhausts_before_live_occurrence() {
        // Occurrence 2 is 2024-06-08, already past; occurrence 3 is not allowed.
        let rule = RecurrenceRule::new(RecurrencePattern::Weekly)
            .with_end(EndPolicy::AfterCount { count: 2 });

        let resolved = resolve_next_occurrence(&june_party(), &rule, now()).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_after_count_allows_occurrences_up_to_count() {
        let rule = RecurrenceRule::new(RecurrencePattern::Weekly)
            .with_end(EndPolicy::AfterCount { count: 3 });

        // Occurrence 3 is 2024-06-15, live at NOW.
        let resolved = resolve_next_occurrence(&june_party(), &rule, now())
            .unwrap()
            .expect("third occurrence is live");
        assert_eq!(resolved.start, dt(2024, 6, 15, 18));
    }

    #[test]
    fn test_after_count_one_never_repeats() {
        let rule = RecurrenceRule::new(RecurrencePattern::Daily)
            .with_end(EndPolicy::AfterCount { count: 1 });

        let resolved = resolve_next_occurrence(&june_party(), &rule, now()).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_after_count_far_future_yields_none() {
        let rule = RecurrenceRule::new(RecurrencePattern::Daily)
            .with_end(EndPolicy::AfterCount { count: 10 });

        let resolved = resolve_next_occurrence(&june_party(), &rule, dt(2030, 1, 1, 0)).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_on_date_in_the_past_short_circuits() {
        let rule = RecurrenceRule::new(RecurrencePattern::Weekly)
            .with_end(EndPolicy::OnDate { date: dt(2024, 6, 10, 0) });

        let resolved = resolve_next_occurrence(&june_party(), &rule, now()).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_on_date_bounds_candidate_starts() {
        // End date is ahead of NOW but before the first live candidate.
        let rule = RecurrenceRule::new(RecurrencePattern::Weekly)
            .with_end(EndPolicy::OnDate { date: dt(2024, 6, 14, 0) });

        let original = window(dt(2024, 5, 1, 18), dt(2024, 5, 1, 22));
        let resolved = resolve_next_occurrence(&original, &rule, dt(2024, 6, 14, 0)).unwrap();
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_on_date_admits_candidate_starting_exactly_on_it() {
        let rule = RecurrenceRule::new(RecurrencePattern::Weekly)
            .with_end(EndPolicy::OnDate { date: dt(2024, 6, 15, 18) });

        let resolved = resolve_next_occurrence(&june_party(), &rule, now())
            .unwrap()
            .expect("candidate starts exactly on the end date");
        assert_eq!(resolved.start, dt(2024, 6, 15, 18));
    }

    #[test]
    fn test_monthly_day_overflow_clamps_instead_of_panicking() {
        // Jan 31 window stepped into February lands on Feb 29 (2024 is a
        // leap year); the clamp is inherited calendar behavior.
        let original = window(dt(2024, 1, 31, 18), dt(2024, 1, 31, 22));
        let rule = RecurrenceRule::new(RecurrencePattern::Monthly);

        let resolved = resolve_next_occurrence(&original, &rule, dt(2024, 2, 10, 0))
            .unwrap()
            .expect("series is endless");
        assert_eq!(resolved.start, dt(2024, 2, 29, 18));
        assert_eq!(resolved.end, dt(2024, 2, 29, 22));
    }

    #[test]
    fn test_monthly_steps_accumulate_from_clamped_window() {
        // Once clamped to Feb 29, later steps advance from the 29th rather
        // than snapping back to the authored day-of-month.
        let original = window(dt(2024, 1, 31, 18), dt(2024, 1, 31, 22));
        let rule = RecurrenceRule::new(RecurrencePattern::Monthly);

        let resolved = resolve_next_occurrence(&original, &rule, dt(2024, 3, 10, 0))
            .unwrap()
            .expect("series is endless");
        assert_eq!(resolved.start, dt(2024, 3, 29, 18));
    }

    #[test]
    fn test_yearly_leap_day_clamps() {
        let original = window(dt(2024, 2, 29, 18), dt(2024, 2, 29, 22));
        let rule = RecurrenceRule::new(RecurrencePattern::Yearly);

        let resolved = resolve_next_occurrence(&original, &rule, dt(2025, 1, 1, 0))
            .unwrap()
            .expect("series is endless");
        assert_eq!(resolved.start, dt(2025, 2, 28, 18));
    }

    #[test]
    fn test_zero_interval_is_a_configuration_error() {
        let rule = RecurrenceRule::new(RecurrencePattern::Daily).with_interval(0);

        let err = resolve_next_occurrence(&june_party(), &rule, now()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInterval(0)));
    }

    #[test]
    fn test_zero_interval_rejected_even_for_live_original() {
        let original = window(dt(2024, 6, 20, 18), dt(2024, 6, 20, 22));
        let rule = RecurrenceRule::new(RecurrencePattern::Daily).with_interval(0);

        let err = resolve_next_occurrence(&original, &rule, now()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInterval(0)));
    }

    #[test]
    fn test_long_dormant_series_resolves() {
        // Daily series authored years ago still resolves in bounded steps.
        let original = window(dt(2020, 1, 1, 18), dt(2020, 1, 1, 22));
        let rule = RecurrenceRule::new(RecurrencePattern::Daily);

        let resolved = resolve_next_occurrence(&original, &rule, now())
            .unwrap()
            .expect("series is endless");
        assert_eq!(resolved.start, dt(2024, 6, 15, 18));
    }
}
