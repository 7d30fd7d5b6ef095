//! Fixed six-week month grid mapping calendar dates to projected data.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::Error;
use crate::logbook::Logbook;
use crate::models::{CalendarCell, GridMode, MonthCursor, PhaseTag, Scenario};

/// The grid always spans six full Sunday-to-Saturday weeks.
pub const GRID_CELLS: usize = 42;

type DayData = (f64, PhaseTag);

/// Build the 42-cell grid for a displayed month.
///
/// The first cell backs up from the first of the month to the nearest
/// Sunday; cells outside the displayed month carry `in_month == false`.
/// Cell data comes either from the cross-scenario aggregate or from one
/// selected hypothesis, and dates no scenario touches stay blank. Manual
/// logbook records, when provided, ride along in `logged`.
pub fn build_grid(
    month: MonthCursor,
    scenarios: &[Scenario],
    mode: GridMode,
    today: NaiveDate,
    logbook: Option<&Logbook>,
) -> Result<Vec<CalendarCell>, Error> {
    if scenarios.is_empty() {
        return Err(Error::EmptyScenarioSet);
    }
    let anchor = scenarios[0].anchor();
    let by_date = resolve_days(scenarios, mode)?;

    let first = month.first_day()?;
    let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);

    Ok((0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let (mood, phase) = match by_date.get(&date) {
                Some(&(mood, phase)) => (Some(mood), Some(phase)),
                None => (None, None),
            };
            CalendarCell {
                date,
                in_month: month.contains(date),
                is_anchor: date == anchor,
                is_today: date == today,
                mood,
                phase,
                logged: logbook.and_then(|book| book.get(date)).cloned(),
            }
        })
        .collect())
}

fn resolve_days(
    scenarios: &[Scenario],
    mode: GridMode,
) -> Result<BTreeMap<NaiveDate, DayData>, Error> {
    match mode {
        GridMode::Scenario(hypothesis) => {
            let scenario = scenarios
                .iter()
                .find(|s| s.hypothesis == hypothesis)
                .ok_or(Error::UnknownScenario(hypothesis))?;
            Ok(scenario
                .days
                .iter()
                .map(|day| (day.date, (day.mood, day.phase)))
                .collect())
        }
        GridMode::Aggregated => {
            let mut acc: BTreeMap<NaiveDate, (f64, u32, [u32; 5])> = BTreeMap::new();
            for day in scenarios.iter().flat_map(|s| &s.days) {
                let entry = acc.entry(day.date).or_insert((0.0, 0, [0; 5]));
                entry.0 += day.mood;
                entry.1 += 1;
                entry.2[day.phase as usize] += 1;
            }
            Ok(acc
                .into_iter()
                .map(|(date, (mood_sum, touched, tags))| {
                    (date, (mood_sum / touched as f64, dominant_phase(tags)))
                })
                .collect())
        }
    }
}

/// Most frequent tag for a date; ties go to the earlier-declared phase.
fn dominant_phase(tag_counts: [u32; 5]) -> PhaseTag {
    let mut dominant = PhaseTag::Menstrual;
    let mut best = 0;
    for (tag, count) in PhaseTag::ALL.into_iter().zip(tag_counts) {
        if count > best {
            best = count;
            dominant = tag;
        }
    }
    dominant
}
