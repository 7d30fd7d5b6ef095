//! Boundary entry points: parse and validate raw caller input, then hand
//! off to the pure core. Rendering layers go through here and never build
//! core types from unchecked values.

use chrono::NaiveDate;

use crate::error::Error;
use crate::logbook::Logbook;
use crate::models::{
    Analysis, CalendarCell, CycleConfig, GridMode, MonthCursor, PhaseTag, Scenario,
    MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH,
};
use crate::{analysis, calendar, phase, projection};

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_anchor(input: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(input.to_string()))
}

/// Enumerate all cycle scenarios for a raw anchor date and cycle length.
pub fn enumerate(anchor: &str, cycle_length: u32) -> Result<Vec<Scenario>, Error> {
    let config = CycleConfig::new(parse_anchor(anchor)?, cycle_length)?;
    Ok(projection::enumerate_scenarios(&config))
}

/// Aggregate scenarios into the four ranked date categories.
pub fn aggregate(scenarios: &[Scenario]) -> Result<Analysis, Error> {
    analysis::aggregate(scenarios)
}

/// Build the 42-cell month grid, stamping "today" from the local clock.
/// The underlying builder takes the current date as a parameter and stays
/// pure; only this boundary reads the clock.
pub fn build_grid(
    month: MonthCursor,
    scenarios: &[Scenario],
    mode: GridMode,
    logbook: Option<&Logbook>,
) -> Result<Vec<CalendarCell>, Error> {
    let today = chrono::Local::now().date_naive();
    calendar::build_grid(month, scenarios, mode, today, logbook)
}

/// Phase tag and descriptive text for a single day, without a projection.
pub fn classify(cycle_day: u32, cycle_length: u32) -> Result<(PhaseTag, &'static str), Error> {
    check_day(cycle_day, cycle_length)?;
    let tag = phase::classify(cycle_day, cycle_length);
    Ok((tag, tag.detail()))
}

/// Mood score for a single day, without a projection.
pub fn mood_score(cycle_day: u32, cycle_length: u32) -> Result<f64, Error> {
    check_day(cycle_day, cycle_length)?;
    Ok(phase::mood_score(cycle_day, cycle_length))
}

fn check_day(cycle_day: u32, cycle_length: u32) -> Result<(), Error> {
    if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&cycle_length) {
        return Err(Error::InvalidCycleLength(cycle_length));
    }
    if cycle_day < 1 || cycle_day > cycle_length {
        return Err(Error::InvalidCycleDay {
            day: cycle_day,
            cycle_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_anchor("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            parse_anchor(" 2024-03-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        for bad in ["03/01/2024", "2024-13-01", "2024-02-30", "not a date", ""] {
            assert!(
                matches!(parse_anchor(bad), Err(Error::InvalidDate(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn enumerate_validates_both_inputs() {
        assert!(matches!(
            enumerate("nope", 28),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            enumerate("2024-03-01", 19),
            Err(Error::InvalidCycleLength(19))
        ));

        let scenarios = enumerate("2024-03-01", 28).unwrap();
        assert_eq!(scenarios.len(), 28);
    }

    #[test]
    fn single_day_utilities_validate_their_range() {
        let (tag, detail) = classify(3, 28).unwrap();
        assert_eq!(tag, PhaseTag::Menstrual);
        assert_eq!(detail, "Cramps, Low Energy, Emotional");
        assert_eq!(mood_score(1, 28).unwrap(), 40.0);

        assert!(matches!(
            classify(0, 28),
            Err(Error::InvalidCycleDay { day: 0, .. })
        ));
        assert!(matches!(
            mood_score(29, 28),
            Err(Error::InvalidCycleDay { day: 29, .. })
        ));
        assert!(matches!(
            classify(1, 50),
            Err(Error::InvalidCycleLength(50))
        ));
    }

    #[test]
    fn grid_boundary_rejects_empty_sets() {
        let month = MonthCursor {
            year: 2024,
            month: 3,
        };
        assert!(matches!(
            build_grid(month, &[], GridMode::Aggregated, None),
            Err(Error::EmptyScenarioSet)
        ));

        let scenarios = enumerate("2024-03-01", 28).unwrap();
        let cells = build_grid(month, &scenarios, GridMode::Aggregated, None).unwrap();
        assert_eq!(cells.len(), crate::calendar::GRID_CELLS);
    }
}
