//! Cross-scenario aggregation: folds every scenario's day labels into
//! per-date counts, turning the hypothesis set into date-level probabilities.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::Error;
use crate::models::{Analysis, PhaseTag, RankedDateEntry, Scenario};

const OVULATION_MOOD_FLOOR: f64 = 75.0;
const MENSTRUAL_MOOD_CEILING: f64 = 50.0;
const PMS_MOOD_CEILING: f64 = 55.0;
const BEST_MOOD_FLOOR: f64 = 80.0;

/// Tally the four categories of interest across all scenarios.
///
/// A date's count says how many hypotheses put that category on it, out of
/// `scenarios.len()` total. Each category comes back ascending by date; that
/// ordering is part of the contract. All mood thresholds compare against the
/// unrounded score.
pub fn aggregate(scenarios: &[Scenario]) -> Result<Analysis, Error> {
    if scenarios.is_empty() {
        return Err(Error::EmptyScenarioSet);
    }
    let total = scenarios.len() as u32;
    let cycle_length = scenarios[0].days.len() as u32;
    let half = cycle_length as f64 / 2.0;

    let mut ovulation: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    let mut menstrual: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    let mut pms: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    let mut best_mood: BTreeMap<NaiveDate, u32> = BTreeMap::new();

    for day in scenarios.iter().flat_map(|s| &s.days) {
        let in_ovulation_band =
            day.cycle_day as f64 >= half - 2.0 && day.cycle_day as f64 <= half + 2.0;
        let in_menstrual_band = day.cycle_day <= 5;
        let in_pms_band = day.cycle_day + 3 >= cycle_length;

        if day.phase == PhaseTag::OvulationPeak
            || (in_ovulation_band && day.mood >= OVULATION_MOOD_FLOOR)
        {
            *ovulation.entry(day.date).or_insert(0) += 1;
        }
        if day.phase == PhaseTag::Menstrual
            || (in_menstrual_band && day.mood <= MENSTRUAL_MOOD_CEILING)
        {
            *menstrual.entry(day.date).or_insert(0) += 1;
        }
        if day.phase == PhaseTag::PreMenstrual || (in_pms_band && day.mood <= PMS_MOOD_CEILING) {
            *pms.entry(day.date).or_insert(0) += 1;
        }
        if day.mood >= BEST_MOOD_FLOOR {
            *best_mood.entry(day.date).or_insert(0) += 1;
        }
    }

    Ok(Analysis {
        ovulation: rank(ovulation, total),
        menstrual: rank(menstrual, total),
        pms: rank(pms, total),
        best_mood: rank(best_mood, total),
    })
}

fn rank(bucket: BTreeMap<NaiveDate, u32>, total: u32) -> Vec<RankedDateEntry> {
    bucket
        .into_iter()
        .map(|(date, count)| RankedDateEntry {
            date,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CycleConfig;
    use crate::projection::enumerate_scenarios;
    use chrono::Duration;

    fn scenarios(anchor: &str, cycle_length: u32) -> Vec<Scenario> {
        let anchor = NaiveDate::parse_from_str(anchor, "%Y-%m-%d").unwrap();
        enumerate_scenarios(&CycleConfig::new(anchor, cycle_length).unwrap())
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(aggregate(&[]), Err(Error::EmptyScenarioSet)));
    }

    #[test]
    fn counts_never_exceed_the_scenario_total() {
        let all = aggregate(&scenarios("2024-03-01", 28)).unwrap();
        for entries in [&all.ovulation, &all.menstrual, &all.pms, &all.best_mood] {
            assert!(!entries.is_empty());
            assert!(entries.iter().all(|e| e.count <= 28));
            assert!(entries
                .iter()
                .all(|e| (0.0..=100.0).contains(&e.percentage)));
        }
    }

    #[test]
    fn categories_are_ordered_by_date() {
        let all = aggregate(&scenarios("2024-03-01", 28)).unwrap();
        for entries in [&all.ovulation, &all.menstrual, &all.pms, &all.best_mood] {
            assert!(entries.windows(2).all(|w| w[0].date < w[1].date));
        }
    }

    #[test]
    fn fully_covered_dates_have_uniform_counts() {
        // Across the 28 hypotheses, each of the 28 projected dates takes
        // every cycle day exactly once, so every date lands the same tally:
        // 5 ovulation days, 5 menstrual, 4 pre-menstrual, 3 with mood >= 80.
        let scenarios = scenarios("2024-03-01", 28);
        let all = aggregate(&scenarios).unwrap();
        let anchor = scenarios[0].anchor();

        for (entries, expected) in [
            (&all.ovulation, 5),
            (&all.menstrual, 5),
            (&all.pms, 4),
            (&all.best_mood, 3),
        ] {
            assert_eq!(entries.len(), 28);
            assert_eq!(entries[0].date, anchor);
            assert_eq!(
                entries.last().unwrap().date,
                anchor + Duration::days(27)
            );
            for entry in entries {
                assert_eq!(entry.count, expected);
                assert!((entry.percentage - f64::from(expected) / 28.0 * 100.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn percentages_follow_counts() {
        let all = aggregate(&scenarios("2024-06-10", 20)).unwrap();
        for entry in &all.best_mood {
            assert!((entry.percentage - entry.count as f64 * 5.0).abs() < 1e-9);
        }
    }
}
