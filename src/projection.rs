//! Cycle projection and hypothesis enumeration.
//!
//! The anchor's true position within the cycle is unknowable, so every
//! placement is projected as its own scenario and downstream consumers work
//! with the whole set.

use chrono::Duration;

use crate::models::{CycleConfig, DayProjection, Scenario};
use crate::phase;

/// Project one full cycle under the hypothesis that the anchor date is
/// cycle day `hypothesis_day`.
///
/// The sequence always starts at the anchor and covers `cycle_length`
/// consecutive calendar days; the cycle day wraps past the cycle boundary.
pub fn project(config: &CycleConfig, hypothesis_day: u32) -> Vec<DayProjection> {
    debug_assert!(hypothesis_day >= 1 && hypothesis_day <= config.cycle_length);
    let len = config.cycle_length;

    (1..=len)
        .map(|i| {
            let cycle_day = (hypothesis_day + i - 2) % len + 1;
            DayProjection {
                date: config.anchor + Duration::days(i as i64 - 1),
                cycle_day,
                mood: phase::mood_score(cycle_day, len),
                phase: phase::classify(cycle_day, len),
            }
        })
        .collect()
}

/// Enumerate every self-consistent placement of the anchor within the
/// cycle, one scenario per hypothesis day, ascending.
pub fn enumerate_scenarios(config: &CycleConfig) -> Vec<Scenario> {
    (1..=config.cycle_length)
        .map(|hypothesis| Scenario {
            hypothesis,
            days: project(config, hypothesis),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhaseTag;
    use chrono::NaiveDate;

    fn config(anchor: &str, cycle_length: u32) -> CycleConfig {
        let anchor = NaiveDate::parse_from_str(anchor, "%Y-%m-%d").unwrap();
        CycleConfig::new(anchor, cycle_length).unwrap()
    }

    #[test]
    fn scenario_starts_at_the_anchor_with_its_hypothesis_day() {
        let cfg = config("2024-01-15", 28);

        let first = project(&cfg, 1);
        assert_eq!(first[0].date, cfg.anchor);
        assert_eq!(first[0].cycle_day, 1);

        let fifteenth = project(&cfg, 15);
        assert_eq!(fifteenth[0].date, cfg.anchor);
        assert_eq!(fifteenth[0].cycle_day, 15);
    }

    #[test]
    fn cycle_days_wrap_and_dates_are_consecutive() {
        let cfg = config("2024-01-15", 28);
        let days = project(&cfg, 15);

        assert_eq!(days.len(), 28);
        // Day 14 of the hypothesis reaches cycle day 28, then wraps to 1.
        assert_eq!(days[13].cycle_day, 28);
        assert_eq!(days[14].cycle_day, 1);
        for pair in days.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    #[test]
    fn enumerates_one_scenario_per_hypothesis() {
        for cycle_length in [20, 28, 45] {
            let cfg = config("2024-03-01", cycle_length);
            let scenarios = enumerate_scenarios(&cfg);

            assert_eq!(scenarios.len(), cycle_length as usize);
            let hypotheses: Vec<u32> = scenarios.iter().map(|s| s.hypothesis).collect();
            assert_eq!(hypotheses, (1..=cycle_length).collect::<Vec<_>>());
            assert!(scenarios
                .iter()
                .all(|s| s.days.len() == cycle_length as usize));
            assert!(scenarios.iter().all(|s| s.anchor() == cfg.anchor));
        }
    }

    #[test]
    fn march_first_hypothesis_one_matches_the_model() {
        let cfg = config("2024-03-01", 28);
        let scenarios = enumerate_scenarios(&cfg);
        let days = &scenarios[0].days;

        assert_eq!(scenarios[0].hypothesis, 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(days[0].cycle_day, 1);
        assert_eq!(days[0].phase, PhaseTag::Menstrual);
        assert_eq!(days[0].mood_rounded(), 40.0);

        // Cycle day 15 falls inside the [12, 16] ovulation band.
        assert_eq!(days[14].cycle_day, 15);
        assert_eq!(days[14].phase, PhaseTag::OvulationPeak);
        assert_eq!(days[14].mood_rounded(), 81.54);
    }

    #[test]
    fn projection_is_deterministic() {
        let cfg = config("2024-03-01", 33);
        assert_eq!(enumerate_scenarios(&cfg), enumerate_scenarios(&cfg));
    }
}
