//! Day-level arithmetic model: phase bands and the triangular mood wave.
//!
//! Both functions are pure and take the cycle length explicitly so a single
//! day can be evaluated without building a full projection.

use crate::models::PhaseTag;

pub const MIN_MOOD: f64 = 40.0;
pub const MAX_MOOD: f64 = 85.0;

/// Classify a cycle day into its phase band.
///
/// Bands scale with the cycle midpoint `H = cycle_length / 2`:
/// `[1, 5]` menstrual, `(5, H-2)` post-menstrual, `[H-2, H+2]` ovulation
/// peak, `(H+2, len-3)` luteal, `[len-3, len]` pre-menstrual. The arms are
/// tested in band order with a catch-all tail, so short cycles that squeeze
/// a band to nothing simply hand its days to the next one and every day in
/// `1..=cycle_length` gets exactly one tag.
pub fn classify(cycle_day: u32, cycle_length: u32) -> PhaseTag {
    debug_assert!(cycle_day >= 1 && cycle_day <= cycle_length);
    let day = cycle_day as f64;
    let half = cycle_length as f64 / 2.0;

    if cycle_day <= 5 {
        PhaseTag::Menstrual
    } else if day < half - 2.0 {
        PhaseTag::PostMenstrual
    } else if day <= half + 2.0 {
        PhaseTag::OvulationPeak
    } else if day < (cycle_length - 3) as f64 {
        PhaseTag::LutealPhase
    } else {
        PhaseTag::PreMenstrual
    }
}

/// Mood score for a cycle day, in `[40.0, 85.0]`.
///
/// Symmetric triangular wave: 40.0 at day 1, climbing linearly to 85.0 at
/// the midpoint, then back down by the end of the cycle. The raw descending
/// line lands one step below the floor on the final day; the score is
/// clamped so the contract range holds. The returned value is unrounded;
/// rounding happens only at display time.
pub fn mood_score(cycle_day: u32, cycle_length: u32) -> f64 {
    debug_assert!(cycle_day >= 1 && cycle_day <= cycle_length);
    let day = cycle_day as f64;
    let half = cycle_length as f64 / 2.0;
    let step = (MAX_MOOD - MIN_MOOD) / (half - 1.0);

    if day <= half {
        MIN_MOOD + (day - 1.0) * step
    } else {
        (MAX_MOOD - (day - half) * step).max(MIN_MOOD)
    }
}
