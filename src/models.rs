use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

pub const MIN_CYCLE_LENGTH: u32 = 20;
pub const MAX_CYCLE_LENGTH: u32 = 45;

/// Named segment of the cycle. Declaration order doubles as the tie-break
/// order when the calendar picks a dominant phase for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseTag {
    Menstrual,
    PostMenstrual,
    OvulationPeak,
    LutealPhase,
    PreMenstrual,
}

impl PhaseTag {
    pub const ALL: [PhaseTag; 5] = [
        PhaseTag::Menstrual,
        PhaseTag::PostMenstrual,
        PhaseTag::OvulationPeak,
        PhaseTag::LutealPhase,
        PhaseTag::PreMenstrual,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PhaseTag::Menstrual => "Menstrual",
            PhaseTag::PostMenstrual => "Post-Menstrual",
            PhaseTag::OvulationPeak => "Ovulation Peak",
            PhaseTag::LutealPhase => "Luteal Phase",
            PhaseTag::PreMenstrual => "Pre-Menstrual",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            PhaseTag::Menstrual => "Cramps, Low Energy, Emotional",
            PhaseTag::PostMenstrual => "Recovery, Gradual Uplift",
            PhaseTag::OvulationPeak => "Happy, Energetic, Lusty",
            PhaseTag::LutealPhase => "Stable, Content",
            PhaseTag::PreMenstrual => "Irritable, Sad, Pre-Period Mood",
        }
    }
}

impl std::fmt::Display for PhaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// User input: one date of known significance plus the assumed cycle length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleConfig {
    pub anchor: NaiveDate,
    pub cycle_length: u32,
}

impl CycleConfig {
    pub fn new(anchor: NaiveDate, cycle_length: u32) -> Result<Self, Error> {
        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&cycle_length) {
            return Err(Error::InvalidCycleLength(cycle_length));
        }
        Ok(Self {
            anchor,
            cycle_length,
        })
    }
}

/// One projected day: calendar date, position within the cycle, and the
/// modeled mood/phase for that position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayProjection {
    pub date: NaiveDate,
    pub cycle_day: u32,
    pub mood: f64,
    pub phase: PhaseTag,
}

impl DayProjection {
    /// Two-decimal display value. Threshold comparisons elsewhere use the
    /// raw `mood` so rounding cannot flip them at a boundary.
    pub fn mood_rounded(&self) -> f64 {
        (self.mood * 100.0).round() / 100.0
    }
}

/// One full cycle projection under the hypothesis that the anchor date is
/// cycle day `hypothesis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub hypothesis: u32,
    pub days: Vec<DayProjection>,
}

impl Scenario {
    /// First projected date; every scenario starts at the anchor.
    pub fn anchor(&self) -> NaiveDate {
        self.days[0].date
    }
}

/// How many of the scenarios place a category on this date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedDateEntry {
    pub date: NaiveDate,
    pub count: u32,
    pub percentage: f64,
}

/// Cross-scenario tallies, each category ascending by date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub ovulation: Vec<RankedDateEntry>,
    pub menstrual: Vec<RankedDateEntry>,
    pub pms: Vec<RankedDateEntry>,
    pub best_mood: Vec<RankedDateEntry>,
}

/// Displayed-month cursor for the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Result<NaiveDate, Error> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or_else(|| Error::InvalidDate(format!("{:04}-{:02}", self.year, self.month)))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// What the calendar shows per cell: the cross-scenario average or one
/// selected hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridMode {
    Aggregated,
    Scenario(u32),
}

/// One cell of the fixed 6x7 month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_anchor: bool,
    pub is_today: bool,
    pub mood: Option<f64>,
    pub phase: Option<PhaseTag>,
    pub logged: Option<DayRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymptomKind {
    Cramps,
    Headache,
    MoodLow,
    MoodHigh,
    Fatigue,
    Bloating,
}

/// Manually logged day: user-entered mood and symptoms, independent of the
/// projection model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub mood: Option<u8>,
    pub symptoms: Vec<SymptomKind>,
    pub notes: String,
}
