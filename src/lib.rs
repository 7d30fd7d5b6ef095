//! moodcycle: explore every placement of one known date within a recurring
//! mood cycle.
//!
//! The anchor's true position in the cycle is unknown, so the core projects
//! one scenario per possible cycle day, then aggregates the whole hypothesis
//! set into per-date probabilities and a month calendar view. Everything is
//! a pure function of the inputs; the only clock read happens at the
//! [`api`] boundary.

pub mod analysis;
pub mod api;
pub mod calendar;
pub mod error;
pub mod logbook;
pub mod models;
pub mod phase;
pub mod projection;

pub use api::{aggregate, build_grid, classify, enumerate, mood_score, parse_anchor};
pub use error::Error;
pub use logbook::Logbook;
pub use models::{
    Analysis, CalendarCell, CycleConfig, DayProjection, DayRecord, GridMode, MonthCursor,
    PhaseTag, RankedDateEntry, Scenario, SymptomKind, MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH,
};
pub use projection::{enumerate_scenarios, project};
