/// Validation errors raised at the boundary entry points. The core never
/// substitutes a default for bad input; every rejection has its own kind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("cycle length {0} is outside the supported range 20..=45")]
    InvalidCycleLength(u32),
    #[error("cycle day {day} is outside 1..={cycle_length}")]
    InvalidCycleDay { day: u32, cycle_length: u32 },
    #[error("no scenarios have been computed")]
    EmptyScenarioSet,
    #[error("no scenario assumes the anchor is cycle day {0}")]
    UnknownScenario(u32),
}
