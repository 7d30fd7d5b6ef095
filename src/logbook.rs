//! Manual day records: user-entered mood and symptoms keyed by date.
//!
//! This store is independent of the projection model; the calendar can
//! overlay it, nothing else reads it. The caller owns serialization — the
//! core never touches the filesystem.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{DayRecord, MonthCursor, SymptomKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Logbook {
    records: BTreeMap<NaiveDate, DayRecord>,
}

impl Logbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the record for a date. Symptoms and notes are replaced
    /// wholesale; the record id survives re-logging the same day.
    pub fn record(
        &mut self,
        date: NaiveDate,
        mood: Option<u8>,
        symptoms: Vec<SymptomKind>,
        notes: impl Into<String>,
    ) -> &DayRecord {
        let entry = self.records.entry(date).or_insert_with(|| DayRecord {
            id: Uuid::new_v4(),
            date,
            mood: None,
            symptoms: Vec::new(),
            notes: String::new(),
        });
        entry.mood = mood.map(|m| m.clamp(1, 100));
        entry.symptoms = symptoms;
        entry.notes = notes.into();
        entry
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.records.get(&date)
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<DayRecord> {
        self.records.remove(&date)
    }

    /// Records falling inside the displayed month, ascending by date.
    pub fn month(&self, cursor: MonthCursor) -> Vec<&DayRecord> {
        self.records
            .values()
            .filter(|record| cursor.contains(record.date))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
