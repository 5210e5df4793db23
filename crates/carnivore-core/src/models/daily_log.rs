// ABOUTME: Date-keyed diary record persisted by the log store collaborator
// ABOUTME: Partial updates merge present fields into the stored record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::food::FoodEntry;
use super::recovery::RecoveryProtocol;

/// One day of the diary
///
/// Every field except `date` is optional so a save can carry a partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Calendar day this record belongs to
    pub date: NaiveDate,
    /// Logged foods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<FoodEntry>>,
    /// Free-text description of a reported violation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation_note: Option<String>,
    /// Recovery plan scheduled for this day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_protocol: Option<RecoveryProtocol>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyLog {
    /// Empty record for a date
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: None,
            violation_note: None,
            recovery_protocol: None,
            notes: None,
        }
    }

    /// Overwrite fields that are present in `update`, keep the rest
    pub fn merge(&mut self, update: Self) {
        if update.entries.is_some() {
            self.entries = update.entries;
        }
        if update.violation_note.is_some() {
            self.violation_note = update.violation_note;
        }
        if update.recovery_protocol.is_some() {
            self.recovery_protocol = update.recovery_protocol;
        }
        if update.notes.is_some() {
            self.notes = update.notes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_absent_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let mut stored = DailyLog::new(date);
        stored.notes = Some("felt great".into());

        let mut update = DailyLog::new(date);
        update.violation_note = Some("had a donut".into());
        stored.merge(update);

        assert_eq!(stored.notes.as_deref(), Some("felt great"));
        assert_eq!(stored.violation_note.as_deref(), Some("had a donut"));
        assert!(stored.entries.is_none());
    }
}
