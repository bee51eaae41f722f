//! Serialized shapes of the records kept in the key-value store.

use guide_core::model::{ProgressEntry, ProgressMap, QuizId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Persisted progress for one quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntryRecord {
    #[serde(default)]
    pub best: u32,
    #[serde(default)]
    pub passed: bool,
}

/// Persisted progress map.
///
/// Entries are written one quiz at a time, so a missing entry means "no attempt
/// yet" and defaults on its own. Any malformed entry rejects the whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub quiz1: ProgressEntryRecord,
    #[serde(default)]
    pub quiz2: ProgressEntryRecord,
    #[serde(default)]
    pub quiz3: ProgressEntryRecord,
}

impl From<ProgressEntryRecord> for ProgressEntry {
    fn from(record: ProgressEntryRecord) -> Self {
        ProgressEntry::new(record.best, record.passed)
    }
}

impl From<ProgressEntry> for ProgressEntryRecord {
    fn from(entry: ProgressEntry) -> Self {
        Self {
            best: entry.best_score(),
            passed: entry.passed(),
        }
    }
}

impl ProgressRecord {
    #[must_use]
    pub fn from_map(map: &ProgressMap) -> Self {
        Self {
            quiz1: map.get(QuizId::Quiz1).into(),
            quiz2: map.get(QuizId::Quiz2).into(),
            quiz3: map.get(QuizId::Quiz3).into(),
        }
    }

    #[must_use]
    pub fn into_map(self) -> ProgressMap {
        ProgressMap::new(self.quiz1.into(), self.quiz2.into(), self.quiz3.into())
    }
}

/// Decode a stored progress record.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not a valid progress record.
pub fn decode_progress(raw: &str) -> Result<ProgressMap, StorageError> {
    serde_json::from_str::<ProgressRecord>(raw)
        .map(ProgressRecord::into_map)
        .map_err(ser)
}

/// Encode a progress map for storage.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_progress(map: &ProgressMap) -> Result<String, StorageError> {
    serde_json::to_string(&ProgressRecord::from_map(map)).map_err(ser)
}

/// Decode the saved-places list. Non-string items are dropped.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not a JSON array.
pub fn decode_saved_places(raw: &str) -> Result<Vec<String>, StorageError> {
    let items: Vec<Value> = serde_json::from_str(raw).map_err(ser)?;
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(id) => Some(id),
            _ => None,
        })
        .collect())
}

/// Encode the saved-places list for storage.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_saved_places(ids: &[String]) -> Result<String, StorageError> {
    serde_json::to_string(ids).map_err(ser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let map = decode_progress(
            r#"{"quiz1":{"best":10,"passed":true},"quiz2":{"best":7,"passed":false},"quiz3":{"best":0,"passed":false}}"#,
        )
        .unwrap();
        assert_eq!(map.get(QuizId::Quiz1), ProgressEntry::new(10, true));
        assert_eq!(map.get(QuizId::Quiz2), ProgressEntry::new(7, false));
        assert_eq!(map.get(QuizId::Quiz3), ProgressEntry::default());
    }

    #[test]
    fn missing_entries_default_individually() {
        let map = decode_progress(r#"{"quiz2":{"best":4}}"#).unwrap();
        assert_eq!(map.get(QuizId::Quiz1), ProgressEntry::default());
        assert_eq!(map.get(QuizId::Quiz2), ProgressEntry::new(4, false));
    }

    #[test]
    fn malformed_entry_rejects_record() {
        assert!(decode_progress(r#"{"quiz1":{"best":-3,"passed":true}}"#).is_err());
        assert!(decode_progress(r#"{"quiz1":"done"}"#).is_err());
        assert!(decode_progress("not json").is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let map = decode_progress(r#"{"quiz9":{"best":1},"quiz1":{"best":2}}"#).unwrap();
        assert_eq!(map.get(QuizId::Quiz1).best_score(), 2);
    }

    #[test]
    fn encoded_progress_uses_quiz_keys() {
        let mut map = ProgressMap::default();
        map.record_attempt(QuizId::Quiz1, 10, true);
        let raw = encode_progress(&map).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["quiz1"]["best"], 10);
        assert_eq!(value["quiz1"]["passed"], true);
        assert_eq!(value["quiz3"]["passed"], false);
    }

    #[test]
    fn saved_places_drop_non_strings() {
        let ids = decode_saved_places(r#"["spalentor", 4, null, "zoo-basel"]"#).unwrap();
        assert_eq!(ids, vec!["spalentor".to_string(), "zoo-basel".to_string()]);
        assert!(decode_saved_places(r#"{"a":1}"#).is_err());
    }
}
