use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a persisted record.
///
/// The backend has used both numeric ids (`"id": 1`) and document-style
/// string ids (`"_id": "65f..."`). Both shapes deserialize into this type so
/// the views never have to care which revision of the API they talk to.
///
/// `0` and the empty string are the *sentinel* values: a record carrying one
/// of them has not been persisted yet, and saving it issues a POST instead of
/// a PUT.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// The "new record" sentinel.
    pub const UNSAVED: RecordId = RecordId::Number(0);

    /// Returns `true` for the sentinel values (`0` or a blank string).
    pub fn is_unsaved(&self) -> bool {
        match self {
            RecordId::Number(n) => *n == 0,
            RecordId::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn is_saved(&self) -> bool {
        !self.is_unsaved()
    }
}

/// Picks the identifier of a record that may carry `id`, `_id` or both.
/// A saved `id` wins; otherwise the legacy `_id` is used when present.
pub(crate) fn preferred<'a>(id: &'a RecordId, legacy: Option<&'a RecordId>) -> &'a RecordId {
    match legacy {
        Some(legacy) if id.is_unsaved() => legacy,
        _ => id,
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::UNSAVED
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    /// Parses a path or form value. Numeric strings become `Number`,
    /// everything else stays `Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::Text(trimmed.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_deserialize() {
        let n: RecordId = serde_json::from_str("7").unwrap();
        let s: RecordId = serde_json::from_str("\"65f0aa\"").unwrap();
        assert_eq!(n, RecordId::Number(7));
        assert_eq!(s, RecordId::Text("65f0aa".into()));
    }

    #[test]
    fn sentinels_are_unsaved() {
        assert!(RecordId::UNSAVED.is_unsaved());
        assert!(RecordId::Text("  ".into()).is_unsaved());
        assert!(RecordId::from(3).is_saved());
        assert!(RecordId::from("abc").is_saved());
    }

    #[test]
    fn parses_path_values() {
        assert_eq!("12".parse::<RecordId>().unwrap(), RecordId::Number(12));
        assert_eq!("x-1".parse::<RecordId>().unwrap(), RecordId::Text("x-1".into()));
    }
}
