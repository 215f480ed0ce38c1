use serde::{Deserialize, Serialize};

/// Longest component name kept, in bytes.
pub const NAME_MAX_BYTES: usize = 29;
/// Longest component type kept, in bytes.
pub const KIND_MAX_BYTES: usize = 19;

/// One component entry.
///
/// Text fields are owned and length-bounded: [`Record::new`] cuts anything
/// longer than the limit at the last char boundary that fits. Priority is
/// stored as given, range checks belong to the input layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    priority: i32,
}

impl Record {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, priority: i32) -> Self {
        Self {
            name: truncate_to_bytes(name.into(), NAME_MAX_BYTES),
            kind: truncate_to_bytes(kind.into(), KIND_MAX_BYTES),
            priority,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}

/// Shortens `text` to at most `max_bytes` without splitting a UTF-8 sequence.
pub fn truncate_to_bytes(mut text: String, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text;
    }
    let mut cut = max_bytes;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_short_fields() {
        let record = Record::new("Motor", "Propulsao", 2);
        assert_eq!(record.name(), "Motor");
        assert_eq!(record.kind(), "Propulsao");
        assert_eq!(record.priority(), 2);
    }

    #[test]
    fn test_record_truncates_long_fields() {
        let record = Record::new("a".repeat(40), "b".repeat(25), 99);
        assert_eq!(record.name().len(), NAME_MAX_BYTES);
        assert_eq!(record.kind().len(), KIND_MAX_BYTES);
        assert_eq!(record.priority(), 99);
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // "ã" is two bytes; a cut at byte 3 would split the second one
        let text = "ãã".to_string();
        assert_eq!(truncate_to_bytes(text, 3), "ã");
    }

    #[test]
    fn test_record_serializes_kind_as_type() {
        let json = serde_json::to_value(Record::new("Chip", "Logica", 1)).unwrap();
        assert_eq!(json["type"], "Logica");
        assert_eq!(json["priority"], 1);
    }
}
