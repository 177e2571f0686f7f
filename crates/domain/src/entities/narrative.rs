//! NarrativeDraft entity - One structured short story produced by the language model
//!
//! A draft is the JSON object returned by a single generation attempt. It is kept
//! as an object map rather than a fixed struct: the model may omit fields (a draft
//! can be invalid and still be handed out as a best-effort fallback) or add
//! optional nested shapes such as `scenes` or `npcs` that downstream prompt
//! derivation reads opportunistically.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The 14 keys every schema-conformant draft carries.
pub const REQUIRED_FIELDS: [&str; 14] = [
    "setting",
    "protagonist_role",
    "objective",
    "twist",
    "npc",
    "hook",
    "quest_offer",
    "choice_a",
    "choice_b",
    "challenge_intro",
    "climax",
    "ending_good",
    "ending_bad",
    "epilogue",
];

/// Fields that carry spoken lines and must be quoted.
pub const DIALOGUE_FIELDS: [&str; 4] = ["quest_offer", "choice_a", "choice_b", "climax"];

/// Key the model uses to reject a prompt instead of writing a story.
pub const REJECTION_FIELD: &str = "error";

/// A single narrative draft as returned by the model.
///
/// Immutable once built; the generation use case owns it until it is handed to
/// the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NarrativeDraft(Map<String, Value>);

impl NarrativeDraft {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw access to a field of any shape.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Text of a string field, `None` when missing or not a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Text of a string field, treating missing or non-string values as empty.
    pub fn text_or_empty(&self, key: &str) -> &str {
        self.text(key).unwrap_or("")
    }

    /// Rejection message if the model answered with an error envelope.
    ///
    /// Non-string error payloads are rendered as JSON so the reason is never lost.
    pub fn rejection(&self) -> Option<String> {
        self.0.get(REJECTION_FIELD).map(|value| match value {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        })
    }

    /// Required keys that are absent, in schema order.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|key| !self.0.contains_key(*key))
            .collect()
    }

    /// The NPC, if `npc` is a mapping with string `name` and `trait`.
    pub fn npc(&self) -> Option<Npc> {
        let npc = self.0.get("npc")?.as_object()?;
        Some(Npc {
            name: npc.get("name")?.as_str()?.to_string(),
            r#trait: npc.get("trait")?.as_str()?.to_string(),
        })
    }

    /// Whether `npc` is a mapping that has both `name` and `trait` keys.
    pub fn has_npc_structure(&self) -> bool {
        self.0
            .get("npc")
            .and_then(Value::as_object)
            .is_some_and(|npc| npc.contains_key("name") && npc.contains_key("trait"))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for NarrativeDraft {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// The single non-player character of a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    pub name: String,
    pub r#trait: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: Value) -> NarrativeDraft {
        match value {
            Value::Object(map) => NarrativeDraft::new(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_missing_required_fields_in_schema_order() {
        let d = draft(json!({"setting": "Glowing Shadowwood", "hook": "Mist rolls in."}));
        let missing = d.missing_required_fields();
        assert_eq!(missing.len(), 12);
        assert_eq!(missing[0], "protagonist_role");
        assert!(!missing.contains(&"hook"));
    }

    #[test]
    fn test_npc_accessor_requires_string_fields() {
        let d = draft(json!({"npc": {"name": "Mira", "trait": "Wise"}}));
        assert_eq!(
            d.npc(),
            Some(Npc {
                name: "Mira".into(),
                r#trait: "Wise".into()
            })
        );
        assert!(d.has_npc_structure());

        let d = draft(json!({"npc": {"name": "Mira", "trait": 3}}));
        assert!(d.npc().is_none());
        assert!(d.has_npc_structure());

        let d = draft(json!({"npc": "Mira"}));
        assert!(!d.has_npc_structure());
    }

    #[test]
    fn test_rejection_message() {
        let d = draft(json!({"error": "seed_not_allowed"}));
        assert_eq!(d.rejection().as_deref(), Some("seed_not_allowed"));

        let d = draft(json!({"error": {"code": 7}}));
        assert_eq!(d.rejection().as_deref(), Some(r#"{"code":7}"#));
    }

    #[test]
    fn test_serializes_transparently() {
        let d = draft(json!({"setting": "Dunes", "extra": [1, 2]}));
        let encoded = serde_json::to_value(&d).unwrap();
        assert_eq!(encoded, json!({"setting": "Dunes", "extra": [1, 2]}));
    }
}
