use super::models::TodoId;
use serde::{Deserialize, Deserializer, Serialize, de};

/// A named request to change the todo list.
///
/// On the wire an intent is `{"type": "ADD_TODO", "payload": "..."}`. Types
/// other than the three known ones decode to [`Intent::Unknown`] whatever
/// their payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum Intent {
    #[serde(rename = "ADD_TODO")]
    Add(String),
    #[serde(rename = "DELETE_TODO")]
    Delete(TodoId),
    #[serde(rename = "TOGGLE_TODO")]
    Toggle(TodoId),
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

#[derive(Deserialize)]
struct WireIntent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl<'de> Deserialize<'de> for Intent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireIntent::deserialize(deserializer)?;
        match wire.kind.as_str() {
            "ADD_TODO" => serde_json::from_value(wire.payload).map(Self::Add),
            "DELETE_TODO" => serde_json::from_value(wire.payload).map(Self::Delete),
            "TOGGLE_TODO" => serde_json::from_value(wire.payload).map(Self::Toggle),
            _ => Ok(Self::Unknown),
        }
        .map_err(de::Error::custom)
    }
}

impl Intent {
    /// Builds an add intent from raw input, or `None` if the input is blank.
    /// The text is kept as typed.
    pub fn add_from_input(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            None
        } else {
            Some(Self::Add(input.to_string()))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "ADD_TODO",
            Self::Delete(_) => "DELETE_TODO",
            Self::Toggle(_) => "TOGGLE_TODO",
            Self::Unknown => "UNKNOWN",
        }
    }
}
