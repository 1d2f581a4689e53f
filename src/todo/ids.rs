use super::models::TodoId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Counter,
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counter" => Ok(Self::Counter),
            "uuid" => Ok(Self::Uuid),
            other => Err(format!("expected 'counter' or 'uuid', got '{}'", other)),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counter => write!(f, "counter"),
            Self::Uuid => write!(f, "uuid"),
        }
    }
}

/// Hands out ids that are unique for the lifetime of the source.
#[derive(Debug, Clone)]
pub struct IdSource {
    strategy: IdStrategy,
    next_seq: u64,
}

impl IdSource {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next_seq: 1,
        }
    }

    pub fn next_id(&mut self) -> TodoId {
        match self.strategy {
            IdStrategy::Counter => {
                let id = TodoId::Seq(self.next_seq);
                self.next_seq += 1;
                id
            }
            IdStrategy::Uuid => TodoId::Uuid(Uuid::new_v4()),
        }
    }
}
