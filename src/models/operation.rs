use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Rename,
    Delete,
    Copy,
    Move,
    Search,
    Properties,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Rename => write!(f, "rename"),
            Self::Delete => write!(f, "delete"),
            Self::Copy => write!(f, "copy"),
            Self::Move => write!(f, "move"),
            Self::Search => write!(f, "search"),
            Self::Properties => write!(f, "read properties of"),
        }
    }
}
