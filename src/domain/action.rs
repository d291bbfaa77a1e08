use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// A single mutation request applied to a grid copy.
///
/// Wire format is internally tagged on `"type"`:
/// `{"type":"CLEAR","pos":[0,0]}`, `{"type":"SET","pos":[1,1],"value":5}`,
/// `{"type":"SWAP","from":[0,0],"to":[1,1]}`. Any other tag decodes to `NoOp`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Action<T> {
    /// Reset the cell to the default value
    Clear { pos: Position },
    /// Overwrite the cell
    Set { pos: Position, value: T },
    /// Exchange two cells
    Swap { from: Position, to: Position },
    #[serde(other)]
    NoOp,
}

impl<T: DeserializeOwned> Action<T> {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

impl<T> Action<T> {
    pub fn clear(pos: impl Into<Position>) -> Self {
        Action::Clear { pos: pos.into() }
    }

    pub fn set(pos: impl Into<Position>, value: T) -> Self {
        Action::Set { pos: pos.into(), value }
    }

    pub fn swap(from: impl Into<Position>, to: impl Into<Position>) -> Self {
        Action::Swap { from: from.into(), to: to.into() }
    }

    /// Tag name as it appears on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Clear { .. } => "CLEAR",
            Action::Set { .. } => "SET",
            Action::Swap { .. } => "SWAP",
            Action::NoOp => "NOOP",
        }
    }
}
