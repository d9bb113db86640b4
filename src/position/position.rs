use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::SelectionError;

/// A position in a text buffer as (line, column)
/// Both are 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PositionFields", into = "PositionFields")]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Wire form of a position
#[derive(Serialize, Deserialize)]
struct PositionFields {
    #[serde(rename = "lineNumber")]
    line: u32,
    column: u32,
}

impl Position {
    /// Create new position
    pub fn new(line: u32, column: u32) -> Self {
        debug_assert!(
            line >= 1 && column >= 1,
            "positions are 1-based, got ({line},{column})"
        );
        Self { line, column }
    }

    /// Create new position, rejecting zero coordinates
    pub fn try_new(line: u32, column: u32) -> Result<Self, SelectionError> {
        if line == 0 || column == 0 {
            return Err(SelectionError::InvalidCoordinate { line, column });
        }
        Ok(Self { line, column })
    }

    /// First position of a document (1, 1)
    pub fn origin() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Strictly before `other` in document order
    pub fn is_before(&self, other: &Position) -> bool {
        self < other
    }

    pub fn is_before_or_equal(&self, other: &Position) -> bool {
        self <= other
    }

    // Used by lifting when the producer is trusted to pass zero through.
    pub(crate) fn unchecked(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl TryFrom<PositionFields> for Position {
    type Error = SelectionError;

    fn try_from(fields: PositionFields) -> Result<Self, Self::Error> {
        Position::try_new(fields.line, fields.column)
    }
}

impl From<Position> for PositionFields {
    fn from(position: Position) -> Self {
        Self {
            line: position.line,
            column: position.column,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}
