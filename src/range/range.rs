use serde::{Deserialize, Serialize};

use crate::error::SelectionError;
use crate::position::Position;

/// A span of text between two positions, always normalized so `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeFields", into = "RangeFields")]
pub struct Range {
    start: Position,
    end: Position,
}

/// Wire form of a range
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeFields {
    start_line_number: u32,
    start_column: u32,
    end_line_number: u32,
    end_column: u32,
}

impl Range {
    /// Create new range, swapping the endpoints if given out of order
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self::from_positions(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    /// Create range from two positions in any order
    pub fn from_positions(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn start_line_number(&self) -> u32 {
        self.start.line
    }

    pub fn start_column(&self) -> u32 {
        self.start.column
    }

    pub fn end_line_number(&self) -> u32 {
        self.end.line
    }

    pub fn end_column(&self) -> u32 {
        self.end.column
    }

    /// Check if range is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if position lies inside the range, endpoints included
    pub fn contains_position(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Check if `other` lies entirely inside this range, endpoints included
    pub fn contains_range(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest range covering both
    pub fn union(&self, other: &Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Overlapping part of two ranges
    /// Ranges that only touch intersect in an empty range
    pub fn intersection(&self, other: &Range) -> Option<Range> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start > end {
            return None;
        }
        Some(Range { start, end })
    }
}

impl TryFrom<RangeFields> for Range {
    type Error = SelectionError;

    fn try_from(fields: RangeFields) -> Result<Self, Self::Error> {
        Ok(Range::from_positions(
            Position::try_new(fields.start_line_number, fields.start_column)?,
            Position::try_new(fields.end_line_number, fields.end_column)?,
        ))
    }
}

impl From<Range> for RangeFields {
    fn from(range: Range) -> Self {
        Self {
            start_line_number: range.start.line,
            start_column: range.start.column,
            end_line_number: range.end.line,
            end_column: range.end.column,
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{} -> {},{}]",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}
