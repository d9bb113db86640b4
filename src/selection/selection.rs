use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::direction::SelectionDirection;
use super::sequence::selections_equal;
use super::shape::{PlainSelection, SelectionShape};
use crate::error::SelectionError;
use crate::position::Position;
use crate::range::Range;

/// A selection in the editor: a range plus which end is the anchor.
///
/// The anchor is where the selection gesture began; the caret is where it
/// currently ends. The normalized [`Range`] is derived from the two at
/// construction and never changes independently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "PlainSelection", into = "PlainSelection")]
pub struct Selection {
    anchor: Position,
    caret: Position,
    range: Range,
}

impl Selection {
    /// Create new selection from anchor and caret coordinates
    pub fn new(anchor_line: u32, anchor_column: u32, caret_line: u32, caret_column: u32) -> Self {
        Self::from_positions(
            Position::new(anchor_line, anchor_column),
            Position::new(caret_line, caret_column),
        )
    }

    /// Create new selection, rejecting zero coordinates
    pub fn try_new(
        anchor_line: u32,
        anchor_column: u32,
        caret_line: u32,
        caret_column: u32,
    ) -> Result<Self, SelectionError> {
        Ok(Self::from_positions(
            Position::try_new(anchor_line, anchor_column)?,
            Position::try_new(caret_line, caret_column)?,
        ))
    }

    pub fn from_positions(anchor: Position, caret: Position) -> Self {
        Self {
            anchor,
            caret,
            range: Range::from_positions(anchor, caret),
        }
    }

    /// Create selection at a single point (cursor)
    pub fn cursor(position: Position) -> Self {
        Self::from_positions(position, position)
    }

    /// Rebuild a selection from a normalized span and the direction to keep.
    /// `Ltr` puts the anchor at the start, `Rtl` puts it at the end.
    pub fn with_direction(
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
        direction: SelectionDirection,
    ) -> Self {
        let start = Position::new(start_line, start_column);
        let end = Position::new(end_line, end_column);
        match direction {
            SelectionDirection::Ltr => Self::from_positions(start, end),
            SelectionDirection::Rtl => Self::from_positions(end, start),
        }
    }

    pub fn from_range(range: Range, direction: SelectionDirection) -> Self {
        match direction {
            SelectionDirection::Ltr => Self::from_positions(range.start(), range.end()),
            SelectionDirection::Rtl => Self::from_positions(range.end(), range.start()),
        }
    }

    /// Lift a plain value, rejecting zero coordinates
    pub fn lift(plain: &PlainSelection) -> Result<Self, SelectionError> {
        Self::try_new(
            plain.selection_start_line_number,
            plain.selection_start_column,
            plain.position_line_number,
            plain.position_column,
        )
    }

    /// Where the selection gesture began
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Where the selection gesture currently ends
    pub fn caret(&self) -> Position {
        self.caret
    }

    /// Normalized range view
    pub fn range(&self) -> Range {
        self.range
    }

    pub fn start(&self) -> Position {
        self.range.start()
    }

    pub fn end(&self) -> Position {
        self.range.end()
    }

    /// Check if selection is empty (just a cursor)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.caret
    }

    /// `Ltr` iff the anchor is the normalized start.
    /// An empty selection is `Ltr`.
    pub fn direction(&self) -> SelectionDirection {
        if self.anchor == self.range.start() {
            SelectionDirection::Ltr
        } else {
            SelectionDirection::Rtl
        }
    }

    /// Move the caret, keeping the anchor.
    /// The direction flips if the caret crosses the anchor.
    pub fn with_caret_at(&self, line: u32, column: u32) -> Self {
        // The anchor sits at the range start when LTR and at the end when RTL
        let anchor = match self.direction() {
            SelectionDirection::Ltr => self.range.start(),
            SelectionDirection::Rtl => self.range.end(),
        };
        Self::from_positions(anchor, Position::new(line, column))
    }

    /// Move the anchor, keeping the caret.
    /// The direction flips if the anchor crosses the caret.
    pub fn with_anchor_at(&self, line: u32, column: u32) -> Self {
        let caret = match self.direction() {
            SelectionDirection::Ltr => self.range.end(),
            SelectionDirection::Rtl => self.range.start(),
        };
        Self::from_positions(Position::new(line, column), caret)
    }

    /// Anchor and caret equality; direction matters
    pub fn equals_selection<S: SelectionShape + ?Sized>(&self, other: &S) -> bool {
        selections_equal(self, other)
    }
}

impl SelectionShape for Selection {
    fn selection_start_line_number(&self) -> u32 {
        self.anchor.line
    }

    fn selection_start_column(&self) -> u32 {
        self.anchor.column
    }

    fn position_line_number(&self) -> u32 {
        self.caret.line
    }

    fn position_column(&self) -> u32 {
        self.caret.column
    }
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        selections_equal(self, other)
    }
}

impl Eq for Selection {}

impl Hash for Selection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.anchor.hash(state);
        self.caret.hash(state);
    }
}

impl TryFrom<PlainSelection> for Selection {
    type Error = SelectionError;

    fn try_from(plain: PlainSelection) -> Result<Self, Self::Error> {
        Selection::lift(&plain)
    }
}

impl std::fmt::Display for Selection {
    /// Anchor first, then caret, so backward selections read backward
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{},{} -> {},{}]",
            self.anchor.line, self.anchor.column, self.caret.line, self.caret.column
        )
    }
}
