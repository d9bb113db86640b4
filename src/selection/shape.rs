//! Structural selection values and lifting them into [`Selection`]s.
//!
//! A selection crossing a serialization boundary is just four integers:
//! the anchor (`selectionStart*`) and the caret (`position*`). The
//! normalized range is always re-derived on the way in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::selection::Selection;
use crate::config::LiftConfig;
use crate::error::SelectionError;
use crate::position::Position;

const SELECTION_START_LINE_NUMBER: &str = "selectionStartLineNumber";
const SELECTION_START_COLUMN: &str = "selectionStartColumn";
const POSITION_LINE_NUMBER: &str = "positionLineNumber";
const POSITION_COLUMN: &str = "positionColumn";

const FIELDS: [&str; 4] = [
    SELECTION_START_LINE_NUMBER,
    SELECTION_START_COLUMN,
    POSITION_LINE_NUMBER,
    POSITION_COLUMN,
];

/// Anything carrying an anchor/caret pair
pub trait SelectionShape {
    /// Anchor line
    fn selection_start_line_number(&self) -> u32;

    /// Anchor column
    fn selection_start_column(&self) -> u32;

    /// Caret line
    fn position_line_number(&self) -> u32;

    /// Caret column
    fn position_column(&self) -> u32;
}

/// Plain selection value, as sent over the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainSelection {
    pub selection_start_line_number: u32,
    pub selection_start_column: u32,
    pub position_line_number: u32,
    pub position_column: u32,
}

impl PlainSelection {
    pub fn new(
        selection_start_line_number: u32,
        selection_start_column: u32,
        position_line_number: u32,
        position_column: u32,
    ) -> Self {
        Self {
            selection_start_line_number,
            selection_start_column,
            position_line_number,
            position_column,
        }
    }
}

impl SelectionShape for PlainSelection {
    fn selection_start_line_number(&self) -> u32 {
        self.selection_start_line_number
    }

    fn selection_start_column(&self) -> u32 {
        self.selection_start_column
    }

    fn position_line_number(&self) -> u32 {
        self.position_line_number
    }

    fn position_column(&self) -> u32 {
        self.position_column
    }
}

impl From<Selection> for PlainSelection {
    fn from(selection: Selection) -> Self {
        let anchor = selection.anchor();
        let caret = selection.caret();
        Self::new(anchor.line, anchor.column, caret.line, caret.column)
    }
}

/// Check that a value has the four selection fields and that all are numbers.
/// Bounds and integrality are not checked.
pub fn is_selection_shape(value: &Value) -> bool {
    match value.as_object() {
        Some(object) => FIELDS
            .iter()
            .all(|field| matches!(object.get(*field), Some(Value::Number(_)))),
        None => false,
    }
}

/// Lift a plain value into a selection with the default [`LiftConfig`]
pub fn lift_selection(value: &Value) -> Result<Selection, SelectionError> {
    lift_selection_with(value, &LiftConfig::default())
}

/// Lift a plain value into a selection
pub fn lift_selection_with(value: &Value, config: &LiftConfig) -> Result<Selection, SelectionError> {
    let object = value.as_object().ok_or(SelectionError::NotAnObject)?;

    let anchor_line = coordinate(object, SELECTION_START_LINE_NUMBER, config)?;
    let anchor_column = coordinate(object, SELECTION_START_COLUMN, config)?;
    let caret_line = coordinate(object, POSITION_LINE_NUMBER, config)?;
    let caret_column = coordinate(object, POSITION_COLUMN, config)?;

    let (anchor, caret) = if config.allow_zero_coordinates {
        (
            Position::unchecked(anchor_line, anchor_column),
            Position::unchecked(caret_line, caret_column),
        )
    } else {
        (
            Position::try_new(anchor_line, anchor_column)?,
            Position::try_new(caret_line, caret_column)?,
        )
    };

    Ok(Selection::from_positions(anchor, caret))
}

fn coordinate(
    object: &Map<String, Value>,
    field: &'static str,
    config: &LiftConfig,
) -> Result<u32, SelectionError> {
    let number = match object.get(field) {
        Some(Value::Number(number)) => number,
        Some(_) => return Err(SelectionError::NotANumber(field)),
        None => return Err(SelectionError::MissingField(field)),
    };

    if let Some(n) = number.as_u64() {
        return u32::try_from(n).map_err(|_| SelectionError::OutOfRange {
            field,
            value: n.to_string(),
        });
    }

    // Any i64 that is not a u64 is negative
    if let Some(n) = number.as_i64() {
        return Err(SelectionError::OutOfRange {
            field,
            value: n.to_string(),
        });
    }

    let value = number.as_f64().unwrap_or(f64::NAN);
    if !config.allow_integral_floats || value.fract() != 0.0 {
        return Err(SelectionError::NotAnInteger { field, value });
    }
    if value < 0.0 || value > u32::MAX as f64 {
        return Err(SelectionError::OutOfRange {
            field,
            value: value.to_string(),
        });
    }
    Ok(value as u32)
}
