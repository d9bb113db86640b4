pub mod direction;
pub mod selection;
pub mod sequence;
pub mod shape;

pub use direction::SelectionDirection;
pub use selection::Selection;
pub use sequence::{selections_equal, sequence_equals};
pub use shape::{is_selection_shape, lift_selection, lift_selection_with, PlainSelection, SelectionShape};
