pub mod config;
pub mod error;
pub mod position;
pub mod range;
pub mod selection;

// Re-export commonly used types
pub use config::LiftConfig;
pub use error::SelectionError;
pub use position::Position;
pub use range::Range;
pub use selection::{
    is_selection_shape, lift_selection, lift_selection_with, selections_equal, sequence_equals,
    PlainSelection, Selection, SelectionDirection, SelectionShape,
};
