use serde::{Deserialize, Serialize};

/// The direction of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionDirection {
    /// Anchor is the earlier endpoint (the selection starts above where it ends)
    Ltr,
    /// Anchor is the later endpoint (the selection starts below where it ends)
    Rtl,
}

impl std::fmt::Display for SelectionDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionDirection::Ltr => write!(f, "LTR"),
            SelectionDirection::Rtl => write!(f, "RTL"),
        }
    }
}
