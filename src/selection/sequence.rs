//! Equality over single selections and ordered selection sets

use super::shape::SelectionShape;

/// Field-wise anchor/caret equality.
/// Two selections over the same span with opposite directions are not equal.
pub fn selections_equal<A, B>(a: &A, b: &B) -> bool
where
    A: SelectionShape + ?Sized,
    B: SelectionShape + ?Sized,
{
    a.selection_start_line_number() == b.selection_start_line_number()
        && a.selection_start_column() == b.selection_start_column()
        && a.position_line_number() == b.position_line_number()
        && a.position_column() == b.position_column()
}

/// Compare two ordered selection sets index by index.
///
/// Both absent is equal; exactly one absent is not. Order matters: no
/// sorting happens, so `[a, b]` and `[b, a]` differ when `a != b`.
pub fn sequence_equals<A, B>(a: Option<&[A]>, b: Option<&[B]>) -> bool
where
    A: SelectionShape,
    B: SelectionShape,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| selections_equal(x, y))
        }
        _ => false,
    }
}
