//! Arithmetic on [`Iterator::size_hint`] values.

/// Take the element-wise minimum of two size hints.
///
/// A zipped sequence can produce no more elements than its shortest input,
/// so folding the inputs' hints with this keeps the result a valid
/// never-overestimating hint.
pub(crate) fn min(a: (usize, Option<usize>), b: (usize, Option<usize>)) -> (usize, Option<usize>) {
    let (a_lower, a_upper) = a;
    let (b_lower, b_upper) = b;
    let lower = core::cmp::min(a_lower, b_lower);
    let upper = match (a_upper, b_upper) {
        (Some(u1), Some(u2)) => Some(core::cmp::min(u1, u2)),
        _ => a_upper.or(b_upper),
    };
    (lower, upper)
}
