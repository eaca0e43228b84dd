pub(crate) mod array;
pub(crate) mod tuple;
#[cfg(feature = "alloc")]
pub(crate) mod vec;

/// ‘Zips up’ multiple sequences into a single sequence of tuples.
pub trait Zip {
    /// What's the element type of our sequence?
    type Item;

    /// What sequence do we return?
    type Sequence: IntoIterator<Item = Self::Item>;

    /// Combine multiple sequences into a single sequence.
    fn zip(self) -> Self::Sequence;
}

/// Combine multiple sequences into a single sequence of tuples.
///
/// The n-th element of the returned sequence is a tuple of the n-th elements
/// of every input. Iteration ends as soon as any input ends.
///
/// # Examples
///
/// ```
/// use multi_zip::iter::zip;
///
/// let s = zip(([1, 2, 3], ["one", "two"]));
/// let pairs: Vec<_> = s.into_iter().collect();
/// assert_eq!(pairs, [(1, "one"), (2, "two")]);
/// ```
pub fn zip<T: Zip>(sequences: T) -> T::Sequence {
    sequences.zip()
}
