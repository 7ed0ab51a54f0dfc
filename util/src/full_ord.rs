use std::cmp::Ordering;

/// Compares partially ordered values, treating incomparable pairs (a `NaN`
/// against anything, for floats) as equal.
pub fn full_cmp<T: PartialOrd>(this: &T, other: &T) -> Ordering {
    this.partial_cmp(other).unwrap_or(Ordering::Equal)
}

/// `this < other` under [`full_cmp`].
pub fn full_lt<T: PartialOrd>(this: &T, other: &T) -> bool {
    matches!(full_cmp(this, other), Ordering::Less)
}
