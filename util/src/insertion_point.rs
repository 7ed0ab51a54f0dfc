use crate::full_ord::full_lt;

/// Index of the first item whose key is not strictly less than `key`.
///
/// This is a forward linear scan, so among equal keys the returned index
/// sits before every existing equal item. Returns the item count when every
/// key is smaller.
pub fn first_not_less<'a, T, K, I, F>(items: I, key: &K, mut key_of: F) -> usize
where
    T: 'a,
    K: PartialOrd,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> K,
{
    let mut index = 0;

    for item in items {
        if !full_lt(&key_of(item), key) {
            break;
        }
        index += 1;
    }

    index
}
