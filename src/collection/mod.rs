use core::ops::Index;

use im::Vector;
use serde::{Deserialize, Serialize};
use util::insertion_point::first_not_less;

use crate::acceleration::AccelerationEntry;
use crate::error::AccelerationError;


/// A mutable sequence of [`AccelerationEntry`] kept in non-decreasing order of
/// [`seconds`](AccelerationEntry::seconds).
///
/// Every insertion goes through [`add`](Self::add), which places the entry
/// before the first existing entry whose threshold is equal or greater. There
/// is no positional mutation, so the order can never be broken from outside.
///
/// The expected size is a handful of tiers, so insertion is a plain linear
/// scan. Storage is an [`im::Vector`], which makes [`snapshot`](Self::snapshot)
/// cheap for a control that wants to keep reading tiers while its owner
/// reconfigures them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AccelerationEntry>", into = "Vec<AccelerationEntry>")]
pub struct OrderedAccelerationList {
    items: Vector<AccelerationEntry>,
}

pub type Iter<'a> = im::vector::Iter<'a, AccelerationEntry>;

impl OrderedAccelerationList {
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// Insert `entry`, keeping the list sorted.
    pub fn add(&mut self, entry: AccelerationEntry) {
        let index = first_not_less(&self.items, &entry.seconds(), AccelerationEntry::seconds);
        self.items.insert(index, entry);

        tracing::trace!(index, seconds = entry.seconds(), "inserted acceleration entry");
    }

    /// Like [`add`](Self::add), but for callers holding an entry that may be absent.
    pub fn try_add(&mut self, entry: Option<AccelerationEntry>) -> Result<(), AccelerationError> {
        let entry = entry.ok_or(AccelerationError::InvalidArgument {
            name: "entry",
        })?;
        self.add(entry);
        Ok(())
    }

    /// Insert every entry of `entries`, one [`add`](Self::add) at a time.
    pub fn add_range<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = AccelerationEntry>,
    {
        let before = self.items.len();
        for entry in entries {
            self.add(entry);
        }

        tracing::debug!(
            added = self.items.len() - before,
            count = self.items.len(),
            "added acceleration range"
        );
    }

    /// Insert a range whose elements, or the range itself, may be absent.
    ///
    /// The whole range is checked before anything is inserted: if any element
    /// is `None` the list is left untouched.
    pub fn try_add_range<I>(&mut self, entries: Option<I>) -> Result<(), AccelerationError>
    where
        I: IntoIterator<Item = Option<AccelerationEntry>>,
    {
        let entries = entries.ok_or(AccelerationError::InvalidArgument {
            name: "entries",
        })?;

        let entries: Vec<AccelerationEntry> = match entries.into_iter().collect::<Option<Vec<_>>>() {
            Some(entries) => entries,
            None => {
                tracing::debug!("rejected acceleration range with an absent entry");
                return Err(AccelerationError::InvalidArgument {
                    name: "entries",
                })
            }
        };

        self.add_range(entries);
        Ok(())
    }

    pub fn clear(&mut self) {
        tracing::debug!(count = self.items.len(), "clearing acceleration entries");
        self.items.clear();
    }

    pub fn contains(&self, entry: &AccelerationEntry) -> bool {
        self.items.iter().any(|e| e == entry)
    }

    /// Copy every entry into `destination`, starting at `start`.
    ///
    /// Fails without touching `destination` if `start` is past its end or if
    /// fewer than [`count`](Self::count) slots remain after it.
    pub fn copy_to(
        &self,
        destination: &mut [AccelerationEntry],
        start: usize,
    ) -> Result<(), AccelerationError> {
        if start > destination.len() {
            return Err(AccelerationError::OutOfRange {
                index: start,
                count: destination.len(),
            })
        }

        let available = destination.len() - start;
        if available < self.items.len() {
            return Err(AccelerationError::CapacityExceeded {
                required: self.items.len(),
                available,
            })
        }

        for (slot, entry) in destination[start..].iter_mut().zip(self.items.iter()) {
            *slot = *entry;
        }

        Ok(())
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Always `false`: the list can be modified through `add`, `remove` and `clear`.
    pub fn is_read_only(&self) -> bool {
        false
    }

    /// Remove the first entry equal to `entry`. Returns whether anything was removed.
    pub fn remove(&mut self, entry: &AccelerationEntry) -> bool {
        match self.items.iter().position(|e| e == entry) {
            Some(index) => {
                self.items.remove(index);
                tracing::trace!(index, seconds = entry.seconds(), "removed acceleration entry");
                true
            },
            None => false,
        }
    }

    pub fn at(&self, index: usize) -> Result<&AccelerationEntry, AccelerationError> {
        self.items.get(index).ok_or(AccelerationError::OutOfRange {
            index,
            count: self.items.len(),
        })
    }

    pub fn get(&self, index: usize) -> Option<&AccelerationEntry> {
        self.items.get(index)
    }

    pub fn iter(&self) -> Iter<'_> {
        self.items.iter()
    }

    /// A structurally shared copy of the current entries.
    ///
    /// Later changes to this list do not show up in the snapshot.
    pub fn snapshot(&self) -> Vector<AccelerationEntry> {
        self.items.clone()
    }

    /// The tier in effect after holding for `elapsed_seconds`: the last entry
    /// whose threshold has been reached, if any.
    pub fn active(&self, elapsed_seconds: f64) -> Option<&AccelerationEntry> {
        self.items
            .iter()
            .take_while(|e| e.seconds() <= elapsed_seconds)
            .last()
    }

    /// Step size after holding for `elapsed_seconds`, falling back to
    /// `base_increment` before the first tier kicks in.
    pub fn increment_for(&self, elapsed_seconds: f64, base_increment: f64) -> f64 {
        self.active(elapsed_seconds)
            .map_or(base_increment, AccelerationEntry::increment)
    }
}

impl Index<usize> for OrderedAccelerationList {
    type Output = AccelerationEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a OrderedAccelerationList {
    type Item = &'a AccelerationEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<AccelerationEntry> for OrderedAccelerationList {
    fn from_iter<I: IntoIterator<Item = AccelerationEntry>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add_range(iter);
        list
    }
}

impl Extend<AccelerationEntry> for OrderedAccelerationList {
    fn extend<I: IntoIterator<Item = AccelerationEntry>>(&mut self, iter: I) {
        self.add_range(iter)
    }
}

impl From<Vec<AccelerationEntry>> for OrderedAccelerationList {
    fn from(entries: Vec<AccelerationEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<OrderedAccelerationList> for Vec<AccelerationEntry> {
    fn from(list: OrderedAccelerationList) -> Self {
        list.items.into_iter().collect()
    }
}
