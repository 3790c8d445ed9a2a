//! Comparator-driven operations.
//!
//! A comparator returns [`Ordering::Equal`] for a match. Only
//! [`ordered_insert`](LinkedList::ordered_insert) looks at the other variants.

use core::cmp::Ordering;

use super::list::LinkedList;

impl<T> LinkedList<T> {
    /// Appends `data` unless `cmp(existing, &data)` is `Equal` for some element.
    ///
    /// On a match `data` is handed back in `Err`.
    pub fn add_unique<F>(&mut self, mut cmp: F, data: T) -> Result<&mut T, T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.contains(&mut cmp, &data) {
            return Err(data);
        }
        Ok(self.add(data))
    }

    /// Returns `true` if `cmp(element, arg)` is `Equal` for some element.
    pub fn matches<A, F>(&self, cmp: F, arg: &A) -> bool
    where
        A: ?Sized,
        F: FnMut(&T, &A) -> Ordering,
    {
        self.select_one(cmp, arg).is_some()
    }

    /// Returns `true` if some element compares `Equal` to `data`.
    pub fn contains<F>(&self, cmp: F, data: &T) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.matches(cmp, data)
    }

    /// Returns a new list referring to every element for which `cmp(element, arg)`
    /// is `Equal`, in their original order. This list is left as it is.
    pub fn select<A, F>(&self, mut cmp: F, arg: &A) -> LinkedList<&T>
    where
        A: ?Sized,
        F: FnMut(&T, &A) -> Ordering,
    {
        self.iter()
            .filter(|element| cmp(*element, arg) == Ordering::Equal)
            .collect()
    }

    /// Returns the first element for which `cmp(element, arg)` is `Equal`.
    pub fn select_one<A, F>(&self, mut cmp: F, arg: &A) -> Option<&T>
    where
        A: ?Sized,
        F: FnMut(&T, &A) -> Ordering,
    {
        self.iter().find(|element| cmp(*element, arg) == Ordering::Equal)
    }

    /// Removes the first element for which `cmp(element, arg)` is `Equal`.
    ///
    /// Only one element is removed per call; loop to remove all of them.
    pub fn remove_where<A, F>(&mut self, mut cmp: F, arg: &A) -> bool
    where
        A: ?Sized,
        F: FnMut(&T, &A) -> Ordering,
    {
        self.remove_first(|element| cmp(element, arg) == Ordering::Equal)
            .is_some()
    }

    /// Like [`remove_where`](Self::remove_where), but returns the removed element
    /// in a new list, which is empty if nothing matched.
    pub fn pop_where<A, F>(&mut self, mut cmp: F, arg: &A) -> LinkedList<T>
    where
        A: ?Sized,
        F: FnMut(&T, &A) -> Ordering,
    {
        self.remove_first(|element| cmp(element, arg) == Ordering::Equal)
            .into_iter()
            .collect()
    }

    /// Inserts `data` in front of the first element for which `cmp(&data, existing)`
    /// is not `Greater`, so a list built this way stays in ascending order and a
    /// new element goes before the elements it ties with.
    pub fn ordered_insert<F>(&mut self, mut cmp: F, data: T) -> &mut T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.insert_before(data, |incoming, existing| {
            cmp(incoming, existing) != Ordering::Greater
        })
    }
}
