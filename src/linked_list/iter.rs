use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::list::LinkedList;
use super::node::ListNode;
use super::traits::Link;

/// An iterator over references to the elements of a [`LinkedList`], front to back.
pub struct Iter<'a, T> {
    current: Option<NonNull<ListNode<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a ListNode<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Creates an iterator starting at `head`.
    ///
    /// # Safety
    ///
    /// `head` must start a chain of exactly `len` nodes that stays untouched for `'a`.
    pub(crate) unsafe fn new(head: Option<NonNull<ListNode<T>>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.current.map(|current| {
            let node = unsafe { current.as_ref() };
            self.current = node.next();
            self.remaining -= 1;
            node.data()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

/// An iterator over mutable references to the elements of a [`LinkedList`].
pub struct IterMut<'a, T> {
    current: Option<NonNull<ListNode<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a mut ListNode<T>>,
}

impl<'a, T> IterMut<'a, T> {
    /// Creates an iterator starting at `head`.
    ///
    /// # Safety
    ///
    /// `head` must start a chain of exactly `len` nodes that is exclusively
    /// borrowed for `'a`.
    pub(crate) unsafe fn new(head: Option<NonNull<ListNode<T>>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.current.map(|mut current| {
            let node = unsafe { current.as_mut() };
            self.current = node.next();
            self.remaining -= 1;
            node.data_mut()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator that pops elements off the front of a [`LinkedList`].
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.add(data);
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
