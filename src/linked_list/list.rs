use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;

use super::iter::{Iter, IterMut};
use super::node::ListNode;
use super::traits::{Link, Node};

/// A singly linked list that appends at the tail and removes from the head.
///
/// The header owns the whole node chain through `head`; `tail` is a non-owning
/// pointer to the last node so that [`add`](Self::add) and
/// [`transplant`](Self::transplant) run in *O*(*1*).
pub struct LinkedList<T> {
    head: Option<NonNull<ListNode<T>>>,
    tail: Option<NonNull<ListNode<T>>>,
    count: usize,
    _marker: PhantomData<Box<ListNode<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Creates a new, empty linked list on the heap.
    pub fn create() -> Box<Self> {
        Box::new(Self::new())
    }

    /// Initializes an empty list in caller-provided storage.
    ///
    /// Whatever `slot` held before is overwritten without being dropped.
    pub fn init(slot: &mut MaybeUninit<Self>) -> &mut Self {
        slot.write(Self::new())
    }

    /// Appends an element to the back of the list and returns a reference to it.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn add(&mut self, data: T) -> &mut T {
        let node = ListNode::boxed(data);
        unsafe { self.link_after(self.tail, node) }
    }

    /// Same as [`add`](Self::add).
    #[inline]
    pub fn push(&mut self, data: T) -> &mut T {
        self.add(data)
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    ///
    /// Elements come out in the order they were added.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head?;
        Some(unsafe { self.unlink(None, head) })
    }

    /// Same as [`pop`](Self::pop), for queue-style call sites.
    #[inline]
    pub fn poll(&mut self) -> Option<T> {
        self.pop()
    }

    /// Provides a reference to the first element, or `None` if the list is empty.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|node| unsafe { node.as_ref() }.data())
    }

    /// Provides a mutable reference to the first element, or `None` if the list is empty.
    pub fn head_mut(&mut self) -> Option<&mut T> {
        self.head.map(|mut node| unsafe { node.as_mut() }.data_mut())
    }

    /// Provides a reference to the last element, or `None` if the list is empty.
    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { node.as_ref() }.data())
    }

    /// Returns the number of elements. The count is cached.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Moves the whole chain of `segment` to the end of this list.
    ///
    /// No node is copied. Afterwards `segment` is empty and can be reused.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn transplant(&mut self, segment: &mut Self) {
        let Some(segment_head) = segment.head.take() else {
            return;
        };

        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(segment_head)) },
            None => self.head = Some(segment_head),
        }
        self.tail = segment.tail.take();
        self.count += mem::take(&mut segment.count);
    }

    /// Removes all nodes. Each stored element is dropped, which for handle types
    /// (`&U`, `NonNull<U>`, `Arc<U>`) leaves the referenced object alone.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        // Reset first so a panicking element drop cannot lead to a double free
        // when the list itself is dropped afterwards.
        let mut current = self.head.take();
        self.tail = None;
        self.count = 0;

        while let Some(node) = current {
            unsafe {
                current = node.as_ref().next();
                drop(ListNode::into_data(node));
            }
        }
    }

    /// Returns a uniformly chosen element without removing it, or `None` if the
    /// list is empty.
    #[cfg(feature = "rand")]
    pub fn random<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: rand::Rng,
    {
        if self.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.count);
        self.iter().nth(index)
    }

    /// Releases the list and all of its nodes.
    ///
    /// Stored handles are dropped but never followed: the objects they refer to
    /// stay with whoever owns them. This is the same as dropping the list.
    pub fn free(self) {
        drop(self);
    }

    /// Releases the list and passes every element, front to back, to `release`.
    ///
    /// Use this when the list is the only owner of what its elements refer to,
    /// e.g. raw handles obtained from `Box::into_raw`. Calling it on a list built
    /// with [`select`](Self::select), or on any list whose elements are shared,
    /// releases objects that others still use.
    pub fn destroy<F>(mut self, mut release: F)
    where
        F: FnMut(T),
    {
        while let Some(data) = self.pop() {
            release(data);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        unsafe { Iter::new(self.head, self.count) }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe { IterMut::new(self.head, self.count) }
    }

    /// Unlinks and returns the first element for which `pred` returns `true`.
    pub(crate) fn remove_first<P>(&mut self, mut pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut prev = None;
        let mut current = self.head;

        while let Some(node) = current {
            let node_ref = unsafe { node.as_ref() };
            if pred(node_ref.data()) {
                return Some(unsafe { self.unlink(prev, node) });
            }
            prev = current;
            current = node_ref.next();
        }
        None
    }

    /// Links `data` in front of the first element for which `pred(&data, existing)`
    /// returns `true`, or at the back if there is none.
    pub(crate) fn insert_before<P>(&mut self, data: T, mut pred: P) -> &mut T
    where
        P: FnMut(&T, &T) -> bool,
    {
        let mut prev = None;
        let mut current = self.head;

        while let Some(node) = current {
            let node_ref = unsafe { node.as_ref() };
            if pred(&data, node_ref.data()) {
                break;
            }
            prev = current;
            current = node_ref.next();
        }

        let node = ListNode::boxed(data);
        unsafe { self.link_after(prev, node) }
    }

    /// Links a detached node after `prev`, or at the front if `prev` is `None`.
    ///
    /// # Safety
    ///
    /// `prev` must be a node of this list and `node` must come from
    /// [`ListNode::boxed`] without being linked anywhere.
    unsafe fn link_after(
        &mut self,
        prev: Option<NonNull<ListNode<T>>>,
        node: NonNull<ListNode<T>>,
    ) -> &mut T {
        unsafe {
            let node_ref = &mut *node.as_ptr();
            match prev {
                Some(prev) => node_ref.append_to(&mut *prev.as_ptr()),
                None => node_ref.append_to(self),
            }
            if self.tail == prev {
                self.tail = Some(node);
            }
            self.count += 1;
            node_ref.data_mut()
        }
    }

    /// Unlinks `node`, whose predecessor is `prev` (`None` for the head), frees it
    /// and returns its element.
    ///
    /// # Safety
    ///
    /// `node` must be a node of this list and `prev` must be its predecessor.
    unsafe fn unlink(
        &mut self,
        prev: Option<NonNull<ListNode<T>>>,
        node: NonNull<ListNode<T>>,
    ) -> T {
        unsafe {
            let node_ref = &mut *node.as_ptr();
            match prev {
                Some(prev) => node_ref.detach(&mut *prev.as_ptr()),
                None => node_ref.detach(self),
            }
            if self.tail == Some(node) {
                self.tail = prev;
            }
            self.count -= 1;
            ListNode::into_data(node)
        }
    }

    /// Walks the chain and checks it against the cached head, tail and count.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let Some(mut current) = self.head else {
            assert!(self.tail.is_none(), "empty list must not have a tail");
            assert_eq!(self.count, 0, "empty list must have a zero count");
            return;
        };

        let mut reachable = 1;
        while let Some(next) = unsafe { current.as_ref() }.next() {
            current = next;
            reachable += 1;
        }
        assert_eq!(Some(current), self.tail, "tail must be the last reachable node");
        assert_eq!(reachable, self.count, "count must match the reachable nodes");
    }
}

impl<T> Link for LinkedList<T> {
    type Target = ListNode<T>;

    #[inline]
    fn next(&self) -> Option<NonNull<ListNode<T>>> {
        self.head
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<ListNode<T>>>) {
        self.head = next;
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}
