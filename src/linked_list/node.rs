use alloc::boxed::Box;
use core::ptr::NonNull;

use super::traits::{Link, Node};

/// A node in the chain, owned by the list it is linked into.
pub(crate) struct ListNode<T> {
    next: Option<NonNull<Self>>,
    data: T,
}

impl<T> ListNode<T> {
    /// Allocates a detached node and hands out its pointer.
    ///
    /// The node is leaked until [`ListNode::into_data`] reclaims it.
    pub(crate) fn boxed(data: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { next: None, data })))
    }

    /// Frees a node and returns its element.
    ///
    /// # Safety
    ///
    /// `node` must come from [`ListNode::boxed`], must already be unlinked and
    /// must not be used afterwards.
    pub(crate) unsafe fn into_data(node: NonNull<Self>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.data
    }

    #[inline]
    pub(crate) fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<T> Link for ListNode<T> {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

impl<T> Node for ListNode<T> {}
