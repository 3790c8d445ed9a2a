use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ptr::{self, NonNull};

/// A trait for anything holding a `next` pointer into the node chain.
///
/// Both the list header (whose `next` is the head) and every node implement it,
/// so splicing code never has to special-case the front of the list.
pub(crate) trait Link {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for a node that can be spliced in after a [`Link`].
pub(crate) trait Node: Link<Target = Self> + Sized {
    /// Insert this node directly after `parent`.
    fn append_to<L>(&mut self, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        self.set_next(parent.next());
        parent.set_next(Some(NonNull::from(&mut *self)));
    }

    /// Detach this node from the chain.
    ///
    /// # Safety
    ///
    /// `parent` must be the link whose `next` points at this node.
    unsafe fn detach<L>(&mut self, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        debug_assert_eq!(
            parent.next(),
            Some(NonNull::from(&mut *self)),
            "Parent must be the one that contains this node"
        );
        parent.set_next(self.next());
        self.set_next(None);
    }
}

/// Element handles that can be matched by identity.
///
/// Two handles are the same when they refer to the same object, regardless of
/// what that object contains. This is what [`LinkedList::search`] and
/// [`LinkedList::remove`] compare.
///
/// [`LinkedList::search`]: super::LinkedList::search
/// [`LinkedList::remove`]: super::LinkedList::remove
pub trait Identity {
    /// Returns `true` if both handles refer to the same object.
    fn same(&self, other: &Self) -> bool;
}

impl<U: ?Sized> Identity for &U {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }
}

impl<U: ?Sized> Identity for NonNull<U> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(self.as_ptr(), other.as_ptr())
    }
}

impl<U: ?Sized> Identity for *const U {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }
}

impl<U: ?Sized> Identity for *mut U {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }
}

impl<U: ?Sized> Identity for Box<U> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        ptr::addr_eq(&**self, &**other)
    }
}

impl<U: ?Sized> Identity for Rc<U> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<U: ?Sized> Identity for Arc<U> {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// Elements that can be matched by raw byte content.
///
/// The list never interprets the bytes, it only compares them. See
/// [`LinkedList::inspect`], [`LinkedList::erase`] and [`LinkedList::add_bytes`].
///
/// [`LinkedList::inspect`]: super::LinkedList::inspect
/// [`LinkedList::erase`]: super::LinkedList::erase
/// [`LinkedList::add_bytes`]: super::LinkedList::add_bytes
pub trait ByteContent {
    /// The bytes this element is compared by.
    fn content(&self) -> &[u8];
}

impl ByteContent for [u8] {
    #[inline]
    fn content(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteContent for [u8; N] {
    #[inline]
    fn content(&self) -> &[u8] {
        self
    }
}

impl ByteContent for Vec<u8> {
    #[inline]
    fn content(&self) -> &[u8] {
        self
    }
}

impl ByteContent for str {
    #[inline]
    fn content(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteContent for String {
    #[inline]
    fn content(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: ByteContent + ?Sized> ByteContent for &T {
    #[inline]
    fn content(&self) -> &[u8] {
        (**self).content()
    }
}

impl<T: ByteContent + ?Sized> ByteContent for Box<T> {
    #[inline]
    fn content(&self) -> &[u8] {
        (**self).content()
    }
}

impl<T: ByteContent + ?Sized> ByteContent for Rc<T> {
    #[inline]
    fn content(&self) -> &[u8] {
        (**self).content()
    }
}

impl<T: ByteContent + ?Sized> ByteContent for Arc<T> {
    #[inline]
    fn content(&self) -> &[u8] {
        (**self).content()
    }
}
