//! A singly linked list with a cached tail.
//!
//! Elements are appended at the tail and taken from the head, so the list
//! works as a FIFO queue out of the box. On top of that it offers two ways of
//! finding elements, picked by the element type:
//!
//! - by identity, for handles implementing [`Identity`] (`&U`, `NonNull<U>`,
//!   `Arc<U>`, ...): two handles match when they point at the same object;
//! - by content, for elements implementing [`ByteContent`]: two elements match
//!   when their bytes are equal.
//!
//! Everything else goes through caller-supplied comparators returning
//! [`Ordering`](core::cmp::Ordering), where `Equal` means "match".
//!
//! The list is not synchronized. Sharing it between threads needs a lock
//! around it.
//!
//! # Examples
//!
//! ```
//! use mola_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add(1);
//! list.add(2);
//! list.add(3);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.pop(), Some(1));
//! assert_eq!(list.head(), Some(&2));
//!
//! let odd = list.select(|element, modulo| (*element % *modulo).cmp(&1), &2);
//! assert_eq!(odd.iter().copied().copied().collect::<Vec<_>>(), vec![3]);
//! ```
//!
//! Matching by content with deduplication:
//!
//! ```
//! use mola_list::LinkedList;
//!
//! let mut list = LinkedList::<Vec<u8>>::new();
//! assert!(list.add_bytes(b"job-1".to_vec()).is_ok());
//! assert!(list.add_bytes(b"job-1".to_vec()).is_err());
//! assert_eq!(list.len(), 1);
//! assert!(list.erase(b"job-1"));
//! assert!(list.is_empty());
//! ```

pub mod format;
pub mod iter;
pub mod list;
pub mod matching;
mod node;
pub mod select;
pub mod traits;

#[cfg(test)]
mod tests;

pub use format::{DisplayWith, MAX_DATUM};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;
pub use traits::{ByteContent, Identity};
