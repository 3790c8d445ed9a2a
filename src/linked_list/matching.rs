//! Identity and byte-content lookups.
//!
//! Which discipline is available depends on the element type: [`Identity`]
//! handles get [`search`](LinkedList::search) and [`remove`](LinkedList::remove),
//! [`ByteContent`] elements get [`inspect`](LinkedList::inspect),
//! [`erase`](LinkedList::erase) and [`add_bytes`](LinkedList::add_bytes).

use super::list::LinkedList;
use super::traits::{ByteContent, Identity};

impl<T: Identity> LinkedList<T> {
    /// Returns the stored handle that refers to the same object as `data`.
    pub fn search(&self, data: &T) -> Option<&T> {
        self.iter().find(|element| T::same(element, data))
    }

    /// Removes the first handle that refers to the same object as `data`.
    ///
    /// Returns `false` and leaves the list alone if there is none.
    pub fn remove(&mut self, data: &T) -> bool {
        self.remove_first(|element| element.same(data)).is_some()
    }
}

impl<T: ByteContent> LinkedList<T> {
    /// Returns the first element whose content equals `data` byte for byte.
    pub fn inspect(&self, data: &[u8]) -> Option<&T> {
        self.iter().find(|element| T::content(element) == data)
    }

    /// Removes the first element whose content equals `data` byte for byte.
    pub fn erase(&mut self, data: &[u8]) -> bool {
        self.remove_first(|element| element.content() == data).is_some()
    }

    /// Appends `data` unless an element with the same content is already stored.
    ///
    /// A duplicate is handed back untouched in `Err`, so the caller decides what
    /// happens to it.
    pub fn add_bytes(&mut self, data: T) -> Result<&mut T, T> {
        if self.inspect(data.content()).is_some() {
            return Err(data);
        }
        Ok(self.add(data))
    }
}
