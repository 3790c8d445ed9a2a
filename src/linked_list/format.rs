//! Debug rendering of a list as `[a,b,c]`.
//!
//! Every element is cut off after [`MAX_DATUM`] bytes, so printing arbitrary
//! data never produces unbounded output per element.

use alloc::string::String;
use core::convert::Infallible;
use core::fmt::{self, Write};
use core::str::FromStr;

use super::list::LinkedList;

/// Maximum number of bytes rendered for a single element.
pub const MAX_DATUM: usize = 1024;

/// A writer that keeps at most `remaining` bytes and silently drops the rest.
struct Truncate<'a, W: ?Sized> {
    out: &'a mut W,
    remaining: usize,
}

impl<'a, W: Write + ?Sized> Truncate<'a, W> {
    fn new(out: &'a mut W, limit: usize) -> Self {
        Self {
            out,
            remaining: limit,
        }
    }
}

impl<W: Write + ?Sized> Write for Truncate<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.len() <= self.remaining {
            self.remaining -= s.len();
            return self.out.write_str(s);
        }

        // Cut on a character boundary and stop accepting input altogether.
        let end = (0..=self.remaining)
            .rev()
            .find(|&index| s.is_char_boundary(index))
            .unwrap_or(0);
        self.remaining = 0;
        self.out.write_str(&s[..end])
    }
}

impl<T> LinkedList<T> {
    fn render<W, F>(&self, out: &mut W, mut write_datum: F) -> fmt::Result
    where
        W: Write + ?Sized,
        F: FnMut(&mut dyn Write, &T) -> fmt::Result,
    {
        out.write_char('[')?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                out.write_char(',')?;
            }
            write_datum(&mut Truncate::new(&mut *out, MAX_DATUM), element)?;
        }
        out.write_char(']')
    }

    /// Writes every element through `stringify` into `out`.
    pub fn output<W, F>(&self, out: &mut W, mut stringify: F) -> fmt::Result
    where
        W: Write + ?Sized,
        F: FnMut(&T) -> String,
    {
        self.render(out, |datum, element| datum.write_str(&stringify(element)))
    }

    /// Returns a value whose [`Display`](fmt::Display) renders the list through
    /// `stringify`.
    pub fn display_with<F>(&self, stringify: F) -> DisplayWith<'_, T, F>
    where
        F: Fn(&T) -> String,
    {
        DisplayWith {
            list: self,
            stringify,
        }
    }

    /// Renders the list through `stringify`, keeping at most `size` bytes.
    pub fn to_string_bounded<F>(&self, size: usize, stringify: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        let mut rendered = String::new();
        // Writing into a `String` cannot fail, and `Truncate` only drops input.
        let _ = self.output(&mut Truncate::new(&mut rendered, size), stringify);
        rendered
    }
}

/// Renders a list through a caller-supplied stringifier.
///
/// Created by [`LinkedList::display_with`].
pub struct DisplayWith<'a, T, F> {
    list: &'a LinkedList<T>,
    stringify: F,
}

impl<T, F> fmt::Display for DisplayWith<'_, T, F>
where
    F: Fn(&T) -> String,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.output(f, &self.stringify)
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |datum, element| write!(datum, "{}", element))
    }
}

/// Splits on whitespace, one element per word.
impl FromStr for LinkedList<String> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(s.split_whitespace().map(String::from).collect())
    }
}
