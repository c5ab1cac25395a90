//! Persistent singly linked list.
//!
//! `cons` pushes onto the front and shares the existing list as its tail, so
//! any number of lists can share a common suffix. This is the sequence type
//! the [`Queue`](crate::Queue) is built from.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

struct Cell<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Arc<Cell<T>>>;

/// An immutable stack of values. Cloning is O(1).
pub struct List<T> {
    head: Link<T>,
}

impl<T> List<T> {
    /// The empty list.
    pub const fn new() -> List<T> {
        return List { head: None };
    }

    pub fn is_empty(&self) -> bool {
        return self.head.is_none();
    }

    /// A new list with `value` in front of this one. O(1).
    pub fn cons(&self, value: T) -> List<T> {
        return List {
            head: Some(Arc::new(Cell { value, next: self.head.clone() })),
        };
    }

    /// The first element, if any.
    pub fn head(&self) -> Option<&T> {
        return self.head.as_deref().map(|cell| &cell.value);
    }

    /// Everything after the first element, sharing this list's cells.
    /// `None` when the list is empty.
    pub fn tail(&self) -> Option<List<T>> {
        return self.head.as_deref().map(|cell| List { head: cell.next.clone() });
    }

    /// Number of elements. Walks the whole list.
    pub fn len(&self) -> usize {
        return self.iter().count();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        return Iter { next: self.head.as_deref() };
    }

    /// True when both lists start at the same cell (or are both empty).
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        return match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
    }
}

impl<T: Clone> List<T> {
    /// A new list holding the same elements in the opposite order. O(n).
    pub fn reverse(&self) -> List<T> {
        let mut reversed = List::new();
        for value in self.iter() {
            reversed = reversed.cons(value.clone());
        }
        return reversed;
    }
}

impl<T> Drop for List<T> {
    // Unlink uniquely owned cells one at a time so long lists do not
    // recurse once per cell.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(cell) = link {
            match Arc::try_unwrap(cell) {
                Ok(mut cell) => link = cell.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        return List { head: self.head.clone() };
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> FromIterator<T> for List<T> {
    /// The first element yielded becomes the head.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = List::new();
        for value in items.into_iter().rev() {
            list = list.cons(value);
        }
        return list;
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        return write!(f, "]");
    }
}

/// Front-to-back iterator over a [`List`].
pub struct Iter<'a, T> {
    next: Option<&'a Cell<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let cell = self.next?;
        self.next = cell.next.as_deref();
        return Some(&cell.value);
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list() {
        let list: List<u32> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
        assert!(list.tail().is_none());
    }

    #[test]
    fn cons_prepends() {
        let list = List::new().cons(3).cons(2).cons(1);
        assert_eq!(list.head(), Some(&1));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn cons_shares_tail() {
        let base = List::new().cons(2).cons(1);
        let longer = base.cons(0);
        let tail = longer.tail().unwrap();
        assert!(tail.ptr_eq(&base));
        // The original is untouched.
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn reverse_keeps_original() {
        let list: List<u32> = (1..=4).collect();
        let reversed = list.reverse();
        assert_eq!(reversed.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn display() {
        let list: List<u32> = (1..=3).collect();
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_eq!(List::<u32>::new().to_string(), "[]");
    }

    #[test]
    fn drop_long_list() {
        let mut list = List::new();
        for i in 0..1_000_000u32 {
            list = list.cons(i);
        }
        drop(list);
    }

    #[test]
    fn drop_stops_at_shared_cells() {
        let shared: List<u32> = (0..100).collect();
        let front = shared.cons(1000);
        drop(front);
        assert_eq!(shared.len(), 100);
    }
}
