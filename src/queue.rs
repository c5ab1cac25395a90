//! Persistent FIFO queue (banker's queue).
//!
//! The queue is a pair of [`List`]s: `front` holds the oldest elements in
//! dequeue order, `rear` holds the newest elements most-recent-first.
//! Enqueueing conses onto `rear`; dequeueing drops the head of `front`.
//! When `front` runs dry the whole `rear` is reversed into it.
//!
//! Invariant: `front` is empty only when `rear` is empty too. Every element
//! is reversed at most once while it sits in the queue, so `snoc` and `tail`
//! are O(1) amortized even though a single rotation costs O(n).

use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::error::QueueError;
use crate::error::QueueResult;
use crate::list;
use crate::list::List;

/// An immutable first-in first-out queue. Cloning is O(1).
pub struct Queue<T> {
    front: List<T>,
    rear: List<T>,
}

impl<T> Queue<T> {
    /// The empty queue.
    pub const fn new() -> Queue<T> {
        return Queue {
            front: List::new(),
            rear: List::new(),
        };
    }

    /// True when the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        // `rear` cannot hold anything while `front` is empty.
        return self.front.is_empty();
    }

    /// The oldest element in the queue.
    pub fn head(&self) -> QueueResult<&T> {
        return self.front.head().ok_or(QueueError::Empty);
    }

    /// Elements in enqueue order.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter {
            front: self.front.iter(),
            rear: Some(self.rear.iter()),
            pending: Vec::new(),
        };
    }

    /// True when both queues are built from the same front and rear cells.
    pub fn ptr_eq(&self, other: &Queue<T>) -> bool {
        return self.front.ptr_eq(&other.front) && self.rear.ptr_eq(&other.rear);
    }
}

impl<T: Clone> Queue<T> {
    /// A new queue with `value` added at the back. O(1) amortized.
    pub fn snoc(&self, value: T) -> Queue<T> {
        return Queue::check_balance(self.front.clone(), self.rear.cons(value));
    }

    /// A new queue without the oldest element. O(1) amortized.
    pub fn tail(&self) -> QueueResult<Queue<T>> {
        let front = self.front.tail().ok_or(QueueError::Empty)?;
        return Ok(Queue::check_balance(front, self.rear.clone()));
    }

    fn check_balance(front: List<T>, rear: List<T>) -> Queue<T> {
        if !front.is_empty() {
            return Queue { front, rear };
        }

        trace!(moved = rear.len(), "rotating queue rear into front");
        return Queue {
            front: rear.reverse(),
            rear: List::new(),
        };
    }
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        return Queue {
            front: self.front.clone(),
            rear: self.rear.clone(),
        };
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Clone> FromIterator<T> for Queue<T> {
    /// Enqueues every element in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        for value in iter {
            queue = queue.snoc(value);
        }
        return queue;
    }
}

impl<T: Clone> From<Vec<T>> for Queue<T> {
    fn from(values: Vec<T>) -> Self {
        return values.into_iter().collect();
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

/// Diagnostic rendering of the two internal lists, `[f:<front> r:<rear>]`.
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "[f:{} r:{}]", self.front, self.rear);
    }
}

/// Iterator over a [`Queue`] in enqueue order.
///
/// The rear list is only buffered once the front has been exhausted.
pub struct Iter<'a, T> {
    front: list::Iter<'a, T>,
    rear: Option<list::Iter<'a, T>>,
    pending: Vec<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if let Some(value) = self.front.next() {
            return Some(value);
        }
        if let Some(rear) = self.rear.take() {
            // Newest first, so popping from the end yields the oldest.
            self.pending = rear.collect();
        }
        return self.pending.pop();
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}
