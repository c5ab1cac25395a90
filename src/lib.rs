//! Evergreen - persistent collections with structural sharing.
//!
//! Every update returns a new version and leaves the old one intact. New
//! versions reuse, by reference, every node the update did not touch, so
//! keeping many versions around is cheap and any version can be read from
//! many threads at once without locking.
//!
//! - [`RedBlackTree`]: balanced ordered set, O(log n) `contains` and `insert`.
//! - [`UnbalancedBinaryTree`]: the same interface with no height control.
//! - [`Queue`]: FIFO queue with O(1) amortized `snoc` and `tail`.
//! - [`List`]: the persistent stack the queue is built from.
//!
//! # Quick Start
//!
//! ```
//! use evergreen::Queue;
//! use evergreen::RedBlackTree;
//!
//! let empty = RedBlackTree::new();
//! let tree = empty.insert(5).insert(3).insert(8);
//! assert!(tree.contains(&3));
//! assert!(empty.is_empty());
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 5, 8]);
//!
//! let queue: Queue<u32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(queue.head(), Ok(&1));
//! let rest = queue.tail()?;
//! assert_eq!(rest.head(), Ok(&2));
//! assert_eq!(queue.head(), Ok(&1));
//! # Ok::<(), evergreen::QueueError>(())
//! ```
//!
//! Ordering comes from the element's [`Ord`] implementation. It must be a
//! consistent total order; this is never checked.

pub mod error;
pub mod list;
pub mod queue;
pub mod red_black;
pub mod unbalanced;

mod traverse;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::QueueError;
pub use error::QueueResult;
pub use list::List;
pub use queue::Queue;
pub use red_black::Color;
pub use red_black::RedBlackTree;
pub use unbalanced::UnbalancedBinaryTree;
