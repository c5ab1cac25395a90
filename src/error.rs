//! Error types for the persistent collections.

/// Errors from reading or dequeuing a [`Queue`](crate::Queue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// `head` or `tail` was called on a queue with no elements.
    #[error("queue is empty")]
    Empty,
}

/// Convenience alias for queue results.
pub type QueueResult<T> = Result<T, QueueError>;
