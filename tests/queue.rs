//! Queue behavior through the public API.

use std::collections::VecDeque;

use proptest::prelude::*;
use evergreen::Queue;
use evergreen::QueueError;

// =============================================================================
// Test helpers
// =============================================================================

#[derive(Clone, Debug)]
enum QueueOp {
    Snoc(u16),
    Tail,
}

fn arbitrary_queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        2 => any::<u16>().prop_map(QueueOp::Snoc),
        1 => Just(QueueOp::Tail),
    ]
}

fn drain<T: Clone>(mut queue: Queue<T>) -> Vec<T> {
    let mut out = vec![];
    while !queue.is_empty() {
        out.push(queue.head().unwrap().clone());
        queue = queue.tail().unwrap();
    }
    return out;
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn three_snocs_then_drain() {
    let queue = Queue::new().snoc(1).snoc(2).snoc(3);
    assert_eq!(queue.head(), Ok(&1));
    let one = queue.tail().unwrap();
    assert_eq!(one.head(), Ok(&2));
    let two = one.tail().unwrap();
    assert_eq!(two.head(), Ok(&3));
    let three = two.tail().unwrap();
    assert!(three.is_empty());
}

#[test]
fn bulk_construction_keeps_order() {
    let queue = Queue::from(vec![1, 2, 3, 4, 5]);
    assert_eq!(drain(queue), vec![1, 2, 3, 4, 5]);
}

#[test]
fn empty_access_fails() {
    let queue: Queue<i32> = Queue::default();
    assert_eq!(queue.head(), Err(QueueError::Empty));
    assert_eq!(queue.tail().err(), Some(QueueError::Empty));
    assert_eq!(QueueError::Empty.to_string(), "queue is empty");
}

#[test]
fn drained_queue_fails_again() {
    let queue = Queue::new().snoc("only");
    let empty = queue.tail().unwrap();
    assert!(empty.is_empty());
    assert!(empty.tail().is_err());
    // The older version still has its element.
    assert_eq!(queue.head(), Ok(&"only"));
}

#[test]
fn iter_is_restartable() {
    let queue: Queue<i32> = (1..=4).collect();
    let first: Vec<i32> = queue.iter().copied().collect();
    let second: Vec<i32> = (&queue).into_iter().copied().collect();
    assert_eq!(first, vec![1, 2, 3, 4]);
    assert_eq!(first, second);
}

#[test]
fn equality_ignores_internal_split() {
    let built: Queue<i32> = (0..5).collect();
    let shifted = Queue::new().snoc(-1).snoc(0).snoc(1).snoc(2).snoc(3).snoc(4).tail().unwrap();
    assert_eq!(built, shifted);
    assert_eq!(format!("{:?}", built), "[0, 1, 2, 3, 4]");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Any sequence of operations matches a VecDeque model.
    #[test]
    fn matches_vecdeque_model(ops in prop::collection::vec(arbitrary_queue_op(), 0..200)) {
        let mut queue = Queue::new();
        let mut model = VecDeque::new();

        for op in &ops {
            match op {
                QueueOp::Snoc(v) => {
                    queue = queue.snoc(*v);
                    model.push_back(*v);
                }
                QueueOp::Tail => {
                    if queue.is_empty() {
                        prop_assert!(model.is_empty());
                        prop_assert!(queue.tail().is_err());
                    } else {
                        queue = queue.tail().unwrap();
                        model.pop_front();
                    }
                }
            }
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.head().ok(), model.front());
        }

        let expected: Vec<u16> = model.into_iter().collect();
        prop_assert_eq!(queue.iter().copied().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(drain(queue), expected);
    }

    /// Dequeue order equals enqueue order.
    #[test]
    fn fifo(values in prop::collection::vec(any::<i64>(), 0..300)) {
        let queue: Queue<i64> = values.iter().copied().collect();
        prop_assert_eq!(drain(queue), values);
    }
}
