//! Versions shared across threads.

use std::thread;

use evergreen::Queue;
use evergreen::RedBlackTree;
use evergreen::UnbalancedBinaryTree;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn collections_are_send_and_sync() {
    assert_send_sync::<RedBlackTree<String>>();
    assert_send_sync::<UnbalancedBinaryTree<String>>();
    assert_send_sync::<Queue<String>>();
}

#[test]
fn threads_extend_one_tree_independently() {
    let base: RedBlackTree<u32> = (0..100).collect();

    let versions: Vec<RedBlackTree<u32>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let base = &base;
                scope.spawn(move || {
                    let mut tree = base.clone();
                    for i in 0..100 {
                        tree = tree.insert(1000 * (t + 1) + i);
                    }
                    tree
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(base.iter().count(), 100);
    for (t, tree) in versions.iter().enumerate() {
        assert_eq!(tree.iter().count(), 200);
        let own = 1000 * (t as u32 + 1);
        assert!(tree.contains(&own));
        for (other, _) in versions.iter().enumerate().filter(|(o, _)| *o != t) {
            assert!(!tree.contains(&(1000 * (other as u32 + 1))));
        }
    }
}

#[test]
fn threads_drain_one_queue() {
    let queue: Queue<u32> = (0..1000).collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut local = queue.clone();
                let mut expected = 0;
                while let Ok(head) = local.head() {
                    assert_eq!(*head, expected);
                    expected += 1;
                    local = local.tail().unwrap();
                }
                assert_eq!(expected, 1000);
            });
        }
    });

    assert_eq!(queue.head(), Ok(&0));
}
