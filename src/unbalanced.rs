//! Persistent binary search tree without any height control.
//!
//! Insertion rebuilds only the nodes on the root-to-insertion path and reuses
//! every sibling subtree. Sorted input degrades the tree into a chain, so
//! lookups and insertions are O(depth), which can be O(n). This is the
//! baseline the [`RedBlackTree`](crate::RedBlackTree) improves on.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::traverse::BinaryNode;
use crate::traverse::InOrder;

struct Node<T> {
    left: Link<T>,
    value: T,
    right: Link<T>,
}

type Link<T> = Option<Arc<Node<T>>>;

impl<T> BinaryNode for Node<T> {
    type Item = T;

    fn left(&self) -> Option<&Node<T>> {
        return self.left.as_deref();
    }

    fn right(&self) -> Option<&Node<T>> {
        return self.right.as_deref();
    }

    fn item(&self) -> &T {
        return &self.value;
    }
}

impl<T> Drop for Node<T> {
    // A degenerate tree is a chain as long as the tree is large; free it
    // with an explicit stack rather than one stack frame per node.
    fn drop(&mut self) {
        let mut stack: Vec<Arc<Node<T>>> = vec![];
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(node) = stack.pop() {
            if let Ok(mut node) = Arc::try_unwrap(node) {
                stack.extend(node.left.take());
                stack.extend(node.right.take());
            }
        }
    }
}

/// An immutable binary search tree holding each value at most once.
///
/// Values are ordered by their [`Ord`] implementation, which must be a
/// consistent total order. Cloning is O(1).
pub struct UnbalancedBinaryTree<T> {
    root: Link<T>,
}

impl<T> UnbalancedBinaryTree<T> {
    /// The empty tree.
    pub const fn new() -> UnbalancedBinaryTree<T> {
        return UnbalancedBinaryTree { root: None };
    }

    pub fn is_empty(&self) -> bool {
        return self.root.is_none();
    }

    /// Whether `value` is in the tree. O(depth).
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            match value.cmp(node.value.borrow()) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return true,
            }
        }
        return false;
    }

    /// The value stored at the root.
    pub fn value(&self) -> Option<&T> {
        return self.root.as_deref().map(|node| &node.value);
    }

    /// The left subtree of the root, shared with this tree.
    pub fn left(&self) -> UnbalancedBinaryTree<T> {
        let left = self.root.as_deref().and_then(|node| node.left.clone());
        return UnbalancedBinaryTree { root: left };
    }

    /// The right subtree of the root, shared with this tree.
    pub fn right(&self) -> UnbalancedBinaryTree<T> {
        let right = self.root.as_deref().and_then(|node| node.right.clone());
        return UnbalancedBinaryTree { root: right };
    }

    /// Values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter { inner: InOrder::new(self.root.as_deref()) };
    }

    /// True when both trees have the same root node (or are both empty).
    pub fn ptr_eq(&self, other: &UnbalancedBinaryTree<T>) -> bool {
        return match (&self.root, &other.root) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
    }
}

impl<T: Ord + Clone> UnbalancedBinaryTree<T> {
    /// A new tree that also holds `value`.
    ///
    /// If `value` is already present the result shares this tree's root.
    pub fn insert(&self, value: T) -> UnbalancedBinaryTree<T> {
        return UnbalancedBinaryTree { root: Some(insert_at(value, &self.root)) };
    }
}

/// Rebuilds the path from `link` down to where `value` belongs.
fn insert_at<T: Ord + Clone>(value: T, link: &Link<T>) -> Arc<Node<T>> {
    let Some(node) = link else {
        return Arc::new(Node { left: None, value, right: None });
    };

    return match value.cmp(&node.value) {
        Ordering::Less => Arc::new(Node {
            left: Some(insert_at(value, &node.left)),
            value: node.value.clone(),
            right: node.right.clone(),
        }),
        Ordering::Greater => Arc::new(Node {
            left: node.left.clone(),
            value: node.value.clone(),
            right: Some(insert_at(value, &node.right)),
        }),
        Ordering::Equal => Arc::clone(node),
    };
}

impl<T> Clone for UnbalancedBinaryTree<T> {
    fn clone(&self) -> Self {
        return UnbalancedBinaryTree { root: self.root.clone() };
    }
}

impl<T> Default for UnbalancedBinaryTree<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Ord + Clone> FromIterator<T> for UnbalancedBinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = UnbalancedBinaryTree::new();
        for value in iter {
            tree = tree.insert(value);
        }
        return tree;
    }
}

impl<'a, T> IntoIterator for &'a UnbalancedBinaryTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T: PartialEq> PartialEq for UnbalancedBinaryTree<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for UnbalancedBinaryTree<T> {}

impl<T: fmt::Debug> fmt::Debug for UnbalancedBinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}

/// Diagnostic rendering, `[<left> <value> <right>]`, with `[ Empty ]` for
/// an empty subtree.
impl<T: fmt::Display> fmt::Display for UnbalancedBinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return render(&self.root, f);
    }
}

fn render<T: fmt::Display>(link: &Link<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Some(node) = link else {
        return write!(f, "[ Empty ]");
    };
    write!(f, "[")?;
    render(&node.left, f)?;
    write!(f, " {} ", node.value)?;
    render(&node.right, f)?;
    return write!(f, "]");
}

/// In-order iterator over an [`UnbalancedBinaryTree`].
pub struct Iter<'a, T> {
    inner: InOrder<'a, Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        return self.inner.next();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.inner.size_hint();
    }
}
