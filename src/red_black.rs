//! Persistent red-black tree with insertion-time rebalancing.
//!
//! Insertion descends to a leaf, attaches a red node, and rebuilds the path
//! back up through `balance`. A black node whose child and grandchild are
//! both red is rotated into a red node with two black children, which leaves
//! at most one red-red pair for the next level up to fix. The new root is
//! then painted black. There is no separate fixup pass and no deletion.
//!
//! After every insert:
//! - no red node has a red child,
//! - every root-to-leaf path passes the same number of black nodes,
//! - the in-order values are strictly increasing,
//! - the root is black.
//!
//! Together these bound the height by `2 * log2(n + 1)`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::traverse::BinaryNode;
use crate::traverse::InOrder;

/// Node color. Empty leaves count as black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Color::Red => write!(f, "R"),
            Color::Black => write!(f, "B"),
        };
    }
}

struct Node<T> {
    color: Color,
    left: Link<T>,
    value: T,
    right: Link<T>,
}

type Link<T> = Option<Arc<Node<T>>>;

impl<T> Node<T> {
    fn new(color: Color, left: Link<T>, value: T, right: Link<T>) -> Arc<Node<T>> {
        return Arc::new(Node { color, left, value, right });
    }
}

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

/// An immutable ordered set kept balanced by red-black coloring.
///
/// Values are ordered by their [`Ord`] implementation, which must be a
/// consistent total order. Cloning is O(1), and two versions that differ by
/// one insertion share all but O(log n) nodes.
pub struct RedBlackTree<T> {
    root: Link<T>,
}

impl<T> RedBlackTree<T> {
    /// The empty tree.
    pub const fn new() -> RedBlackTree<T> {
        return RedBlackTree { root: None };
    }

    pub fn is_empty(&self) -> bool {
        return self.root.is_none();
    }

    /// Whether `value` is in the tree. O(log n).
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

    /// Color of the root. The empty tree is black.
    pub fn color(&self) -> Color {
        return self.root.as_deref().map_or(Color::Black, |node| node.color);
    }

    /// The value stored at the root.
    pub fn value(&self) -> Option<&T> {
        return self.root.as_deref().map(|node| &node.value);
    }

    /// The left subtree of the root, shared with this tree.
    ///
    /// Subtrees are views for inspection: a red subtree root is returned red.
    pub fn left(&self) -> RedBlackTree<T> {
        let left = self.root.as_deref().and_then(|node| node.left.clone());
        return RedBlackTree { root: left };
    }

    /// The right subtree of the root, shared with this tree.
    pub fn right(&self) -> RedBlackTree<T> {
        let right = self.root.as_deref().and_then(|node| node.right.clone());
        return RedBlackTree { root: right };
    }

    /// Values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter { inner: InOrder::new(self.root.as_deref()) };
    }

    /// True when both trees have the same root node (or are both empty).
    pub fn ptr_eq(&self, other: &RedBlackTree<T>) -> bool {
        return match (&self.root, &other.root) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
    }
}

impl<T: Ord + Clone> RedBlackTree<T> {
    /// A new tree that also holds `value`. O(log n).
    ///
    /// Inserting a value that is already present yields a tree with the same
    /// contents; the subtree rooted at the matching node is reused as is.
    pub fn insert(&self, value: T) -> RedBlackTree<T> {
        let top = ins(value, &self.root);
        return RedBlackTree { root: Some(blacken(top)) };
    }
}

/// Inserts below `link`, rebalancing every rebuilt node on the way up.
fn ins<T: Ord + Clone>(value: T, link: &Link<T>) -> Arc<Node<T>> {
    let Some(node) = link else {
        return Node::new(Color::Red, None, value, None);
    };

    return match value.cmp(&node.value) {
        Ordering::Less => balance(
            node.color,
            Some(ins(value, &node.left)),
            node.value.clone(),
            node.right.clone(),
        ),
        Ordering::Greater => balance(
            node.color,
            node.left.clone(),
            node.value.clone(),
            Some(ins(value, &node.right)),
        ),
        Ordering::Equal => Arc::clone(node),
    };
}

/// Paints the root black, keeping its children and value.
fn blacken<T: Clone>(node: Arc<Node<T>>) -> Arc<Node<T>> {
    if node.color == Color::Black {
        return node;
    }
    return Node::new(Color::Black, node.left.clone(), node.value.clone(), node.right.clone());
}

fn red<T>(link: &Link<T>) -> Option<&Node<T>> {
    return link.as_deref().filter(|node| node.color == Color::Red);
}

/// Builds `(color, left, value, right)`, rotating away a red child with a
/// red child of its own when `color` is black.
///
/// Each of the four red-red shapes becomes a red node over two black nodes,
/// with the three values of the violating path in order.
fn balance<T: Clone>(color: Color, left: Link<T>, value: T, right: Link<T>) -> Arc<Node<T>> {
    if color == Color::Black {
        if let Some(l) = red(&left) {
            if let Some(ll) = red(&l.left) {
                trace!(shape = "left-left", "red-black rotation");
                return Node::new(
                    Color::Red,
                    Some(Node::new(Color::Black, ll.left.clone(), ll.value.clone(), ll.right.clone())),
                    l.value.clone(),
                    Some(Node::new(Color::Black, l.right.clone(), value, right)),
                );
            }
            if let Some(lr) = red(&l.right) {
                trace!(shape = "left-right", "red-black rotation");
                return Node::new(
                    Color::Red,
                    Some(Node::new(Color::Black, l.left.clone(), l.value.clone(), lr.left.clone())),
                    lr.value.clone(),
                    Some(Node::new(Color::Black, lr.right.clone(), value, right)),
                );
            }
        }
        if let Some(r) = red(&right) {
            if let Some(rl) = red(&r.left) {
                trace!(shape = "right-left", "red-black rotation");
                return Node::new(
                    Color::Red,
                    Some(Node::new(Color::Black, left, value, rl.left.clone())),
                    rl.value.clone(),
                    Some(Node::new(Color::Black, rl.right.clone(), r.value.clone(), r.right.clone())),
                );
            }
            if let Some(rr) = red(&r.right) {
                trace!(shape = "right-right", "red-black rotation");
                return Node::new(
                    Color::Red,
                    Some(Node::new(Color::Black, left, value, r.left.clone())),
                    r.value.clone(),
                    Some(Node::new(Color::Black, rr.left.clone(), rr.value.clone(), rr.right.clone())),
                );
            }
        }
    }
    return Node::new(color, left, value, right);
}

impl<T> Clone for RedBlackTree<T> {
    fn clone(&self) -> Self {
        return RedBlackTree { root: self.root.clone() };
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Ord + Clone> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RedBlackTree::new();
        for value in iter {
            tree = tree.insert(value);
        }
        return tree;
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T: PartialEq> PartialEq for RedBlackTree<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for RedBlackTree<T> {}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}

/// Diagnostic rendering, `[<B|R> <left> <value> <right>]`, with `[B Empty]`
/// for an empty subtree.
impl<T: fmt::Display> fmt::Display for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return render(&self.root, f);
    }
}

fn render<T: fmt::Display>(link: &Link<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Some(node) = link else {
        return write!(f, "[{} Empty]", Color::Black);
    };
    write!(f, "[{} ", node.color)?;
    render(&node.left, f)?;
    write!(f, " {} ", node.value)?;
    render(&node.right, f)?;
    return write!(f, "]");
}

/// In-order iterator over a [`RedBlackTree`].
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
