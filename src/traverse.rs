//! Lazy in-order traversal shared by both search trees.
//!
//! A traversal is a fresh value built from the root each time a tree's
//! `iter()` is called, so walks are restartable and never share a cursor.

use std::iter::FusedIterator;

use smallvec::SmallVec;

/// A binary node that can be walked in order.
pub(crate) trait BinaryNode {
    type Item;

    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;
    fn item(&self) -> &Self::Item;
}

/// Stack-based in-order walk.
///
/// The stack holds the unvisited left spine, so its depth never exceeds the
/// height of the tree. Balanced trees stay within the inline buffer.
pub(crate) struct InOrder<'a, N> {
    stack: SmallVec<[&'a N; 32]>,
}

impl<'a, N: BinaryNode + 'a> InOrder<'a, N> {
    pub(crate) fn new(root: Option<&'a N>) -> InOrder<'a, N> {
        let mut walk = InOrder { stack: SmallVec::new() };
        walk.descend(root);
        return walk;
    }

    fn descend(&mut self, mut node: Option<&'a N>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, N: BinaryNode + 'a> Iterator for InOrder<'a, N> {
    type Item = &'a N::Item;

    fn next(&mut self) -> Option<&'a N::Item> {
        let node = self.stack.pop()?;
        self.descend(node.right());
        return Some(node.item());
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every node on the stack is still to be yielded.
        return (self.stack.len(), None);
    }
}

impl<'a, N: BinaryNode + 'a> FusedIterator for InOrder<'a, N> {}
