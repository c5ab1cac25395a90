//! Serialization as plain sequences, in traversal order.
//!
//! Deserializing goes through `insert` and `snoc`, so any input sequence
//! produces a well-formed collection; duplicate tree values collapse.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::List;
use crate::Queue;
use crate::RedBlackTree;
use crate::UnbalancedBinaryTree;

macro_rules! sequence_serde {
    ($ty:ident $(+ $bound:ident)*) => {
        impl<T: Serialize> Serialize for $ty<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                return serializer.collect_seq(self.iter());
            }
        }

        impl<'de, T: Deserialize<'de> $(+ $bound)*> Deserialize<'de> for $ty<T> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let values = Vec::<T>::deserialize(deserializer)?;
                return Ok(values.into_iter().collect());
            }
        }
    };
}

sequence_serde!(RedBlackTree + Ord + Clone);
sequence_serde!(UnbalancedBinaryTree + Ord + Clone);
sequence_serde!(Queue + Clone);
sequence_serde!(List);
