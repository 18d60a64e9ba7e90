//! Unbalanced binary search tree with parent links, backed by an arena.
//!
//! For every node, the values in its left subtree compare less than or equal to its value and the
//! values in its right subtree compare greater than or equal to it. `BinarySearchTree<T>` owns the
//! nodes and performs the mutating operations, `NodeId` names a node, and `NodeRef<'a, T>` is a
//! read-only view of a node that answers the per-node queries: navigation, `depth`, `minimum`,
//! `maximum`, `predecessor`, `successor`, subtree search, and the traversals.

mod node;
mod tree;

pub use self::node::{BinarySearchTreeIntoIter, BinarySearchTreeIter, NodeId, NodeRef};
pub use self::tree::BinarySearchTree;
