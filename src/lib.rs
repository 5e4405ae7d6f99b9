//! A Binary Search Tree (BST) with parent back-links, plus the small batch
//! protocol that drives it from a stream of insert/remove records.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, delete, and enumerate stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of the tree
//! in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    less than *or equal to* its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    strictly greater than its own key.
//!
//! Note the asymmetry: duplicate keys are allowed, and a duplicate always
//! lands in the left subtree of the first node holding an equal key. An
//! in-order traversal (left subtree, node, right subtree) therefore yields
//! every key, duplicates included, in non-decreasing order.
//!
//! The tree does not rebalance itself. Its height, and with it the cost
//! of every operation, is purely a function of the order in which keys
//! were inserted.
//!
//! The [`linked`] module holds the tree itself; [`script`] reads
//! whitespace-delimited `<op> <key>` records, applies them, and renders
//! the in-order key sequence.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod linked;
pub mod script;

#[cfg(test)]
mod test;
