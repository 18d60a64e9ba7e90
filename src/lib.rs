//! Textbook data structures and algorithms over totally ordered values.
//!
//! - [`stack`] and [`queue`]: last-in-first-out and first-in-first-out containers.
//! - [`search`]: recursive and iterative binary search over sorted slices.
//! - [`sort`]: insertion sort, top-down merge sort, and bottom-up merge sort.
//! - [`binary_search_tree`]: an arena-backed binary search tree with parent links.
//!
//! Every component is independent of the others. Absence is always reported with `Option`:
//! popping an empty stack, missing a search, or asking for the successor of the maximum all return
//! `None`.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod arena;
pub mod binary_search_tree;
pub mod queue;
pub mod search;
pub mod sort;
pub mod stack;
