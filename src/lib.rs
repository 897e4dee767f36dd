//! Ordered-index ranking engine for scored teams.
//!
//! This crate ranks sports teams, each a name with an accumulated integer
//! score, using two families of ordered-index structures, a stable
//! divide-and-conquer sort, and linear/binary search utilities:
//!
//! - [`OrderedIndex`] - a plain binary search tree, no rebalancing
//! - [`BalancedIndex`] - an AVL variant guaranteeing O(log n) height
//! - [`sort`] - stable merge sort plus the O(n²) bubble-sort baseline
//! - [`search`] - linear scan and binary bisection over sequences
//! - [`Rankings`] - the pipeline composing all of the above
//! - [`aggregate`] - folds raw match results into per-team totals
//!
//! # Example
//!
//! ```
//! use standings::aggregate::{MatchRecord, team_points};
//! use standings::Rankings;
//!
//! let matches = [
//!     MatchRecord::new("Brazil", "Japan", 2, 0),
//!     MatchRecord::new("Japan", "Chile", 1, 1),
//!     MatchRecord::new("Chile", "Brazil", 0, 1),
//! ];
//!
//! let teams = team_points(&matches);
//! let rankings = Rankings::build_default(&teams);
//!
//! assert_eq!(rankings.top()[0].name, "Brazil");
//! assert_eq!(rankings.lookup_name("Chile").map(|t| t.score), Some(1));
//! ```
//!
//! # Design
//!
//! Every index, sort, and search operation takes an explicit key-extraction
//! function; nothing relies on the value type's own ordering, so the same
//! structures serve name-ordered and score-ordered views.
//!
//! Both index kinds share one duplicate-key policy: strictly-less goes left,
//! everything else (ties included) goes right. In the unbalanced tree this
//! means searching a duplicated key finds the earliest-inserted value; the
//! balanced tree only promises some value holding the key, since a rotation
//! can promote a later duplicate. The unbalanced tree degenerates toward a
//! right-leaning chain under that policy, which is why its descent and
//! traversal are iterative; the AVL's height bound makes recursion safe
//! there by construction.
//!
//! Tree nodes live in an append-only arena addressed by compact handles
//! rather than boxed children. There is no deletion, so the arena never
//! frees a slot.
//!
//! Everything is single-threaded, synchronous, CPU-bound batch work: build
//! the indexes once, then only read. Absence (a missed search) is an
//! `Option`, never a panic; empty inputs yield empty outputs, not errors.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod balanced_index;
mod ordered_index;
mod ranking;
mod raw;
mod team;

pub mod aggregate;
pub mod search;
pub mod sort;

pub use balanced_index::BalancedIndex;
pub use ordered_index::OrderedIndex;
pub use ranking::{DEFAULT_TOP_N, Rankings};
pub use team::Team;
