//! # Red-Black Tree Index
//!
//! An ordered in-memory index keyed by a scalar, built from scratch to
//! understand self-balancing search trees.
//!
//! ## Core idea
//! A red-black tree keeps itself balanced by coloring every node red or
//! black and maintaining two properties across mutations: no red node has a
//! red child, and every path from the root down to an absent child crosses
//! the same number of black nodes. Together these bound the height at
//! 2·log2(n+1), so insert, lookup, and erase are all O(log n) — no
//! rebuild passes, no amortization.
//!
//! Nodes live in a generational index arena rather than behind raw
//! pointers: parent/child links are `Option<NodeId>`, absence is a variant
//! instead of a shared nil sentinel, and erased slots are reclaimed through
//! a free list. The whole crate is safe code.
//!
//! ```
//! use rb_index::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [50, 30, 70, 20] {
//!     tree.insert(key);
//! }
//!
//! let handle = tree.find(30).unwrap();
//! assert_eq!(tree.erase(handle), Ok(30));
//!
//! let mut keys = [0; 8];
//! let n = tree.to_array(&mut keys);
//! assert_eq!(&keys[..n], &[20, 50, 70]);
//! ```

pub mod error;
pub mod tree;
pub mod types;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use tree::RbTree;
pub use tree::arena::NodeId;
pub use types::{Color, Key};
