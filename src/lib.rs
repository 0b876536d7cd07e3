//! Ordered collections built on a top-down splay tree.
//!
//! `SplayMap` and `SplaySet` keep their entries in a binary search tree that restructures itself
//! on every access: the key that was looked up, inserted or removed (or the closest key on its
//! search path) is rotated to the root. Recently used keys therefore stay cheap to reach, and any
//! sequence of operations runs in amortized logarithmic time.
//!
//! The `workload` module and the `splay-bench` binary time bulk insert, search and delete runs
//! against a `SplayMap` using keys read from comma-separated files.

mod entry;
pub mod splay_tree;
pub mod workload;
