//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.
//!
//! Every operation that searches for a key splays the tree with a top-down zig-zig/zig-zag
//! pass, bringing the key (or the last node on its search path) to the root.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{SplayMap, SplayMapIntoIter, SplayMapIter, SplayMapIterMut};
pub use self::set::{SplaySet, SplaySetIntoIter, SplaySetIter};
