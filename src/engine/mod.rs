/// Detection engine: hashing, the hash-tree, the collision index,
/// aggregation, suppression, and report formatting, wired together by
/// [`driver`].
mod fnv;

pub mod aggregator;
pub mod driver;
pub mod hash_tree;
pub mod index;
pub mod line_hash;
pub mod model;
pub mod report;
pub mod suppress;

pub use driver::scan;
pub use model::{CloneGroup, CloneReport};
