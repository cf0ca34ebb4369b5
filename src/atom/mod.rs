//! Atom tree: parsing, typed leaf payloads, and kind-based lookup.

pub mod header;
pub mod query;
pub mod tree;

pub use header::AtomHeader;
pub use query::{find_all, find_one};
pub use tree::{parse_file, Atom, AtomIter, LeafFields, ParsedFile};
