//! Generic UCI-style configuration store primitives used by higher-level tools.
//!
//! The parse/render cycle is normalizing: `package` lines and comments are
//! dropped, and options serialize in key order. The first commit through a
//! [`DirStore`] therefore rewrites a hand-edited file into the normalized
//! layout. See [`writer::render`] for the exact guarantees.

pub mod parser;
pub mod store;
pub mod tokens;
pub mod tree;
pub mod writer;

pub use parser::{parse, parse_file, ParseError};
pub use store::{DirStore, StoreError};
pub use tokens::TokenSet;
pub use tree::{UciDocument, UciSection};
pub use writer::{render, write_file, WriteError};
