//! Scanner-side helpers for building sift token chains.
//!
//! Nothing here decides token kinds. [`SourceCharStream`] is a
//! [`CharStream`](sift_ir::CharStream) over a `&str`, [`ChainBuilder`]
//! appends tokens to a document's chain, and [`scan`] runs the usual driver
//! loop around a caller-supplied kind decider.

mod builder;
mod scan;
mod stream;

pub use builder::ChainBuilder;
pub use scan::{scan, Lexeme, ScanConfig, ScanError};
pub use stream::SourceCharStream;
