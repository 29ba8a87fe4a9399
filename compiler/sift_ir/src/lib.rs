//! Sift IR - lexer output layer
//!
//! This crate owns what a scanner produces for one analyzed file:
//! - Spans for source locations
//! - Kind codes and per-language kind naming
//! - Immutable tokens linked into a forward chain
//! - `TokenDocument`, which owns the text and the chain
//!
//! Grammars and the automaton that decides token kinds live elsewhere.
//! They reach this crate through [`CharStream`] and [`KindNames`].

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod char_stream;
mod document;
mod error;
mod kind;
mod line_index;
mod span;
mod token;

pub use char_stream::CharStream;
pub use document::{DocumentConfig, DocumentId, TokenDocument};
pub use error::InvalidState;
pub use kind::{KindMap, KindNames, KindTable, NoKindNames, TokenKind};
pub use line_index::{LineCol, LineIndex};
pub use span::{Span, SpanError};
pub use token::{Token, TokenRef, Tokens};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=sift_ir=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host application may already own the global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
