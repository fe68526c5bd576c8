//! Tailor IR - shared data structures for the formatter.
//!
//! This crate contains everything the formatting engine needs to know about
//! a parsed document without depending on any particular grammar:
//! - Spans for source locations
//! - Tokens and `TokenStream` (real and hidden channels)
//! - The parse-tree arena (`ParseTree`, `NodeId`, `RuleType`)
//! - The `Frontend` contract that grammar crates implement
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: tree nodes are `NodeId(u32)` indices into an
//!   arena, parents are plain indices, never owning pointers
//! - **Grammar-agnostic tags**: token and rule types are opaque integers; only
//!   the frontend knows their names

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod error;
mod frontend;
mod span;
mod token;
mod tree;

pub use error::FrontendError;
pub use frontend::{Frontend, Parsed};
pub use span::Span;
pub use token::{Channel, Token, TokenStream, TokenType};
pub use tree::{Ancestors, Child, Leaf, Node, NodeId, ParseTree, RuleType};
