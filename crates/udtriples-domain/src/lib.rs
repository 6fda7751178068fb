//! udtriples Domain Layer
//!
//! Value types shared by every other crate in the workspace. This crate has
//! no external dependencies and knows nothing about files, parsers or
//! command lines.
//!
//! ## Key Concepts
//!
//! - **Token**: one word of a treebank sentence (form, lemma, UPOS, features)
//! - **Features**: ordered `name=value` morphological features of a token
//! - **Triple**: the three-field training record written for the inflection model
//! - **Split**: the named data partition (train, dev, test) a corpus feeds
//!
//! ## Architecture
//!
//! - Pure data and pure functions only
//! - Readers and writers live in `udtriples-io`
//! - The [`traits`] module defines the seams those crates implement

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod features;
pub mod split;
pub mod token;
pub mod traits;
pub mod triple;

// Re-exports for convenience
pub use corpus::{Corpus, Sentence};
pub use features::Features;
pub use split::Split;
pub use token::Token;
pub use triple::{FieldOrder, Triple};
