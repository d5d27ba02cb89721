//! # `sgtok` Byte-Level BPE Tokenizer
//!
//! `sgtok` learns a subword vocabulary from raw text by iteratively
//! merging the most frequent adjacent symbol pair, and uses the
//! learned, ordered merge table to convert text to integer symbol ids
//! and back losslessly.
//!
//! See:
//! * [`tokenizer`] for the [`Tokenizer`] encode/decode object.
//! * [`training`] to learn a merge table from text.
//! * [`model_io`] for the `sgtok v1` persisted model format.
//! * [`pairs`] for the pair counting and merging primitives.
//! * [`vocab`] for the derived id -> bytes vocabulary.
//!
//! ## Example
//!
//! ```rust
//! use sgtok::Tokenizer;
//!
//! type T = u32;
//!
//! let mut tokenizer: Tokenizer<T> = Tokenizer::new();
//! tokenizer.train("a man a plan a canal panama", 300).unwrap();
//!
//! let ids = tokenizer.encode("a man a canal");
//! assert_eq!(tokenizer.decode(&ids).unwrap(), "a man a canal");
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``ahash`` (default)
//!
//! This swaps all `HashMap` implementations for ``ahash``; which is a
//! performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::SgHashMap`` type alias machinery.
#![warn(missing_docs, unused)]

pub mod errors;
pub mod merges;
pub mod model_io;
pub mod pairs;
pub mod specials;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{SgResult, SgtokError};
#[doc(inline)]
pub use tokenizer::Tokenizer;
#[doc(inline)]
pub use types::{Pair, TokenType};
