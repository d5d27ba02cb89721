//! # Vocabulary Training
//!
//! Support for learning an ordered merge table from raw text.
//!
//! Training encodes the text as raw bytes, then repeatedly merges the
//! most frequent adjacent pair until the requested vocab size is
//! reached or no pairs remain. The resulting table's insertion order
//! is the merge priority used at encode time.
//!
//! ```rust
//! use sgtok::specials::SpecialTokens;
//! use sgtok::training::TrainerOptions;
//!
//! type T = u32;
//!
//! let trainer = TrainerOptions::new(300).init();
//! let results = trainer
//!     .train::<T>("some training text", &SpecialTokens::reserved())
//!     .unwrap();
//!
//! assert!(results.merges_done <= 300 - 256);
//! ```

mod bpe_trainer;

#[doc(inline)]
pub use bpe_trainer::{BpeTrainer, TrainResults, TrainerOptions};
