//! # Tokenizer
//!
//! The user-facing object tying the pieces together: an ordered merge
//! table, a special token table, the reserved pattern string, and the
//! derived id -> bytes vocabulary.
//!
//! A fresh instance has an empty merge table, the caller-supplied (or
//! reserved default) special tokens, and a vocabulary of the 256 byte
//! entries plus the special entries. Training or loading replaces
//! merges/specials/pattern and rebuilds the vocabulary; the instance
//! is otherwise immutable during encode/decode use.

use std::path::Path;

use crate::{
    errors::{SgResult, SgtokError},
    merges::MergeTable,
    model_io::{ModelData, load_model_path, save_model_path},
    pairs::{count_pairs, merge_pair},
    specials::SpecialTokens,
    training::TrainerOptions,
    types::TokenType,
    vocab::{TokenBytesMap, build_token_bytes},
};

/// A byte-level BPE tokenizer.
#[derive(Debug, Clone)]
pub struct Tokenizer<T: TokenType> {
    /// The ordered merge table.
    merges: MergeTable<T>,

    /// The special token table.
    specials: SpecialTokens<T>,

    /// Reserved pre-tokenization pattern; carried through save/load
    /// but unused by the algorithm.
    pattern: String,

    /// Derived ``{ id -> bytes }`` vocabulary.
    vocab: TokenBytesMap<T>,
}

impl<T: TokenType> Default for Tokenizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a tokenizer with the reserved default special tokens.
    ///
    /// ## Panics
    /// Panics if `T` cannot represent the reserved special ids
    /// (e.g. `u8`).
    pub fn new() -> Self {
        Self::with_special_tokens(SpecialTokens::reserved())
            .expect("reserved special tokens are disjoint from the byte space")
    }

    /// Create a tokenizer with an explicit special token table.
    ///
    /// ## Arguments
    /// * `specials` - The special token table.
    ///
    /// ## Returns
    /// A `Result` containing the new `Tokenizer`, or an error if a
    /// special id collides with the byte space.
    pub fn with_special_tokens(specials: SpecialTokens<T>) -> SgResult<Self> {
        let merges = MergeTable::default();
        let vocab = build_token_bytes(&merges, &specials)?;
        Ok(Self {
            merges,
            specials,
            pattern: String::new(),
            vocab,
        })
    }

    /// Get the ordered merge table.
    pub fn merges(&self) -> &MergeTable<T> {
        &self.merges
    }

    /// Get the special token table.
    pub fn special_tokens(&self) -> &SpecialTokens<T> {
        &self.specials
    }

    /// Get the reserved pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the derived ``{ id -> bytes }`` vocabulary.
    pub fn vocab(&self) -> &TokenBytesMap<T> {
        &self.vocab
    }

    /// Train a merge table from raw text, replacing any prior merges.
    ///
    /// ## Arguments
    /// * `text` - The training text.
    /// * `vocab_size` - The target vocabulary size; must be >= 256.
    ///
    /// ## Returns
    /// A `Result` containing the number of merges learned (early stop
    /// may make this fewer than ``vocab_size - 256``).
    pub fn train(
        &mut self,
        text: &str,
        vocab_size: usize,
    ) -> SgResult<usize> {
        let results = TrainerOptions::new(vocab_size)
            .init()
            .train(text, &self.specials)?;

        let vocab = build_token_bytes(&results.merges, &self.specials)?;
        self.merges = results.merges;
        self.vocab = vocab;
        Ok(results.merges_done)
    }

    /// Encode text into symbol ids.
    ///
    /// Starts from the raw UTF-8 byte ids, then repeatedly applies the
    /// earliest-learned merge whose pair is present, until no learned
    /// merge applies. This reproduces, on any input, the fixed point
    /// of replaying the training-time merge order.
    ///
    /// Special-token literals in the text are NOT recognized here;
    /// special tokens enter the vocabulary and decode path only.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The encoded symbol id sequence.
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let mut ids: Vec<T> = text.bytes().map(|b| T::from_u8(b).unwrap()).collect();

        while ids.len() > 1 {
            // Only the set of pairs present matters; counts are unused.
            let counts = count_pairs(&ids);
            let Some((pair, token)) = counts
                .keys()
                .filter_map(|&pair| self.merges.token_for(pair).map(|t| (pair, t)))
                .min_by_key(|&(_, token)| token)
            else {
                break;
            };
            ids = merge_pair(&ids, pair, token);
        }
        ids
    }

    /// Decode symbol ids into text.
    ///
    /// Invalid UTF-8 byte subsequences are replaced with U+FFFD rather
    /// than causing failure; arbitrary (even adversarial) id sequences
    /// are expected input here.
    ///
    /// ## Arguments
    /// * `ids` - The symbol ids to decode.
    ///
    /// ## Returns
    /// A `Result` containing the decoded text; fails only when an id
    /// has no vocabulary entry.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> SgResult<String> {
        let bytes = self.decode_bytes(ids)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Decode symbol ids into their exact concatenated bytes.
    ///
    /// ## Arguments
    /// * `ids` - The symbol ids to decode.
    ///
    /// ## Returns
    /// A `Result` containing the concatenated byte expansions.
    pub fn decode_bytes(
        &self,
        ids: &[T],
    ) -> SgResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(ids.len());
        for id in ids {
            let expansion = self.vocab.get(id).ok_or_else(|| SgtokError::UnknownToken {
                token: id.to_string(),
            })?;
            bytes.extend_from_slice(expansion);
        }
        Ok(bytes)
    }

    /// Install parsed model data, replacing merges, specials, and
    /// pattern wholesale, and rebuild the vocabulary.
    ///
    /// All fallible work happens before any field changes; a failed
    /// install leaves the tokenizer untouched.
    ///
    /// ## Arguments
    /// * `model` - The parsed model data.
    pub fn install_model(
        &mut self,
        model: ModelData<T>,
    ) -> SgResult<()> {
        let merges = MergeTable::from_pairs(model.merge_pairs)?;
        let vocab = build_token_bytes(&merges, &model.specials)?;

        self.pattern = model.pattern;
        self.specials = model.specials;
        self.merges = merges;
        self.vocab = vocab;
        Ok(())
    }

    /// Save the tokenizer to a model file.
    ///
    /// ## Arguments
    /// * `path` - The target path.
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> SgResult<()> {
        save_model_path(path, &self.pattern, &self.specials, &self.merges)
    }

    /// Load a model file, replacing this tokenizer's state wholesale.
    ///
    /// ## Arguments
    /// * `path` - The path of the model file.
    pub fn load<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> SgResult<()> {
        self.install_model(load_model_path(path)?)
    }
}
