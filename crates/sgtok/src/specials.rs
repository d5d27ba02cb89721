//! # Special Token Table
//!
//! Special tokens occupy a reserved id range disjoint from both the
//! byte space and the merge tokens. The table preserves insertion
//! order so that a saved model lists its specials in a stable order.

use crate::{
    errors::{SgResult, SgtokError},
    types::TokenType,
};

/// The reserved default special-token table, as ``(name, id)`` pairs.
///
/// The id range is deliberately far above the byte space so trained
/// merge tokens do not collide with it for any reasonable vocab size.
pub const RESERVED_SPECIAL_TOKENS: &[(&str, usize)] = &[
    ("<sos>", 10256),
    ("<eos>", 10257),
    ("<unk>", 10258),
    ("<pad>", 10259),
    ("<cls>", 10260),
    ("<sep>", 10261),
    ("<mask>", 10262),
];

/// Insertion-ordered ``{ name -> T }`` special token table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialTokens<T: TokenType> {
    /// ``(name, token)`` entries in insertion order.
    entries: Vec<(String, T)>,
}

impl<T: TokenType> SpecialTokens<T> {
    /// The default special-token table ([`RESERVED_SPECIAL_TOKENS`]).
    ///
    /// This is an explicit configuration value, not shared process
    /// state; instances with different special sets coexist safely.
    ///
    /// ## Panics
    /// Panics if `T` cannot represent the reserved ids (e.g. `u8`).
    pub fn reserved() -> Self {
        Self::from_entries(
            RESERVED_SPECIAL_TOKENS
                .iter()
                .map(|&(name, id)| (name, T::from_usize(id).expect("token type too small for reserved special ids"))),
        )
        .expect("reserved special tokens are well-formed")
    }

    /// Build a table from ``(name, token)`` entries.
    ///
    /// ## Arguments
    /// * `entries` - The entries, in insertion order.
    ///
    /// ## Returns
    /// A `Result` containing the new `SpecialTokens`, or an error if a
    /// name contains whitespace or a name or token repeats.
    pub fn from_entries<I, S>(entries: I) -> SgResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (name, token) in entries {
            table.insert(name.as_ref(), token)?;
        }
        Ok(table)
    }

    /// Add an entry to the table.
    ///
    /// ## Arguments
    /// * `name` - The token's literal name; must not contain whitespace
    ///   (the model format is whitespace-separated).
    /// * `token` - The reserved symbol id.
    pub fn insert(
        &mut self,
        name: &str,
        token: T,
    ) -> SgResult<()> {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(SgtokError::VocabConflict(format!(
                "special token name {name:?} must be non-empty and whitespace-free"
            )));
        }
        for (other, t) in &self.entries {
            if other == name {
                return Err(SgtokError::VocabConflict(format!(
                    "special token {name:?} is already defined"
                )));
            }
            if *t == token {
                return Err(SgtokError::VocabConflict(format!(
                    "special token id {token} is already assigned to {other:?}"
                )));
            }
        }
        self.entries.push((name.to_string(), token));
        Ok(())
    }

    /// Get the number of special tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate ``(name, token)`` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.entries.iter().map(|(name, token)| (name.as_str(), *token))
    }

    /// Look up the id assigned to a name, if any.
    ///
    /// ## Arguments
    /// * `name` - The token name to look up.
    pub fn token_for(
        &self,
        name: &str,
    ) -> Option<T> {
        self.entries
            .iter()
            .find_map(|(n, t)| if n == name { Some(*t) } else { None })
    }
}
