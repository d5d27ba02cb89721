//! # Ordered Merge Table
//!
//! Insertion order is training order, and order is a first-class
//! invariant: the token assigned to a merge doubles as its priority
//! at encode time (lowest token = earliest-learned merge). The table
//! is therefore an explicit ordered structure - a record list plus a
//! pair lookup index - rather than a bare hash map.

use crate::{
    errors::{SgResult, SgtokError},
    types::{BYTE_SPACE, Pair, SgHashMap, TokenType, hash_map_with_capacity},
};

/// Ordered ``{ (T, T) -> T }`` merge table.
///
/// Merge tokens are dense and strictly increasing from 256, in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeTable<T: TokenType> {
    /// ``(pair, token)`` records in insertion order.
    records: Vec<(Pair<T>, T)>,

    /// Lookup index from pair to its assigned token.
    index: SgHashMap<Pair<T>, T>,
}

impl<T: TokenType> MergeTable<T> {
    /// Build a table from merge pairs, assigning tokens 256, 257, ...
    /// in iteration order.
    ///
    /// This is the model-load path: merge tokens are not stored in the
    /// model file and are reconstructed from line order.
    ///
    /// ## Arguments
    /// * `pairs` - The merge pairs, in insertion order.
    ///
    /// ## Returns
    /// A `Result` containing the new `MergeTable` or an error.
    pub fn from_pairs<I>(pairs: I) -> SgResult<Self>
    where
        I: IntoIterator<Item = Pair<T>>,
    {
        let mut table = Self::default();
        for pair in pairs {
            table.push(pair)?;
        }
        Ok(table)
    }

    /// Get the number of merges in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The token the next pushed merge will be assigned.
    ///
    /// ## Returns
    /// `None` if the token would exceed the capacity of `T`.
    pub fn next_token(&self) -> Option<T> {
        T::from_usize(BYTE_SPACE + self.records.len())
    }

    /// Append a merge, assigning it the next sequential token.
    ///
    /// ## Arguments
    /// * `pair` - The pair to merge.
    ///
    /// ## Returns
    /// A `Result` containing the assigned token, or an error if the
    /// pair is already merged or the token would overflow `T`.
    pub fn push(
        &mut self,
        pair: Pair<T>,
    ) -> SgResult<T> {
        if let Some(&token) = self.index.get(&pair) {
            return Err(SgtokError::VocabConflict(format!(
                "pair {pair:?} is already merged to token {token}"
            )));
        }
        let token = self
            .next_token()
            .ok_or(SgtokError::VocabSizeOverflow {
                size: BYTE_SPACE + self.records.len() + 1,
            })?;

        self.records.push((pair, token));
        self.index.insert(pair, token);
        Ok(token)
    }

    /// Look up the token assigned to a pair, if any.
    ///
    /// ## Arguments
    /// * `pair` - The pair to look up.
    ///
    /// ## Returns
    /// An `Option` containing the assigned token.
    pub fn token_for(
        &self,
        pair: Pair<T>,
    ) -> Option<T> {
        self.index.get(&pair).copied()
    }

    /// Get the ``(pair, token)`` records, in insertion order.
    pub fn records(&self) -> &[(Pair<T>, T)] {
        &self.records
    }

    /// Rebuild the lookup index from scratch.
    ///
    /// Exists for completeness of the order-is-truth model: the index
    /// is always derivable from the record list.
    pub fn rebuild_index(&mut self) {
        let mut index = hash_map_with_capacity(self.records.len());
        for &(pair, token) in &self.records {
            index.insert(pair, token);
        }
        self.index = index;
    }
}
