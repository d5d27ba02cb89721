//! # Derived Token Vocabulary
//!
//! The ``{ T -> Vec<u8> }`` expansion map is derived data: it is fully
//! determined by (merges, special tokens) and is rebuilt from scratch
//! after training or loading. It is never persisted.

use crate::{
    errors::{SgResult, SgtokError},
    merges::MergeTable,
    specials::SpecialTokens,
    types::{BYTE_SPACE, SgHashMap, TokenType, hash_map_with_capacity},
};

/// Map of ``{ symbol id -> fully-expanded byte string }``.
pub type TokenBytesMap<T> = SgHashMap<T, Vec<u8>>;

/// Build the id -> bytes vocabulary from merges and special tokens.
///
/// Byte ids 0..=255 expand to their single byte; merge ids expand to
/// the concatenation of their operands' expansions, walked in merge
/// order (a merge's operands always precede it); special ids expand
/// to the UTF-8 bytes of the token's literal name.
///
/// ## Arguments
/// * `merges` - The ordered merge table.
/// * `specials` - The special token table.
///
/// ## Returns
/// A `Result` containing the expansion map, or an error if a merge
/// operand has no expansion or a special id collides with another id.
pub fn build_token_bytes<T: TokenType>(
    merges: &MergeTable<T>,
    specials: &SpecialTokens<T>,
) -> SgResult<TokenBytesMap<T>> {
    let mut vocab: TokenBytesMap<T> =
        hash_map_with_capacity(BYTE_SPACE + merges.len() + specials.len());

    for b in 0..=u8::MAX {
        vocab.insert(T::from_u8(b).unwrap(), vec![b]);
    }

    for &((left, right), token) in merges.records() {
        let left_bytes = vocab.get(&left).ok_or_else(|| {
            SgtokError::MalformedModel(format!(
                "merge token {token} references undefined operand {left}"
            ))
        })?;
        let right_bytes = vocab.get(&right).ok_or_else(|| {
            SgtokError::MalformedModel(format!(
                "merge token {token} references undefined operand {right}"
            ))
        })?;
        let expansion = [left_bytes.as_slice(), right_bytes.as_slice()].concat();
        vocab.insert(token, expansion);
    }

    for (name, token) in specials.iter() {
        if vocab.contains_key(&token) {
            return Err(SgtokError::VocabConflict(format!(
                "special token {name:?} id {token} collides with an existing symbol id"
            )));
        }
        vocab.insert(token, name.as_bytes().to_vec());
    }

    Ok(vocab)
}
