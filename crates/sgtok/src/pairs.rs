//! # Adjacent Pair Counting and Merging
//!
//! The two primitives shared by training and encoding:
//! * [`count_pairs`] - frequency counts of adjacent symbol-id pairs.
//! * [`merge_pair`] - left-to-right, non-overlapping pair replacement.
//!
//! The scanning discipline of [`merge_pair`] is the matching contract
//! both sides rely on; changing it changes the learned vocabulary's
//! semantics.

use crate::types::{Pair, SgHashMap, TokenType, hash_map_with_capacity};

/// Map of ``{ (T, T) -> occurrence count }``.
pub type PairCountMap<T> = SgHashMap<Pair<T>, u64>;

/// Count each adjacent ordered pair ``(ids[i], ids[i+1])`` in a sequence.
///
/// Sequences of length 0 or 1 yield an empty map.
///
/// ## Arguments
/// * `ids` - The symbol id sequence.
///
/// ## Returns
/// A map from each adjacent pair to the number of times it occurs.
pub fn count_pairs<T: TokenType>(ids: &[T]) -> PairCountMap<T> {
    let mut counts = hash_map_with_capacity(ids.len());
    for w in ids.windows(2) {
        *counts.entry((w[0], w[1])).or_insert(0) += 1;
    }
    counts
}

/// Replace every left-to-right, non-overlapping occurrence of `pair`
/// with `token`.
///
/// The cursor advances by 2 on a match (consuming both symbols, so
/// ``AAA`` with target ``(A, A)`` collapses to one merge plus the
/// leftover ``A``), and by 1 otherwise.
///
/// ## Arguments
/// * `ids` - The symbol id sequence.
/// * `pair` - The target pair.
/// * `token` - The replacement symbol id.
///
/// ## Returns
/// A new sequence with the replacements applied.
pub fn merge_pair<T: TokenType>(
    ids: &[T],
    pair: Pair<T>,
    token: T,
) -> Vec<T> {
    let mut out = Vec::with_capacity(ids.len());
    let mut i = 0;
    while i < ids.len() {
        if i + 1 < ids.len() && ids[i] == pair.0 && ids[i + 1] == pair.1 {
            out.push(token);
            i += 2;
        } else {
            out.push(ids[i]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pairs_short_sequences() {
        type T = u32;

        assert!(count_pairs::<T>(&[]).is_empty());
        assert!(count_pairs::<T>(&[7]).is_empty());
    }

    #[test]
    fn test_count_pairs() {
        type T = u32;

        let ids: Vec<T> = vec![1, 2, 1, 2, 3];
        let counts = count_pairs(&ids);

        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&(1, 2)], 2);
        assert_eq!(counts[&(2, 1)], 1);
        assert_eq!(counts[&(2, 3)], 1);
    }

    #[test]
    fn test_count_pairs_is_ordered() {
        type T = u32;

        let counts = count_pairs::<T>(&[5, 6]);
        assert_eq!(counts.get(&(5, 6)), Some(&1));
        assert_eq!(counts.get(&(6, 5)), None);
    }

    #[test]
    fn test_merge_pair() {
        type T = u32;

        let ids: Vec<T> = vec![1, 2, 3, 1, 2, 1];
        assert_eq!(merge_pair(&ids, (1, 2), 300), vec![300, 3, 300, 1]);
    }

    #[test]
    fn test_merge_pair_non_overlapping() {
        type T = u32;

        // AAA collapses to one merge plus the leftover A.
        let ids: Vec<T> = vec![9, 9, 9];
        assert_eq!(merge_pair(&ids, (9, 9), 300), vec![300, 9]);

        // AAAA collapses to two merges.
        let ids: Vec<T> = vec![9, 9, 9, 9];
        assert_eq!(merge_pair(&ids, (9, 9), 300), vec![300, 300]);
    }

    #[test]
    fn test_merge_pair_at_boundaries() {
        type T = u32;

        let ids: Vec<T> = vec![1, 2];
        assert_eq!(merge_pair(&ids, (1, 2), 300), vec![300]);

        assert_eq!(merge_pair::<T>(&[], (1, 2), 300), Vec::<T>::new());
        assert_eq!(merge_pair::<T>(&[1], (1, 2), 300), vec![1]);
    }
}
