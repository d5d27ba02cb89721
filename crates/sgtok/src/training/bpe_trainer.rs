//! # BPE Trainer

use crate::{
    errors::{SgResult, SgtokError},
    merges::MergeTable,
    pairs::{PairCountMap, count_pairs, merge_pair},
    specials::SpecialTokens,
    types::{BYTE_SPACE, Pair, TokenType},
    vocab::TokenBytesMap,
};

/// Options for [`BpeTrainer`].
#[derive(Debug, Clone)]
pub struct TrainerOptions {
    /// The target vocab size; must be >= 256 (the byte id space).
    pub vocab_size: usize,
}

impl TrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size (bytes + merges).
    ///
    /// ## Returns
    /// A new `TrainerOptions` instance.
    pub fn new(vocab_size: usize) -> Self {
        Self { vocab_size }
    }

    /// Sets the vocab size.
    ///
    /// ## Arguments
    /// * `vocab_size` - The desired vocabulary size.
    ///
    /// ## Returns
    /// The updated `TrainerOptions` instance.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size }
    }

    /// Initializes a [`BpeTrainer`] from these options.
    ///
    /// ## Returns
    /// A new `BpeTrainer` instance.
    pub fn init(self) -> BpeTrainer {
        BpeTrainer::new(self)
    }
}

/// Results of a training run.
#[derive(Debug, Clone)]
pub struct TrainResults<T: TokenType> {
    /// The learned merge table, in insertion order.
    pub merges: MergeTable<T>,

    /// The number of merges actually performed.
    ///
    /// Early stop (no adjacent pairs remaining) makes this fewer than
    /// requested; that is a valid, non-error outcome.
    pub merges_done: usize,
}

/// Trainer for learning an ordered merge table from raw text.
///
/// The transformed id sequence is working state only; it is discarded
/// after training.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    /// Trainer options.
    pub options: TrainerOptions,
}

/// Select the pair with the highest count.
///
/// Ties break to the lexicographically smallest ``(left, right)``
/// tuple, so training is reproducible across runs and across hash map
/// implementations.
fn select_top_pair<T: TokenType>(counts: &PairCountMap<T>) -> Option<(Pair<T>, u64)> {
    let mut best: Option<(Pair<T>, u64)> = None;
    for (&pair, &count) in counts.iter() {
        let better = match best {
            None => true,
            Some((best_pair, best_count)) => {
                count > best_count || (count == best_count && pair < best_pair)
            }
        };
        if better {
            best = Some((pair, count));
        }
    }
    best
}

impl BpeTrainer {
    /// Initializes a [`BpeTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    ///
    /// ## Returns
    /// A new `BpeTrainer` instance.
    pub fn new(options: TrainerOptions) -> Self {
        Self { options }
    }

    /// Learn an ordered merge table from raw text.
    ///
    /// Encodes the text as UTF-8 bytes, then performs up to
    /// ``vocab_size - 256`` most-frequent-pair merges, stopping early
    /// when no adjacent pairs remain.
    ///
    /// ## Arguments
    /// * `text` - The training text.
    /// * `specials` - The special token table the merges must stay
    ///   clear of.
    ///
    /// ## Returns
    /// A `Result` containing the `TrainResults<T>` or an error.
    pub fn train<T: TokenType>(
        &self,
        text: &str,
        specials: &SpecialTokens<T>,
    ) -> SgResult<TrainResults<T>> {
        let vocab_size = self.options.vocab_size;

        if vocab_size < BYTE_SPACE {
            return Err(SgtokError::VocabSizeTooSmall { size: vocab_size });
        }
        if vocab_size > BYTE_SPACE && T::from_usize(vocab_size - 1).is_none() {
            return Err(SgtokError::VocabSizeOverflow { size: vocab_size });
        }
        for (name, token) in specials.iter() {
            let id = token.to_usize().unwrap();
            if id < vocab_size {
                return Err(SgtokError::VocabConflict(format!(
                    "special token {name:?} id {id} lies inside the byte/merge id range 0..{vocab_size}"
                )));
            }
        }

        let num_merges = vocab_size - BYTE_SPACE;
        log::info!(
            "starting BPE training: {} merges requested over {} bytes",
            num_merges,
            text.len()
        );

        let mut ids: Vec<T> = text.bytes().map(|b| T::from_u8(b).unwrap()).collect();
        let mut merges = MergeTable::default();

        // Expansions tracked alongside the table, for progress logging.
        let mut expansions: TokenBytesMap<T> = TokenBytesMap::default();
        for b in 0..=u8::MAX {
            expansions.insert(T::from_u8(b).unwrap(), vec![b]);
        }

        for step in 0..num_merges {
            let counts = count_pairs(&ids);
            let Some((pair, count)) = select_top_pair(&counts) else {
                log::info!("no adjacent pairs remain after {step} merges; stopping early");
                break;
            };

            let token = merges.push(pair)?;
            ids = merge_pair(&ids, pair, token);

            let expansion = [expansions[&pair.0].as_slice(), expansions[&pair.1].as_slice()]
                .concat();
            log::debug!(
                "merge {}/{}: {:?} -> {} (replaces {} occurrences of {:?})",
                step + 1,
                num_merges,
                pair,
                token,
                count,
                String::from_utf8_lossy(&expansion)
            );
            expansions.insert(token, expansion);
        }

        let merges_done = merges.len();
        log::info!("finished training: {merges_done} merges");

        Ok(TrainResults {
            merges,
            merges_done,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_options() {
        let options = TrainerOptions::new(1000);
        assert_eq!(options.vocab_size, 1000);

        let options = options.with_vocab_size(2000);
        assert_eq!(options.vocab_size, 2000);
    }

    #[test]
    fn test_vocab_size_floor() {
        type T = u32;

        let trainer = TrainerOptions::new(255).init();
        assert!(matches!(
            trainer.train::<T>("abc", &SpecialTokens::default()),
            Err(SgtokError::VocabSizeTooSmall { size: 255 })
        ));
    }

    #[test]
    fn test_vocab_size_overflow() {
        type T = u16;

        let trainer = TrainerOptions::new(100_000).init();
        assert!(matches!(
            trainer.train::<T>("abc", &SpecialTokens::default()),
            Err(SgtokError::VocabSizeOverflow { .. })
        ));
    }

    #[test]
    fn test_special_collision() {
        type T = u32;

        // Merge ids would reach 300, colliding with a special at 280.
        let specials = SpecialTokens::<T>::from_entries([("<x>", 280)]).unwrap();
        let trainer = TrainerOptions::new(300).init();

        assert!(matches!(
            trainer.train::<T>("abc", &specials),
            Err(SgtokError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_zero_merges() {
        type T = u32;

        let results = TrainerOptions::new(256)
            .init()
            .train::<T>("hello", &SpecialTokens::reserved())
            .unwrap();

        assert!(results.merges.is_empty());
        assert_eq!(results.merges_done, 0);
    }

    #[test]
    fn test_empty_text() {
        type T = u32;

        let results = TrainerOptions::new(300)
            .init()
            .train::<T>("", &SpecialTokens::reserved())
            .unwrap();

        assert_eq!(results.merges_done, 0);
    }

    #[test]
    fn test_early_stop() {
        type T = u32;

        // "aaaa" collapses 4 -> 2 -> 1 symbols; at most 2 merges apply.
        let results = TrainerOptions::new(300)
            .init()
            .train::<T>("aaaa", &SpecialTokens::reserved())
            .unwrap();

        assert_eq!(results.merges_done, 2);
        assert_eq!(
            results.merges.records(),
            &[((97, 97), 256), ((256, 256), 257)]
        );
    }

    #[test]
    fn test_most_frequent_pair_wins() {
        type T = u32;

        // ("a", "b") is the most frequent adjacent pair.
        let results = TrainerOptions::new(257)
            .init()
            .train::<T>("ababababab", &SpecialTokens::reserved())
            .unwrap();

        assert_eq!(results.merges_done, 1);
        assert_eq!(results.merges.records(), &[((97, 98), 256)]);
    }

    #[test]
    fn test_lexicographic_tie_break() {
        type T = u32;

        // "aabb": (a,a), (a,b), (b,b) all occur once; the smallest
        // tuple (a,a) must win.
        let results = TrainerOptions::new(257)
            .init()
            .train::<T>("aabb", &SpecialTokens::reserved())
            .unwrap();

        assert_eq!(results.merges.records(), &[((97, 97), 256)]);
    }

    #[test]
    fn test_determinism() {
        type T = u32;

        let corpus = "the quick brown fox jumps over the lazy dog, twice over";
        let train = || {
            TrainerOptions::new(280)
                .init()
                .train::<T>(corpus, &SpecialTokens::reserved())
                .unwrap()
        };

        let a = train();
        let b = train();
        assert_eq!(a.merges.records(), b.merges.records());
    }

    #[test]
    fn test_select_top_pair_empty() {
        type T = u32;

        assert_eq!(select_top_pair::<T>(&PairCountMap::default()), None);
    }
}
