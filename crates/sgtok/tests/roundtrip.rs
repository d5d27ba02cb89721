#![allow(missing_docs)]

use proptest::prelude::*;
use sgtok::Tokenizer;

const SAMPLES: &[&str] = &[
    "hello world",
    "The quick brown fox jumps over the lazy dog.",
    "It's a beautiful day, and I'll be taking my 3 dogs for a walk.",
    "  multiple   spaces  ",
    "line1\nline2\r\nline3",
    "123 + 456 = 789",
    "caf\u{00e9} na\u{00ef}ve \u{4f60}\u{597d}",
    "$$$!!!...---",
    " ",
    "a",
    "",
    "emoji: \u{1f600}\u{1f680}\u{1f4a1}",
];

const CORPUS: &str = "the quick brown fox jumps over the lazy dog; \
    the dog was not amused, and the fox did it again and again";

fn trained_tokenizer() -> Tokenizer<u32> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.train(CORPUS, 300).unwrap();
    tokenizer
}

#[test]
fn roundtrip_samples() {
    let tokenizer = trained_tokenizer();

    for text in SAMPLES {
        let ids = tokenizer.encode(text);
        let decoded = tokenizer.decode(&ids).unwrap();
        assert_eq!(&decoded, text, "roundtrip mismatch for {text:?}");
    }
}

#[test]
fn byte_preservation() {
    let tokenizer = trained_tokenizer();

    for text in SAMPLES {
        let ids = tokenizer.encode(text);
        let bytes = tokenizer.decode_bytes(&ids).unwrap();
        assert_eq!(
            bytes.as_slice(),
            text.as_bytes(),
            "byte mismatch for {text:?}"
        );
    }
}

#[test]
fn fixed_point_encode() {
    let tokenizer = trained_tokenizer();

    for text in SAMPLES {
        let ids = tokenizer.encode(text);
        let reencoded = tokenizer.encode(&tokenizer.decode(&ids).unwrap());
        assert_eq!(reencoded, ids, "encode not a fixed point for {text:?}");
    }
}

#[test]
fn training_growth_floor() {
    // vocab_size = 256 learns nothing: byte entries + specials only.
    let mut tokenizer: Tokenizer<u32> = Tokenizer::new();
    let merges_done = tokenizer.train(CORPUS, 256).unwrap();

    assert_eq!(merges_done, 0);
    assert!(tokenizer.merges().is_empty());
    assert_eq!(tokenizer.vocab().len(), 256 + tokenizer.special_tokens().len());
}

#[test]
fn training_determinism() {
    let a = trained_tokenizer();
    let b = trained_tokenizer();

    assert_eq!(a.merges().records(), b.merges().records());
    for text in SAMPLES {
        assert_eq!(a.encode(text), b.encode(text));
    }
}

#[test]
fn token_types_agree() {
    // The same training run over u16, u32, and u64 symbol ids yields
    // the same merge order.
    let mut t16: Tokenizer<u16> = Tokenizer::new();
    let mut t32: Tokenizer<u32> = Tokenizer::new();
    let mut t64: Tokenizer<u64> = Tokenizer::new();

    t16.train(CORPUS, 280).unwrap();
    t32.train(CORPUS, 280).unwrap();
    t64.train(CORPUS, 280).unwrap();

    let r16: Vec<((u64, u64), u64)> = t16
        .merges()
        .records()
        .iter()
        .map(|&((a, b), t)| ((a as u64, b as u64), t as u64))
        .collect();
    let r32: Vec<((u64, u64), u64)> = t32
        .merges()
        .records()
        .iter()
        .map(|&((a, b), t)| ((a as u64, b as u64), t as u64))
        .collect();

    assert_eq!(r16, r32);
    assert_eq!(&r32[..], t64.merges().records());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn roundtrip_arbitrary_text(text in "\\PC{0,64}") {
        let tokenizer = trained_tokenizer();
        let ids = tokenizer.encode(&text);

        prop_assert_eq!(tokenizer.decode(&ids).unwrap(), text.clone());
        let decoded_bytes = tokenizer.decode_bytes(&ids).unwrap();
        prop_assert_eq!(decoded_bytes.as_slice(), text.as_bytes());
    }

    #[test]
    fn encode_never_exceeds_byte_length(text in "\\PC{0,64}") {
        let tokenizer = trained_tokenizer();
        prop_assert!(tokenizer.encode(&text).len() <= text.len());
    }
}
