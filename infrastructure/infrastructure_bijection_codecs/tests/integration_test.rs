//! Integration tests for infrastructure_bijection_codecs crate
//!
//! These tests verify both directions of every codec end-to-end:
//! decode(encode(x)) == x over sampled domain values and
//! encode(decode(n)) == n over initial runs of the naturals, plus the
//! completeness of each enumeration over small domains.
//!
//! Set `RUST_LOG=trace` to see codec internals.

use std::collections::{BTreeSet, HashSet};

use infrastructure_bijection_codecs::*;
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn nats(values: &[u64]) -> Vec<Nat> {
    values.iter().copied().map(Nat::from_u64).collect()
}

/// encode(decode(n)) == n for every n below `count`, and no value repeats
fn assert_decode_is_injective_prefix<B>(codec: &B, count: usize)
where
    B: Bijection,
    B::Value: std::fmt::Debug + PartialEq,
{
    let mut seen: Vec<B::Value> = Vec::with_capacity(count);
    for (n, value) in codec.enumerate().take(count).enumerate() {
        let value = value.unwrap();
        assert_eq!(codec.encode(&value).unwrap(), Nat::from_usize(n), "{value:?}");
        seen.push(value);
    }
    for (i, value) in seen.iter().enumerate() {
        assert!(!seen[..i].contains(value), "{value:?} repeats");
    }
}

#[test]
fn test_every_codec_inverts_its_enumeration() {
    init_tracing();
    let config = BijectionConfig::default();

    assert_decode_is_injective_prefix(&IntegerCodec, 500);
    assert_decode_is_injective_prefix(&PairCodec, 500);
    assert_decode_is_injective_prefix(&TupleCodec::new(3).unwrap(), 500);
    assert_decode_is_injective_prefix(&TupleCodec::new(5).unwrap(), 300);
    assert_decode_is_injective_prefix(&ListCodec::from_config(&config).unwrap(), 300);
    assert_decode_is_injective_prefix(&ListCodec::new(2).unwrap(), 300);
    assert_decode_is_injective_prefix(&SetCodec::from_config(&config).unwrap(), 300);
    assert_decode_is_injective_prefix(&WordCodec::from_chars("abc").unwrap(), 500);
    assert_decode_is_injective_prefix(&ScalarStringCodec::new(), 200);
    assert_decode_is_injective_prefix(&RationalCodec, 500);
    assert_decode_is_injective_prefix(&JsonCodec::from_config(&config).unwrap(), 500);
}

#[test]
fn test_pairs_are_complete_by_diagonal() {
    // The first T(d + 1) naturals cover exactly the diagonals 0..=d
    let pairs: HashSet<(Nat, Nat)> = PairCodec
        .enumerate()
        .take(55)
        .map(|pair| pair.unwrap())
        .collect();
    for x in 0u64..10 {
        for y in 0..(10 - x) {
            assert!(pairs.contains(&(Nat::from_u64(x), Nat::from_u64(y))));
        }
    }
}

#[test]
fn test_triples_are_complete_by_sum() {
    // There are C(s + 2, 2) triples with sum s; those with sum <= 6 come first
    let codec = TupleCodec::new(3).unwrap();
    let count = (0..=6u64).map(|s| (s + 1) * (s + 2) / 2).sum::<u64>();
    let triples: HashSet<Vec<Nat>> = (0..count)
        .map(|n| codec.to_tuple(&Nat::from_u64(n)))
        .collect();
    for a in 0u64..=6 {
        for b in 0..=(6 - a) {
            for c in 0..=(6 - a - b) {
                assert!(triples.contains(&nats(&[a, b, c])), "({a}, {b}, {c})");
            }
        }
    }
}

#[test]
fn test_small_rationals_all_appear() {
    let decoded: HashSet<Fraction> = RationalCodec
        .enumerate()
        .take(1 << 12)
        .map(|q| q.unwrap())
        .collect();
    for p in 0u64..6 {
        for q in 1u64..6 {
            let value = Fraction::new(Nat::from_u64(p), Nat::from_u64(q)).unwrap().reduced();
            assert!(decoded.contains(&value), "{value}");
        }
    }
}

#[test]
fn test_binary_words_in_order() {
    let codec = WordCodec::from_chars("ab").unwrap();
    let words: Vec<String> = codec
        .enumerate()
        .take(15)
        .map(|word| word.unwrap().into_iter().collect())
        .collect();
    assert_eq!(
        words,
        vec![
            "", "a", "b", "aa", "ab", "ba", "bb", "aaa", "aab", "aba", "abb", "baa", "bab", "bba",
            "bbb",
        ]
    );
}

#[test]
fn test_set_insensitive_to_order() {
    let codec = SetCodec::from_config(&BijectionConfig::default()).unwrap();
    let a = codec.encode_unordered(&nats(&[17, 3, 99, 0])).unwrap();
    let b = codec.encode_unordered(&nats(&[0, 99, 3, 17])).unwrap();
    assert_eq!(a, b);
    let expected: BTreeSet<Nat> = nats(&[0, 3, 17, 99]).into_iter().collect();
    assert_eq!(codec.decode(&a).unwrap(), expected);
}

#[test]
fn test_json_decodes_to_valid_text() {
    init_tracing();
    let codec = JsonCodec::from_config(&BijectionConfig::default()).unwrap();
    for n in 0u64..5000 {
        let text = codec.decode_text(&Nat::from_u64(n)).unwrap();
        serde_json::from_str::<serde_json::Value>(&text)
            .unwrap_or_else(|e| panic!("{n} decodes to invalid JSON {text}: {e}"));
    }
}

#[test]
fn test_json_large_values_are_valid_text() {
    let codec = JsonCodec::from_config(&BijectionConfig::default()).unwrap();
    let mut n = Nat::from_u64(0x1234_5678_9abc_def1);
    for _ in 0..25 {
        let text = codec.decode_text(&n).unwrap();
        serde_json::from_str::<serde_json::Value>(&text)
            .unwrap_or_else(|e| panic!("{n} decodes to invalid JSON {text}: {e}"));
        assert_eq!(codec.encode(&codec.decode(&n).unwrap()).unwrap(), n);
        n = n.times(&Nat::from_u64(3)).increment();
    }
}

#[test]
fn test_json_constants_and_offsets() {
    let codec = JsonCodec::from_config(&BijectionConfig::default()).unwrap();
    let texts: Vec<String> = (0u64..3)
        .map(|n| codec.decode_text(&Nat::from_u64(n)).unwrap())
        .collect();
    assert_eq!(texts, vec!["null", "false", "true"]);
}

#[test]
fn test_decode_reports_length_limit() {
    let config = BijectionConfig::default().with_max_list_len(4);
    let codec = JsonCodec::from_config(&config).unwrap();
    let long = JsonValue::Array(vec![JsonValue::Null; 5]);
    assert!(matches!(
        codec.encode(&long),
        Err(DomainError::LengthLimitExceeded { limit: 4, .. })
    ));

    let lenient = JsonCodec::from_config(&config.with_max_list_len(5)).unwrap();
    let n = lenient.encode(&long).unwrap();
    assert!(matches!(
        codec.decode(&n),
        Err(DomainError::LengthLimitExceeded { limit: 4, .. })
    ));
    assert_eq!(lenient.decode(&n).unwrap(), long);
}

#[test]
fn test_huge_natural_decodes_everywhere() {
    init_tracing();
    let n = Nat::ONE.shl(600).plus(&Nat::from_u64(12345));
    let config = BijectionConfig::default();

    assert_eq!(IntegerCodec::encode(&IntegerCodec::decode(&n)), n);
    let (x, y) = PairCodec::decode(&n);
    assert_eq!(PairCodec::encode(&x, &y), n);

    let tuples = TupleCodec::new(7).unwrap();
    assert_eq!(tuples.from_tuple(&tuples.to_tuple(&n)).unwrap(), n);

    // Short lists and sets of huge elements round trip
    let lists = ListCodec::from_config(&config).unwrap();
    let list = vec![n.clone(), Nat::ZERO, n.shl(5)];
    assert_eq!(lists.decode(&lists.encode(&list).unwrap()).unwrap(), list);

    let sets = SetCodec::from_config(&config).unwrap();
    let set: BTreeSet<Nat> = list.into_iter().collect();
    assert_eq!(sets.decode(&sets.encode(&set).unwrap()).unwrap(), set);

    let strings = ScalarStringCodec::new();
    assert_eq!(strings.encode(&strings.decode(&n)), n);

    assert_eq!(RationalCodec::encode(&RationalCodec::decode(&n)).unwrap(), n);
}

#[test]
fn test_default_config_decodes_long_lists() {
    init_tracing();
    // 2^192 spreads into a list of well over 100 000 entries
    let n = Nat::ONE.shl(192);
    let config = BijectionConfig::default();

    let lists = ListCodec::from_config(&config).unwrap();
    let list = lists.decode(&n).unwrap();
    assert!(list.len() > 1 << 16, "{}", list.len());
    assert_eq!(lists.encode(&list).unwrap(), n);

    let sets = SetCodec::from_config(&config).unwrap();
    let set = sets.decode(&n).unwrap();
    assert_eq!(set.len(), list.len());
    assert_eq!(sets.encode(&set).unwrap(), n);

    // Array branch: 4 + 4a
    let json = JsonCodec::from_config(&config).unwrap();
    let array = n.shl(2).plus(&Nat::from_u64(4));
    let value = json.decode(&array).unwrap();
    assert!(matches!(&value, JsonValue::Array(items) if items.len() == list.len()));
    assert_eq!(json.encode(&value).unwrap(), array);
}

proptest! {
    #[test]
    fn prop_integer_round_trip(z: i128) {
        let z = Integer::from(z);
        prop_assert_eq!(IntegerCodec::decode(&IntegerCodec::encode(&z)), z);
    }

    #[test]
    fn prop_pair_round_trip(x: u64, y: u64) {
        let (x, y) = (Nat::from_u64(x), Nat::from_u64(y));
        prop_assert_eq!(PairCodec::decode(&PairCodec::encode(&x, &y)), (x, y));
    }

    #[test]
    fn prop_tuple_round_trip(values in proptest::collection::vec(any::<u32>(), 1..8)) {
        let tuple: Vec<Nat> = values.iter().map(|&v| Nat::from(v)).collect();
        let codec = TupleCodec::new(tuple.len()).unwrap();
        prop_assert_eq!(codec.to_tuple(&codec.from_tuple(&tuple).unwrap()), tuple);
    }

    #[test]
    fn prop_list_round_trip(
        values in proptest::collection::vec(any::<u16>(), 0..12),
        dilution in 1usize..12,
    ) {
        let list: Vec<Nat> = values.iter().map(|&v| Nat::from(u32::from(v))).collect();
        let codec = ListCodec::new(dilution).unwrap();
        prop_assert_eq!(codec.decode(&codec.encode(&list).unwrap()).unwrap(), list);
    }

    #[test]
    fn prop_list_decode_round_trip(n: u32, dilution in 3usize..12) {
        let codec = ListCodec::new(dilution).unwrap();
        let n = Nat::from(n);
        prop_assert_eq!(codec.encode(&codec.decode(&n).unwrap()).unwrap(), n);
    }

    #[test]
    fn prop_set_round_trip(values in proptest::collection::btree_set(any::<u32>(), 0..10)) {
        let set: BTreeSet<Nat> = values.into_iter().map(Nat::from).collect();
        let codec = SetCodec::from_config(&BijectionConfig::default()).unwrap();
        prop_assert_eq!(codec.decode(&codec.encode(&set).unwrap()).unwrap(), set);
    }

    #[test]
    fn prop_string_round_trip(text in any::<String>()) {
        let codec = ScalarStringCodec::new();
        prop_assert_eq!(codec.decode(&codec.encode(&text)), text);
    }

    #[test]
    fn prop_rational_round_trip(p in 0u64..1_000_000, q in 1u64..1_000_000) {
        let value = Fraction::new(Nat::from_u64(p), Nat::from_u64(q)).unwrap();
        let n = RationalCodec::encode(&value).unwrap();
        prop_assert_eq!(RationalCodec::decode(&n), value.reduced());
    }

    #[test]
    fn prop_json_decode_round_trip(n: u64) {
        let codec = JsonCodec::from_config(&BijectionConfig::default()).unwrap();
        let n = Nat::from_u64(n);
        let value = codec.decode(&n).unwrap();
        prop_assert!(serde_json::from_str::<serde_json::Value>(&value.to_string()).is_ok());
        prop_assert_eq!(codec.encode(&value).unwrap(), n);
    }
}
