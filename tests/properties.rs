//! Integration tests for the observable properties of `Int64`.
//!
//! These tests only use the public API and cover:
//! - Hex formatting and parsing agreeing with each other
//! - Additive inverse across the carry boundary
//! - Bit-exact double reinterpretation
//! - Small-integer and NaN-box encodings, including their range limits

use quadword::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Pairs that sit on the carry, sign and tag boundaries of both halves
fn word_pairs() -> Vec<(u32, u32)> {
    let words = [
        0u32,
        1,
        0x7FFF_FFFF,
        0x8000_0000,
        0xFFFF_FFFE,
        0xFFFF_FFFF,
        0x0001_0000,
        0xFFFF_0000,
        0x4142_4344,
    ];

    words
        .iter()
        .flat_map(|&low| words.iter().map(move |&high| (low, high)))
        .collect()
}

#[test]
fn concrete_scenarios() {
    init_logger();

    assert_eq!(
        Int64::new(0x4433_2211, 0x0000_0000).to_string(),
        "0x0000000044332211"
    );

    let parsed = Int64::from_source("0x41424344").unwrap();
    assert_eq!(parsed.low(), 0x4142_4344);
    assert_eq!(parsed.high(), 0);

    let minus_one = Int64::from_source(-1.0).unwrap();
    assert_eq!(minus_one.low(), 0xFFFF_FFFF);
    assert_eq!(minus_one.high(), 0xFFFF_FFFF);
}

#[test]
fn hex_round_trip() {
    init_logger();

    for (low, high) in word_pairs() {
        let text = Int64::new(low, high).to_string();
        assert_eq!(text.len(), 18);
        assert!(text.starts_with("0x"));

        let parsed: Int64 = text.parse().unwrap();
        assert_eq!((parsed.low(), parsed.high()), (low, high));
    }
}

#[test]
fn additive_inverse() {
    let pairs = word_pairs();

    for &(a_low, a_high) in &pairs {
        for &(b_low, b_high) in &pairs {
            let a = Int64::new(a_low, a_high);
            let b = Int64::new(b_low, b_high);
            assert!(a.add(&b).subtract(&b).equals(&a), "{a} {b}");
        }
    }

    let carried = Int64::new(0xFFFF_FFFF, 0).add(&Int64::new(1, 0));
    assert_eq!((carried.low(), carried.high()), (0, 1));
}

#[test]
fn double_reinterpretation_round_trip() {
    for (low, high) in word_pairs() {
        let double = words_to_double(low, high);
        assert_eq!(double_to_words(double), (low, high));
    }

    for double in [0.0, -0.0, 1.1, -2.5e-300, f64::MAX, f64::NEG_INFINITY] {
        let back = words_to_double(double_to_words(double).0, double_to_words(double).1);
        assert_eq!(back.to_bits(), double.to_bits());
    }
}

#[test]
fn small_integer_tags() {
    for (low, high) in word_pairs() {
        let value = Int64::new(low, high);
        match value.encode_small_integer() {
            Ok(tagged) => {
                assert_eq!(high, 0);
                assert_eq!(tagged.decode_small_integer().unwrap(), value);
            }
            Err(Error::NotSmallIntegerEncodable(rejected)) => {
                assert_ne!(high, 0);
                assert_eq!(rejected, value);
            }
            Err(e) => panic!("unexpected error {e}"),
        }
    }
}

#[test]
fn nan_box_range() {
    let below = Int64::new(0, 0x0000_FFFF);
    assert!(matches!(
        below.encode_nan_boxed(),
        Err(Error::ValueNotEncodable(_))
    ));

    assert!(Int64::new(0, 0x0001_0000).encode_nan_boxed().is_ok());

    let at_upper = Int64::new(0, 0xFFFF_0000);
    assert!(matches!(
        at_upper.encode_nan_boxed(),
        Err(Error::ValueNotEncodable(_))
    ));

    assert!(Int64::new(0, 0xFFFE_FFFF).encode_nan_boxed().is_ok());
}

#[test]
fn nan_box_inverts() {
    let config = EncodingConfig::default();

    for (low, high) in word_pairs() {
        let value = Int64::new(low, high);
        if !config.accepts(high) {
            continue;
        }

        let boxed = value.encode_nan_boxed().unwrap();
        assert_eq!(
            Int64::from_double(boxed).high(),
            high.wrapping_sub(config.offset_high)
        );
        assert_eq!(Int64::decode_nan_boxed(boxed).unwrap(), value);
    }
}

#[test]
fn pointer_tags_touch_only_bit_zero() {
    for (low, high) in word_pairs() {
        let value = Int64::new(low, high);
        let tagged = value.tag_pointer();
        let untagged = value.untag_pointer();

        assert_eq!(tagged.high(), high);
        assert_eq!(untagged.high(), high);
        assert_eq!(tagged.low() & !1, low & !1);
        assert!(tagged.is_pointer_tagged());
        assert!(!untagged.is_pointer_tagged());
    }
}
