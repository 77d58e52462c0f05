#[macro_use]
extern crate proptest;

use eci::all::CHARSETS;
use eci::segment::{negotiate, Segment};
use eci::select::SINGLE_BYTE_CANDIDATES;
use eci::{best_eci, eci_length, transcode, transcode_into, types};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::Config;

// Mostly characters which some, but not all, character sets have.
const MIXED: &str = "[a-zA-Z0-9 \\\\~#@\u{a5}\u{e9}\u{85}\u{104}\u{11f}\u{416}\u{627}\u{20ac}\u{5d0}\u{e01}\u{2026}\u{3042}\u{4e2d}\u{ac00}\u{1f600}]{0,12}";

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn pt_length_is_upper_bound(ref text in "\\PC*", index in 0..CHARSETS.len()) {
        let eci = CHARSETS[index].eci();
        if let Ok(output) = transcode(eci, text.as_bytes()) {
            assert!(output.len() <= eci_length(eci, text.as_bytes()));
        }
    }

    #[test]
    fn pt_length_is_upper_bound_mixed(ref text in MIXED, index in 0..CHARSETS.len()) {
        let eci = CHARSETS[index].eci();
        let mut dest = vec![0xff; eci_length(eci, text.as_bytes()) + 1];
        if let Ok(length) = transcode_into(eci, text.as_bytes(), &mut dest) {
            assert_eq!(dest[length], 0);
            assert_eq!(transcode(eci, text.as_bytes()), Ok(dest[..length].to_vec()));
        }
    }

    #[test]
    fn pt_selected_eci_transcodes(ref text in MIXED) {
        let eci = best_eci(text.as_bytes()).unwrap();
        if eci == types::ECI_UTF_8 {
            // no single-byte character set can hold it
            for &candidate in SINGLE_BYTE_CANDIDATES.iter() {
                assert!(transcode(candidate, text.as_bytes()).is_err());
            }
        } else {
            assert!(transcode(eci, text.as_bytes()).is_ok());
            for &candidate in SINGLE_BYTE_CANDIDATES.iter().take_while(|&&c| c < eci) {
                assert!(transcode(candidate, text.as_bytes()).is_err());
            }
        }
    }

    #[test]
    fn pt_malformed_input_fails(ref bytes in vec(any::<u8>(), 1..32), index in 0..CHARSETS.len()) {
        prop_assume!(std::str::from_utf8(bytes).is_err());
        assert!(transcode(CHARSETS[index].eci(), bytes).is_err());
        assert_eq!(best_eci(bytes), None);
    }

    #[test]
    fn pt_utf16_matches_std(ref text in "\\PC*") {
        let expected_be: Vec<u8> = text.encode_utf16().flat_map(|u| u.to_be_bytes().to_vec()).collect();
        let expected_le: Vec<u8> = text.encode_utf16().flat_map(|u| u.to_le_bytes().to_vec()).collect();
        assert_eq!(transcode(25, text.as_bytes()), Ok(expected_be));
        assert_eq!(transcode(33, text.as_bytes()), Ok(expected_le));
    }

    #[test]
    fn pt_utf32_matches_chars(ref text in "\\PC*") {
        let expected: Vec<u8> = text.chars().flat_map(|c| (c as u32).to_be_bytes().to_vec()).collect();
        assert_eq!(transcode(34, text.as_bytes()), Ok(expected));
    }

    #[test]
    fn pt_latin1_is_identity(ref text in "[\\x00-\\x7f\u{a0}-\u{ff}]*") {
        let expected: Vec<u8> = text.chars().map(|c| c as u8).collect();
        assert_eq!(transcode(3, text.as_bytes()), Ok(expected.clone()));
        assert_eq!(transcode(0, text.as_bytes()), Ok(expected));
    }

    #[test]
    fn pt_negotiation_is_idempotent(ref texts in vec(MIXED, 0..6), default_eci in prop_oneof![Just(3u32), Just(4u32), Just(29u32)]) {
        let mut segments: Vec<Segment> = texts.iter().map(|t| Segment::new(t.as_bytes())).collect();
        let first = negotiate(&mut segments, default_eci).unwrap();
        let resolved = segments.clone();
        let second = negotiate(&mut segments, default_eci).unwrap();
        assert_eq!(first, second);
        assert_eq!(segments, resolved);

        // every segment left unset is in the default ECI, and every segment transcodes
        for segment in &segments {
            if segment.eci == types::ECI_DEFAULT {
                assert_eq!(best_eci(segment.source), Some(default_eci));
            }
            if segment.eci != types::ECI_UTF_8 {
                assert!(segment.transcode(default_eci).is_ok());
            }
        }
    }
}
