// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Macros and utilities for testing.

macro_rules! assert_encode_ok {
    ($encode:expr, $ch:expr, [$($b:expr),*]) => ({
        let ch = $ch as u32;
        let expected: &[u8] = &[$($b),*];
        match ($encode)(ch) {
            Some(encoded) => {
                assert!(&*encoded == expected,
                        "U+{:04X} should encode to {:02X?}, but instead encoded to {:02X?}",
                        ch, expected, &*encoded);
            }
            None => panic!("U+{:04X} should encode to {:02X?}, but was rejected", ch, expected),
        }
    })
}

macro_rules! assert_encode_err {
    ($encode:expr, $ch:expr) => ({
        let ch = $ch as u32;
        let result = ($encode)(ch);
        assert!(result.is_none(), "U+{:04X} should be rejected, but encoded to {:?}", ch, result);
    })
}

macro_rules! assert_transcode_ok {
    ($eci:expr, $input:expr, [$($b:expr),*]) => ({
        let input: &[u8] = $input.as_ref();
        let expected: &[u8] = &[$($b),*];
        match $crate::transcode::transcode($eci, input) {
            Ok(output) => {
                assert!(&output[..] == expected,
                        "ECI {} should produce {:02X?} from {:?}, but instead produced {:02X?}",
                        $eci, expected, input, output);
            }
            Err(e) => panic!("ECI {} should produce {:02X?} from {:?}, but failed: {}",
                             $eci, expected, input, e),
        }
    })
}

macro_rules! assert_transcode_err {
    ($eci:expr, $input:expr, $err:expr) => ({
        let input: &[u8] = $input.as_ref();
        let result = $crate::transcode::transcode($eci, input);
        assert!(result == Err($err),
                "ECI {} on {:?} should fail with {:?}, but instead returned {:?}",
                $eci, input, $err, result);
    })
}

/// Every Unicode scalar value, in order.
pub fn all_scalars() -> impl Iterator<Item = u32> {
    (0..0xd800).chain(0xe000..0x110000)
}
