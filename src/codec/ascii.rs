// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! 7-bit ASCII encodings.

use crate::types::CharBytes;

/// ECI 27: ASCII (ISO/IEC 646:1991 IRV, US).
#[inline]
pub fn encode_ascii(ch: u32) -> Option<CharBytes> {
    if ch < 0x80 {
        Some(CharBytes::one(ch as u8))
    } else {
        None
    }
}

/**
 * ECI 170: ISO/IEC 646:1991 invariant subset of ASCII.
 *
 * This excludes every character that historically had national variants:
 * `#`, `$`, `@`, `[\]^`, the grave accent and `{|}~`. DEL (7F) is kept.
 */
#[inline]
pub fn encode_ascii_invariant(ch: u32) -> Option<CharBytes> {
    match ch {
        0x00..=0x22 | 0x25..=0x3f | 0x41..=0x5a | 0x5f | 0x61..=0x7a | 0x7f =>
            Some(CharBytes::one(ch as u8)),
        _ => None,
    }
}
