// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! UTF-32.

use crate::types::CharBytes;
use super::utf_16::Endian;

/**
 * ECI 34 and 35: UTF-32 (UCS Transformation Format, 32-bit).
 *
 * Every scalar value takes exactly 4 bytes. Surrogates are rejected.
 *
 * ## Specialization
 *
 * This function is specialized with endianness type `E`,
 * which should be either `Little` (ECI 35) or `Big` (ECI 34).
 */
pub fn encode_utf32<E: Endian>(ch: u32) -> Option<CharBytes> {
    match ch {
        0x0000..=0xd7ff | 0xe000..=0x10ffff => {
            let [b1, b2, b3, b4] = E::u32_bytes(ch);
            Some(CharBytes::four(b1, b2, b3, b4))
        }
        _ => None,
    }
}
