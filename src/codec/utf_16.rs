// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! UTF-16.

use crate::types::CharBytes;

/// An implementation type for little endian.
///
/// Can be used as a type parameter to `encode_utf16` and `encode_utf32`.
#[derive(Clone, Copy, Debug)]
pub struct Little;

/// An implementation type for big endian.
///
/// Can be used as a type parameter to `encode_utf16` and `encode_utf32`.
#[derive(Clone, Copy, Debug)]
pub struct Big;

/// An internal trait used to customize UTF-16 and UTF-32 implementations.
pub trait Endian {
    fn u16_bytes(unit: u16) -> [u8; 2];
    fn u32_bytes(unit: u32) -> [u8; 4];
}

impl Endian for Little {
    #[inline] fn u16_bytes(unit: u16) -> [u8; 2] { unit.to_le_bytes() }
    #[inline] fn u32_bytes(unit: u32) -> [u8; 4] { unit.to_le_bytes() }
}

impl Endian for Big {
    #[inline] fn u16_bytes(unit: u16) -> [u8; 2] { unit.to_be_bytes() }
    #[inline] fn u32_bytes(unit: u32) -> [u8; 4] { unit.to_be_bytes() }
}

/**
 * ECI 25 and 33: UTF-16 (UCS Transformation Format, 16-bit).
 *
 * This is a Unicode encoding where one codepoint may use
 * 2 (up to U+FFFF) or 4 bytes (up to U+10FFFF) depending on its value.
 * It uses a "surrogate" mechanism to encode non-BMP codepoints,
 * which are represented as a pair of lower surrogate and upper surrogate characters.
 * In this effect, surrogate characters (U+D800...DFFF) cannot appear alone
 * and are rejected. No byte order mark is written.
 *
 * ## Specialization
 *
 * This function is specialized with endianness type `E`,
 * which should be either `Little` (ECI 33) or `Big` (ECI 25).
 */
pub fn encode_utf16<E: Endian>(ch: u32) -> Option<CharBytes> {
    match ch {
        0x0000..=0xd7ff | 0xe000..=0xffff => {
            let [b1, b2] = E::u16_bytes(ch as u16);
            Some(CharBytes::two(b1, b2))
        }
        0x10000..=0x10ffff => {
            let ch = ch - 0x10000;
            let [b1, b2] = E::u16_bytes(0xd800 | (ch >> 10) as u16);
            let [b3, b4] = E::u16_bytes(0xdc00 | (ch & 0x3ff) as u16);
            Some(CharBytes::four(b1, b2, b3, b4))
        }
        _ => None,
    }
}
