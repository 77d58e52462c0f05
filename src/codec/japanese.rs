// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy Japanese encodings based on JIS X 0208.

use crate::types::CharBytes;
use encoding_index_japanese::jis0208 as index0208;

/// Pointers past this limit (lead bytes F0-FC and the IBM extensions in ED-EE) are not JIS X 0208.
const JIS0208_POINTER_LIMIT: u16 = (0xeb - 0xc1) * 188;

/// NEC row 13 special characters, lead byte 87.
const NEC_ROW13_POINTERS: ::std::ops::Range<u16> = (0x87 - 0x81) * 188..(0x88 - 0x81) * 188;

/**
 * ECI 20: Shift_JIS, JIS X 0201 with JIS X 0208.
 *
 * This is a Japanese encoding for JIS X 0208
 * compatible to the original assignments of JIS X 0201 (`[21-7E A1-DF]`).
 * The 94 by 94 region of JIS X 0208 is sliced, or rather "shifted" into
 * the odd half (odd row number) and even half (even row number),
 * and merged into the 188 by 47 region mapped to `[81-9F E0-EA] [40-7E 80-FC]`.
 *
 * Unlike Windows code page 932 no vendor extension is included:
 * the NEC row 13, the NEC-selected IBM extensions and the user-defined area are all rejected.
 * Since JIS X 0201 puts the yen sign and the overline in `5C` and `7E`,
 * the backslash goes to its full-width form in `81 5F` and the tilde is unrepresentable.
 */
pub fn encode_shift_jis(ch: u32) -> Option<CharBytes> {
    match ch {
        0x5c => Some(CharBytes::two(0x81, 0x5f)),
        0x7e => None,
        0x00..=0x7f => Some(CharBytes::one(ch as u8)),
        0xa5 => Some(CharBytes::one(0x5c)),
        0x203e => Some(CharBytes::one(0x7e)),
        0xff61..=0xff9f => Some(CharBytes::one((ch - 0xff61 + 0xa1) as u8)),
        _ => {
            let ptr = index0208::backward_remapped(ch);
            if ptr >= JIS0208_POINTER_LIMIT || NEC_ROW13_POINTERS.contains(&ptr) {
                return None;
            }
            let lead = ptr / 188;
            let leadoffset = if lead < 0x1f {0x81} else {0xc1};
            let trail = ptr % 188;
            let trailoffset = if trail < 0x3f {0x40} else {0x41};
            Some(CharBytes::two((lead + leadoffset) as u8, (trail + trailoffset) as u8))
        }
    }
}
