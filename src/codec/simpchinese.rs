// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy simplified Chinese encodings based on GB 2312 and GB 18030.

use crate::types::CharBytes;
use encoding_index_simpchinese::{gb18030 as index, gb18030_ranges as ranges};

/// Returns the two-byte GB 18030 sequence of a character as `(lead, trail)`.
fn two_byte_sequence(ch: u32) -> Option<(u8, u8)> {
    let ptr = index::backward(ch);
    if ptr == 0xffff {
        return None;
    }
    let lead = ptr / 190 + 0x81;
    let trail = ptr % 190;
    let trailoffset = if trail < 0x3f {0x40} else {0x41};
    Some((lead as u8, (trail + trailoffset) as u8))
}

#[inline]
fn is_private_use(ch: u32) -> bool {
    ch >= 0xe000 && ch <= 0xf8ff
}

/// Returns true if the cell is assigned in GB 2312.
///
/// Rows 1 to 9 have gaps which GBK and GB 18030 later filled,
/// rows 10 to 15 are unused and row 55 ends at the 89th cell.
fn is_gb2312_cell(lead: u8, trail: u8) -> bool {
    if trail < 0xa1 || trail > 0xfe {
        return false;
    }
    match lead {
        0xa1 | 0xa3 => true,
        0xa2 => (trail >= 0xb1 && trail <= 0xe2) || (trail >= 0xe5 && trail <= 0xee) ||
                (trail >= 0xf1 && trail <= 0xfc),
        0xa4 => trail <= 0xf3,
        0xa5 => trail <= 0xf6,
        0xa6 => trail <= 0xb8 || (trail >= 0xc1 && trail <= 0xd8),
        0xa7 => trail <= 0xc1 || (trail >= 0xd1 && trail <= 0xf1),
        0xa8 => trail <= 0xba || (trail >= 0xc5 && trail <= 0xe9),
        0xa9 => trail >= 0xa4 && trail <= 0xef,
        0xb0..=0xd6 | 0xd8..=0xf7 => true,
        0xd7 => trail <= 0xf9,
        _ => false,
    }
}

/**
 * ECI 29: GB 2312, ASCII with GB 2312 in EUC-CN form.
 *
 * GB 2312 is a 94 by 94 graphic character set with 6,763 hanzi and 682 other characters,
 * put in `[A1-F7] [A1-FE]`.
 */
pub fn encode_gb2312(ch: u32) -> Option<CharBytes> {
    if ch < 0x80 {
        return Some(CharBytes::one(ch as u8));
    }
    match two_byte_sequence(ch) {
        Some((lead, trail)) if is_gb2312_cell(lead, trail) && !is_private_use(ch) =>
            Some(CharBytes::two(lead, trail)),
        _ => None,
    }
}

/**
 * ECI 31: GBK.
 *
 * GBK extends GB 2312 to the whole `[81-FE] [40-7E 80-FE]` region.
 * The user-defined areas, mapped to the Private Use Area, are rejected.
 */
pub fn encode_gbk(ch: u32) -> Option<CharBytes> {
    if ch < 0x80 {
        return Some(CharBytes::one(ch as u8));
    }
    if is_private_use(ch) {
        return None;
    }
    two_byte_sequence(ch).map(|(lead, trail)| CharBytes::two(lead, trail))
}

/**
 * ECI 32: GB 18030.
 *
 * GB 18030 added four-byte sequences to GBK for becoming a pan-Unicode encoding,
 * while adding new characters to the (former) GBK region again.
 * Every scalar value is representable except U+E5E5,
 * whose former code `A3 A0` is given to U+3000 in practice.
 */
pub fn encode_gb18030(ch: u32) -> Option<CharBytes> {
    if ch < 0x80 {
        return Some(CharBytes::one(ch as u8));
    }
    if ch == 0xe5e5 {
        return None;
    }
    if let Some((lead, trail)) = two_byte_sequence(ch) {
        return Some(CharBytes::two(lead, trail));
    }
    let ptr = if ch >= 0x10000 {
        ch - 0x10000 + 189000
    } else {
        match ranges::backward(ch) {
            0xffffffff => return None,
            ptr => ptr,
        }
    };
    let (ptr, byte4) = (ptr / 10, ptr % 10);
    let (ptr, byte3) = (ptr / 126, ptr % 126);
    let (byte1, byte2) = (ptr / 10, ptr % 10);
    Some(CharBytes::four((byte1 + 0x81) as u8, (byte2 + 0x30) as u8,
                         (byte3 + 0x81) as u8, (byte4 + 0x30) as u8))
}

/// Decodes one GB 18030 sequence back through the index tables.
#[cfg(test)]
fn decode_sequence(bytes: &[u8]) -> u32 {
    match *bytes {
        [b] => b as u32,
        [lead, trail] => {
            let trailoffset = if trail < 0x7f {0x40} else {0x41};
            index::forward((lead as u16 - 0x81) * 190 + trail as u16 - trailoffset)
        }
        [b1, b2, b3, b4] => {
            let ptr = (((b1 as u32 - 0x81) * 10 + (b2 as u32 - 0x30)) * 126 +
                       (b3 as u32 - 0x81)) * 10 + (b4 as u32 - 0x30);
            if ptr >= 189000 { ptr - 189000 + 0x10000 } else { ranges::forward(ptr) }
        }
        _ => panic!("{:?} is not a GB 18030 sequence", bytes),
    }
}
