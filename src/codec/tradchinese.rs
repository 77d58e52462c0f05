// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy traditional Chinese encodings.

use crate::types::CharBytes;
use encoding_index_tradchinese::big5 as index;

/// Returns true if the cell belongs to the original Big5 repertoire.
///
/// Symbols are in `A140-A3BF`, frequent hanzi in `A440-C67E`
/// and less frequent hanzi in `C940-F9D5`.
fn is_big5_cell(lead: u16, trail: u16) -> bool {
    match lead {
        0xa1..=0xa2 | 0xa4..=0xc5 | 0xc9..=0xf8 => true,
        0xa3 => trail <= 0xbf,
        0xc6 => trail <= 0x7e,
        0xf9 => trail <= 0xd5,
        _ => false,
    }
}

/**
 * ECI 28: Big5.
 *
 * This is a traditional Chinese encoding spanning the region `[A1-F9] [40-7E A1-FE]`.
 * Originally a proprietary encoding by the consortium of five companies (hence the name),
 * it has numerous extensions: ETEN, Big5-2003 (which added the euro sign) and HKSCS among others.
 * None of them is accepted here.
 */
pub fn encode_big5(ch: u32) -> Option<CharBytes> {
    match ch {
        0x00..=0x7f => return Some(CharBytes::one(ch as u8)),
        // also listed as the Suzhou numerals `A2 CC` and `A2 CE`
        0x5341 => return Some(CharBytes::two(0xa4, 0x51)),
        0x5345 => return Some(CharBytes::two(0xa4, 0xca)),
        _ => {}
    }
    let ptr = index::backward(ch);
    if ptr == 0xffff || ptr < (0xa1 - 0x81) * 157 {
        // no HKSCS extension
        return None;
    }
    let lead = ptr / 157 + 0x81;
    let trail = ptr % 157;
    let trailoffset = if trail < 0x3f {0x40} else {0x62};
    let trail = trail + trailoffset;
    if is_big5_cell(lead, trail) {
        Some(CharBytes::two(lead as u8, trail as u8))
    } else {
        None
    }
}
