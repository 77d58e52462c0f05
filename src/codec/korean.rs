// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy Korean encodings based on KS X 1001.

use crate::types::CharBytes;
use encoding_index_korean::euc_kr as index;

/// Maps a character to its KS X 1001 code, i.e. the row and column each offset by 0x20.
///
/// The WHATWG index is for Windows code page 949, a superset of EUC-KR.
/// The extended Hangul syllables outside `[A1-FE] [A1-FE]` are rejected here.
pub fn ksx1001_code(ch: u32) -> Option<u16> {
    let ptr = index::backward(ch);
    if ptr == 0xffff {
        return None;
    }
    let lead = ptr / 190 + 0x81;
    let trail = ptr % 190 + 0x41;
    if lead >= 0xa1 && lead <= 0xfe && trail >= 0xa1 && trail <= 0xfe {
        Some(((lead - 0x80) << 8) | (trail - 0x80))
    } else {
        None
    }
}

/**
 * ECI 30: EUC-KR, ASCII with KS X 1001.
 *
 * KS X 1001 is a 94 by 94 graphic character set containing 2,350 precomposed Hangul syllables,
 * 4,888 Hanja and various symbols. EUC-KR puts it in G1 (`[A1-FE] [A1-FE]`).
 */
pub fn encode_euc_kr(ch: u32) -> Option<CharBytes> {
    if ch < 0x80 {
        return Some(CharBytes::one(ch as u8));
    }
    ksx1001_code(ch).map(|code| CharBytes::from_u16_be(code + 0x8080))
}
