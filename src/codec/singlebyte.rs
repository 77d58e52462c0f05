// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Common codec implementation for single-byte encodings.

use crate::types::CharBytes;

/// ECI 0 and 3: ISO/IEC 8859-1.
///
/// Unlike the other parts of ISO/IEC 8859, C1 controls (U+0080 to U+009F) are rejected.
#[inline]
pub fn encode_latin1(ch: u32) -> Option<CharBytes> {
    if ch < 0x80 || (ch >= 0xa0 && ch <= 0xff) {
        Some(CharBytes::one(ch as u8))
    } else {
        None
    }
}

/// How the upper half (80-FF) of a single-byte charset is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// ISO/IEC 8859: C1 controls in 80-9F map to themselves, graphic characters in A0-FF.
    Iso8859,
    /// Windows code pages: graphic characters in 80-FF, no C1 controls.
    CodePage,
}

/// A single-byte charset backed by a WHATWG single-byte index.
///
/// The index may be a superset of the charset (e.g. Windows-1254 for ISO/IEC 8859-9),
/// in which case `Layout::Iso8859` cuts off everything the index puts in 80-9F.
pub struct SingleByteCharset {
    pub name: &'static str,
    pub layout: Layout,
    pub index_forward: fn(u8) -> u16,
    pub index_backward: fn(u32) -> u8,
}

impl SingleByteCharset {
    pub fn encode_char(&self, ch: u32) -> Option<CharBytes> {
        if ch < 0x80 {
            return Some(CharBytes::one(ch as u8));
        }
        if ch < 0xa0 {
            return match self.layout {
                Layout::Iso8859 => Some(CharBytes::one(ch as u8)),
                Layout::CodePage => None,
            };
        }
        let b = (self.index_backward)(ch);
        match self.layout {
            Layout::Iso8859 if b >= 0xa0 => Some(CharBytes::one(b)),
            Layout::CodePage if b >= 0x80 => Some(CharBytes::one(b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::all::*;

    #[test]
    fn test_encoder_latin1() {
        assert_encode_ok!(encode_latin1, 'A', [0x41]);
        assert_encode_ok!(encode_latin1, '\u{7f}', [0x7f]);
        assert_encode_ok!(encode_latin1, '\u{a0}', [0xa0]);
        assert_encode_ok!(encode_latin1, '\u{e9}', [0xe9]);
        assert_encode_ok!(encode_latin1, '\u{ff}', [0xff]);
        assert_encode_err!(encode_latin1, '\u{80}');
        assert_encode_err!(encode_latin1, '\u{9f}');
        assert_encode_err!(encode_latin1, '\u{100}');
        assert_encode_err!(encode_latin1, '\u{20ac}');
    }

    #[test]
    fn test_encoder_iso_8859_2() {
        let e = |ch| ISO_8859_2.encode_char(ch);
        assert_encode_ok!(e, 'A', [0x41]);
        assert_encode_ok!(e, '\u{85}', [0x85]);
        assert_encode_ok!(e, '\u{104}', [0xa1]);
        assert_encode_ok!(e, '\u{141}', [0xa3]);
        assert_encode_ok!(e, '\u{a4}', [0xa4]);
        assert_encode_ok!(e, '\u{e9}', [0xe9]);
        assert_encode_err!(e, '\u{a9}');
        assert_encode_err!(e, '\u{20ac}');
    }

    #[test]
    fn test_encoder_iso_8859_greek_and_cyrillic() {
        assert_encode_ok!(|ch| ISO_8859_5.encode_char(ch), '\u{410}', [0xb0]);
        assert_encode_ok!(|ch| ISO_8859_5.encode_char(ch), '\u{2116}', [0xf0]);
        assert_encode_ok!(|ch| ISO_8859_6.encode_char(ch), '\u{627}', [0xc7]);
        assert_encode_ok!(|ch| ISO_8859_7.encode_char(ch), '\u{20ac}', [0xa4]);
        assert_encode_ok!(|ch| ISO_8859_7.encode_char(ch), '\u{391}', [0xc1]);
        assert_encode_err!(|ch| ISO_8859_7.encode_char(ch), '\u{410}');
    }

    #[test]
    fn test_encoder_iso_8859_borrowed_index() {
        // ISO/IEC 8859-9 and 8859-11 share the upper half with Windows-1254 and 874
        assert_encode_ok!(|ch| ISO_8859_9.encode_char(ch), '\u{11e}', [0xd0]);
        assert_encode_ok!(|ch| ISO_8859_9.encode_char(ch), '\u{130}', [0xdd]);
        assert_encode_ok!(|ch| ISO_8859_9.encode_char(ch), '\u{15f}', [0xfe]);
        assert_encode_err!(|ch| ISO_8859_9.encode_char(ch), '\u{20ac}');
        assert_encode_err!(|ch| ISO_8859_9.encode_char(ch), '\u{152}');
        assert_encode_ok!(|ch| ISO_8859_11.encode_char(ch), '\u{e01}', [0xa1]);
        assert_encode_err!(|ch| ISO_8859_11.encode_char(ch), '\u{20ac}');
        assert_encode_err!(|ch| ISO_8859_11.encode_char(ch), '\u{2026}');
    }

    #[test]
    fn test_encoder_iso_8859_15() {
        assert_encode_ok!(|ch| ISO_8859_15.encode_char(ch), '\u{20ac}', [0xa4]);
        assert_encode_err!(|ch| ISO_8859_15.encode_char(ch), '\u{a4}');
    }

    #[test]
    fn test_encoder_windows() {
        assert_encode_ok!(|ch| WINDOWS_1250.encode_char(ch), '\u{20ac}', [0x80]);
        assert_encode_ok!(|ch| WINDOWS_1250.encode_char(ch), '\u{160}', [0x8a]);
        assert_encode_ok!(|ch| WINDOWS_1251.encode_char(ch), '\u{410}', [0xc0]);
        assert_encode_ok!(|ch| WINDOWS_1251.encode_char(ch), '\u{20ac}', [0x88]);
        assert_encode_ok!(|ch| WINDOWS_1252.encode_char(ch), '\u{20ac}', [0x80]);
        assert_encode_ok!(|ch| WINDOWS_1252.encode_char(ch), '\u{152}', [0x8c]);
        assert_encode_ok!(|ch| WINDOWS_1252.encode_char(ch), '\u{e9}', [0xe9]);
        assert_encode_ok!(|ch| WINDOWS_1256.encode_char(ch), '\u{627}', [0xc7]);
        assert_encode_ok!(|ch| WINDOWS_1256.encode_char(ch), '\u{6af}', [0x90]);
    }

    #[test]
    fn test_encoder_windows_no_c1() {
        for &charset in &[WINDOWS_1250, WINDOWS_1251, WINDOWS_1252, WINDOWS_1256] {
            for ch in 0x80..0xa0 {
                assert_encode_err!(|ch| charset.encode_char(ch), ch);
            }
        }
    }

    #[test]
    fn test_correct_table() {
        let charsets = [ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5, ISO_8859_6, ISO_8859_7,
                        ISO_8859_8, ISO_8859_9, ISO_8859_10, ISO_8859_11, ISO_8859_13,
                        ISO_8859_14, ISO_8859_15, ISO_8859_16,
                        WINDOWS_1250, WINDOWS_1251, WINDOWS_1252, WINDOWS_1256];
        for charset in charsets.iter() {
            for ch in 0x80..0x10000 {
                if let Some(encoded) = charset.encode_char(ch) {
                    let b = encoded[0];
                    if ch < 0xa0 {
                        assert_eq!(b as u32, ch, "{}", charset.name);
                    } else {
                        assert_eq!((charset.index_forward)(b) as u32, ch,
                                   "{}: U+{:04X} -> {:02X}", charset.name, ch, b);
                    }
                }
            }
        }
    }
}
