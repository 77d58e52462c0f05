// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! A list of all supported character sets, and the table mapping ECIs to them.

use crate::codec::{self, singlebyte::{Layout, SingleByteCharset}};
use crate::codec::utf_16::{Big, Little};
use crate::types::{self, CharBytes};
use encoding_index_singlebyte as index;

macro_rules! singlebyte {
    (var=$var:ident, mod=$module:ident, name=$name:expr, layout=$layout:ident) => (
        pub static $var: &'static SingleByteCharset = &SingleByteCharset {
            name: $name,
            layout: Layout::$layout,
            index_forward: index::$module::forward,
            index_backward: index::$module::backward,
        };
    )
}

singlebyte!(var=ISO_8859_2, mod=iso_8859_2, name="iso-8859-2", layout=Iso8859);
singlebyte!(var=ISO_8859_3, mod=iso_8859_3, name="iso-8859-3", layout=Iso8859);
singlebyte!(var=ISO_8859_4, mod=iso_8859_4, name="iso-8859-4", layout=Iso8859);
singlebyte!(var=ISO_8859_5, mod=iso_8859_5, name="iso-8859-5", layout=Iso8859);
singlebyte!(var=ISO_8859_6, mod=iso_8859_6, name="iso-8859-6", layout=Iso8859);
singlebyte!(var=ISO_8859_7, mod=iso_8859_7, name="iso-8859-7", layout=Iso8859);
singlebyte!(var=ISO_8859_8, mod=iso_8859_8, name="iso-8859-8", layout=Iso8859);
singlebyte!(var=ISO_8859_9, mod=windows_1254, name="iso-8859-9", layout=Iso8859);
singlebyte!(var=ISO_8859_10, mod=iso_8859_10, name="iso-8859-10", layout=Iso8859);
singlebyte!(var=ISO_8859_11, mod=windows_874, name="iso-8859-11", layout=Iso8859);
singlebyte!(var=ISO_8859_13, mod=iso_8859_13, name="iso-8859-13", layout=Iso8859);
singlebyte!(var=ISO_8859_14, mod=iso_8859_14, name="iso-8859-14", layout=Iso8859);
singlebyte!(var=ISO_8859_15, mod=iso_8859_15, name="iso-8859-15", layout=Iso8859);
singlebyte!(var=ISO_8859_16, mod=iso_8859_16, name="iso-8859-16", layout=Iso8859);
singlebyte!(var=WINDOWS_1250, mod=windows_1250, name="windows-1250", layout=CodePage);
singlebyte!(var=WINDOWS_1251, mod=windows_1251, name="windows-1251", layout=CodePage);
singlebyte!(var=WINDOWS_1252, mod=windows_1252, name="windows-1252", layout=CodePage);
singlebyte!(var=WINDOWS_1256, mod=windows_1256, name="windows-1256", layout=CodePage);

/// A character set which Unicode text can be transcoded to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Charset {
    Iso8859_1,
    Iso8859_2,
    Iso8859_3,
    Iso8859_4,
    Iso8859_5,
    Iso8859_6,
    Iso8859_7,
    Iso8859_8,
    Iso8859_9,
    Iso8859_10,
    Iso8859_11,
    Iso8859_13,
    Iso8859_14,
    Iso8859_15,
    Iso8859_16,
    ShiftJis,
    Windows1250,
    Windows1251,
    Windows1252,
    Windows1256,
    Utf16Be,
    Ascii,
    Big5,
    Gb2312,
    EucKr,
    Gbk,
    Gb18030,
    Utf16Le,
    Utf32Be,
    Utf32Le,
    AsciiInvariant,
}

use self::Charset::*;

/// ECIs 0 to 35. `None` marks reserved identifiers, UTF-8 itself and ECI 0 and 3,
/// which are resolved before the table is consulted.
static ECI_TABLE: [Option<Charset>; 36] = [
    None, None, None, None, Some(Iso8859_2),                                        // 0-4
    Some(Iso8859_3), Some(Iso8859_4), Some(Iso8859_5), Some(Iso8859_6), Some(Iso8859_7), // 5-9
    Some(Iso8859_8), Some(Iso8859_9), Some(Iso8859_10), Some(Iso8859_11), None,     // 10-14
    Some(Iso8859_13), Some(Iso8859_14), Some(Iso8859_15), Some(Iso8859_16), None,   // 15-19
    Some(ShiftJis), Some(Windows1250), Some(Windows1251), Some(Windows1252), Some(Windows1256), // 20-24
    Some(Utf16Be), None, Some(Ascii), Some(Big5), Some(Gb2312),                     // 25-29
    Some(EucKr), Some(Gbk), Some(Gb18030), Some(Utf16Le), Some(Utf32Be),            // 30-34
    Some(Utf32Le),                                                                  // 35
];

/// Every supported character set, in the order of their ECIs.
pub static CHARSETS: [Charset; 31] = [
    Iso8859_1, Iso8859_2, Iso8859_3, Iso8859_4, Iso8859_5, Iso8859_6, Iso8859_7, Iso8859_8,
    Iso8859_9, Iso8859_10, Iso8859_11, Iso8859_13, Iso8859_14, Iso8859_15, Iso8859_16,
    ShiftJis, Windows1250, Windows1251, Windows1252, Windows1256, Utf16Be, Ascii, Big5, Gb2312,
    EucKr, Gbk, Gb18030, Utf16Le, Utf32Be, Utf32Le, AsciiInvariant,
];

impl Charset {
    /// Returns the character set for given ECI, if it is convertible from Unicode.
    /// ECI 0 (unset) is treated as ISO/IEC 8859-1.
    pub fn from_eci(eci: u32) -> Option<Charset> {
        match eci {
            types::ECI_DEFAULT | types::ECI_ISO_8859_1 => Some(Iso8859_1),
            types::ECI_ASCII_INVARIANT => Some(AsciiInvariant),
            _ => ECI_TABLE.get(eci as usize).and_then(|&charset| charset),
        }
    }

    /// Returns the ECI assigned to this character set.
    pub fn eci(self) -> u32 {
        match self {
            Iso8859_1 => 3,
            Iso8859_2 => 4,
            Iso8859_3 => 5,
            Iso8859_4 => 6,
            Iso8859_5 => 7,
            Iso8859_6 => 8,
            Iso8859_7 => 9,
            Iso8859_8 => 10,
            Iso8859_9 => 11,
            Iso8859_10 => 12,
            Iso8859_11 => 13,
            Iso8859_13 => 15,
            Iso8859_14 => 16,
            Iso8859_15 => 17,
            Iso8859_16 => 18,
            ShiftJis => 20,
            Windows1250 => 21,
            Windows1251 => 22,
            Windows1252 => 23,
            Windows1256 => 24,
            Utf16Be => 25,
            Ascii => 27,
            Big5 => 28,
            Gb2312 => 29,
            EucKr => 30,
            Gbk => 31,
            Gb18030 => 32,
            Utf16Le => 33,
            Utf32Be => 34,
            Utf32Le => 35,
            AsciiInvariant => 170,
        }
    }

    /// Returns the canonical label of this character set.
    pub fn name(self) -> &'static str {
        match self {
            Iso8859_1 => "iso-8859-1",
            ShiftJis => "shift_jis",
            Utf16Be => "utf-16be",
            Ascii => "us-ascii",
            Big5 => "big5",
            Gb2312 => "gb2312",
            EucKr => "euc-kr",
            Gbk => "gbk",
            Gb18030 => "gb18030",
            Utf16Le => "utf-16le",
            Utf32Be => "utf-32be",
            Utf32Le => "utf-32le",
            AsciiInvariant => "iso646-inv",
            _ => self.single_byte().map_or("", |charset| charset.name),
        }
    }

    /// Returns the index-backed definition of a single-byte character set,
    /// except ISO/IEC 8859-1 and the ASCII variants which need no table.
    pub fn single_byte(self) -> Option<&'static SingleByteCharset> {
        match self {
            Iso8859_2 => Some(ISO_8859_2),
            Iso8859_3 => Some(ISO_8859_3),
            Iso8859_4 => Some(ISO_8859_4),
            Iso8859_5 => Some(ISO_8859_5),
            Iso8859_6 => Some(ISO_8859_6),
            Iso8859_7 => Some(ISO_8859_7),
            Iso8859_8 => Some(ISO_8859_8),
            Iso8859_9 => Some(ISO_8859_9),
            Iso8859_10 => Some(ISO_8859_10),
            Iso8859_11 => Some(ISO_8859_11),
            Iso8859_13 => Some(ISO_8859_13),
            Iso8859_14 => Some(ISO_8859_14),
            Iso8859_15 => Some(ISO_8859_15),
            Iso8859_16 => Some(ISO_8859_16),
            Windows1250 => Some(WINDOWS_1250),
            Windows1251 => Some(WINDOWS_1251),
            Windows1252 => Some(WINDOWS_1252),
            Windows1256 => Some(WINDOWS_1256),
            _ => None,
        }
    }

    /// Returns true if every character takes exactly one byte.
    pub fn is_single_byte(self) -> bool {
        self.max_char_len() == 1
    }

    /// Returns the maximum number of bytes a single character can take.
    pub fn max_char_len(self) -> usize {
        match self {
            ShiftJis | Big5 | Gb2312 | EucKr | Gbk => 2,
            Gb18030 | Utf16Be | Utf16Le | Utf32Be | Utf32Le => 4,
            _ => 1,
        }
    }

    /// Encodes a single codepoint, or returns `None` if it is unrepresentable.
    pub fn encode_char(self, ch: u32) -> Option<CharBytes> {
        if let Some(charset) = self.single_byte() {
            return charset.encode_char(ch);
        }
        match self {
            Iso8859_1 => codec::singlebyte::encode_latin1(ch),
            ShiftJis => codec::japanese::encode_shift_jis(ch),
            Utf16Be => codec::utf_16::encode_utf16::<Big>(ch),
            Ascii => codec::ascii::encode_ascii(ch),
            Big5 => codec::tradchinese::encode_big5(ch),
            Gb2312 => codec::simpchinese::encode_gb2312(ch),
            EucKr => codec::korean::encode_euc_kr(ch),
            Gbk => codec::simpchinese::encode_gbk(ch),
            Gb18030 => codec::simpchinese::encode_gb18030(ch),
            Utf16Le => codec::utf_16::encode_utf16::<Little>(ch),
            Utf32Be => codec::utf_32::encode_utf32::<Big>(ch),
            Utf32Le => codec::utf_32::encode_utf32::<Little>(ch),
            AsciiInvariant => codec::ascii::encode_ascii_invariant(ch),
            _ => None,
        }
    }
}
