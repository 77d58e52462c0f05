// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! An interface for retrieving a character set (or its ECI) from a string label.

use crate::all::Charset;
use crate::types;

fn normalize(label: &str) -> String {
    label.trim_matches(|c: char| c == ' ' || c == '\n' || c == '\r' || c == '\t' || c == '\x0C')
         .to_ascii_lowercase()
}

/// Returns a character set from given label, if any.
/// Labels are case-insensitive and may be surrounded by whitespace.
pub fn charset_from_label(label: &str) -> Option<Charset> {
    let charset = match &normalize(label)[..] {
        "iso-8859-1" | "iso8859-1" | "iso88591" | "iso_8859-1" | "iso_8859-1:1987" |
        "l1" | "latin1" | "csisolatin1" | "iso-ir-100" =>
            Charset::Iso8859_1,
        "iso-8859-2" | "iso8859-2" | "iso88592" | "iso_8859-2" | "iso_8859-2:1987" |
        "l2" | "latin2" | "csisolatin2" | "iso-ir-101" =>
            Charset::Iso8859_2,
        "iso-8859-3" | "iso8859-3" | "iso88593" | "iso_8859-3" | "iso_8859-3:1988" |
        "l3" | "latin3" | "csisolatin3" | "iso-ir-109" =>
            Charset::Iso8859_3,
        "iso-8859-4" | "iso8859-4" | "iso88594" | "iso_8859-4" | "iso_8859-4:1988" |
        "l4" | "latin4" | "csisolatin4" | "iso-ir-110" =>
            Charset::Iso8859_4,
        "iso-8859-5" | "iso8859-5" | "iso88595" | "iso_8859-5" | "iso_8859-5:1988" |
        "cyrillic" | "csisolatincyrillic" | "iso-ir-144" =>
            Charset::Iso8859_5,
        "iso-8859-6" | "iso8859-6" | "iso88596" | "iso_8859-6" | "iso_8859-6:1987" |
        "arabic" | "csisolatinarabic" | "iso-ir-127" | "ecma-114" | "asmo-708" =>
            Charset::Iso8859_6,
        "iso-8859-7" | "iso8859-7" | "iso88597" | "iso_8859-7" | "iso_8859-7:1987" |
        "greek" | "greek8" | "csisolatingreek" | "iso-ir-126" | "ecma-118" | "elot_928" =>
            Charset::Iso8859_7,
        "iso-8859-8" | "iso8859-8" | "iso88598" | "iso_8859-8" | "iso_8859-8:1988" |
        "hebrew" | "csisolatinhebrew" | "iso-ir-138" =>
            Charset::Iso8859_8,
        "iso-8859-9" | "iso8859-9" | "iso88599" | "iso_8859-9" | "iso_8859-9:1989" |
        "l5" | "latin5" | "csisolatin5" | "iso-ir-148" =>
            Charset::Iso8859_9,
        "iso-8859-10" | "iso8859-10" | "iso885910" | "l6" | "latin6" | "csisolatin6" |
        "iso-ir-157" =>
            Charset::Iso8859_10,
        "iso-8859-11" | "iso8859-11" | "iso885911" | "tis-620" =>
            Charset::Iso8859_11,
        "iso-8859-13" | "iso8859-13" | "iso885913" | "l7" | "latin7" =>
            Charset::Iso8859_13,
        "iso-8859-14" | "iso8859-14" | "iso885914" | "l8" | "latin8" =>
            Charset::Iso8859_14,
        "iso-8859-15" | "iso8859-15" | "iso885915" | "iso_8859-15" | "l9" | "latin9" |
        "csisolatin9" =>
            Charset::Iso8859_15,
        "iso-8859-16" | "iso8859-16" | "iso885916" | "l10" | "latin10" =>
            Charset::Iso8859_16,
        "shift_jis" | "shift-jis" | "sjis" | "ms_kanji" | "csshiftjis" =>
            Charset::ShiftJis,
        "windows-1250" | "cp1250" | "x-cp1250" =>
            Charset::Windows1250,
        "windows-1251" | "cp1251" | "x-cp1251" =>
            Charset::Windows1251,
        "windows-1252" | "cp1252" | "x-cp1252" =>
            Charset::Windows1252,
        "windows-1256" | "cp1256" | "x-cp1256" =>
            Charset::Windows1256,
        "utf-16be" | "utf16be" =>
            Charset::Utf16Be,
        "us-ascii" | "ascii" | "iso646-us" | "ansi_x3.4-1968" | "csascii" =>
            Charset::Ascii,
        "big5" | "big-5" | "csbig5" | "cn-big5" =>
            Charset::Big5,
        "gb2312" | "gb_2312" | "gb_2312-80" | "euc-cn" | "csgb2312" =>
            Charset::Gb2312,
        "euc-kr" | "euckr" | "cseuckr" | "ks_c_5601-1987" | "ksc5601" =>
            Charset::EucKr,
        "gbk" | "cp936" | "ms936" =>
            Charset::Gbk,
        "gb18030" | "gb-18030" =>
            Charset::Gb18030,
        "utf-16le" | "utf16le" =>
            Charset::Utf16Le,
        "utf-32be" | "utf32be" =>
            Charset::Utf32Be,
        "utf-32le" | "utf32le" =>
            Charset::Utf32Le,
        "iso646-inv" | "iso646" | "invariant" =>
            Charset::AsciiInvariant,
        _ => return None,
    };
    Some(charset)
}

/// Returns an ECI from given label, if any.
/// In addition to `charset_from_label`, UTF-8 is recognized as ECI 26.
pub fn eci_from_label(label: &str) -> Option<u32> {
    match &normalize(label)[..] {
        "utf-8" | "utf8" | "unicode-1-1-utf-8" => Some(types::ECI_UTF_8),
        normalized => charset_from_label(normalized).map(Charset::eci),
    }
}
