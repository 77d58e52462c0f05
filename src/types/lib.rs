// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Interface types shared by the ECI transcoder.
 *
 * # ECI identifiers
 *
 * An Extended Channel Interpretation (ECI) is a plain integer naming the character set
 * a barcode segment is expressed in. Every identifier falls into exactly one
 * [`EciClass`], which is a pure function of the number:
 *
 * ````notrust
 *   0, 3-13, 15-18, 20-25, 27-35, 170   convertible from Unicode
 *   26                                  UTF-8 itself, passed through as-is
 *   1, 2, 14, 19, 36-899                8-bit binary data or reserved
 *   900-                                not a character set
 * ````
 *
 * ECI 0 is the "unset" marker on a segment; when transcoding it behaves as ISO/IEC 8859-1.
 *
 * # Raw output interface
 *
 * Encoders never allocate. They hand at most four bytes per character back as a [`CharBytes`],
 * which the transcoder pushes into a [`ByteWriter`] (normally a `Vec<u8>`).
 */

use std::fmt;
use std::ops::Deref;

/// ECI 0: no ECI given. Transcodes as ISO/IEC 8859-1.
pub const ECI_DEFAULT: u32 = 0;
/// ECI 3: ISO/IEC 8859-1 Latin alphabet No. 1.
pub const ECI_ISO_8859_1: u32 = 3;
/// ECI 4: ISO/IEC 8859-2 Latin alphabet No. 2.
pub const ECI_ISO_8859_2: u32 = 4;
/// ECI 20: Shift JIS.
pub const ECI_SHIFT_JIS: u32 = 20;
/// ECI 25: UTF-16 in big endian.
pub const ECI_UTF_16BE: u32 = 25;
/// ECI 26: UTF-8.
pub const ECI_UTF_8: u32 = 26;
/// ECI 27: 7-bit ASCII (ISO/IEC 646:1991 IRV).
pub const ECI_ASCII: u32 = 27;
/// ECI 29: GB 2312.
pub const ECI_GB2312: u32 = 29;
/// ECI 32: GB 18030.
pub const ECI_GB18030: u32 = 32;
/// ECI 33: UTF-16 in little endian.
pub const ECI_UTF_16LE: u32 = 33;
/// ECI 34: UTF-32 in big endian.
pub const ECI_UTF_32BE: u32 = 34;
/// ECI 35: UTF-32 in little endian.
pub const ECI_UTF_32LE: u32 = 35;
/// ECI 170: ISO/IEC 646:1991 invariant subset of ASCII.
pub const ECI_ASCII_INVARIANT: u32 = 170;
/// ECI 899: 8-bit binary data.
pub const ECI_BINARY: u32 = 899;

/// Classification of an ECI identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EciClass {
    /// A legacy character set which can be produced from Unicode.
    Convertible,
    /// UTF-8 (ECI 26). Bytes are used as they are.
    Unicode,
    /// 8-bit binary data (ECI 899) or an unassigned or reserved identifier.
    Opaque,
    /// Identifiers above 899, which do not denote a character set.
    NotCharacterSet,
}

/// Classifies given ECI identifier.
pub fn eci_class(eci: u32) -> EciClass {
    match eci {
        ECI_UTF_8 => EciClass::Unicode,
        0 | 3..=13 | 15..=18 | 20..=25 | 27..=35 | ECI_ASCII_INVARIANT => EciClass::Convertible,
        _ if eci > ECI_BINARY => EciClass::NotCharacterSet,
        _ => EciClass::Opaque,
    }
}

/// Returns true if Unicode text can be transcoded to given ECI.
#[inline]
pub fn is_eci_convertible(eci: u32) -> bool {
    eci_class(eci) == EciClass::Convertible
}

/// The kind of every `EciError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input or the requested ECI cannot be used.
    InvalidData,
}

/// Error information from the transcoder.
///
/// There is no recovery: partial output written before the error should be discarded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EciError {
    /// The ECI has no Unicode conversion (reserved, binary, UTF-8 itself or out of range).
    #[error("ECI {0} cannot be converted from Unicode")]
    Unsupported(u32),
    /// A malformed UTF-8 sequence starting at given byte offset of the input.
    #[error("invalid UTF-8 sequence at byte {offset}")]
    InvalidSequence { offset: usize },
    /// The input ended in the middle of a UTF-8 sequence.
    #[error("incomplete UTF-8 sequence at the end of input")]
    IncompleteSequence,
    /// The character at given byte offset has no representation in the ECI.
    #[error("unrepresentable character U+{codepoint:04X} at byte {offset} for ECI {eci}")]
    Unrepresentable { eci: u32, codepoint: u32, offset: usize },
}

impl EciError {
    /// Returns the error kind, which is always `ErrorKind::InvalidData`.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidData
    }
}

/// An encoded representation of a single character: one, two or four bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharBytes {
    bytes: [u8; 4],
    len: u8,
}

impl CharBytes {
    #[inline]
    pub fn one(b: u8) -> CharBytes {
        CharBytes { bytes: [b, 0, 0, 0], len: 1 }
    }

    #[inline]
    pub fn two(b1: u8, b2: u8) -> CharBytes {
        CharBytes { bytes: [b1, b2, 0, 0], len: 2 }
    }

    #[inline]
    pub fn four(b1: u8, b2: u8, b3: u8, b4: u8) -> CharBytes {
        CharBytes { bytes: [b1, b2, b3, b4], len: 4 }
    }

    /// Splits a 16-bit code unit into two big endian bytes.
    #[inline]
    pub fn from_u16_be(code: u16) -> CharBytes {
        CharBytes::two((code >> 8) as u8, (code & 0xff) as u8)
    }

    /// Splits two 16-bit code units into four big endian bytes.
    #[inline]
    pub fn from_u16_pair_be(first: u16, second: u16) -> CharBytes {
        CharBytes::four((first >> 8) as u8, (first & 0xff) as u8,
                        (second >> 8) as u8, (second & 0xff) as u8)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl Deref for CharBytes {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for CharBytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CharBytes({:02X?})", self.as_bytes())
    }
}

/// Byte writer used by the transcoder. In most cases this will be an owned vector of `u8`.
pub trait ByteWriter {
    /// Hints an expected lower bound on the length (in bytes) of the output
    /// until the next call to `writer_hint`,
    /// so that the writer can reserve the memory for writing.
    /// By default this method does nothing.
    fn writer_hint(&mut self, _expectedlen: usize) {}

    /// Writes a single byte.
    fn write_byte(&mut self, b: u8);

    /// Writes a number of bytes.
    fn write_bytes(&mut self, v: &[u8]);
}

impl ByteWriter for Vec<u8> {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_byte(&mut self, b: u8) {
        self.push(b);
    }

    fn write_bytes(&mut self, v: &[u8]) {
        self.extend_from_slice(v);
    }
}

/// A `ByteWriter` over a caller-provided buffer.
///
/// The buffer must be large enough for everything written to it;
/// writing past its end panics.
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> SliceWriter<'a> {
        SliceWriter { buf, pos: 0 }
    }

    /// Returns the number of bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> ByteWriter for SliceWriter<'a> {
    fn write_byte(&mut self, b: u8) {
        self.buf[self.pos] = b;
        self.pos += 1;
    }

    fn write_bytes(&mut self, v: &[u8]) {
        let end = self.pos + v.len();
        self.buf[self.pos..end].copy_from_slice(v);
        self.pos = end;
    }
}
