// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Transcoding UTF-8 input to a legacy character set, and bounding its output length.

use crate::all::Charset;
use crate::codec::singlebyte::encode_latin1;
use crate::types::{self, ByteWriter, EciError, SliceWriter};
use crate::util::{ascii_count, byte_count, codepoint_indices};

/**
 * Returns an upper bound of the number of bytes `source` transcodes to under given ECI.
 *
 * The bound is never exceeded for any well-formed input, and does not include the terminating
 * zero byte written by `transcode_into`. Every character set not listed below fits in the
 * UTF-8 length, since each character there is no longer than its UTF-8 sequence.
 *
 * - Shift_JIS (20): the backslash is a single byte in UTF-8 but two bytes in Shift_JIS.
 * - UTF-16 (25, 33): ASCII doubles. Other characters fit, and supplementary ones take
 *   four bytes in both.
 * - GB 18030 (32): doubled, as two-byte UTF-8 sequences may become four-byte sequences.
 * - UTF-32 (34, 35): ASCII quadruples and everything else at most doubles.
 */
pub fn eci_length(eci: u32, source: &[u8]) -> usize {
    let length = source.len();
    match eci {
        types::ECI_SHIFT_JIS => length + byte_count(source, b'\\'),
        types::ECI_UTF_16BE | types::ECI_UTF_16LE => length + ascii_count(source),
        types::ECI_GB18030 => length * 2,
        types::ECI_UTF_32BE | types::ECI_UTF_32LE => length + ascii_count(source) * 2 + length,
        _ => length,
    }
}

/// Transcodes `source` (UTF-8) to given ECI and writes the result to `output`.
///
/// On the failure whatever was written to `output` should be discarded.
pub fn transcode_to<W: ByteWriter + ?Sized>(eci: u32, source: &[u8], output: &mut W)
                                            -> Result<(), EciError> {
    let charset = Charset::from_eci(eci).ok_or(EciError::Unsupported(eci))?;
    output.writer_hint(eci_length(eci, source));

    if charset == Charset::Iso8859_1 {
        for item in codepoint_indices(source) {
            let (offset, ch) = item?;
            match encode_latin1(ch) {
                Some(_) => output.write_byte(ch as u8),
                None => return Err(EciError::Unrepresentable { eci, codepoint: ch, offset }),
            }
        }
        return Ok(());
    }

    for item in codepoint_indices(source) {
        let (offset, ch) = item?;
        match charset.encode_char(ch) {
            Some(encoded) => output.write_bytes(&encoded),
            None => return Err(EciError::Unrepresentable { eci, codepoint: ch, offset }),
        }
    }
    Ok(())
}

/// Transcodes `source` (UTF-8) to given ECI, returning a newly allocated buffer.
pub fn transcode(eci: u32, source: &[u8]) -> Result<Vec<u8>, EciError> {
    let mut output = Vec::new();
    transcode_to(eci, source, &mut output)?;
    Ok(output)
}

/**
 * Transcodes `source` (UTF-8) to given ECI into a caller-provided buffer,
 * followed by a zero byte. Returns the number of bytes written excluding the zero byte.
 *
 * `dest` should be sized with `eci_length(eci, source) + 1`.
 * On the failure the contents of `dest` are unspecified.
 *
 * # Panics
 *
 * Panics if `dest` is not longer than `eci_length(eci, source)`.
 */
pub fn transcode_into(eci: u32, source: &[u8], dest: &mut [u8]) -> Result<usize, EciError> {
    let bound = eci_length(eci, source);
    assert!(dest.len() > bound,
            "destination holds {} bytes but ECI {} needs up to {}", dest.len(), eci, bound + 1);
    let mut writer = SliceWriter::new(dest);
    transcode_to(eci, source, &mut writer)?;
    let length = writer.position();
    dest[length] = 0;
    Ok(length)
}
