// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.
//
// Portions Copyright (c) 2008-2009 Bjoern Hoehrmann <bjoern@hoehrmann.de>
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Internal utilities: a byte-at-a-time UTF-8 decoder and byte counting helpers.
//!
//! The UTF-8 scanner is heavily based on Bjoern Hoehrmann's
//! [Flexible and Economical UTF-8 Decoder](http://bjoern.hoehrmann.de/utf-8/decoder/dfa/).

use crate::types::EciError;

static CHAR_CATEGORY: [u8; 256] = [
    //  0 (00-7F): one byte sequence
    //  1 (80-8F): continuation byte
    //  2 (C2-DF): start of two byte sequence
    //  3 (E1-EC,EE-EF): start of three byte sequence, next byte unrestricted
    //  4 (ED): start of three byte sequence, next byte restricted to non-surrogates (80-9F)
    //  5 (F4): start of four byte sequence, next byte restricted to 0+10FFFF (80-8F)
    //  6 (F1-F3): start of four byte sequence, next byte unrestricted
    //  7 (A0-BF): continuation byte
    //  8 (C0-C1,F5-FF): invalid (overlong or out-of-range) start of multi byte sequences
    //  9 (90-9F): continuation byte
    // 10 (E0): start of three byte sequence, next byte restricted to non-overlong (A0-BF)
    // 11 (F0): start of four byte sequence, next byte restricted to non-overlong (90-BF)

     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,  9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,
     7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,  7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,
     8,8,2,2,2,2,2,2,2,2,2,2,2,2,2,2,  2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,
    10,3,3,3,3,3,3,3,3,3,3,3,3,4,3,3, 11,6,6,6,5,8,8,8,8,8,8,8,8,8,8,8,
];

static STATE_TRANSITIONS: [u8; 108] = [
     0,12,24,36,60,96,84,12,12,12,48,72, //  0: '??
    13,13,13,13,13,13,13,13,13,13,13,13, // 12: xx '.. / 13: .. xx '..
    13, 0,13,13,13,13,13, 0,13, 0,13,13, // 24: .. 'cc
    13,24,13,13,13,13,13,24,13,24,13,13, // 36: .. 'cc cc
    13,13,13,13,13,13,13,24,13,13,13,13, // 48: .. 'cc(A0-BF) cc
    13,24,13,13,13,13,13,13,13,24,13,13, // 60: .. 'cc(80-9F) cc
    13,13,13,13,13,13,13,36,13,36,13,13, // 72: .. 'cc(90-BF) cc cc
    13,36,13,13,13,13,13,36,13,36,13,13, // 84: .. 'cc cc cc
    13,36,13,13,13,13,13,13,13,13,13,13, // 96: .. 'cc(80-8F) cc cc
];

const INITIAL_STATE: u8 = 0;
const ACCEPT_STATE: u8 = 0;
const REJECT_STATE: u8 = 12;
const REJECT_STATE_WITH_BACKUP: u8 = REJECT_STATE | 1;

/// The result of feeding one byte to `Utf8Decoder`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A codepoint has been completed.
    Char(u32),
    /// More continuation bytes are expected.
    Pending,
    /// The sequence is malformed. The decoder has been reset.
    Invalid,
}

/// A streaming UTF-8 decoder consuming one byte at a time.
///
/// Overlong forms, surrogates and codepoints beyond U+10FFFF are all rejected.
#[derive(Clone, Debug)]
pub struct Utf8Decoder {
    state: u8,
    codepoint: u32,
}

impl Utf8Decoder {
    pub fn new() -> Utf8Decoder {
        Utf8Decoder { state: INITIAL_STATE, codepoint: 0 }
    }

    #[inline]
    pub fn feed(&mut self, b: u8) -> Step {
        self.codepoint = if self.state == ACCEPT_STATE {
            match b {
                0x00..=0x7f => b as u32,
                0xc0..=0xdf => (b & 0x1f) as u32,
                0xe0..=0xef => (b & 0x0f) as u32,
                _ => (b & 0x07) as u32,
            }
        } else {
            (self.codepoint << 6) | (b & 0x3f) as u32
        };
        self.state = STATE_TRANSITIONS[(self.state + CHAR_CATEGORY[b as usize]) as usize];
        match self.state {
            ACCEPT_STATE => Step::Char(self.codepoint),
            REJECT_STATE | REJECT_STATE_WITH_BACKUP => {
                self.state = INITIAL_STATE;
                Step::Invalid
            }
            _ => Step::Pending,
        }
    }
}

impl Default for Utf8Decoder {
    fn default() -> Utf8Decoder {
        Utf8Decoder::new()
    }
}

/// External iterator over the codepoints of a UTF-8 byte sequence
/// with the byte offset of each codepoint.
///
/// Yields an error for the first malformed or truncated sequence and stops afterwards.
pub struct CodepointIndices<'r> {
    input: &'r [u8],
    pos: usize,
    decoder: Utf8Decoder,
    failed: bool,
}

impl<'r> Iterator for CodepointIndices<'r> {
    type Item = Result<(usize, u32), EciError>;

    fn next(&mut self) -> Option<Result<(usize, u32), EciError>> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < self.input.len() {
            let b = self.input[self.pos];
            self.pos += 1;
            match self.decoder.feed(b) {
                Step::Char(ch) => return Some(Ok((start, ch))),
                Step::Pending => {}
                Step::Invalid => {
                    self.failed = true;
                    return Some(Err(EciError::InvalidSequence { offset: start }));
                }
            }
        }
        self.failed = true;
        Some(Err(EciError::IncompleteSequence))
    }
}

/// Iterates over each codepoint of given UTF-8 bytes with its byte offset.
pub fn codepoint_indices(input: &[u8]) -> CodepointIndices {
    CodepointIndices { input, pos: 0, decoder: Utf8Decoder::new(), failed: false }
}

/// Checks that the whole input is well-formed UTF-8.
pub fn validate_utf8(input: &[u8]) -> Result<(), EciError> {
    for r in codepoint_indices(input) {
        r?;
    }
    Ok(())
}

/// Returns true if the whole input is well-formed UTF-8.
pub fn is_valid_utf8(input: &[u8]) -> bool {
    validate_utf8(input).is_ok()
}

/// Counts the bytes equal to `b`.
#[inline]
pub fn byte_count(input: &[u8], b: u8) -> usize {
    input.iter().filter(|&&c| c == b).count()
}

/// Counts the ASCII bytes (00-7F), i.e. the one-byte UTF-8 sequences.
#[inline]
pub fn ascii_count(input: &[u8]) -> usize {
    input.iter().filter(|&&c| c < 0x80).count()
}

#[cfg(test)]
mod tests {
    // portions of these tests are adopted from Markus Kuhn's UTF-8 decoder capability and
    // stress test: <http://www.cl.cam.ac.uk/~mgk25/ucs/examples/UTF-8-test.txt>.

    use super::*;

    fn decode(input: &[u8]) -> Result<Vec<u32>, EciError> {
        codepoint_indices(input).map(|r| r.map(|(_, ch)| ch)).collect()
    }

    #[test]
    fn test_valid() {
        assert_eq!(decode(b"A"), Ok(vec![0x41]));
        assert_eq!(decode(b""), Ok(vec![]));
        assert_eq!(decode(&[0xc2, 0xa2]), Ok(vec![0xa2]));
        assert_eq!(decode(&[0xd5, 0xa1, 0xd5, 0xb5]), Ok(vec![0x561, 0x575]));
        assert_eq!(decode(&[0xed, 0x92, 0x89]), Ok(vec![0xd489]));
        assert_eq!(decode(&[0xe6, 0xbc, 0xa2, 0xe5, 0xad, 0x97]), Ok(vec![0x6f22, 0x5b57]));
        assert_eq!(decode(&[0xf0, 0x90, 0x82, 0x82]), Ok(vec![0x10082]));
    }

    #[test]
    fn test_valid_boundary() {
        assert_eq!(decode(&[0x00]), Ok(vec![0x00]));
        assert_eq!(decode(&[0x7f]), Ok(vec![0x7f]));
        assert_eq!(decode(&[0xc2, 0x80]), Ok(vec![0x80]));
        assert_eq!(decode(&[0xdf, 0xbf]), Ok(vec![0x7ff]));
        assert_eq!(decode(&[0xe0, 0xa0, 0x80]), Ok(vec![0x800]));
        assert_eq!(decode(&[0xed, 0x9f, 0xbf]), Ok(vec![0xd7ff]));
        assert_eq!(decode(&[0xee, 0x80, 0x80]), Ok(vec![0xe000]));
        assert_eq!(decode(&[0xef, 0xbf, 0xbf]), Ok(vec![0xffff]));
        assert_eq!(decode(&[0xf0, 0x90, 0x80, 0x80]), Ok(vec![0x10000]));
        assert_eq!(decode(&[0xf4, 0x8f, 0xbf, 0xbf]), Ok(vec![0x10ffff]));
    }

    #[test]
    fn test_offsets() {
        let v: Vec<_> = codepoint_indices("aé中𐂂".as_bytes()).collect();
        assert_eq!(v, vec![Ok((0, 0x61)), Ok((1, 0xe9)), Ok((3, 0x4e2d)), Ok((6, 0x10082))]);
    }

    #[test]
    fn test_invalid_continuation() {
        assert_eq!(decode(&[0x80]), Err(EciError::InvalidSequence { offset: 0 }));
        assert_eq!(decode(&[0x41, 0xbf]), Err(EciError::InvalidSequence { offset: 1 }));
        assert_eq!(decode(&[0x41, 0xc2, 0x41]), Err(EciError::InvalidSequence { offset: 1 }));
    }

    #[test]
    fn test_invalid_overlong_and_out_of_range() {
        assert!(decode(&[0xc0, 0x80]).is_err());
        assert!(decode(&[0xc1, 0xbf]).is_err());
        assert!(decode(&[0xe0, 0x9f, 0xbf]).is_err());
        assert!(decode(&[0xf0, 0x8f, 0xbf, 0xbf]).is_err());
        assert!(decode(&[0xf4, 0x90, 0x80, 0x80]).is_err());
        assert!(decode(&[0xf5, 0x80, 0x80, 0x80]).is_err());
        assert!(decode(&[0xff]).is_err());
    }

    #[test]
    fn test_invalid_surrogates() {
        assert!(decode(&[0xed, 0xa0, 0x80]).is_err());
        assert!(decode(&[0xed, 0xbf, 0xbf]).is_err());
    }

    #[test]
    fn test_incomplete() {
        assert_eq!(decode(&[0xf0, 0x90, 0x82]), Err(EciError::IncompleteSequence));
        assert_eq!(decode(&[0x41, 0xe6]), Err(EciError::IncompleteSequence));
    }

    #[test]
    fn test_decoder_resets_after_error() {
        let mut d = Utf8Decoder::new();
        assert_eq!(d.feed(0xe6), Step::Pending);
        assert_eq!(d.feed(0x41), Step::Invalid);
        assert_eq!(d.feed(0x41), Step::Char(0x41));
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut it = codepoint_indices(&[0xff, 0x41]);
        assert!(it.next().unwrap().is_err());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_counts() {
        assert_eq!(byte_count(b"a\\b\\", b'\\'), 2);
        assert_eq!(ascii_count("aé中".as_bytes()), 1);
        assert!(is_valid_utf8("Hello, 世界!".as_bytes()));
        assert!(!is_valid_utf8(&[0x48, 0x80]));
    }
}
