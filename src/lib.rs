// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!

# ECI

Extended Channel Interpretation (ECI) transcoding for barcode payloads.
Barcode symbologies carry text in legacy character sets, each identified by an ECI number;
this crate converts UTF-8 text to them and picks the most compact one when none is given.
Mapping tables come from the [WHATWG Encoding Standard](http://encoding.spec.whatwg.org/)
indices, restricted to what each character set actually contains.

## Simple Usage

To transcode a string:

~~~~ {.rust}
use eci::transcode::transcode;

assert_eq!(transcode(3, "caf\u{e9}".as_bytes()), Ok(vec![99, 97, 102, 233]));
assert_eq!(transcode(20, "\u{65e5}\u{672c}".as_bytes()), Ok(vec![0x93, 0xfa, 0x96, 0x7b]));
~~~~

Unrepresentable characters and malformed input are errors:

~~~~ {.rust}
use eci::transcode::transcode;
use eci::types::EciError;

assert_eq!(transcode(27, "caf\u{e9}".as_bytes()),
           Err(EciError::Unrepresentable { eci: 27, codepoint: 0xe9, offset: 3 }));
assert_eq!(transcode(3, b"caf\xe9"), Err(EciError::IncompleteSequence));
~~~~

To transcode into a preallocated buffer, which is also terminated with a zero byte:

~~~~ {.rust}
use eci::transcode::{eci_length, transcode_into};

let source = "a\\b".as_bytes();
let mut dest = vec![0; eci_length(20, source) + 1];
let length = transcode_into(20, source, &mut dest).unwrap();
assert_eq!(&dest[..length + 1], &[0x61, 0x81, 0x5f, 0x62, 0x00]);
~~~~

To find the ECI for a string:

~~~~ {.rust}
use eci::select::best_eci;

assert_eq!(best_eci(b"HELLO"), Some(3));
assert_eq!(best_eci("\u{20ac}10".as_bytes()), Some(9)); // ISO/IEC 8859-7
assert_eq!(best_eci("\u{4e2d}\u{6587}".as_bytes()), Some(26)); // UTF-8
assert_eq!(best_eci(b"\xff"), None);
~~~~

## Segments

A message may be split into segments with their own ECIs.
`segment::negotiate` fills in the unset ones,
leaving a segment unset where the reader would assume the right ECI anyway:

~~~~ {.rust}
use eci::segment::{negotiate, Segment, Symbology};

let mut segments = [Segment::new("\u{416}".as_bytes()), Segment::new(b"ABC"), Segment::new(b"DEF")];
let result = negotiate(&mut segments, Symbology::QrCode.default_eci()).unwrap();
assert_eq!(segments.iter().map(|s| s.eci).collect::<Vec<_>>(), vec![7, 3, 0]);
assert_eq!(result.first_eci, Some(7));
~~~~

## Supported ECIs

ECI | Character set
----|--------------
0, 3 | ISO/IEC 8859-1 (C1 controls excluded)
4-13, 15-18 | ISO/IEC 8859-2 to 8859-16
20 | Shift_JIS (JIS X 0208)
21, 22, 23, 24 | Windows-1250, 1251, 1252, 1256
25, 33 | UTF-16BE, UTF-16LE
27 | ASCII
28 | Big5
29 | GB 2312
30 | EUC-KR (KS X 1001)
31 | GBK
32 | GB 18030
34, 35 | UTF-32BE, UTF-32LE
170 | ISO/IEC 646 invariant subset

ECI 26 is UTF-8 itself and is not transcoded.

## Features

`no-optimized-legacy-encoding` makes the index crates use smaller tables
at the expense of slower lookups.
*/

#![doc(html_root_url = "https://docs.rs/eci/0.1.0")]

pub use eci_types as types;

pub use crate::all::Charset;
pub use crate::select::{best_eci, try_best_eci};
pub use crate::segment::{negotiate, Negotiation, Segment, Symbology};
pub use crate::transcode::{eci_length, transcode, transcode_into, transcode_to};
pub use crate::types::{eci_class, is_eci_convertible, EciClass, EciError, ErrorKind};

#[cfg(test)]
#[macro_use]
mod testutils;

pub mod util;

/// Codec implementations.
pub mod codec {
    pub mod ascii;
    pub mod singlebyte;
    pub mod utf_16;
    pub mod utf_32;
    pub mod korean;
    pub mod japanese;
    pub mod simpchinese;
    pub mod tradchinese;
}

pub mod all;
pub mod label;
pub mod transcode;
pub mod select;
pub mod segment;
