// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Choosing the most compact ECI for given text.

use log::{debug, trace};

use crate::transcode::{eci_length, transcode_to};
use crate::types::{self, EciError};
use crate::util::validate_utf8;

/// Single-byte ECIs in the order they are tried.
/// ECIs 14 and 19 are reserved, and Shift_JIS (20) is not single-byte.
pub const SINGLE_BYTE_CANDIDATES: [u32; 19] = [
    3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 17, 18, 21, 22, 23, 24,
];

/**
 * Returns the lowest single-byte ECI which can represent the whole `source` (UTF-8),
 * or ECI 26 (UTF-8 itself) if there is none.
 *
 * The fixed trial order is the tie-break: the ISO/IEC 8859 parts come first
 * and Latin-1 (3) wins whenever it fits. Malformed input is an error.
 */
pub fn try_best_eci(source: &[u8]) -> Result<u32, EciError> {
    let mut scratch = Vec::with_capacity(eci_length(types::ECI_ISO_8859_1, source));
    for &eci in SINGLE_BYTE_CANDIDATES.iter() {
        scratch.clear();
        match transcode_to(eci, source, &mut scratch) {
            Ok(()) => {
                debug!("selected ECI {} for {} bytes of input", eci, source.len());
                return Ok(eci);
            }
            Err(err @ EciError::Unrepresentable { .. }) => {
                trace!("ECI {} rejected: {}", eci, err);
            }
            // every other candidate would reject malformed input again
            Err(err) => return Err(err),
        }
    }
    validate_utf8(source)?;
    debug!("no single-byte ECI for {} bytes of input, selected UTF-8", source.len());
    Ok(types::ECI_UTF_8)
}

/// Same as `try_best_eci` but returns `None` for malformed input.
pub fn best_eci(source: &[u8]) -> Option<u32> {
    try_best_eci(source).ok()
}
