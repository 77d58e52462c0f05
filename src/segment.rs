// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Multi-segment messages and their ECI negotiation.
 *
 * A barcode message may consist of several segments, each in its own ECI.
 * Segments with ECI 0 are "unset" and get an ECI assigned by `negotiate`,
 * but only where the reader could not infer it otherwise:
 * a segment in the symbology's default ECI stays unset,
 * unless it follows a segment explicitly in another ECI and has to switch back.
 */

use log::debug;

use crate::select::try_best_eci;
use crate::transcode::{eci_length, transcode};
use crate::types::{self, is_eci_convertible, EciError};

/// A segment of a barcode message: UTF-8 input and its ECI (0 if unset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub source: &'a [u8],
    pub eci: u32,
}

impl<'a> Segment<'a> {
    /// Creates a segment with the unset ECI.
    pub fn new(source: &'a [u8]) -> Segment<'a> {
        Segment { source, eci: types::ECI_DEFAULT }
    }

    pub fn with_eci(source: &'a [u8], eci: u32) -> Segment<'a> {
        Segment { source, eci }
    }

    /// Returns true if the segment's ECI can be produced from Unicode.
    pub fn is_convertible(&self) -> bool {
        is_eci_convertible(self.eci)
    }

    /// Returns the upper bound of the transcoded length.
    pub fn length(&self) -> usize {
        eci_length(self.eci, self.source)
    }

    /// Returns the ECI the segment is read in: its own, or `default_eci` if unset.
    pub fn effective_eci(&self, default_eci: u32) -> u32 {
        if self.eci == types::ECI_DEFAULT { default_eci } else { self.eci }
    }

    /// Transcodes the segment to the ECI it is read in.
    pub fn transcode(&self, default_eci: u32) -> Result<Vec<u8>, EciError> {
        transcode(self.effective_eci(default_eci), self.source)
    }
}

/// Symbologies which can carry ECIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbology {
    Aztec,
    CodeOne,
    DataMatrix,
    DotCode,
    GridMatrix,
    HanXin,
    MaxiCode,
    MicroPdf417,
    Pdf417,
    QrCode,
    UltraCode,
    UpnQr,
}

impl Symbology {
    /// Returns the ECI a reader assumes when a segment carries none.
    pub fn default_eci(self) -> u32 {
        match self {
            Symbology::GridMatrix => types::ECI_GB2312,
            Symbology::UpnQr => types::ECI_ISO_8859_2,
            _ => types::ECI_ISO_8859_1,
        }
    }
}

/// The outcome of `negotiate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Negotiation {
    /// The ECI of the first segment carrying one, if any.
    pub first_eci: Option<u32>,
    /// The ECI of the first segment, if it is explicitly set to other than the default.
    /// The message header should announce it.
    pub message_eci: Option<u32>,
}

/// Decides the stored ECI of an unset segment, given the stored ECI of the previous segment
/// (0 for the first segment or an unset one) and the detected ECI of the segment itself.
///
/// Returns 0 if the segment can stay unset.
pub fn resolve_segment(prev_eci: u32, detected_eci: u32, default_eci: u32) -> u32 {
    if detected_eci != default_eci {
        detected_eci
    } else if prev_eci != types::ECI_DEFAULT && prev_eci != default_eci {
        // switch back from the previous explicit ECI
        detected_eci
    } else {
        types::ECI_DEFAULT
    }
}

/**
 * Assigns ECIs to the unset segments, left to right.
 *
 * Segments which already have an ECI are kept as they are.
 * If any unset segment is malformed, the error is returned and no segment is modified.
 * Running this again over its own result changes nothing and returns the same `Negotiation`.
 */
pub fn negotiate(segments: &mut [Segment], default_eci: u32) -> Result<Negotiation, EciError> {
    let (_, resolved) = segments.iter().enumerate().try_fold(
        (types::ECI_DEFAULT, Vec::with_capacity(segments.len())),
        |(prev_eci, mut resolved), (i, segment)| -> Result<(u32, Vec<u32>), EciError> {
            let eci = if segment.eci != types::ECI_DEFAULT {
                segment.eci
            } else {
                let detected = try_best_eci(segment.source)?;
                let eci = resolve_segment(prev_eci, detected, default_eci);
                debug!("segment {}: detected ECI {}, stored ECI {}", i, detected, eci);
                eci
            };
            resolved.push(eci);
            Ok((eci, resolved))
        })?;

    for (segment, &eci) in segments.iter_mut().zip(resolved.iter()) {
        segment.eci = eci;
    }

    let first_eci = resolved.iter().cloned().find(|&eci| eci != types::ECI_DEFAULT);
    let message_eci = resolved.first().cloned()
        .filter(|&eci| eci != types::ECI_DEFAULT && eci != default_eci);
    Ok(Negotiation { first_eci, message_eci })
}

/// Returns whether each segment's ECI is convertible, and whether any of them is.
pub fn convertible_segments(segments: &[Segment]) -> (Vec<bool>, bool) {
    let flags: Vec<bool> = segments.iter().map(|segment| segment.is_convertible()).collect();
    let any = flags.iter().any(|&flag| flag);
    (flags, any)
}

/// Returns the sum of the transcoded length bounds of all segments.
pub fn segments_length(segments: &[Segment]) -> usize {
    segments.iter().map(|segment| segment.length()).sum()
}
