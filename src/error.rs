// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for cadence.
//!
//! Fatal conditions only; recoverable situations (full channel table,
//! inexact instrument names) are reported at warn level and skipped.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised by note construction, scale lookup, and chord
/// resolution. All are detected before any visible state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The string is not one of the admissible note spellings.
    #[error(
        "{0:?} is not a valid note name, use C, C#, Db, D, D#, Eb, E, F, F#, \
         Gb, G, G#, Ab, A, A#, Bb, B or R (rest)"
    )]
    UnknownNoteName(String),

    /// Octave outside the playable range. The enforced upper bound is 8;
    /// the wording below matches the historical message.
    #[error("octave {0} is out of range, select an octave between 1 and 7")]
    OctaveOutOfRange(i32),

    /// The leading letters of a chord symbol are not I..VII.
    #[error("{0:?} is not a valid roman numeral, use I, II, III, IV, V, VI or VII")]
    InvalidNumeral(String),

    /// The chord symbol suffix is neither an extension, an inversion
    /// marker, nor a known modifier word.
    #[error("{0:?} is not a recognized chord modifier")]
    UnknownModifier(String),

    /// Numeric extensions must land between 1 and 14, like V1 or V14.
    #[error("chord extension interval {0} is out of range, select one between 1 and 14")]
    ExtensionOutOfRange(i64),

    /// Inversion counts are zero or positive.
    #[error("negative inversions are not possible (got {0})")]
    NegativeInversion(i64),

    /// Scale lookup on something that is not a key (e.g. a rest).
    #[error("{0:?} is not a known key")]
    UnknownKey(String),
}
