// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Sequencing layer: tracks, compositions, and instrument lookup.
//!
//! Tracks hold notes and chords in playback order; a composition maps
//! tracks onto the 16 MIDI channels and exports them as timed events.

pub mod composition;
pub mod instruments;
pub mod track;

pub use composition::{Composition, MAX_TRACKS};
pub use instruments::{resolve_program, GENERAL_MIDI};
pub use track::{Track, TrackEntry, DEFAULT_TEMPO};
