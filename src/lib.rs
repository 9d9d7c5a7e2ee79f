// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! cadence - algorithmic composition from roman numeral chords.
//!
//! Derives major and minor scales for every key from a circle-of-fifths
//! model, resolves roman numeral chord symbols (`I`, `V7`, `Isus2**`, ...)
//! into octave-placed notes, and sequences the result into tracks that a
//! MIDI-writing backend serializes to disk.
//!
//! Creating a MIDI file can be as simple as this:
//!
//! ```
//! use cadence::music::{resolve, Mode, NoteName};
//! use cadence::sequencer::{Composition, Track};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut track = Track::new("acoustic grand piano");
//! for symbol in ["I", "IV", "V7", "I"] {
//!     let chord = resolve(symbol, NoteName::C, Mode::Major, 4, 0.25, 100)?;
//!     track.push(chord);
//! }
//!
//! let mut composition = Composition::new();
//! composition.add_track(track);
//!
//! let mut bytes = Vec::new();
//! composition.write_midi(&mut bytes)?;
//! assert_eq!(&bytes[0..4], b"MThd");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod midi;
pub mod music;
pub mod sequencer;

pub use error::{Error, Result};
pub use music::{resolve, Chord, Mode, Note, NoteName, Numeral, RomanChordSpec, Scale};
pub use sequencer::{Composition, Track, TrackEntry};
