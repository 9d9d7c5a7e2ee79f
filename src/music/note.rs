// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note names and the Note value object.
//!
//! Note names keep sharp and flat spellings distinct for display while
//! mapping both to a single chromatic index for pitch math.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default note duration (a quarter note).
pub const DEFAULT_DURATION: f64 = 0.25;

/// Default note volume.
pub const DEFAULT_VOLUME: u8 = 100;

/// Lowest allowed octave.
pub const MIN_OCTAVE: i8 = 1;

/// Highest allowed octave.
pub const MAX_OCTAVE: i8 = 8;

/// Spelled pitch classes plus the rest marker.
///
/// Enharmonic pairs (`Cs`/`Db`, ...) share a chromatic index but print
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    Cs, // C#
    Db,
    D,
    Ds, // D#
    Eb,
    E,
    F,
    Fs, // F#
    Gb,
    G,
    Gs, // G#
    Ab,
    A,
    As, // A#
    Bb,
    B,
    /// Silence; advances time but produces no sound.
    Rest,
}

impl NoteName {
    /// All sounding spellings in chromatic-then-flat order.
    pub const ALL: [NoteName; 17] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::Db,
        NoteName::D,
        NoteName::Ds,
        NoteName::Eb,
        NoteName::E,
        NoteName::F,
        NoteName::Fs,
        NoteName::Gb,
        NoteName::G,
        NoteName::Gs,
        NoteName::Ab,
        NoteName::A,
        NoteName::As,
        NoteName::Bb,
        NoteName::B,
    ];

    /// Chromatic index 0-11 with C = 0, or `None` for a rest.
    /// Both spellings of a pitch class map to the same index.
    pub fn pitch_class(self) -> Option<u8> {
        match self {
            NoteName::C => Some(0),
            NoteName::Cs | NoteName::Db => Some(1),
            NoteName::D => Some(2),
            NoteName::Ds | NoteName::Eb => Some(3),
            NoteName::E => Some(4),
            NoteName::F => Some(5),
            NoteName::Fs | NoteName::Gb => Some(6),
            NoteName::G => Some(7),
            NoteName::Gs | NoteName::Ab => Some(8),
            NoteName::A => Some(9),
            NoteName::As | NoteName::Bb => Some(10),
            NoteName::B => Some(11),
            NoteName::Rest => None,
        }
    }

    /// Whether this name is the rest marker.
    pub fn is_rest(self) -> bool {
        self == NoteName::Rest
    }

    /// The sharp spelling of the same pitch class (identity for naturals
    /// and sharps). Scales are always spelled this way.
    pub fn sharp_spelling(self) -> NoteName {
        match self {
            NoteName::Db => NoteName::Cs,
            NoteName::Eb => NoteName::Ds,
            NoteName::Gb => NoteName::Fs,
            NoteName::Ab => NoteName::Gs,
            NoteName::Bb => NoteName::As,
            other => other,
        }
    }
}

impl FromStr for NoteName {
    type Err = Error;

    /// Parse a spelled note name (e.g. "C", "C#", "Db") or "R" for a rest.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "C" => Ok(NoteName::C),
            "C#" => Ok(NoteName::Cs),
            "Db" => Ok(NoteName::Db),
            "D" => Ok(NoteName::D),
            "D#" => Ok(NoteName::Ds),
            "Eb" => Ok(NoteName::Eb),
            "E" => Ok(NoteName::E),
            "F" => Ok(NoteName::F),
            "F#" => Ok(NoteName::Fs),
            "Gb" => Ok(NoteName::Gb),
            "G" => Ok(NoteName::G),
            "G#" => Ok(NoteName::Gs),
            "Ab" => Ok(NoteName::Ab),
            "A" => Ok(NoteName::A),
            "A#" => Ok(NoteName::As),
            "Bb" => Ok(NoteName::Bb),
            "B" => Ok(NoteName::B),
            "R" => Ok(NoteName::Rest),
            other => Err(Error::UnknownNoteName(other.to_string())),
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::Db => "Db",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::Eb => "Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::Gb => "Gb",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::Ab => "Ab",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::Bb => "Bb",
            NoteName::B => "B",
            NoteName::Rest => "R",
        };
        write!(f, "{}", s)
    }
}

/// A pitched, timed, voiced event.
///
/// Equality and hashing cover (name, octave, volume); duration is
/// deliberately excluded so degree-equality comparisons and chord
/// deduplication ignore rhythmic differences.
#[derive(Debug, Clone)]
pub struct Note {
    name: NoteName,
    octave: u8,
    duration: f64,
    volume: u8,
}

impl Note {
    /// Create a note, validating the octave range eagerly.
    pub fn new(name: NoteName, octave: i8, duration: f64, volume: u8) -> Result<Self> {
        if octave < MIN_OCTAVE || octave > MAX_OCTAVE {
            return Err(Error::OctaveOutOfRange(octave as i32));
        }
        Ok(Self {
            name,
            octave: octave as u8,
            duration,
            volume,
        })
    }

    /// Create a note with default duration and volume.
    pub fn with_octave(name: NoteName, octave: i8) -> Result<Self> {
        Self::new(name, octave, DEFAULT_DURATION, DEFAULT_VOLUME)
    }

    /// Create a rest of the given duration.
    pub fn rest(duration: f64) -> Self {
        Self {
            name: NoteName::Rest,
            octave: 4,
            duration,
            volume: 0,
        }
    }

    /// Get the note name.
    pub fn name(&self) -> NoteName {
        self.name
    }

    /// Get the octave.
    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// Get the duration (quarter note = 0.25).
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Get the volume.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Whether this note is a rest.
    pub fn is_rest(&self) -> bool {
        self.name.is_rest()
    }

    /// Set the note name.
    pub fn set_name(&mut self, name: NoteName) {
        self.name = name;
    }

    /// Set the octave. Construction is the validation boundary; setters
    /// trust the caller.
    pub fn set_octave(&mut self, octave: u8) {
        self.octave = octave;
    }

    /// Set the duration.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Set the volume.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
    }

    /// MIDI note number: chromatic index + (octave + 1) * 12.
    /// `None` for rests.
    pub fn midi_number(&self) -> Option<u8> {
        self.name
            .pitch_class()
            .map(|pc| pc + (self.octave + 1) * 12)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.octave == other.octave && self.volume == other.volume
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.name, self.octave, self.volume).hash(state);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rest() {
            write!(f, "R")
        } else {
            write!(f, "{}{}", self.name, self.octave)
        }
    }
}
