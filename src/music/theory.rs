// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale derivation from the circle of fifths.
//!
//! Major scales are spelled by walking the chromatic cycle and applying
//! each key's sharp set; minor scales are rotations of the relative major
//! with a raised leading tone. Flat-named keys alias their sharp spelling
//! rather than being derived independently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::music::note::NoteName;

/// The chromatic cycle in the walk order used for spelling, rooted at A.
/// Scales built here only ever contain these sharp spellings.
pub const CHROMATIC: [NoteName; 12] = [
    NoteName::A,
    NoteName::As,
    NoteName::B,
    NoteName::C,
    NoteName::Cs,
    NoteName::D,
    NoteName::Ds,
    NoteName::E,
    NoteName::F,
    NoteName::Fs,
    NoteName::G,
    NoteName::Gs,
];

/// Circle of fifths for major keys: which natural positions carry a sharp.
const MAJOR_KEY_SHARPS: [(NoteName, &[NoteName]); 12] = [
    (NoteName::C, &[]),
    (NoteName::G, &[NoteName::F]),
    (NoteName::D, &[NoteName::F, NoteName::C]),
    (NoteName::A, &[NoteName::F, NoteName::C, NoteName::G]),
    (
        NoteName::E,
        &[NoteName::F, NoteName::C, NoteName::G, NoteName::D],
    ),
    (
        NoteName::B,
        &[NoteName::F, NoteName::C, NoteName::G, NoteName::D, NoteName::A],
    ),
    (
        NoteName::Fs,
        &[
            NoteName::F,
            NoteName::C,
            NoteName::G,
            NoteName::D,
            NoteName::A,
            NoteName::E,
        ],
    ),
    (
        NoteName::Cs,
        &[
            NoteName::F,
            NoteName::C,
            NoteName::G,
            NoteName::D,
            NoteName::A,
            NoteName::E,
            NoteName::B,
        ],
    ),
    (
        NoteName::Gs,
        &[NoteName::B, NoteName::E, NoteName::A, NoteName::D],
    ),
    (NoteName::Ds, &[NoteName::B, NoteName::E, NoteName::A]),
    (NoteName::As, &[NoteName::B, NoteName::E]),
    (NoteName::F, &[NoteName::B]),
];

/// Keys historically spelled with flats: at a sharped position they emit
/// the note two chromatic steps back, producing the flat-equivalent
/// letter name.
const FLAT_SPELLED_KEYS: [NoteName; 4] = [NoteName::Gs, NoteName::Ds, NoteName::As, NoteName::F];

/// Relative-major lookup for minor tonics (minor, major).
const RELATIVE_MAJOR: [(NoteName, NoteName); 12] = [
    (NoteName::A, NoteName::C),
    (NoteName::E, NoteName::G),
    (NoteName::B, NoteName::D),
    (NoteName::Fs, NoteName::A),
    (NoteName::Cs, NoteName::E),
    (NoteName::Gs, NoteName::B),
    (NoteName::Ds, NoteName::Fs),
    (NoteName::As, NoteName::Cs),
    (NoteName::F, NoteName::Gs),
    (NoteName::C, NoteName::Ds),
    (NoteName::G, NoteName::As),
    (NoteName::D, NoteName::F),
];

/// Scale flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    Minor,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(Mode::Major),
            "minor" => Ok(Mode::Minor),
            other => Err(Error::UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

/// A seven-degree diatonic scale rotated so index 0 is the tonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    tonic: NoteName,
    mode: Mode,
    notes: Vec<NoteName>,
}

impl Scale {
    /// Build the scale for a tonic and mode.
    pub fn new(tonic: NoteName, mode: Mode) -> Result<Self> {
        match mode {
            Mode::Major => major_scale(tonic),
            Mode::Minor => minor_scale(tonic),
        }
    }

    /// Get the tonic as requested (flat spellings preserved).
    pub fn tonic(&self) -> NoteName {
        self.tonic
    }

    /// Get the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the scale notes, tonic first.
    pub fn notes(&self) -> &[NoteName] {
        &self.notes
    }

    /// Get the note at a 1-based scale degree.
    pub fn degree(&self, degree: usize) -> Option<NoteName> {
        if degree == 0 || degree > self.notes.len() {
            return None;
        }
        Some(self.notes[degree - 1])
    }

    /// Position (0-based) of a note within the scale, if present.
    pub fn position(&self, name: NoteName) -> Option<usize> {
        self.notes.iter().position(|&n| n == name)
    }

    /// Check if a note name is in this scale.
    pub fn contains(&self, name: NoteName) -> bool {
        self.position(name).is_some()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode)
    }
}

/// Position of a (sharp-aliased) note in the chromatic walk cycle.
fn chromatic_position(name: NoteName) -> Option<usize> {
    // A is pitch class 9, so the A-rooted cycle offsets by 3.
    name.pitch_class().map(|pc| ((pc + 3) % 12) as usize)
}

fn sharp_table(key: NoteName) -> Result<&'static [NoteName]> {
    MAJOR_KEY_SHARPS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, sharps)| *sharps)
        .ok_or_else(|| Error::UnknownKey(key.to_string()))
}

/// Derive the major scale for a tonic.
///
/// Flat-named tonics (Db, Eb, Gb, Ab, Bb) reuse their sharp-keyed scale
/// spelled identically.
pub fn major_scale(tonic: NoteName) -> Result<Scale> {
    if tonic.is_rest() {
        return Err(Error::UnknownKey(tonic.to_string()));
    }
    let key = tonic.sharp_spelling();
    let sharps = sharp_table(key)?;
    let sharp_positions: Vec<usize> = sharps
        .iter()
        .filter_map(|&n| chromatic_position(n))
        .collect();
    let flat_spelled = FLAT_SPELLED_KEYS.contains(&key);

    let mut notes = Vec::with_capacity(7);
    let mut i = 0;
    while i < CHROMATIC.len() {
        if sharp_positions.contains(&i) {
            i += 1;
            if flat_spelled {
                notes.push(CHROMATIC[(i + 10) % 12]);
            } else {
                notes.push(CHROMATIC[i]);
            }
            // B-C and E-F are already a semitone apart, no extra skip
            // after emitting C or F.
            if !matches!(CHROMATIC[i], NoteName::C | NoteName::F) {
                i += 1;
            }
        } else if matches!(CHROMATIC[i], NoteName::B | NoteName::E) {
            notes.push(CHROMATIC[i]);
            i += 1;
        } else {
            notes.push(CHROMATIC[i]);
            i += 2;
        }
    }

    let root = notes
        .iter()
        .position(|&n| n == key)
        .ok_or_else(|| Error::UnknownKey(key.to_string()))?;
    notes.rotate_left(root);

    Ok(Scale {
        tonic,
        mode: Mode::Major,
        notes,
    })
}

/// Derive the minor scale for a tonic: the relative major rotated to the
/// minor root, with the 7th degree raised one chromatic semitone.
///
/// This is deliberately a leading-tone-adjusted (harmonic-flavored)
/// minor, not the natural minor.
pub fn minor_scale(tonic: NoteName) -> Result<Scale> {
    if tonic.is_rest() {
        return Err(Error::UnknownKey(tonic.to_string()));
    }
    let key = tonic.sharp_spelling();
    let relative = RELATIVE_MAJOR
        .iter()
        .find(|(minor, _)| *minor == key)
        .map(|(_, major)| *major)
        .ok_or_else(|| Error::UnknownKey(key.to_string()))?;

    let mut notes = major_scale(relative)?.notes;
    // The minor root sits on the 6th degree of its relative major.
    notes.rotate_left(5);

    let seventh = chromatic_position(notes[6])
        .ok_or_else(|| Error::UnknownKey(key.to_string()))?;
    notes[6] = CHROMATIC[(seventh + 1) % 12];

    Ok(Scale {
        tonic,
        mode: Mode::Minor,
        notes,
    })
}
