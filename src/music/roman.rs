// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Roman-numeral chord symbols and their resolution to concrete notes.
//!
//! A symbol is a numeral (I..VII) plus an optional suffix:
//!
//! * `I6`, `I7` .. `I14`: add an extension interval to the triad
//! * `Isus2`, `Isus4`: suspended chords
//! * `I-`, `I+`: diminished and augmented
//! * `Imaj7`, `Imin7` (`Im7`), `Idom7`: seventh chords
//! * `I*`, `I**`: inversions, combinable with the rest (e.g. `Isus2**`)
//!
//! A `RomanChordSpec` is a plain value; `resolve` derives the notes from
//! scratch each call, so changing the key or mode never leaves a stale
//! note list behind.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::music::chord::Chord;
use crate::music::note::{Note, NoteName, DEFAULT_DURATION, DEFAULT_VOLUME};
use crate::music::theory::{Mode, Scale, CHROMATIC};

/// Scale-degree numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeral {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

impl Numeral {
    /// All numerals in degree order.
    pub const ALL: [Numeral; 7] = [
        Numeral::I,
        Numeral::II,
        Numeral::III,
        Numeral::IV,
        Numeral::V,
        Numeral::VI,
        Numeral::VII,
    ];

    /// Zero-based scale-degree index (I = 0).
    pub fn index(self) -> usize {
        match self {
            Numeral::I => 0,
            Numeral::II => 1,
            Numeral::III => 2,
            Numeral::IV => 3,
            Numeral::V => 4,
            Numeral::VI => 5,
            Numeral::VII => 6,
        }
    }
}

impl FromStr for Numeral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "I" => Ok(Numeral::I),
            "II" => Ok(Numeral::II),
            "III" => Ok(Numeral::III),
            "IV" => Ok(Numeral::IV),
            "V" => Ok(Numeral::V),
            "VI" => Ok(Numeral::VI),
            "VII" => Ok(Numeral::VII),
            other => Err(Error::InvalidNumeral(other.to_string())),
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Numeral::I => "I",
            Numeral::II => "II",
            Numeral::III => "III",
            Numeral::IV => "IV",
            Numeral::V => "V",
            Numeral::VI => "VI",
            Numeral::VII => "VII",
        };
        write!(f, "{}", s)
    }
}

/// A scale-degree interval with an optional chromatic adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    /// 1-based degree distance from the chord root (1 = root).
    degree: i64,
    /// Semitone shift: -1, 0 or +1.
    shift: i8,
}

impl Interval {
    const fn plain(degree: i64) -> Self {
        Self { degree, shift: 0 }
    }

    const fn flat(degree: i64) -> Self {
        Self { degree, shift: -1 }
    }

    const fn sharp(degree: i64) -> Self {
        Self { degree, shift: 1 }
    }
}

/// The default triad: root, third, fifth.
const TRIAD: [Interval; 3] = [Interval::plain(1), Interval::plain(3), Interval::plain(5)];

/// A parsed chord symbol plus the context needed to place its notes.
///
/// The note list is derived, never stored: call [`RomanChordSpec::resolve`]
/// after any field change.
#[derive(Debug, Clone, PartialEq)]
pub struct RomanChordSpec {
    numeral: Numeral,
    modifier: String,
    key: NoteName,
    mode: Mode,
    octave: i8,
    duration: f64,
    volume: u8,
}

impl RomanChordSpec {
    /// Parse a chord symbol like `V7` or `Isus2**`.
    ///
    /// Defaults: key C major, root octave 4, quarter-note duration,
    /// volume 100. The suffix is validated on [`resolve`](Self::resolve).
    pub fn parse(symbol: &str) -> Result<Self> {
        let split = symbol
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(symbol.len());
        let (roman, modifier) = symbol.split_at(split);
        let numeral = roman.parse()?;
        Ok(Self {
            numeral,
            modifier: modifier.to_string(),
            key: NoteName::C,
            mode: Mode::Major,
            octave: 4,
            duration: DEFAULT_DURATION,
            volume: DEFAULT_VOLUME,
        })
    }

    /// Set the key.
    pub fn with_key(mut self, key: NoteName) -> Self {
        self.key = key;
        self
    }

    /// Set the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the root note's octave.
    pub fn with_octave(mut self, octave: i8) -> Self {
        self.octave = octave;
        self
    }

    /// Set the duration of every resolved note.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Set the volume of every resolved note.
    pub fn with_volume(mut self, volume: u8) -> Self {
        self.volume = volume;
        self
    }

    /// Get the numeral.
    pub fn numeral(&self) -> Numeral {
        self.numeral
    }

    /// Get the raw modifier suffix.
    pub fn modifier(&self) -> &str {
        &self.modifier
    }

    /// Get the key.
    pub fn key(&self) -> NoteName {
        self.key
    }

    /// Get the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the root octave.
    pub fn octave(&self) -> i8 {
        self.octave
    }

    /// Change key and mode. This is a plain value update; the owner calls
    /// [`resolve`](Self::resolve) to obtain the recomputed chord.
    pub fn set_key(&mut self, key: NoteName, mode: Mode) {
        self.key = key;
        self.mode = mode;
    }

    /// Resolve the symbol to concrete, octave-placed notes.
    ///
    /// Recomputation is total and atomic: the chord is built from scratch
    /// and any error surfaces before a note list exists.
    pub fn resolve(&self) -> Result<Chord> {
        let scale = Scale::new(self.key, self.mode)?;
        let (intervals, inversions) = parse_modifier(&self.modifier)?;

        let start = self.numeral.index();
        let mut chord = Chord::default();
        for interval in intervals {
            let (name, octave) = interval_note(&scale, start, interval, self.octave)?;
            chord.push(Note::new(name, octave, self.duration, self.volume)?);
        }
        chord.invert(inversions)?;
        Ok(chord)
    }
}

impl fmt::Display for RomanChordSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.numeral, self.modifier)
    }
}

/// Resolve a chord symbol in one call.
pub fn resolve(
    symbol: &str,
    key: NoteName,
    mode: Mode,
    octave: i8,
    duration: f64,
    volume: u8,
) -> Result<Chord> {
    RomanChordSpec::parse(symbol)?
        .with_key(key)
        .with_mode(mode)
        .with_octave(octave)
        .with_duration(duration)
        .with_volume(volume)
        .resolve()
}

/// Interpret a modifier suffix: inversion stars first, then a numeric
/// extension, then the fixed modifier vocabulary.
fn parse_modifier(modifier: &str) -> Result<(Vec<Interval>, i64)> {
    let inversions = modifier.matches('*').count() as i64;
    let rest = modifier.replace('*', "");

    if rest.is_empty() {
        return Ok((TRIAD.to_vec(), inversions));
    }

    if let Ok(extension) = rest.parse::<i64>() {
        if !(1..=14).contains(&extension) {
            return Err(Error::ExtensionOutOfRange(extension));
        }
        let mut intervals = TRIAD.to_vec();
        intervals.push(Interval::plain(extension));
        return Ok((intervals, inversions));
    }

    let intervals = match rest.as_str() {
        "sus2" => vec![
            Interval::plain(1),
            Interval::plain(2),
            Interval::plain(5),
        ],
        "sus4" => vec![
            Interval::plain(1),
            Interval::plain(4),
            Interval::plain(5),
        ],
        "dom7" => vec![
            Interval::plain(1),
            Interval::plain(3),
            Interval::plain(5),
            Interval::flat(7),
        ],
        "maj7" => vec![
            Interval::plain(1),
            Interval::plain(3),
            Interval::plain(5),
            Interval::plain(7),
        ],
        "min7" | "m7" => vec![
            Interval::plain(1),
            Interval::flat(3),
            Interval::plain(5),
            Interval::flat(7),
        ],
        "-" => vec![Interval::plain(1), Interval::flat(3), Interval::flat(5)],
        "+" => vec![Interval::plain(1), Interval::plain(3), Interval::sharp(5)],
        other => return Err(Error::UnknownModifier(other.to_string())),
    };
    Ok((intervals, inversions))
}

/// Resolve one interval from the chord's starting degree to a note name
/// and octave.
fn interval_note(
    scale: &Scale,
    start: usize,
    interval: Interval,
    base_octave: i8,
) -> Result<(NoteName, i8)> {
    let notes = scale.notes();
    let degree_steps = (interval.degree - 1) as usize;
    let mut name = notes[(start + degree_steps) % 7];

    // The octave flips at the first of C, C#, D present in the scale;
    // count the walk from that anchor rather than from the tonic.
    let anchor = [NoteName::C, NoteName::Cs, NoteName::D]
        .iter()
        .find_map(|&sign| scale.position(sign))
        .unwrap_or(0);
    let mut start_offset = start;
    if anchor > 0 {
        start_offset += 7 - anchor;
    }

    let mut octave = ((start_offset + degree_steps) / 7) as i8 + base_octave;

    match interval.shift {
        1 => {
            let pos = walk_position(name);
            name = CHROMATIC[(pos + 1) % 12];
            if name == NoteName::C {
                octave += 1;
            }
        }
        -1 => {
            let pos = walk_position(name);
            name = CHROMATIC[(pos + 11) % 12];
            if name == NoteName::B {
                octave -= 1;
            }
        }
        _ => {}
    }

    Ok((name, octave))
}

/// Position in the chromatic walk cycle. Scale notes are always sharp
/// spelled, so this is total for them.
fn walk_position(name: NoteName) -> usize {
    match name.pitch_class() {
        Some(pc) => ((pc + 3) % 12) as usize,
        None => 0,
    }
}
