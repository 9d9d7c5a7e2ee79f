// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords: ordered, duplicate-free collections of simultaneous notes.

use std::fmt;

use crate::error::{Error, Result};
use crate::music::note::Note;

/// An unordered-in-time but ordered-in-storage set of notes sounding
/// together. Insertion deduplicates by note equality (name, octave,
/// volume), preserving first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chord {
    notes: Vec<Note>,
}

impl Chord {
    /// Create a chord from notes, dropping duplicates.
    pub fn new<I: IntoIterator<Item = Note>>(notes: I) -> Self {
        let mut chord = Self::default();
        for note in notes {
            chord.push(note);
        }
        chord
    }

    /// Get a defensive copy of the notes.
    pub fn notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    /// Number of distinct notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the chord holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a note unless an equal note is already present.
    pub fn push(&mut self, note: Note) {
        if !self.notes.contains(&note) {
            self.notes.push(note);
        }
    }

    /// Remove the first note equal to `note`. Returns whether one was found.
    pub fn remove(&mut self, note: &Note) -> bool {
        match self.notes.iter().position(|n| n == note) {
            Some(idx) => {
                self.notes.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Duration of the longest member note.
    pub fn duration(&self) -> f64 {
        self.notes.iter().map(Note::duration).fold(0.0, f64::max)
    }

    /// Volume of the loudest member note.
    pub fn volume(&self) -> u8 {
        self.notes.iter().map(Note::volume).max().unwrap_or(0)
    }

    /// Set every member's duration.
    pub fn set_duration(&mut self, duration: f64) {
        for note in &mut self.notes {
            note.set_duration(duration);
        }
    }

    /// Set every member's volume.
    pub fn set_volume(&mut self, volume: u8) {
        for note in &mut self.notes {
            note.set_volume(volume);
        }
    }

    /// Move every member to the given octave.
    pub fn set_octave(&mut self, octave: u8) {
        for note in &mut self.notes {
            note.set_octave(octave);
        }
    }

    /// Invert the chord `count` times: each step moves the lowest-listed
    /// note up an octave to the end of the list.
    ///
    /// Dedup can temporarily collapse the list (e.g. C-E-G-C inverting to
    /// E-G-C); each step keeps rotating until the pre-step length is
    /// restored, so the chord's cardinality survives inversion.
    pub fn invert(&mut self, count: i64) -> Result<()> {
        if count < 0 {
            return Err(Error::NegativeInversion(count));
        }
        for _ in 0..count {
            let len_before = self.notes.len();
            let mut len_after = 0;
            while len_after < len_before {
                let mut moved = self.notes[0].clone();
                moved.set_octave(moved.octave() + 1);
                if len_after == 0 {
                    self.notes.remove(0);
                }
                self.push(moved);
                len_after = self.notes.len();
            }
        }
        Ok(())
    }
}

impl FromIterator<Note> for Chord {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", note)?;
        }
        write!(f, "]")
    }
}
