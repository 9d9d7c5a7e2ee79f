// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tracks: linear sequences of notes and chords bound to an instrument.

use crate::music::chord::Chord;
use crate::music::note::Note;
use crate::sequencer::instruments;

/// Default track tempo in BPM.
pub const DEFAULT_TEMPO: f64 = 120.0;

/// One sequenced element: a single note or an explicit chord.
///
/// Entries play back to back; anything meant to sound simultaneously must
/// be grouped into one `Chord` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackEntry {
    Note(Note),
    Chord(Chord),
}

impl TrackEntry {
    /// Duration of this entry (a chord's is its longest member).
    pub fn duration(&self) -> f64 {
        match self {
            TrackEntry::Note(note) => note.duration(),
            TrackEntry::Chord(chord) => chord.duration(),
        }
    }

    /// Volume of this entry (a chord's is its loudest member).
    pub fn volume(&self) -> u8 {
        match self {
            TrackEntry::Note(note) => note.volume(),
            TrackEntry::Chord(chord) => chord.volume(),
        }
    }
}

impl From<Note> for TrackEntry {
    fn from(note: Note) -> Self {
        TrackEntry::Note(note)
    }
}

impl From<Chord> for TrackEntry {
    fn from(chord: Chord) -> Self {
        TrackEntry::Chord(chord)
    }
}

/// A single-channel sequence of entries with an instrument and a tempo.
///
/// Instrument and tempo are fixed at construction; the instrument string
/// goes through [`instruments::resolve_program`], which substitutes the
/// closest General MIDI name when the description is inexact.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    entries: Vec<TrackEntry>,
    program: u8,
    tempo: f64,
}

impl Track {
    /// Create a track for an instrument description at the default tempo.
    pub fn new(instrument: &str) -> Self {
        Self::with_tempo(instrument, DEFAULT_TEMPO)
    }

    /// Create a track for an instrument description and tempo.
    pub fn with_tempo(instrument: &str, tempo: f64) -> Self {
        Self {
            entries: Vec::new(),
            program: instruments::resolve_program(instrument),
            tempo,
        }
    }

    /// Create a track from a raw program number, bypassing name lookup.
    pub fn from_program(program: u8, tempo: f64) -> Self {
        Self {
            entries: Vec::new(),
            program: program.min(127),
            tempo,
        }
    }

    /// Append a note or chord.
    pub fn push(&mut self, entry: impl Into<TrackEntry>) {
        self.entries.push(entry.into());
    }

    /// Append several entries.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator,
        I::Item: Into<TrackEntry>,
    {
        self.entries.extend(entries.into_iter().map(Into::into));
    }

    /// Get a defensive copy of the entries.
    pub fn entries(&self) -> Vec<TrackEntry> {
        self.entries.clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the track has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the MIDI program number (0-127).
    pub fn program(&self) -> u8 {
        self.program
    }

    /// Get the tempo in BPM.
    pub fn tempo(&self) -> f64 {
        self.tempo
    }
}
