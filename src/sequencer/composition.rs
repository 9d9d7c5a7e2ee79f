// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Composition: a set of tracks exported as timed MIDI events.
//!
//! Channel assignment is 1:1 with addition order. Export lays each
//! track's entries out linearly: every entry starts where the previous
//! one ended, and simultaneity only comes from chord grouping.

use std::io;

use tracing::warn;

use crate::midi::{MidiSink, SmfWriter};
use crate::sequencer::track::{Track, TrackEntry};

/// The MIDI channel limit; one track per channel.
pub const MAX_TRACKS: usize = 16;

/// Scale factor from note duration units (quarter = 0.25) to beat ticks
/// (quarter = 1).
const DURATION_TO_BEATS: f64 = 4.0;

/// An ordered set of at most [`MAX_TRACKS`] tracks.
#[derive(Debug, Clone, Default)]
pub struct Composition {
    tracks: Vec<Track>,
}

impl Composition {
    /// Create an empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track, assigning it the next free channel.
    ///
    /// Once all 16 channels are occupied further tracks are reported and
    /// dropped; existing tracks are never disturbed.
    pub fn add_track(&mut self, track: Track) -> bool {
        if self.tracks.len() >= MAX_TRACKS {
            warn!(
                "can't add more MIDI tracks, all {} channels are occupied",
                MAX_TRACKS
            );
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Add several tracks.
    pub fn add_tracks<I: IntoIterator<Item = Track>>(&mut self, tracks: I) {
        for track in tracks {
            self.add_track(track);
        }
    }

    /// Get the tracks in channel order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the composition has no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Export every track as timed events into a sink.
    ///
    /// Track `i` uses sink track `i` and channel `i`. A running cursor
    /// starts at 0; each entry is emitted at the cursor and advances it
    /// by the entry's duration scaled to beats. Rests advance the cursor
    /// without emitting.
    pub fn export(&self, sink: &mut dyn MidiSink) {
        for (index, track) in self.tracks.iter().enumerate() {
            let channel = index as u8;
            sink.add_tempo(index, 0.0, track.tempo());
            sink.add_program_change(index, channel, 0.0, track.program());

            let mut cursor = 0.0;
            for entry in track.entries() {
                let beats = entry.duration() * DURATION_TO_BEATS;
                match entry {
                    TrackEntry::Note(note) => {
                        if let Some(pitch) = note.midi_number() {
                            sink.add_note(
                                index,
                                channel,
                                pitch.min(127),
                                cursor,
                                beats,
                                note.volume().min(127),
                            );
                        }
                    }
                    TrackEntry::Chord(chord) => {
                        // Members share the chord's duration and volume.
                        let volume = chord.volume().min(127);
                        for note in chord.notes() {
                            if let Some(pitch) = note.midi_number() {
                                sink.add_note(index, channel, pitch.min(127), cursor, beats, volume);
                            }
                        }
                    }
                }
                cursor += beats;
            }
        }
    }

    /// Export through an [`SmfWriter`] and write the encoded Standard
    /// MIDI File to `out`.
    pub fn write_midi<W: io::Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let mut writer = SmfWriter::new();
        self.export(&mut writer);
        writer.write(out)
    }
}
