// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Standard MIDI File backend for the [`MidiSink`] boundary.
//!
//! Events are buffered with absolute beat times per track; `write` sorts
//! them, converts to delta ticks, and emits an SMF Format 1 file through
//! the `midly` crate.

use std::io;

use anyhow::Context;
use midly::num::{u15, u24, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

use super::MidiSink;

/// Ticks per quarter note in the output file.
pub const TICKS_PER_QUARTER: u16 = 480;

/// A buffered event at an absolute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Tempo { bpm_micros: u32 },
    Program { channel: u8, program: u8 },
    NoteOff { channel: u8, pitch: u8 },
    NoteOn { channel: u8, pitch: u8, velocity: u8 },
}

impl Event {
    /// Ordering rank for events sharing a tick: meta first, note-offs
    /// before note-ons so retriggered pitches don't get cut off.
    fn rank(&self) -> u8 {
        match self {
            Event::Tempo { .. } => 0,
            Event::Program { .. } => 1,
            Event::NoteOff { .. } => 2,
            Event::NoteOn { .. } => 3,
        }
    }
}

/// Buffering SMF writer.
#[derive(Debug, Clone, Default)]
pub struct SmfWriter {
    tracks: Vec<Vec<(u32, Event)>>,
}

impl SmfWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracks buffered so far.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    fn track_buffer(&mut self, track: usize) -> &mut Vec<(u32, Event)> {
        if track >= self.tracks.len() {
            self.tracks.resize(track + 1, Vec::new());
        }
        &mut self.tracks[track]
    }

    fn beats_to_ticks(beats: f64) -> u32 {
        (beats * TICKS_PER_QUARTER as f64).round().max(0.0) as u32
    }

    /// Encode the buffered events and write the file bytes to `out`.
    pub fn write<W: io::Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let smf = self.to_smf();
        let mut buf = Vec::new();
        smf.write(&mut buf)
            .map_err(|e| anyhow::anyhow!("Failed to encode MIDI file: {e}"))?;
        out.write_all(&buf).context("Failed to write MIDI file")?;
        Ok(())
    }

    /// Build the in-memory SMF from the buffered events.
    fn to_smf(&self) -> Smf<'static> {
        let mut smf = Smf::new(Header::new(
            Format::Parallel,
            Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
        ));

        for events in &self.tracks {
            let mut ordered = events.clone();
            ordered.sort_by_key(|(tick, event)| (*tick, event.rank()));

            let mut track: midly::Track<'static> = Vec::new();
            let mut last_tick = 0u32;
            for (tick, event) in ordered {
                let delta = u28::new(tick - last_tick);
                last_tick = tick;

                let kind = match event {
                    Event::Tempo { bpm_micros } => {
                        TrackEventKind::Meta(MetaMessage::Tempo(u24::new(bpm_micros)))
                    }
                    Event::Program { channel, program } => TrackEventKind::Midi {
                        channel: u4::new(channel),
                        message: MidiMessage::ProgramChange {
                            program: u7::new(program),
                        },
                    },
                    Event::NoteOn {
                        channel,
                        pitch,
                        velocity,
                    } => TrackEventKind::Midi {
                        channel: u4::new(channel),
                        message: MidiMessage::NoteOn {
                            key: u7::new(pitch),
                            vel: u7::new(velocity),
                        },
                    },
                    Event::NoteOff { channel, pitch } => TrackEventKind::Midi {
                        channel: u4::new(channel),
                        message: MidiMessage::NoteOff {
                            key: u7::new(pitch),
                            vel: u7::new(0),
                        },
                    },
                };
                track.push(TrackEvent { delta, kind });
            }

            track.push(TrackEvent {
                delta: u28::new(0),
                kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
            });
            smf.tracks.push(track);
        }

        smf
    }
}

impl MidiSink for SmfWriter {
    fn add_tempo(&mut self, track: usize, time: f64, bpm: f64) {
        let tick = Self::beats_to_ticks(time);
        // The tempo meta field is 24-bit; below 4 BPM it would overflow.
        let bpm_micros = (60_000_000.0 / bpm.max(4.0)) as u32;
        self.track_buffer(track).push((tick, Event::Tempo { bpm_micros }));
    }

    fn add_program_change(&mut self, track: usize, channel: u8, time: f64, program: u8) {
        let tick = Self::beats_to_ticks(time);
        self.track_buffer(track).push((
            tick,
            Event::Program {
                channel: channel.min(15),
                program: program.min(127),
            },
        ));
    }

    fn add_note(
        &mut self,
        track: usize,
        channel: u8,
        pitch: u8,
        start: f64,
        duration: f64,
        velocity: u8,
    ) {
        let channel = channel.min(15);
        let pitch = pitch.min(127);
        let on = Self::beats_to_ticks(start);
        let off = Self::beats_to_ticks(start + duration);

        let buffer = self.track_buffer(track);
        buffer.push((
            on,
            Event::NoteOn {
                channel,
                pitch,
                velocity: velocity.min(127),
            },
        ));
        buffer.push((off, Event::NoteOff { channel, pitch }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_to_ticks() {
        assert_eq!(SmfWriter::beats_to_ticks(0.0), 0);
        assert_eq!(SmfWriter::beats_to_ticks(1.0), 480);
        assert_eq!(SmfWriter::beats_to_ticks(0.5), 240);
        assert_eq!(SmfWriter::beats_to_ticks(-1.0), 0);
    }

    #[test]
    fn test_track_buffers_grow_on_demand() {
        let mut writer = SmfWriter::new();
        writer.add_tempo(2, 0.0, 120.0);
        assert_eq!(writer.track_count(), 3);
    }

    #[test]
    fn test_to_smf_structure() {
        let mut writer = SmfWriter::new();
        writer.add_tempo(0, 0.0, 120.0);
        writer.add_program_change(0, 0, 0.0, 0);
        writer.add_note(0, 0, 60, 0.0, 1.0, 100);

        let smf = writer.to_smf();
        assert_eq!(smf.tracks.len(), 1);
        // tempo + program + on + off + end of track
        assert_eq!(smf.tracks[0].len(), 5);
    }

    #[test]
    fn test_note_off_precedes_note_on_at_same_tick() {
        let mut writer = SmfWriter::new();
        // Back-to-back quarter notes on the same pitch.
        writer.add_note(0, 0, 60, 0.0, 1.0, 100);
        writer.add_note(0, 0, 60, 1.0, 1.0, 100);

        let smf = writer.to_smf();
        let kinds: Vec<String> = smf.tracks[0]
            .iter()
            .map(|e| format!("{:?}", e.kind))
            .collect();
        // At tick 480 the off of the first note sorts before the on of
        // the second.
        assert!(kinds[1].contains("NoteOff"));
        assert!(kinds[2].contains("NoteOn"));
    }

    #[test]
    fn test_delta_conversion() {
        let mut writer = SmfWriter::new();
        writer.add_note(0, 0, 60, 0.0, 1.0, 100);
        writer.add_note(0, 0, 62, 1.0, 0.5, 100);

        let smf = writer.to_smf();
        let deltas: Vec<u32> = smf.tracks[0].iter().map(|e| e.delta.as_int()).collect();
        // on@0, off@480, on@480, off@720, end
        assert_eq!(deltas, vec![0, 480, 0, 240, 0]);
    }

    #[test]
    fn test_written_bytes_start_with_header_magic() {
        let mut writer = SmfWriter::new();
        writer.add_tempo(0, 0.0, 120.0);
        writer.add_note(0, 0, 60, 0.0, 1.0, 100);

        let mut bytes = Vec::new();
        writer.write(&mut bytes).unwrap();
        assert_eq!(&bytes[0..4], b"MThd");
    }
}
