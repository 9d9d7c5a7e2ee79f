// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for cadence
//!
//! These tests verify that multiple components work together correctly.

use cadence::config::ScoreFile;
use cadence::midi::MidiSink;
use cadence::music::{major_scale, minor_scale, resolve, Chord, Mode, Note, NoteName};
use cadence::sequencer::{Composition, Track, MAX_TRACKS};
use cadence::Error;

/// Sink that records note events for inspection.
#[derive(Default)]
struct RecordingSink {
    notes: Vec<(usize, u8, u8, f64, f64, u8)>,
}

impl MidiSink for RecordingSink {
    fn add_tempo(&mut self, _track: usize, _time: f64, _bpm: f64) {}

    fn add_program_change(&mut self, _track: usize, _channel: u8, _time: f64, _program: u8) {}

    fn add_note(
        &mut self,
        track: usize,
        channel: u8,
        pitch: u8,
        start: f64,
        duration: f64,
        velocity: u8,
    ) {
        self.notes.push((track, channel, pitch, start, duration, velocity));
    }
}

/// Test the full path from chord symbols to SMF bytes
#[test]
fn test_symbols_to_midi_file() {
    let mut track = Track::new("acoustic grand piano");
    for symbol in ["I", "IV", "V7", "I"] {
        let chord = resolve(symbol, NoteName::C, Mode::Major, 4, 0.25, 100).unwrap();
        track.push(chord);
    }

    let mut composition = Composition::new();
    composition.add_track(track);

    let mut bytes = Vec::new();
    composition.write_midi(&mut bytes).unwrap();

    // SMF header magic plus at least one track chunk.
    assert_eq!(&bytes[0..4], b"MThd");
    let track_chunks = bytes.windows(4).filter(|w| *w == b"MTrk").count();
    assert_eq!(track_chunks, 1);
}

/// Scale properties across all twelve tonics
#[test]
fn test_scale_properties_all_keys() {
    use cadence::music::theory::CHROMATIC;

    for tonic in CHROMATIC {
        let major = major_scale(tonic).unwrap();
        assert_eq!(major.notes().len(), 7);
        assert_eq!(major.notes()[0], tonic);

        let minor = minor_scale(tonic).unwrap();
        assert_eq!(minor.notes().len(), 7);
        assert_eq!(minor.notes()[0], tonic);

        // No repeated pitch classes within a scale.
        for (i, a) in major.notes().iter().enumerate() {
            for b in &major.notes()[i + 1..] {
                assert_ne!(a.pitch_class(), b.pitch_class(), "{} major", tonic);
            }
        }
    }
}

/// Resolved chords end up at the right MIDI pitches after sequencing
#[test]
fn test_chord_resolution_to_pitches() {
    let chord = resolve("I", NoteName::C, Mode::Major, 4, 0.25, 100).unwrap();
    let mut track = Track::from_program(0, 120.0);
    track.push(chord);

    let mut composition = Composition::new();
    composition.add_track(track);

    let mut sink = RecordingSink::default();
    composition.export(&mut sink);

    let pitches: Vec<u8> = sink.notes.iter().map(|n| n.2).collect();
    assert_eq!(pitches, vec![60, 64, 67]); // C4 E4 G4
}

/// Inversions relocate the root an octave up
#[test]
fn test_inversions_through_pipeline() {
    let first = resolve("I*", NoteName::C, Mode::Major, 4, 0.25, 100).unwrap();
    let pitches: Vec<Option<u8>> = first.notes().iter().map(Note::midi_number).collect();
    assert_eq!(pitches, vec![Some(64), Some(67), Some(72)]); // E4 G4 C5

    let second = resolve("I**", NoteName::C, Mode::Major, 4, 0.25, 100).unwrap();
    let pitches: Vec<Option<u8>> = second.notes().iter().map(Note::midi_number).collect();
    assert_eq!(pitches, vec![Some(67), Some(72), Some(76)]); // G4 C5 E5
}

/// Mixed notes, chords and rests sequence contiguously
#[test]
fn test_track_sequencing_with_rests() {
    let mut track = Track::from_program(0, 120.0);
    track.push(Note::new(NoteName::C, 4, 0.25, 100).unwrap());
    track.push(Note::rest(0.5));
    track.push(Chord::new([
        Note::new(NoteName::E, 4, 0.25, 100).unwrap(),
        Note::new(NoteName::G, 4, 0.25, 100).unwrap(),
    ]));

    let mut composition = Composition::new();
    composition.add_track(track);

    let mut sink = RecordingSink::default();
    composition.export(&mut sink);

    // The rest emits nothing but pushes the chord to beat 3.
    let starts: Vec<f64> = sink.notes.iter().map(|n| n.3).collect();
    assert_eq!(starts, vec![0.0, 3.0, 3.0]);
}

/// Channel capacity: the 17th track is dropped, the first 16 play
#[test]
fn test_channel_capacity() {
    let mut composition = Composition::new();
    for _ in 0..MAX_TRACKS + 1 {
        let mut track = Track::from_program(0, 120.0);
        track.push(Note::new(NoteName::C, 4, 0.25, 100).unwrap());
        composition.add_track(track);
    }
    assert_eq!(composition.len(), MAX_TRACKS);

    let mut sink = RecordingSink::default();
    composition.export(&mut sink);

    assert_eq!(sink.notes.len(), MAX_TRACKS);
    let channels: Vec<u8> = sink.notes.iter().map(|n| n.1).collect();
    assert_eq!(channels, (0..MAX_TRACKS as u8).collect::<Vec<u8>>());
}

/// Error taxonomy surfaces through the public resolve contract
#[test]
fn test_invalid_specs_rejected() {
    let invalid_numeral = resolve("VIII", NoteName::C, Mode::Major, 4, 0.25, 100);
    assert!(matches!(invalid_numeral, Err(Error::InvalidNumeral(_))));

    let out_of_range = resolve("I15", NoteName::C, Mode::Major, 4, 0.25, 100);
    assert_eq!(out_of_range.unwrap_err(), Error::ExtensionOutOfRange(15));

    let unknown = resolve("Ifoo", NoteName::C, Mode::Major, 4, 0.25, 100);
    assert!(matches!(unknown, Err(Error::UnknownModifier(_))));
}

/// Score files load, convert, and serialize end to end
#[test]
fn test_score_file_round_trip() {
    let yaml = r#"
score:
  name: "Demo"
  tempo: 100
  key: "A"
  mode: "minor"
tracks:
  - instrument: "church organ"
    events:
      - chord: "I"
      - chord: "VI"
      - chord: "V7"
        octave: 3
      - rest: 0.25
"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.yaml");
    std::fs::write(&path, yaml).unwrap();

    let score = ScoreFile::load(&path).unwrap();
    assert_eq!(score.score.name, "Demo");

    let saved = dir.path().join("saved.yaml");
    score.save(&saved).unwrap();
    assert_eq!(ScoreFile::load(&saved).unwrap(), score);

    let composition = score.to_composition().unwrap();
    assert_eq!(composition.len(), 1);
    assert_eq!(composition.tracks()[0].program(), 19);
    assert_eq!(composition.tracks()[0].len(), 4);

    let mut bytes = Vec::new();
    composition.write_midi(&mut bytes).unwrap();
    assert_eq!(&bytes[0..4], b"MThd");
}

/// Chord deduplication and equality semantics hold through construction
#[test]
fn test_chord_dedup_semantics() {
    let c = Note::new(NoteName::C, 4, 0.25, 100).unwrap();
    let e = Note::new(NoteName::E, 4, 0.25, 100).unwrap();
    let mut c_long = c.clone();
    c_long.set_duration(1.0);

    // Duration is excluded from equality, so C4 appears once.
    let chord = Chord::new([c.clone(), e, c_long]);
    assert_eq!(chord.len(), 2);
    assert_eq!(chord.notes()[0], c);
    assert_eq!(chord.duration(), 1.0);
}
