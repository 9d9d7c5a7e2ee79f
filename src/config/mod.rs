// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Score file configuration.
//!
//! This module provides data structures for loading score descriptions
//! from YAML and turning them into playable compositions. A score sets a
//! key, mode and tempo; each track names an instrument and lists events
//! as roman chord symbols, literal notes, or rests.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::note::{NoteName, DEFAULT_DURATION, DEFAULT_VOLUME};
use crate::music::roman::RomanChordSpec;
use crate::music::theory::Mode;
use crate::music::Note;
use crate::sequencer::{Composition, Track};

/// Root configuration for a score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreFile {
    /// Score metadata and settings
    pub score: ScoreConfig,
    /// Track definitions
    #[serde(default)]
    pub tracks: Vec<TrackSpec>,
}

impl ScoreFile {
    /// Load a score configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read score file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a score configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML score")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize score to YAML")
    }

    /// Save the score to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write score file: {:?}", path.as_ref()))
    }

    /// Resolve every event and assemble the tracks into a composition.
    pub fn to_composition(&self) -> Result<Composition> {
        let key: NoteName = self
            .score
            .key
            .parse()
            .with_context(|| format!("Invalid score key {:?}", self.score.key))?;
        let mode: Mode = self
            .score
            .mode
            .parse()
            .with_context(|| format!("Invalid score mode {:?}", self.score.mode))?;

        let mut composition = Composition::new();
        for spec in &self.tracks {
            let tempo = spec.tempo.unwrap_or(self.score.tempo);
            let mut track = Track::with_tempo(&spec.instrument, tempo);

            for event in &spec.events {
                match event {
                    EventSpec::Chord {
                        chord,
                        octave,
                        duration,
                        volume,
                    } => {
                        let resolved = RomanChordSpec::parse(chord)
                            .and_then(|parsed| {
                                parsed
                                    .with_key(key)
                                    .with_mode(mode)
                                    .with_octave(octave.unwrap_or(4))
                                    .with_duration(duration.unwrap_or(DEFAULT_DURATION))
                                    .with_volume(volume.unwrap_or(DEFAULT_VOLUME))
                                    .resolve()
                            })
                            .with_context(|| format!("Invalid chord symbol {:?}", chord))?;
                        track.push(resolved);
                    }
                    EventSpec::Note {
                        note,
                        octave,
                        duration,
                        volume,
                    } => {
                        let name: NoteName = note
                            .parse()
                            .with_context(|| format!("Invalid note name {:?}", note))?;
                        let placed = Note::new(
                            name,
                            octave.unwrap_or(4),
                            duration.unwrap_or(DEFAULT_DURATION),
                            volume.unwrap_or(DEFAULT_VOLUME),
                        )
                        .with_context(|| format!("Invalid note {:?}", note))?;
                        track.push(placed);
                    }
                    EventSpec::Rest { rest } => {
                        track.push(Note::rest(*rest));
                    }
                }
            }

            composition.add_track(track);
        }
        Ok(composition)
    }
}

/// Score-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreConfig {
    /// Score name
    pub name: String,
    /// Tempo in BPM
    #[serde(default = "default_tempo")]
    pub tempo: f64,
    /// Musical key (e.g., "C", "F#", "Bb")
    #[serde(default = "default_key")]
    pub key: String,
    /// Mode ("major" or "minor")
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_tempo() -> f64 {
    120.0
}
fn default_key() -> String {
    "C".to_string()
}
fn default_mode() -> String {
    "major".to_string()
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            tempo: default_tempo(),
            key: default_key(),
            mode: default_mode(),
        }
    }
}

/// Track definition within a score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackSpec {
    /// Instrument description (fuzzy-matched against General MIDI names)
    pub instrument: String,
    /// Track-specific tempo override
    #[serde(default)]
    pub tempo: Option<f64>,
    /// Events in playback order
    #[serde(default)]
    pub events: Vec<EventSpec>,
}

/// A single sequenced event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EventSpec {
    /// A roman numeral chord symbol (e.g. "I", "V7", "Isus2**")
    Chord {
        chord: String,
        #[serde(default)]
        octave: Option<i8>,
        #[serde(default)]
        duration: Option<f64>,
        #[serde(default)]
        volume: Option<u8>,
    },
    /// A literal note name (e.g. "C", "F#", "R" for a rest)
    Note {
        note: String,
        #[serde(default)]
        octave: Option<i8>,
        #[serde(default)]
        duration: Option<f64>,
        #[serde(default)]
        volume: Option<u8>,
    },
    /// A rest of the given duration
    Rest { rest: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::TrackEntry;

    const SCORE: &str = r#"
score:
  name: "Progression"
  tempo: 96
  key: "G"
  mode: "major"
tracks:
  - instrument: "acoustic grand piano"
    events:
      - chord: "I"
        duration: 0.5
      - chord: "IV"
      - chord: "V7"
      - rest: 0.25
      - note: "G"
        octave: 3
"#;

    #[test]
    fn test_parse_score() {
        let score = ScoreFile::from_yaml(SCORE).unwrap();
        assert_eq!(score.score.name, "Progression");
        assert_eq!(score.score.tempo, 96.0);
        assert_eq!(score.score.key, "G");
        assert_eq!(score.tracks.len(), 1);
        assert_eq!(score.tracks[0].events.len(), 5);
        assert!(matches!(score.tracks[0].events[3], EventSpec::Rest { .. }));
    }

    #[test]
    fn test_defaults() {
        let score = ScoreFile::from_yaml("score:\n  name: \"Minimal\"\n").unwrap();
        assert_eq!(score.score.tempo, 120.0);
        assert_eq!(score.score.key, "C");
        assert_eq!(score.score.mode, "major");
        assert!(score.tracks.is_empty());
    }

    #[test]
    fn test_yaml_round_trip() {
        let score = ScoreFile::from_yaml(SCORE).unwrap();
        let yaml = score.to_yaml().unwrap();
        let reparsed = ScoreFile::from_yaml(&yaml).unwrap();
        assert_eq!(score, reparsed);
    }

    #[test]
    fn test_to_composition() {
        let score = ScoreFile::from_yaml(SCORE).unwrap();
        let composition = score.to_composition().unwrap();

        assert_eq!(composition.len(), 1);
        let track = &composition.tracks()[0];
        assert_eq!(track.tempo(), 96.0);
        assert_eq!(track.program(), 0);
        assert_eq!(track.len(), 5);

        // The opening chord is G major: G-B-D.
        match &track.entries()[0] {
            TrackEntry::Chord(chord) => {
                assert_eq!(chord.len(), 3);
                assert_eq!(chord.duration(), 0.5);
            }
            other => panic!("expected chord, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_chord_symbol_rejected() {
        let yaml = r#"
score:
  name: "Broken"
tracks:
  - instrument: "violin"
    events:
      - chord: "VIII"
"#;
        let score = ScoreFile::from_yaml(yaml).unwrap();
        let err = score.to_composition().unwrap_err();
        assert!(err.to_string().contains("VIII"));
    }

    #[test]
    fn test_invalid_key_rejected() {
        let yaml = "score:\n  name: \"Broken\"\n  key: \"H\"\n";
        let score = ScoreFile::from_yaml(yaml).unwrap();
        assert!(score.to_composition().is_err());
    }
}
