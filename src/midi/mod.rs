// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI writing abstraction layer.
//!
//! This module provides a trait-based boundary between the sequencing
//! core and whatever writes the actual MIDI data, allowing different
//! backends (Standard MIDI Files, test recorders, etc.) to be used
//! interchangeably.

pub mod smf;

pub use smf::SmfWriter;

/// Trait for timed-event consumers.
///
/// Times and durations are in beats (quarter note = 1). The core hands a
/// composition over through these three calls; everything downstream of
/// them is the backend's business.
pub trait MidiSink {
    /// Set the tempo for a track at a point in time.
    fn add_tempo(&mut self, track: usize, time: f64, bpm: f64);

    /// Select the instrument program (0-127) on a channel.
    fn add_program_change(&mut self, track: usize, channel: u8, time: f64, program: u8);

    /// Add a sounding note.
    ///
    /// # Arguments
    /// * `pitch` - MIDI note number (0-127)
    /// * `start` - Start time in beats
    /// * `duration` - Length in beats
    /// * `velocity` - Attack velocity (0-127)
    fn add_note(
        &mut self,
        track: usize,
        channel: u8,
        pitch: u8,
        start: f64,
        duration: f64,
        velocity: u8,
    );
}
