// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core for cadence.
//!
//! Provides note and chord value objects, circle-of-fifths scale
//! derivation, and roman-numeral chord resolution.

pub mod chord;
pub mod note;
pub mod roman;
pub mod theory;

pub use chord::Chord;
pub use note::{Note, NoteName, DEFAULT_DURATION, DEFAULT_VOLUME};
pub use roman::{resolve, Numeral, RomanChordSpec};
pub use theory::{major_scale, minor_scale, Mode, Scale};
