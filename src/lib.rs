//! Fixed-point synthesizer signal path.
//!
//! Every component follows the same split: a `*Params` value computed at
//! control rate from raw inputs, and a `*State` value that persists between
//! calls and is mutated at audio rate, one sample or one [`Block`] at a time.

pub mod dsp; // Filters, oscillators and modulation sources
pub mod effects; // Stereo send effects and the output VCA
pub mod fixedmath;
pub mod rand;
pub mod tables;

#[cfg(feature = "rtrb")]
pub mod control; // Control-to-audio parameter hand-off

/// Fixed processing rate in Hz. Every frequency table is generated for it.
pub const SAMPLE_RATE: u32 = 48_000;

/// Number of samples processed per block call.
pub const BLOCK_LEN: usize = 96;

/// One block of Q0.15 audio.
pub type Block = [i16; BLOCK_LEN];
