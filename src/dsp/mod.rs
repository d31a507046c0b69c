//! Sound sources, filters and modulators.
//!
//! Everything here is allocation-free and realtime-safe, so state values can
//! be embedded directly in voice structs. Parameters are recomputed at
//! control rate; state is advanced per sample or per block.

/// One-pole lowpass/highpass with a note-indexed coefficient.
pub mod one_pole;
/// One knob sweeping a one-pole from dark lowpass to thin highpass.
pub mod vario;
/// Two-pole state-variable filter with lowpass, bandpass, highpass and notch.
pub mod svf;

/// Naive and shaped oscillator waveforms over a 32-bit phase.
pub mod oscillator;
/// Seven detuned saws with a fixed highpass.
pub mod supersaw;
/// Saw fed back through a short comb.
pub mod feedback;
/// Filtered white noise.
pub mod noise;

/// Exponential ADSR envelope.
pub mod envelope;
/// Block-rate LFO with hard sync and reset.
pub mod lfo;
/// Portamento between notes.
pub mod glide;
/// Note to phase increment conversion.
pub mod pitch;

pub use envelope::{AdsrParams, AdsrState};
pub use lfo::{LfoParams, LfoState, LfoWaveform};
pub use svf::{SvfParams, SvfState};
