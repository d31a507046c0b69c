//! Note (half-cents) to Q0.32 phase increment, and back.
//!
//! Notes are MIDI note numbers times 200, so middle C is 12000 and A4 is
//! 13800. The increment is `f / SAMPLE_RATE * 2^32`, ready for a 32-bit
//! phase accumulator.

use crate::fixedmath::U0F32;
use crate::tables::{NOTE_TO_FREQ, NOTE_TO_FREQ_STEP};
use crate::SAMPLE_RATE;

const STEP_SHIFT: u32 = NOTE_TO_FREQ_STEP.trailing_zeros();
const STEP_MASK: u32 = NOTE_TO_FREQ_STEP as u32 - 1;

/// Phase increment for a note.
///
/// Linear interpolation over a table with one entry every 16 half-cents.
/// Negative notes clamp to note 0 and notes past Nyquist saturate.
///
/// # Example
/// ```
/// use qsynth::dsp::pitch::{hz_to_increment, note_to_freq};
/// let a4 = note_to_freq(69 * 200).to_bits() as f64;
/// let expected = hz_to_increment(440.0).to_bits() as f64;
/// assert!((a4 - expected).abs() / expected < 1e-5);
/// ```
pub fn note_to_freq(note: i16) -> U0F32 {
    let note = note.max(0) as u32;
    let index = (note >> STEP_SHIFT) as usize;
    let frac = (note & STEP_MASK) as u64;
    let lo = NOTE_TO_FREQ[index] as u64;
    let hi = NOTE_TO_FREQ[index + 1] as u64;
    let freq = (hi * frac + lo * (NOTE_TO_FREQ_STEP as u64 - frac)) >> STEP_SHIFT;
    U0F32::from_bits(freq as u32)
}

/// Inverse of [`note_to_freq`], accurate to about one half-cent.
///
/// Increments below note 0 map to 0, increments in the saturated top of the
/// table map to the first saturated note.
pub fn freq_to_note(freq: U0F32) -> i16 {
    let freq = freq.to_bits();
    // First entry above `freq`
    let upper = NOTE_TO_FREQ.partition_point(|&f| f <= freq);
    if upper == 0 {
        return 0;
    }
    if upper == NOTE_TO_FREQ.len() {
        let first_saturated = NOTE_TO_FREQ.partition_point(|&f| f < u32::MAX);
        return (first_saturated as i32 * NOTE_TO_FREQ_STEP).min(i16::MAX as i32) as i16;
    }

    let index = upper - 1;
    let lo = NOTE_TO_FREQ[index] as u64;
    let hi = NOTE_TO_FREQ[upper] as u64;
    let frac = ((freq as u64 - lo) * NOTE_TO_FREQ_STEP as u64 + (hi - lo) / 2) / (hi - lo);
    let note = index as i64 * NOTE_TO_FREQ_STEP as i64 + frac as i64;
    note.min(i16::MAX as i64) as i16
}

/// Increment for a frequency in Hz, clamped to the Q0.32 range.
pub fn hz_to_increment(hz: f64) -> U0F32 {
    let bits = (hz / SAMPLE_RATE as f64 * 4_294_967_296.0).round();
    U0F32::from_bits(bits.clamp(0.0, u32::MAX as f64) as u32)
}

pub fn increment_to_hz(increment: U0F32) -> f64 {
    increment.to_bits() as f64 / 4_294_967_296.0 * SAMPLE_RATE as f64
}
