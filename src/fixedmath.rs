//! Fixed-point helpers shared by every component.

/*
Q Formats
=========

A QM.F value has M integer bits (sign included) and F fractional bits.

  format   storage   range            used for
  ------   -------   --------------   ------------------------------------
  Q0.15    i16       [-1, 1)          audio samples, bipolar parameters
  Q0.16    u16       [0, 1)           unipolar parameters, LFO phase
  Q0.32    u32       [0, 1)           oscillator phase and increments
  Q3.12    i16       [-8, 8)          SVF coefficients g and k
  Q16.16   u32       [0, 65536)       reciprocal scale factors

Control-rate inputs are typed with the `fixed` crate so the format is part
of the signature (`U0F16`, `I1F15`, `I4F12`, `U0F32`, `U16F16`). Audio blocks
and phase accumulators stay as raw integers: they are bulk data, and the
accumulators wrap on purpose.

Rounding
--------

Right shifts that leave the accumulator round to nearest:

    round_shr(v, n) = (v + 2^(n-1)) >> n

Plain `>>` (floor) is used where a truncating multiply is part of the
algorithm, e.g. the envelope and the Q0.16 gain stages.

Saturation
----------

Anything that can leave the Q0.15 range clamps to [i16::MIN, i16::MAX]
instead of wrapping. The few places that wrap on purpose say so.
*/

pub use fixed::types::{I1F15, I4F12, U0F16, U0F32, U16F16};

use crate::tables::SINE;

/// Clamp a wide intermediate into Q0.15.
#[inline]
pub fn sat16(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

#[inline]
pub fn sat16_wide(v: i64) -> i16 {
    v.clamp(i16::MIN as i64, i16::MAX as i64) as i16
}

/// Arithmetic right shift with round-to-nearest. `n` must be at least 1.
#[inline]
pub fn round_shr(v: i64, n: u32) -> i64 {
    (v + (1i64 << (n - 1))) >> n
}

/// Q0.15 * Q0.15 with rounding and saturation (`-1 * -1` clamps to `MAX`).
#[inline]
pub fn mul_q15(a: i16, b: i16) -> i16 {
    sat16_wide(round_shr(a as i64 * b as i64, 15))
}

/// Q0.15 * Q0.16, truncating. The result keeps the Q0.15 format.
#[inline]
pub fn mul_q15_q16(a: i16, b: u16) -> i16 {
    ((a as i32 * b as i32) >> 16) as i16
}

/// Q0.16 * Q0.16, truncating.
#[inline]
pub fn mul_q16(a: u16, b: u16) -> u16 {
    ((a as u32 * b as u32) >> 16) as u16
}

/// Saturating absolute value (`abs(i16::MIN) == i16::MAX`).
#[inline]
pub fn abs_sat(v: i16) -> i16 {
    v.saturating_abs()
}

/// Linear interpolation over a 257-entry table.
///
/// The high byte of `x` selects the segment and the low byte is the
/// fraction. The result always lies between the two bracketing entries, so
/// any `u16` input is in bounds.
#[inline]
pub fn interp_lut_256(table: &[i16; 257], x: u16) -> i16 {
    let index = (x >> 8) as usize;
    let frac = (x & 0xFF) as i32;
    let lo = table[index] as i32;
    let hi = table[index + 1] as i32;
    (lo + (((hi - lo) * frac + 128) >> 8)) as i16
}

/// Interpolate between `from` and `to` by a Q0.16 position.
#[inline]
pub fn lerp_q16(from: i16, to: i16, position: u16) -> i16 {
    let span = to as i64 - from as i64;
    (from as i64 + ((span * position as i64) >> 16)) as i16
}

/// Sine of a Q0.16 phase (one full turn per wrap), in Q0.15.
#[inline]
pub fn sin_q15(phase: u16) -> i16 {
    interp_lut_256(&SINE, phase)
}

/// Convert a Q0.15 sample to `f32` for host audio APIs.
#[inline]
pub fn q15_to_f32(sample: i16) -> f32 {
    I1F15::from_bits(sample).to_num::<f32>()
}

/// Convert an `f32` sample to Q0.15, clamping out-of-range input.
#[inline]
pub fn f32_to_q15(sample: f32) -> i16 {
    I1F15::saturating_from_num(sample).to_bits()
}
