//! Phase-domain waveform generators.

/*
Phase-Domain Oscillators
========================

Every oscillator here is a function of phase. A 32-bit accumulator advances
by a Q0.32 increment each sample (increment = f / fs * 2^32) and wraps once
per cycle. The top 16 bits are handed to the waveform as a Q0.16 phase.

    phase (u16)   0x0000      0x4000      0x8000      0xC000      0xFFFF
    saw           0           rising      -1 (jump)   rising      ~1
    ramp          -1          rising      0           rising      ~1
    tri           0           1           0           -1          ~0
    rect          1 while phase < pulse_width, -1 afterwards

The naive shapes alias freely. Two cheap remedies live here:

Shaped saw
----------

Blends the naive saw with its own fundamental (a sine). The blend weights
are computed once per block from the shape knob:

    s           = shape - 0.5          (bipolar, by flipping the top bit)
    sine_scale  = 0.79 * (0.5 + s)
    saw_scale   = 0.79 * (0.5 - s)
    out         = sine * sine_scale + saw * saw_scale

0.79 keeps the sum of the two waveforms clear of clipping.

Shaped tri
----------

A triangle is already mostly fundamental, so the knob pushes the sine
towards the triangle by a reciprocal curve:

    scale = 1 / (8 * (4097 + 57343 * shape^2 / 2) / 32768)
    out   = sine + 8 * scale * (tri - sine)

At shape = 1 the scale is exactly 1/8 and the output is the naive triangle.
Towards shape = 0 the difference term grows to eight times its size and
the wave folds over inside each quarter cycle, which doubles the dominant
partial.
*/

use crate::fixedmath::{abs_sat, mul_q15_q16, mul_q16, round_shr, sat16_wide, sin_q15, I1F15, U0F16, U0F32};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rising ramp, -1 at phase zero.
#[inline]
pub fn ramp(phase: u16) -> i16 {
    (phase ^ 0x8000) as i16
}

/// Rising saw, 0 at phase zero and jumping to -1 at half a cycle.
#[inline]
pub fn saw(phase: u16) -> i16 {
    phase as i16
}

#[inline]
pub fn rect(phase: u16, pulse_width: u16) -> i16 {
    if phase < pulse_width {
        i16::MAX
    } else {
        i16::MIN
    }
}

/// Triangle in phase with `sin_q15`.
#[inline]
pub fn tri(phase: u16) -> i16 {
    (abs_sat(phase.wrapping_add(16384) as i16) - 16384) << 1
}

/// Triangle with a gain modulation (`shape1`) and an offset (`shape2`).
///
/// The sum wraps instead of saturating, folding large offsets back into the
/// range. This is the waveform's character, not an overflow bug.
#[inline]
pub fn tri_mod(phase: u16, shape1: u16, shape2: u16) -> i16 {
    let tri = tri(phase);
    tri.wrapping_add(mul_q15_q16(tri, shape1))
        .wrapping_add(shape2 as i16)
}

/// 32-bit phase accumulator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Phase32(u32);

impl Phase32 {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Top 16 bits as a Q0.16 phase.
    #[inline]
    pub const fn q16(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Add one increment. Returns `true` when the phase wrapped.
    #[inline]
    pub fn advance(&mut self, increment: U0F32) -> bool {
        let (next, carry) = self.0.overflowing_add(increment.to_bits());
        self.0 = next;
        carry
    }

    pub fn reset(&mut self, bits: u32) {
        self.0 = bits;
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedSawParams {
    pub sine_scale: I1F15,
    pub saw_scale: I1F15,
}

impl ShapedSawParams {
    pub fn new(shape: U0F16) -> Self {
        let s = (shape.to_bits() ^ 0x8000) as i16 as i64;
        let center = 12943i64 << 15;
        let width = 25887i64 * s;
        Self {
            sine_scale: I1F15::from_bits(sat16_wide(round_shr(center + width, 15))),
            saw_scale: I1F15::from_bits(sat16_wide(round_shr(center - width, 15))),
        }
    }
}

#[inline]
pub fn shaped_saw(phase: u16, params: &ShapedSawParams) -> i16 {
    let sine = sin_q15(phase) as i64;
    let saw = saw(phase) as i64;
    let acc = sine * params.sine_scale.to_bits() as i64 + saw * params.saw_scale.to_bits() as i64;
    sat16_wide(round_shr(acc, 15))
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedTriParams {
    /// Blend factor, one eighth of its nominal value.
    pub scale: I1F15,
}

impl ShapedTriParams {
    pub fn new(shape: U0F16) -> Self {
        let shape = shape.to_bits();
        let curve = (mul_q16(57343, mul_q16(shape, shape)) >> 1) as i32;
        Self {
            scale: I1F15::from_bits(((4096 << 15) / (4097 + curve)) as i16),
        }
    }
}

#[inline]
pub fn shaped_tri(phase: u16, params: &ShapedTriParams) -> i16 {
    let sine = sin_q15(phase) as i64;
    let tri = tri(phase) as i64;
    let acc = (sine << 12) + (tri - sine) * params.scale.to_bits() as i64;
    sat16_wide(round_shr(acc, 12))
}

/// Waveform choice for [`render`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Ramp,
    Saw,
    Tri,
    Rect { pulse_width: u16 },
    TriMod { shape1: u16, shape2: u16 },
    ShapedSaw(ShapedSawParams),
    ShapedTri(ShapedTriParams),
}

impl Waveform {
    #[inline]
    pub fn sample(&self, phase: u16) -> i16 {
        match *self {
            Waveform::Ramp => ramp(phase),
            Waveform::Saw => saw(phase),
            Waveform::Tri => tri(phase),
            Waveform::Rect { pulse_width } => rect(phase, pulse_width),
            Waveform::TriMod { shape1, shape2 } => tri_mod(phase, shape1, shape2),
            Waveform::ShapedSaw(ref params) => shaped_saw(phase, params),
            Waveform::ShapedTri(ref params) => shaped_tri(phase, params),
        }
    }
}

/// Fill `buffer` with `waveform`, advancing `phase` once per sample.
///
/// `phase_offset` is added to the Q0.16 phase before the waveform reads it,
/// which lets two oscillators share one accumulator at a fixed phase
/// distance.
pub fn render(
    waveform: &Waveform,
    phase: &mut Phase32,
    increment: U0F32,
    phase_offset: u16,
    buffer: &mut [i16],
) {
    for sample in buffer.iter_mut() {
        phase.advance(increment);
        *sample = waveform.sample(phase.q16().wrapping_add(phase_offset));
    }
}
