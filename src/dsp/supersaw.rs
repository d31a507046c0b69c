//! Stacked saw ("supersaw"): seven detuned naive saws and an anti-alias highpass.

/*
Stacked Saw
===========

One center saw plus three symmetric pairs of side saws:

    f_side = f * (1 +- d_n * detune(shape1))     d = 0.0197, 0.0625, 0.1100

`detune(shape1)` is a two-slope curve (gentle over the first half of the knob,
steep over the second, and a jump in the last sixteenth) read from a
16-entry offset/multiplier pair. `shape2` mixes center against sides with
the quadratic level curves

    center = 1 - 0.55366 * mix
    side   = -0.73764 * mix^2 + 1.2841 * mix + 0.0887

The naive saws fold harmonics back below the fundamental. A 4th-order
Butterworth highpass at the note frequency, built from two SVF sections with
k = 1.848 and k = 0.765, removes most of that sub-harmonic mud.
*/

use crate::dsp::oscillator::{saw, Phase32};
use crate::dsp::svf::{SvfParams, SvfState};
use crate::fixedmath::{mul_q15_q16, mul_q16, round_shr, sat16_wide, I1F15, U0F16, U0F32};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const VOICES: usize = 7;

const DETUNE_OFFSET: [u16; 16] = [
    0, 819, 1638, 2458, 3277, 4096, 4915, 5734, 6554, 9421, 12288, 15155, 18022, 20890, 23757,
    26624,
];
const DETUNE_SLOPE: [u16; 16] = [
    819, 819, 819, 819, 819, 819, 819, 819, 2867, 2867, 2867, 2867, 2867, 2867, 2867, 38912,
];
const PAIR_SPREAD: [u16; 3] = [646, 2048, 3604];

// Resonances giving k = 2cos(pi/8) and k = 2cos(3pi/8)
const BUTTERWORTH_RES_1: u16 = 4989;
const BUTTERWORTH_RES_2: u16 = 40456;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupersawParams {
    /// Center increment first, then the side pairs (+, -).
    pub increments: [U0F32; VOICES],
    /// Amount taken away from the center saw.
    pub level_center: I1F15,
    pub level_side: I1F15,
    pub highpass: [SvfParams; 2],
}

/// Weighted detune amount for `shape1`, Q0.16.
pub fn detune(shape1: U0F16) -> u16 {
    let shape1 = shape1.to_bits();
    let segment = (shape1 >> 12) as usize;
    DETUNE_OFFSET[segment] + mul_q16(DETUNE_SLOPE[segment], shape1 << 4)
}

#[inline]
fn scale_increment(freq2: u64, factor: u32) -> U0F32 {
    U0F32::from_bits(((freq2 * factor as u64) >> 16) as u32)
}

impl SupersawParams {
    /// `note` is the pitch in half-cents (it places the highpass), `freq` the
    /// matching center increment.
    pub fn new(note: i16, freq: U0F32, shape1: U0F16, shape2: U0F16) -> Self {
        let detune = detune(shape1);
        let freq2 = (freq.to_bits() as u64) << 1;

        let mut increments = [freq; VOICES];
        for (pair, &spread) in PAIR_SPREAD.iter().enumerate() {
            let d = mul_q16(spread, detune) as u32;
            increments[1 + 2 * pair] = scale_increment(freq2, 0x8000 + d);
            increments[2 + 2 * pair] = scale_increment(freq2, 0x8000 - d);
        }

        let mix = shape2.to_bits();
        let level_center = mul_q15_q16(18142, mix);
        let level_side = (mul_q15_q16(mul_q15_q16(-12085, mix) + 21039, mix) + 1454) << 1;

        Self {
            increments,
            level_center: I1F15::from_bits(level_center),
            level_side: I1F15::from_bits(level_side),
            highpass: [
                SvfParams::new(note, U0F16::from_bits(BUTTERWORTH_RES_1)),
                SvfParams::new(note, U0F16::from_bits(BUTTERWORTH_RES_2)),
            ],
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SupersawState {
    pub phases: [Phase32; VOICES],
    highpass: [SvfState; 2],
}

impl SupersawState {
    pub const fn new() -> Self {
        Self {
            phases: [Phase32::new(); VOICES],
            highpass: [SvfState::new(); 2],
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Sum of the seven saws before the highpass.
    #[inline]
    fn raw_sample(&mut self, params: &SupersawParams) -> i64 {
        // The center reads its phase after the step, the sides before it
        self.phases[0].advance(params.increments[0]);
        let center = saw(self.phases[0].q16()) as i64;
        let mut acc = (center << 15) - center * params.level_center.to_bits() as i64;

        let level_side = params.level_side.to_bits() as i64;
        for (phase, &increment) in self.phases[1..].iter_mut().zip(params.increments[1..].iter()) {
            acc += saw(phase.q16()) as i64 * level_side;
            phase.advance(increment);
        }

        round_shr(acc, 16)
    }

    #[inline]
    pub fn next_sample(&mut self, params: &SupersawParams) -> i16 {
        let x = sat16_wide(self.raw_sample(params));
        let x = self.highpass[0].highpass_sample(&params.highpass[0], x);
        self.highpass[1].highpass_sample(&params.highpass[1], x)
    }

    pub fn render(&mut self, params: &SupersawParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(params);
        }
    }
}
