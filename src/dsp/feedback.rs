//! Feedback oscillator: a naive saw through a recursive comb filter.
//!
//! `y[n] = saw[n] + feedback * y[n - delay]`
//!
//! The delay (12 to 511 samples) comes from `tables::COMB_DELAY` indexed by
//! `shape1`, the feedback is `shape2 / 2`. Short delays give a metallic,
//! resonant tone on top of the saw, long ones a chorus-like smear.

use crate::dsp::oscillator::{saw, Phase32};
use crate::fixedmath::{interp_lut_256, round_shr, sat16_wide, I1F15, U0F16, U0F32};
use crate::tables::COMB_DELAY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const LINE_LEN: usize = 512;
const LINE_MASK: usize = LINE_LEN - 1;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackParams {
    /// Comb delay in samples, always below [`LINE_LEN`].
    pub delay: u16,
    pub feedback: I1F15,
}

impl FeedbackParams {
    pub fn new(shape1: U0F16, shape2: U0F16) -> Self {
        let delay = interp_lut_256(&COMB_DELAY, shape1.to_bits()) as usize & LINE_MASK;
        Self {
            delay: delay as u16,
            feedback: I1F15::from_bits((shape2.to_bits() >> 1) as i16),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackState {
    line: [i16; LINE_LEN],
    read_pos: usize,
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackState {
    pub const fn new() -> Self {
        Self {
            line: [0; LINE_LEN],
            read_pos: 0,
        }
    }

    pub fn reset(&mut self) {
        self.line.fill(0);
        self.read_pos = 0;
    }

    /// One output sample for a Q0.16 oscillator phase.
    #[inline]
    pub fn next_sample(&mut self, params: &FeedbackParams, phase: u16) -> i16 {
        let delayed = self.line[self.read_pos] as i64;
        let acc = ((saw(phase) as i64) << 15) + delayed * params.feedback.to_bits() as i64;
        let output = sat16_wide(round_shr(acc, 15));

        let write_pos = (self.read_pos + params.delay as usize) & LINE_MASK;
        self.line[write_pos] = output;
        self.read_pos = (self.read_pos + 1) & LINE_MASK;
        output
    }

    pub fn render(
        &mut self,
        params: &FeedbackParams,
        phase: &mut Phase32,
        increment: U0F32,
        buffer: &mut [i16],
    ) {
        for sample in buffer.iter_mut() {
            phase.advance(increment);
            *sample = self.next_sample(params, phase.q16());
        }
    }
}
