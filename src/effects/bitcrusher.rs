//! Sample-rate and bit-depth reduction.

/*
Bitcrusher
==========

A 16-bit clock accumulates `rate` every sample. When bit 15 sets, only that
bit is cleared and the input is sampled, quantized and held:

    clock += rate
    if clock & 0x8000:
        clock &= 0x7FFF          (remainder kept, so the long-run update
        held = quantize(x)        rate is exactly rate / 32768)
    y = held

A rate of `32768 / D` therefore updates every D samples. Rates above one
half are clamped to one half, which updates every sample.

Quantization scales the sample down by `scaling` (Q0.16, truncating) and
back up by its reciprocal (Q16.16). With `scaling = 2^-n` this clears the
low `16 - n` bits, leaving `2^n` levels.
*/

use crate::fixedmath::{mul_q15_q16, sat16_wide, U0F16, U16F16};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const CLOCK_WRAP: u16 = 0x8000;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitcrusherParams {
    pub rate: U0F16,
    pub down: U0F16,
    pub up: U16F16,
}

impl BitcrusherParams {
    /// `rate` is the clock step, `scaling` the down-scale factor.
    pub fn new(rate: U0F16, scaling: U0F16) -> Self {
        let rate = rate.min(U0F16::from_bits(CLOCK_WRAP));
        // The reciprocal of 1/65536 does not fit Q16.16
        let down = scaling.to_bits().max(2);
        let up = (1u64 << 32) / down as u64;
        Self {
            rate,
            down: U0F16::from_bits(down),
            up: U16F16::from_bits(up as u32),
        }
    }

    /// Keep `bits` bits of resolution (sign included), clamped to 1..=15.
    pub fn with_bit_depth(rate: U0F16, bits: u32) -> Self {
        let bits = bits.clamp(1, 15);
        Self::new(rate, U0F16::from_bits(1 << bits))
    }

    #[inline]
    pub fn quantize(&self, x: i16) -> i16 {
        let scaled = mul_q15_q16(x, self.down.to_bits());
        sat16_wide((scaled as i64 * self.up.to_bits() as i64) >> 16)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitcrusherState {
    clock: u16,
    held_left: i16,
    held_right: i16,
}

impl BitcrusherState {
    pub const fn new() -> Self {
        Self {
            clock: 0,
            held_left: 0,
            held_right: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    fn tick(&mut self, params: &BitcrusherParams) -> bool {
        self.clock = self.clock.wrapping_add(params.rate.to_bits());
        if self.clock & CLOCK_WRAP != 0 {
            self.clock &= !CLOCK_WRAP;
            true
        } else {
            false
        }
    }

    pub fn render(&mut self, params: &BitcrusherParams, left: &mut [i16], right: &mut [i16]) {
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            if self.tick(params) {
                self.held_left = params.quantize(*l);
                self.held_right = params.quantize(*r);
            }
            *l = self.held_left;
            *r = self.held_right;
        }
    }

    /// Single channel; uses the left hold register.
    pub fn render_mono(&mut self, params: &BitcrusherParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            if self.tick(params) {
                self.held_left = params.quantize(*sample);
            }
            *sample = self.held_left;
        }
    }
}
