//! VCA with linear panning.
//!
//! Panning only ever attenuates: the channel opposite the pan direction is
//! scaled by `1 - |pan|`, the other one keeps the full gain.
//!
//! ```text
//! pan      -1 ....... 0 ....... +1
//! left      1         1          0
//! right     0         1          1
//! ```

use crate::fixedmath::{mul_q15_q16, mul_q16, I1F15, U0F16};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmpParams {
    pub gain_left: U0F16,
    pub gain_right: U0F16,
}

/// `1 - max(pan, 0)` in Q0.16, via the complement of the doubled value.
#[inline]
fn pan_law(pan: i16) -> u16 {
    !((pan.max(0) as u16) << 1)
}

impl AmpParams {
    pub fn new(gain: U0F16, pan: I1F15) -> Self {
        let pan = pan.to_bits();
        let gain = gain.to_bits();
        Self {
            gain_left: U0F16::from_bits(mul_q16(gain, pan_law(pan))),
            gain_right: U0F16::from_bits(mul_q16(gain, pan_law(!pan))),
        }
    }

    /// Mono input to a stereo pair.
    pub fn render(&self, input: &[i16], left: &mut [i16], right: &mut [i16]) {
        let (gain_left, gain_right) = (self.gain_left.to_bits(), self.gain_right.to_bits());
        for ((&x, l), r) in input.iter().zip(left.iter_mut()).zip(right.iter_mut()) {
            *l = mul_q15_q16(x, gain_left);
            *r = mul_q15_q16(x, gain_right);
        }
    }

    /// Stereo pair in place.
    pub fn render_stereo(&self, left: &mut [i16], right: &mut [i16]) {
        let (gain_left, gain_right) = (self.gain_left.to_bits(), self.gain_right.to_bits());
        for sample in left.iter_mut() {
            *sample = mul_q15_q16(*sample, gain_left);
        }
        for sample in right.iter_mut() {
            *sample = mul_q15_q16(*sample, gain_right);
        }
    }
}
