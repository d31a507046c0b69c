//! Stereo waveshaper blending hard clipping with cubic soft saturation.
//!
//! Per sample:
//!
//! ```text
//! h = sat(x + 8 * hard * x)               gain of up to 9, then clip
//! y = h - soft * h * (h^2 / 2 - 1/2)      = h + soft * (h - h^3) / 2
//! ```
//!
//! with `hard = drive * shape` and `soft = drive - hard`. Shape 0 is all
//! soft saturation, full shape is all hard clipping. Zero drive is a
//! straight wire.

use crate::fixedmath::{mul_q15, round_shr, sat16_wide, I1F15, U0F16};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistortionParams {
    pub hard: I1F15,
    pub soft: I1F15,
}

impl DistortionParams {
    pub fn new(drive: U0F16, shape: U0F16) -> Self {
        let drive = (drive.to_bits() >> 1) as i16;
        let shape = (shape.to_bits() >> 1) as i16;
        let hard = mul_q15(drive, shape);
        Self {
            hard: I1F15::from_bits(hard),
            soft: I1F15::from_bits(drive - hard),
        }
    }

    #[inline]
    pub fn shape_sample(&self, x: i16) -> i16 {
        let x_wide = x as i64;
        let hard = self.hard.to_bits() as i64;
        let clipped = sat16_wide(round_shr((x_wide << 15) + 8 * x_wide * hard, 15));

        let bend = (mul_q15(clipped, clipped) >> 1) - 16384;
        let cubic = mul_q15(clipped, bend);
        clipped.saturating_sub(mul_q15(cubic, self.soft.to_bits()))
    }

    pub fn render(&self, left: &mut [i16], right: &mut [i16]) {
        self.render_mono(left);
        self.render_mono(right);
    }

    pub fn render_mono(&self, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.shape_sample(*sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(params: &DistortionParams) -> Vec<i16> {
        (i16::MIN..=i16::MAX).map(|x| params.shape_sample(x)).collect()
    }

    #[test]
    fn test_zero_drive_is_transparent() {
        let params = DistortionParams::new(U0F16::ZERO, U0F16::MAX);
        for x in (i16::MIN..=i16::MAX).step_by(97) {
            assert_eq!(params.shape_sample(x), x);
        }
    }

    #[test]
    fn test_transfer_curves_are_monotonic() {
        for (drive, shape) in [(0xFFFF, 0), (0xFFFF, 0xFFFF), (0x8000, 0x8000), (0xFFFF, 0x8000)] {
            let params = DistortionParams::new(U0F16::from_bits(drive), U0F16::from_bits(shape));
            let y = curve(&params);
            assert!(y.windows(2).all(|w| w[0] <= w[1]), "drive {:#x} shape {:#x}", drive, shape);
        }
    }

    #[test]
    fn test_soft_saturation_is_cubic() {
        let params = DistortionParams::new(U0F16::MAX, U0F16::ZERO);
        assert_eq!(params.hard.to_bits(), 0);
        // 1.5 * x - 0.5 * x^3
        assert_eq!(params.shape_sample(1000), 1500);
        assert_eq!(params.shape_sample(16384), 22528);
        assert_eq!(params.shape_sample(-16384), -22528);
        assert_eq!(params.shape_sample(i16::MAX), i16::MAX);
    }

    #[test]
    fn test_hard_clip_gains_up_and_clips() {
        let params = DistortionParams::new(U0F16::MAX, U0F16::MAX);
        assert_eq!(params.shape_sample(1000), 9000);
        assert_eq!(params.shape_sample(16384), i16::MAX);
        assert_eq!(params.shape_sample(-16384), i16::MIN);
    }

    #[test]
    fn test_stereo_block_matches_per_sample() {
        let params = DistortionParams::new(U0F16::from_bits(0xC000), U0F16::from_bits(0x4000));
        let input: Vec<i16> = (0..96).map(|i| (i * 680 - 32_000) as i16).collect();
        let mut left = input.clone();
        let mut right: Vec<i16> = input.iter().rev().copied().collect();
        params.render(&mut left, &mut right);
        for (i, &x) in input.iter().enumerate() {
            assert_eq!(left[i], params.shape_sample(x));
            assert_eq!(right[95 - i], params.shape_sample(x));
        }
    }
}
