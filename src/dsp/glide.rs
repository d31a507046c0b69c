//! Portamento: an exponential slide of the note value towards a target.
//!
//! The state is a 32-bit value whose upper half is the note in half-cents.
//! Every sample it moves by `(target - note) * rate`, so each step covers the
//! fraction `rate` of the remaining distance. For any rate below one the
//! slide never passes the target, and once the upper half equals the target
//! the step is zero and the output stays put.

use crate::fixedmath::U0F16;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlideParams {
    /// Target note in half-cents.
    pub note: i16,
    /// Fraction of the remaining distance covered per sample.
    pub rate: U0F16,
}

impl GlideParams {
    pub fn new(note: i16, rate: U0F16) -> Self {
        Self { note, rate }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlideState {
    value: i32,
}

impl GlideState {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Jump straight to `note`, e.g. for the first note of a phrase.
    pub fn set(&mut self, note: i16) {
        self.value = (note as i32) << 16;
    }

    /// Current note in half-cents.
    pub fn note(&self) -> i16 {
        (self.value >> 16) as i16
    }

    #[inline]
    pub fn next_sample(&mut self, params: &GlideParams) -> i16 {
        // The distance can span the full i16 range, so it is taken in i32 and
        // the step in i64. The result always lies between the current value
        // and the target, so it fits back into i32.
        let distance = params.note as i64 - (self.value >> 16) as i64;
        let step = distance * params.rate.to_bits() as i64;
        self.value = (self.value as i64 + step) as i32;
        self.note()
    }

    pub fn render(&mut self, params: &GlideParams, buffer: &mut [i16]) {
        for note in buffer.iter_mut() {
            *note = self.next_sample(params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(from: i16, to: i16, rate: u16, samples: usize) -> Vec<i16> {
        let params = GlideParams::new(to, U0F16::from_bits(rate));
        let mut glide = GlideState::new();
        glide.set(from);
        let mut buffer = vec![0i16; samples];
        glide.render(&params, &mut buffer);
        buffer
    }

    #[test]
    fn test_rises_to_target_without_overshoot() {
        let target = 60 * 200;
        let out = run(0, target, 0x0800, 10_000);
        let mut last = 0;
        for &note in &out {
            assert!(note >= last && note <= target, "{} after {}", note, last);
            last = note;
        }
        assert_eq!(last, target);
    }

    #[test]
    fn test_falls_to_target_without_overshoot() {
        let target = -1_000;
        let out = run(20_000, target, 0x0400, 20_000);
        let mut last = 20_000;
        for &note in &out {
            assert!(note <= last && note >= target, "{} after {}", note, last);
            last = note;
        }
        assert_eq!(last, target);
    }

    #[test]
    fn test_stays_on_target_once_reached() {
        let target = 12_345;
        let params = GlideParams::new(target, U0F16::from_bits(0x1000));
        let mut glide = GlideState::new();
        let mut buffer = vec![0i16; 5_000];
        glide.render(&params, &mut buffer);
        let first_hit = buffer
            .iter()
            .position(|&n| n == target)
            .unwrap_or_else(|| panic!("never reached {}", target));
        assert!(buffer[first_hit..].iter().all(|&n| n == target));
    }

    #[test]
    fn test_full_range_jump_does_not_wrap() {
        let out = run(i16::MIN, i16::MAX, 0x2000, 2_000);
        assert!(out.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(*out.last().unwrap_or(&0), i16::MAX);
    }

    #[test]
    fn test_zero_rate_holds() {
        let out = run(300, 9_000, 0, 100);
        assert!(out.iter().all(|&n| n == 300));
    }
}
