//! One-pole IIR lowpass/highpass.

/*
One-Pole Filter
===============

    lowpass:   y = a * s + (1 - a) * x      s <- y
    highpass:  y = a * (x - s)              s <- x - y

Both responses share one state update, s <- s + (1 - a) * (x - s), and
differ only in the tap: lowpass reads the state, highpass reads what the
state did not absorb.

Coefficient
-----------

a = exp(-2 * pi * f / fs) is looked up from `tables::ONE_POLE_ALPHA`, indexed
by `note << 1` so each table segment spans 128 half-cents. Small notes give a
close to 1, which is where 16-bit state breaks down: (1 - a) * (x - s)
rounds to zero long before s reaches x.

State precision
---------------

The state is held as Q0.31 (the sample shifted up by 16 bits). The update
step then stays non-zero until the residual is a fraction of one Q0.15 LSB,
so the output sequence stays within 1 LSB of a double-precision filter and a
step input settles exactly on the input value.
*/

use crate::fixedmath::{interp_lut_256, round_shr, sat16_wide, I1F15};
use crate::tables::ONE_POLE_ALPHA;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const STATE_SHIFT: u32 = 16;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnePoleParams {
    /// Pole position `a` in Q0.15. Valid range is `[0, 32767]`.
    pub alpha: I1F15,
}

impl OnePoleParams {
    /// Coefficient for a cutoff given in half-cents. Negative notes clamp to
    /// the lowest table entry.
    pub fn from_note(note: i16) -> Self {
        Self::from_index((note.max(0) as u16) << 1)
    }

    /// Coefficient from a raw 8.8 table position.
    pub fn from_index(index: u16) -> Self {
        Self {
            alpha: I1F15::from_bits(interp_lut_256(&ONE_POLE_ALPHA, index)),
        }
    }

    /// Coefficient given directly. Negative values clamp to zero.
    pub fn from_alpha(alpha: I1F15) -> Self {
        Self {
            alpha: alpha.max(I1F15::ZERO),
        }
    }

    #[inline]
    fn alpha_bits(&self) -> i64 {
        self.alpha.to_bits() as i64
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OnePoleState {
    acc: i32, // Q0.31
}

impl OnePoleState {
    pub const fn new() -> Self {
        Self { acc: 0 }
    }

    /// Current state value rounded to Q0.15.
    pub fn value(&self) -> i16 {
        sat16_wide(round_shr(self.acc as i64, STATE_SHIFT))
    }

    pub fn reset(&mut self) {
        self.acc = 0;
    }

    /// Move the state towards `x` and return the residual `x - s_new` in Q0.31.
    #[inline]
    fn step(&mut self, params: &OnePoleParams, x: i16) -> i64 {
        let x = (x as i64) << STATE_SHIFT;
        let s = self.acc as i64;
        // a * (x - s), the part of the distance the state does not cover
        let residual = round_shr((x - s) * params.alpha_bits(), 15);
        // s_new lies between s and x, both of which fit in i32
        self.acc = (x - residual) as i32;
        residual
    }

    #[inline]
    pub fn lowpass_sample(&mut self, params: &OnePoleParams, x: i16) -> i16 {
        self.step(params, x);
        self.value()
    }

    #[inline]
    pub fn highpass_sample(&mut self, params: &OnePoleParams, x: i16) -> i16 {
        let residual = self.step(params, x);
        sat16_wide(round_shr(residual, STATE_SHIFT))
    }

    pub fn lowpass_block(&mut self, params: &OnePoleParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.lowpass_sample(params, *sample);
        }
    }

    pub fn highpass_block(&mut self, params: &OnePoleParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.highpass_sample(params, *sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::Rng;

    fn reference_lowpass(alpha: i16, input: &[i16]) -> Vec<f64> {
        let a = alpha as f64 / 32768.0;
        let mut s = 0.0f64;
        input
            .iter()
            .map(|&x| {
                s = a * s + (1.0 - a) * x as f64;
                s
            })
            .collect()
    }

    fn reference_highpass(alpha: i16, input: &[i16]) -> Vec<f64> {
        let a = alpha as f64 / 32768.0;
        let mut s = 0.0f64;
        input
            .iter()
            .map(|&x| {
                let y = a * (x as f64 - s);
                s = x as f64 - y;
                y
            })
            .collect()
    }

    #[test]
    fn test_lowpass_matches_reference_within_one_lsb() {
        let mut rng = Rng::new();
        let mut input = vec![0i16; 4096];
        rng.fill(&mut input);

        for alpha in [0i16, 1416, 16384, 30000, 32733, 32767] {
            let params = OnePoleParams::from_alpha(I1F15::from_bits(alpha));
            let mut state = OnePoleState::new();
            let mut buffer = input.clone();
            state.lowpass_block(&params, &mut buffer);

            let reference = reference_lowpass(alpha, &input);
            for (i, (&got, &want)) in buffer.iter().zip(reference.iter()).enumerate() {
                assert!(
                    (got as f64 - want).abs() <= 1.0,
                    "alpha {} sample {}: got {} want {:.2}",
                    alpha,
                    i,
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn test_highpass_matches_reference_within_one_lsb() {
        let mut rng = Rng::with_seed(7);
        let mut input = vec![0i16; 4096];
        rng.fill(&mut input);

        for alpha in [1416i16, 20000, 32733] {
            let params = OnePoleParams::from_alpha(I1F15::from_bits(alpha));
            let mut state = OnePoleState::new();
            let mut buffer = input.clone();
            state.highpass_block(&params, &mut buffer);

            let reference = reference_highpass(alpha, &input);
            for (i, (&got, &want)) in buffer.iter().zip(reference.iter()).enumerate() {
                assert!(
                    (got as f64 - want).abs() <= 1.0,
                    "alpha {} sample {}: got {} want {:.2}",
                    alpha,
                    i,
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn test_lowpass_step_converges_monotonically() {
        for alpha in (0..=32767).step_by(4095).chain([32767]) {
            let params = OnePoleParams::from_alpha(I1F15::from_bits(alpha as i16));
            for target in [i16::MAX, i16::MIN, 1234, -1] {
                let mut state = OnePoleState::new();
                let mut last = 0i32;
                let mut settled = false;
                for _ in 0..2_000_000 {
                    let y = state.lowpass_sample(&params, target) as i32;
                    assert!(
                        (y - last) * (target as i32).signum() >= 0,
                        "alpha {} target {}: output moved away ({} -> {})",
                        alpha,
                        target,
                        last,
                        y
                    );
                    last = y;
                    if y == target as i32 {
                        settled = true;
                        break;
                    }
                }
                assert!(settled, "alpha {} never reached {} (at {})", alpha, target, last);
            }
        }
    }

    #[test]
    fn test_highpass_rejects_dc() {
        let params = OnePoleParams::from_note(60 * 200);
        let mut state = OnePoleState::new();
        let mut buffer = vec![16000i16; 4096];
        state.highpass_block(&params, &mut buffer);
        assert!(buffer[4095].abs() <= 1, "DC leaked: {}", buffer[4095]);
    }

    #[test]
    fn test_from_note_uses_table_grid() {
        assert_eq!(OnePoleParams::from_note(0).alpha.to_bits(), ONE_POLE_ALPHA[0]);
        assert_eq!(OnePoleParams::from_note(128).alpha.to_bits(), ONE_POLE_ALPHA[1]);
        assert_eq!(OnePoleParams::from_note(-500), OnePoleParams::from_note(0));
        assert_eq!(OnePoleParams::from_note(i16::MAX).alpha.to_bits(), 1416);
    }
}
