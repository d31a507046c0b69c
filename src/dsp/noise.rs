//! Filtered white-noise oscillators.
//!
//! Both draw from an [`Rng`] they own. [`ColoredNoiseState::new`] and
//! [`LowpassNoiseState::new`] seed it from the process-wide generator so that
//! two voices never play the same noise; `with_rng` gives a fixed sequence.

use crate::dsp::one_pole::OnePoleState;
use crate::dsp::svf::{SvfParams, SvfState};
use crate::dsp::vario::VarioParams;
use crate::fixedmath::U0F16;
use crate::rand::{self, Rng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// White noise through the vario one-pole. `shape` runs from darkest
/// (lowpass, low cutoff) to brightest (highpass, high cutoff).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredNoiseParams {
    pub filter: VarioParams,
}

impl ColoredNoiseParams {
    pub fn new(shape: U0F16) -> Self {
        Self {
            filter: VarioParams::new(shape),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredNoiseState {
    rng: Rng,
    filter: OnePoleState,
}

impl Default for ColoredNoiseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ColoredNoiseState {
    pub fn new() -> Self {
        Self::with_rng(rand::fork())
    }

    pub const fn with_rng(rng: Rng) -> Self {
        Self {
            rng,
            filter: OnePoleState::new(),
        }
    }

    #[inline]
    pub fn next_sample(&mut self, params: &ColoredNoiseParams) -> i16 {
        let white = self.rng.next_q15();
        self.filter.vario_sample(&params.filter, white)
    }

    pub fn render(&mut self, params: &ColoredNoiseParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(params);
        }
    }
}

/// White noise through a resonant SVF lowpass. The cutoff is the note plus
/// half of `shape1` (saturating), the resonance is `shape2`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowpassNoiseParams {
    pub filter: SvfParams,
}

impl LowpassNoiseParams {
    pub fn new(note: i16, shape1: U0F16, shape2: U0F16) -> Self {
        let cutoff = note.saturating_add((shape1.to_bits() >> 1) as i16);
        Self {
            filter: SvfParams::new(cutoff, shape2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowpassNoiseState {
    rng: Rng,
    filter: SvfState,
}

impl Default for LowpassNoiseState {
    fn default() -> Self {
        Self::new()
    }
}

impl LowpassNoiseState {
    pub fn new() -> Self {
        Self::with_rng(rand::fork())
    }

    pub const fn with_rng(rng: Rng) -> Self {
        Self {
            rng,
            filter: SvfState::new(),
        }
    }

    #[inline]
    pub fn next_sample(&mut self, params: &LowpassNoiseParams) -> i16 {
        let white = self.rng.next_q15();
        self.filter.lowpass_sample(&params.filter, white)
    }

    pub fn render(&mut self, params: &LowpassNoiseParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mean absolute first difference: a cheap brightness measure.
    fn roughness(buffer: &[i16]) -> f64 {
        let sum: f64 = buffer
            .windows(2)
            .map(|w| (w[1] as f64 - w[0] as f64).abs())
            .sum();
        sum / (buffer.len() - 1) as f64
    }

    /// Roughness relative to level, so quiet highpassed noise still counts
    /// as bright.
    fn brightness(buffer: &[i16]) -> f64 {
        let level = buffer.iter().map(|&s| (s as f64).abs()).sum::<f64>() / buffer.len() as f64;
        roughness(buffer) / level
    }

    fn colored(shape: u16) -> Vec<i16> {
        let params = ColoredNoiseParams::new(U0F16::from_bits(shape));
        let mut state = ColoredNoiseState::with_rng(Rng::with_seed(42));
        let mut buffer = vec![0i16; 16_384];
        state.render(&params, &mut buffer);
        buffer
    }

    #[test]
    fn test_colored_noise_darkens_and_brightens() {
        let dark = brightness(&colored(0x2000));
        let mid = brightness(&colored(0x7000));
        let bright = brightness(&colored(0xF000));
        assert!(dark < mid, "dark {} mid {}", dark, mid);
        assert!(mid < bright, "mid {} bright {}", mid, bright);
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        assert_eq!(colored(0x5000), colored(0x5000));
    }

    #[test]
    fn test_separate_states_get_separate_noise() {
        let params = ColoredNoiseParams::new(U0F16::MAX);
        let mut a = ColoredNoiseState::new();
        let mut b = ColoredNoiseState::new();
        let mut block_a = [0i16; 96];
        let mut block_b = [0i16; 96];
        a.render(&params, &mut block_a);
        b.render(&params, &mut block_b);
        assert_ne!(block_a, block_b);
    }

    #[test]
    fn test_lowpass_noise_cutoff_saturates() {
        let params = LowpassNoiseParams::new(32_000, U0F16::MAX, U0F16::ZERO);
        assert_eq!(params.filter, SvfParams::new(i16::MAX, U0F16::ZERO));
    }

    #[test]
    fn test_lowpass_noise_follows_cutoff() {
        let render = |note: i16| {
            let params = LowpassNoiseParams::new(note, U0F16::ZERO, U0F16::from_bits(0x4000));
            let mut state = LowpassNoiseState::with_rng(Rng::with_seed(9));
            let mut buffer = vec![0i16; 16_384];
            state.render(&params, &mut buffer);
            roughness(&buffer)
        };
        let low = render(40 * 200);
        let high = render(100 * 200);
        assert!(low * 4.0 < high, "low {} high {}", low, high);
    }
}
