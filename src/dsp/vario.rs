//! Variable one-pole filter: one knob sweeps from dark lowpass to thin highpass.
//!
//! The knob is a Q0.16 shape. Its top bit picks the response and the lower
//! 15 bits pick the cutoff, so the sweep runs lowpass with rising cutoff over
//! the first half and highpass with rising cutoff over the second half.

use crate::dsp::one_pole::{OnePoleParams, OnePoleState};
use crate::fixedmath::U0F16;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Lowpass,
    Highpass,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarioParams {
    pub mode: FilterMode,
    pub filter: OnePoleParams,
}

impl VarioParams {
    pub fn new(shape: U0F16) -> Self {
        let bits = shape.to_bits();
        let mode = if bits & 0x8000 == 0 {
            FilterMode::Lowpass
        } else {
            FilterMode::Highpass
        };
        Self {
            mode,
            filter: OnePoleParams::from_index((bits & 0x7FFF) << 1),
        }
    }
}

impl OnePoleState {
    #[inline]
    pub fn vario_sample(&mut self, params: &VarioParams, x: i16) -> i16 {
        match params.mode {
            FilterMode::Lowpass => self.lowpass_sample(&params.filter, x),
            FilterMode::Highpass => self.highpass_sample(&params.filter, x),
        }
    }

    pub fn vario_block(&mut self, params: &VarioParams, buffer: &mut [i16]) {
        match params.mode {
            FilterMode::Lowpass => self.lowpass_block(&params.filter, buffer),
            FilterMode::Highpass => self.highpass_block(&params.filter, buffer),
        }
    }
}

/// Left/right filter pair driven by one set of parameters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StereoVarioState {
    pub left: OnePoleState,
    pub right: OnePoleState,
}

impl StereoVarioState {
    pub const fn new() -> Self {
        Self {
            left: OnePoleState::new(),
            right: OnePoleState::new(),
        }
    }

    pub fn render(&mut self, params: &VarioParams, left: &mut [i16], right: &mut [i16]) {
        self.left.vario_block(params, left);
        self.right.vario_block(params, right);
    }

    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixedmath::sin_q15;

    fn tone_peak(params: &VarioParams, increment: u16) -> i16 {
        let mut state = OnePoleState::new();
        let mut phase = 0u16;
        let mut peak = 0i16;
        for i in 0..4096 {
            let y = state.vario_sample(params, sin_q15(phase) / 2);
            phase = phase.wrapping_add(increment);
            if i > 1024 {
                peak = peak.max(y.saturating_abs());
            }
        }
        peak
    }

    #[test]
    fn test_top_bit_selects_mode() {
        assert_eq!(VarioParams::new(U0F16::from_bits(0x0000)).mode, FilterMode::Lowpass);
        assert_eq!(VarioParams::new(U0F16::from_bits(0x7FFF)).mode, FilterMode::Lowpass);
        assert_eq!(VarioParams::new(U0F16::from_bits(0x8000)).mode, FilterMode::Highpass);
        assert_eq!(VarioParams::new(U0F16::from_bits(0xFFFF)).mode, FilterMode::Highpass);
    }

    #[test]
    fn test_lower_bits_select_cutoff() {
        let lp = VarioParams::new(U0F16::from_bits(0x1234));
        let hp = VarioParams::new(U0F16::from_bits(0x9234));
        assert_eq!(lp.filter, hp.filter);
        assert_eq!(lp.filter, OnePoleParams::from_index(0x1234 << 1));
    }

    #[test]
    fn test_lowpass_half_passes_lows_blocks_highs() {
        let params = VarioParams::new(U0F16::from_bits(0x3000));
        let low = tone_peak(&params, 100); // ~73 Hz
        let high = tone_peak(&params, 16000); // ~11.7 kHz
        assert!(low > high * 4, "low {} high {}", low, high);
    }

    #[test]
    fn test_highpass_half_passes_highs_blocks_lows() {
        let params = VarioParams::new(U0F16::from_bits(0xB000));
        let low = tone_peak(&params, 100);
        let high = tone_peak(&params, 16000);
        assert!(high > low * 3, "low {} high {}", low, high);
    }
}
