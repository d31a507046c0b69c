//! Vowel formant filter: four resonant bandpass stages in series.

/*
Formant Filter
==============

Five vowels, four formants each. `shape` sweeps through the vowels: its two
top bits pick a pair of neighbouring vowels and the remaining 14 bits
interpolate between them.

    shape   0x0000   0x4000   0x8000   0xC000   0xFFFF
    vowel   0        1        2        3        (almost) 4

Each formant is a bandpass SVF. Its centre note is the table note plus the
base note (saturating) and its resonance comes from a second table. The
stages run in table order, lowest formant first. Each stage saturates its
output to 16 bits, so the order matters once a stage clips.
*/

use crate::dsp::svf::{SvfParams, SvfState};
use crate::fixedmath::{round_shr, U0F16};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const FORMANTS: usize = 4;
const VOWELS: usize = 5;

/// Formant centre notes in half-cents.
const FORMANT_NOTE: [[i16; FORMANTS]; VOWELS] = [
    [15647, 17236, 19944, 21248],
    [14021, 19096, 20065, 20854],
    [12321, 19498, 20656, 21248],
    [14014, 15787, 20025, 20757],
    [12610, 17328, 19772, 20886],
];

/// Formant resonance in Q0.15.
const FORMANT_RESONANCE: [[i16; FORMANTS]; VOWELS] = [
    [30798, 31248, 31694, 31684],
    [29609, 31880, 31731, 31554],
    [27566, 31978, 31894, 31684],
    [29603, 30455, 31719, 31519],
    [27992, 31288, 31639, 31565],
];

#[inline]
fn lerp_q15(from: i16, to: i16, frac: i16) -> i16 {
    let span = to as i64 - from as i64;
    (from as i64 + round_shr(span * frac as i64, 15)) as i16
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormantParams {
    pub stages: [SvfParams; FORMANTS],
}

impl FormantParams {
    pub fn new(base_note: i16, shape: U0F16) -> Self {
        let shape = shape.to_bits();
        let vowel = (shape >> 14) as usize;
        let frac = ((shape << 2) >> 1) as i16;

        let stages = std::array::from_fn(|stage| {
            let from = (FORMANT_NOTE[vowel][stage], FORMANT_RESONANCE[vowel][stage]);
            let to = (FORMANT_NOTE[vowel + 1][stage], FORMANT_RESONANCE[vowel + 1][stage]);
            let note = lerp_q15(from.0, to.0, frac);
            let resonance = lerp_q15(from.1, to.1, frac) as u16;
            SvfParams::new(
                base_note.saturating_add(note),
                U0F16::from_bits(resonance << 1),
            )
        });
        Self { stages }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormantState {
    stages: [SvfState; FORMANTS],
}

impl FormantState {
    pub const fn new() -> Self {
        Self {
            stages: [SvfState::new(); FORMANTS],
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn next_sample(&mut self, params: &FormantParams, x: i16) -> i16 {
        self.stages
            .iter_mut()
            .zip(&params.stages)
            .fold(x, |y, (state, stage)| state.bandpass_sample(stage, y))
    }

    pub fn render(&mut self, params: &FormantParams, buffer: &mut [i16]) {
        for (state, stage) in self.stages.iter_mut().zip(&params.stages) {
            state.bandpass_block(stage, buffer);
        }
    }
}
