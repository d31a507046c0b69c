use crate::fixedmath::{interp_lut_256, round_shr, sat16, sat16_wide, I1F15, I4F12, U0F16};
use crate::tables::SVF_G;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Two-Pole State-Variable Filter
==============================

Linear trapezoidal SVF (two integrators, one shared update) producing
lowpass, bandpass, highpass and notch from the same pass.

| tap      | formula            | passes          | rejects      |
| -------- | ------------------ | --------------- | ------------ |
| lowpass  | v2                 | below cutoff    | above cutoff |
| bandpass | v1                 | around cutoff   | far away     |
| highpass | x - k * v1 - v2    | above cutoff    | below cutoff |
| notch    | x - k * v1         | far away        | around       |

Coefficients (once per block)
-----------------------------

  g  = tan(pi * f / fs)           table lookup on `note << 1`, Q3.12
  k  = 2 * (1 - resonance)        approximated as (!resonance) >> 3, Q3.12
  a1 = 1 / ((g + k) * g + 1)      Q0.15, numerator 4095 instead of 4096
  a2 = g * a1                     Q0.15

The complement in `k` is a cheap stand-in for 1 - resonance (it is one LSB
short) and the 4095 numerator keeps a1 strictly below one. Both are part of
the filter's character and are kept as is.

Recurrence (per sample)
-----------------------

  v1 = a1 * s0 - a2 * s1 + a2 * x
  s0 = 2 * v1 - s0
  v2 = s1 + g * v1
  s1 = 2 * v2 - s1

State format
------------

The integrators are held with 40 fractional bits and eight units of
headroom. At the bottom of the note range g * v1 is around 2^-22 of the
signal, so anything narrower leaves a dead band in which s1 stops moving
before the lowpass output reaches a DC input. With 40 bits a constant input
settles on the exact input value for every in-range note and resonance.
*/

const STATE_FRAC: u32 = 40;
const INPUT_SHIFT: u32 = STATE_FRAC - 15;
const STATE_LIMIT: i64 = 8 << STATE_FRAC;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvfMode {
    Lowpass,
    Bandpass,
    Highpass,
    Notch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvfOutputs {
    pub lowpass: i16,
    pub bandpass: i16,
    pub highpass: i16,
    pub notch: i16,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvfParams {
    pub a1: I1F15,
    pub a2: I1F15,
    pub g: I4F12,
    pub k: I4F12,
}

impl SvfParams {
    /// Coefficients for a cutoff in half-cents and a Q0.16 resonance.
    pub fn new(note: i16, resonance: U0F16) -> Self {
        let g = interp_lut_256(&SVF_G, (note.max(0) as u16) << 1);
        let k = ((!resonance.to_bits()) >> 3) as i16;
        Self::from_gk(I4F12::from_bits(g), I4F12::from_bits(k))
    }

    /// Derive `a1` and `a2` from raw `g` and `k`. Negative inputs clamp to zero.
    pub fn from_gk(g: I4F12, k: I4F12) -> Self {
        let g = g.to_bits().max(0) as i32;
        let k = k.to_bits().max(0) as i32;
        let temp = round_shr(((g + k) * g) as i64, 12) as i32 + 4096;
        let a1 = sat16((4095 << 15) / temp);
        let a2 = sat16((g << 15) / temp);
        Self {
            a1: I1F15::from_bits(a1),
            a2: I1F15::from_bits(a2),
            g: I4F12::from_bits(g as i16),
            k: I4F12::from_bits(k as i16),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SvfState {
    s0: i64,
    s1: i64,
}

struct Taps {
    x: i64,
    v1: i64,
    v2: i64,
}

#[inline]
fn to_sample(v: i64) -> i16 {
    sat16_wide(round_shr(v, INPUT_SHIFT))
}

impl SvfState {
    pub const fn new() -> Self {
        Self { s0: 0, s1: 0 }
    }

    pub fn reset(&mut self) {
        self.s0 = 0;
        self.s1 = 0;
    }

    #[inline]
    fn tick(&mut self, params: &SvfParams, x: i16) -> Taps {
        let a1 = params.a1.to_bits() as i64;
        let a2 = params.a2.to_bits() as i64;
        let g = params.g.to_bits() as i64;
        let x = (x as i64) << INPUT_SHIFT;

        let v1 = round_shr(a1 * self.s0 - a2 * self.s1 + a2 * x, 15);
        self.s0 = (2 * v1 - self.s0).clamp(-STATE_LIMIT, STATE_LIMIT);

        let v2 = self.s1 + round_shr(g * v1, 12);
        self.s1 = (2 * v2 - self.s1).clamp(-STATE_LIMIT, STATE_LIMIT);

        Taps { x, v1, v2 }
    }

    #[inline]
    fn damped(params: &SvfParams, taps: &Taps) -> i64 {
        taps.x - round_shr(params.k.to_bits() as i64 * taps.v1, 12)
    }

    /// Advance one sample and return every tap.
    pub fn next_sample(&mut self, params: &SvfParams, x: i16) -> SvfOutputs {
        let taps = self.tick(params, x);
        let notch = Self::damped(params, &taps);
        SvfOutputs {
            lowpass: to_sample(taps.v2),
            bandpass: to_sample(taps.v1),
            highpass: to_sample(notch - taps.v2),
            notch: to_sample(notch),
        }
    }

    #[inline]
    pub fn lowpass_sample(&mut self, params: &SvfParams, x: i16) -> i16 {
        to_sample(self.tick(params, x).v2)
    }

    #[inline]
    pub fn bandpass_sample(&mut self, params: &SvfParams, x: i16) -> i16 {
        to_sample(self.tick(params, x).v1)
    }

    #[inline]
    pub fn highpass_sample(&mut self, params: &SvfParams, x: i16) -> i16 {
        let taps = self.tick(params, x);
        to_sample(Self::damped(params, &taps) - taps.v2)
    }

    pub fn lowpass_block(&mut self, params: &SvfParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.lowpass_sample(params, *sample);
        }
    }

    pub fn bandpass_block(&mut self, params: &SvfParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.bandpass_sample(params, *sample);
        }
    }

    pub fn highpass_block(&mut self, params: &SvfParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.highpass_sample(params, *sample);
        }
    }

    pub fn notch_block(&mut self, params: &SvfParams, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            let taps = self.tick(params, *sample);
            *sample = to_sample(Self::damped(params, &taps));
        }
    }

    pub fn render(&mut self, params: &SvfParams, mode: SvfMode, buffer: &mut [i16]) {
        match mode {
            SvfMode::Lowpass => self.lowpass_block(params, buffer),
            SvfMode::Bandpass => self.bandpass_block(params, buffer),
            SvfMode::Highpass => self.highpass_block(params, buffer),
            SvfMode::Notch => self.notch_block(params, buffer),
        }
    }
}
