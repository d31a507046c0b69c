//! Low Frequency Oscillator (LFO), updated once per block.

/*
Low Frequency Oscillator
========================

A 16-bit phase accumulator stepped once per update (normally once per
audio block, 500 updates per second at 48 kHz / 96). The rate knob maps to
the step through `tables::LFO_RATE`, an exponential curve from about
0.008 Hz to 100 Hz at that update rate.

A carry out of the phase add sets the `sync` flag for that update only. The
random and sample-and-hold shapes draw their new values on it, and other
components can read it to follow this LFO's cycle.

Waveforms
---------

    Square      +1 for the first half cycle, -1 for the second
    Saw         naive saw
    Tri         naive triangle
    Sine        table sine
    Random      a new random target every cycle, slid to linearly
    SampleHold  a new random value every cycle, held

Phase control
-------------

Hard sync locks a slave LFO to a master without sharing an accumulator.
The master's phase is turned back into elapsed time and forward into the
slave's cycle:

    phase = fract(f_slave / f_master * phase_master) + sync_phase

with `f_slave / f_master` held as Q16.16. Hard reset puts the phase at
`sync_phase` directly, e.g. on every note-on.
*/

use crate::dsp::oscillator::{rect, saw, tri};
use crate::fixedmath::{interp_lut_256, lerp_q16, sin_q15, U0F16, U16F16};
use crate::rand::{self, Rng};
use crate::tables::LFO_RATE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LfoWaveform {
    Square,
    Saw,
    Tri,
    #[default]
    Sine,
    Random,
    SampleHold,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LfoParams {
    pub waveform: LfoWaveform,
    pub rate: U0F16,
}

impl LfoParams {
    pub fn new(waveform: LfoWaveform, rate: U0F16) -> Self {
        Self { waveform, rate }
    }

    /// Phase step per update.
    #[inline]
    pub fn increment(&self) -> u16 {
        interp_lut_256(&LFO_RATE, self.rate.to_bits()) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LfoState {
    phase: u16,
    sync: bool,
    current: i16,
    last: i16,
    rng: Rng,
}

impl Default for LfoState {
    fn default() -> Self {
        Self::new()
    }
}

impl LfoState {
    pub fn new() -> Self {
        Self::with_rng(rand::fork())
    }

    pub const fn with_rng(rng: Rng) -> Self {
        Self {
            phase: 0,
            sync: false,
            current: 0,
            last: 0,
            rng,
        }
    }

    pub fn phase(&self) -> u16 {
        self.phase
    }

    /// `true` if the phase wrapped on the last free-running update.
    pub fn is_synced(&self) -> bool {
        self.sync
    }

    /// Free-running update: step the phase, then compute the output.
    pub fn update(&mut self, params: &LfoParams) -> i16 {
        let (phase, carry) = self.phase.overflowing_add(params.increment());
        self.phase = phase;
        self.sync = carry;
        self.output(params.waveform)
    }

    /// Hard-synced update: derive the phase from a master LFO.
    pub fn update_synced(
        &mut self,
        params: &LfoParams,
        master: &LfoParams,
        master_state: &LfoState,
        sync_phase: u16,
    ) -> i16 {
        let ratio = sync_ratio(params.increment(), master.increment());
        let scaled = (ratio.to_bits() as u64 * master_state.phase as u64) >> 16;
        // Whole cycles are dropped, only the fraction is a phase
        self.phase = (scaled as u16).wrapping_add(sync_phase);
        self.sync = false;
        self.output(params.waveform)
    }

    /// Hard-reset update: force the phase.
    pub fn update_reset(&mut self, params: &LfoParams, sync_phase: u16) -> i16 {
        self.phase = sync_phase;
        self.sync = false;
        self.output(params.waveform)
    }

    fn output(&mut self, waveform: LfoWaveform) -> i16 {
        match waveform {
            LfoWaveform::Square => rect(self.phase, 0x8000),
            LfoWaveform::Saw => saw(self.phase),
            LfoWaveform::Tri => tri(self.phase),
            LfoWaveform::Sine => sin_q15(self.phase),
            LfoWaveform::Random => {
                if self.sync {
                    self.last = self.current;
                    self.current = self.rng.next_q15();
                }
                lerp_q16(self.last, self.current, self.phase)
            }
            LfoWaveform::SampleHold => {
                if self.sync {
                    self.current = self.rng.next_q15();
                }
                self.current
            }
        }
    }
}

/// `freq / freq_master` as Q16.16. A stopped master yields zero.
fn sync_ratio(freq: u16, freq_master: u16) -> U16F16 {
    if freq_master == 0 {
        return U16F16::ZERO;
    }
    let ratio = ((freq as u32) << 16) / freq_master as u32;
    U16F16::from_bits(ratio)
}
