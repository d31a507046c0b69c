//! ADSR envelope with exponential segments.

use crate::fixedmath::U0F16;
use crate::tables::EXP_DECAY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
ADSR Envelope
=============

Every segment is a one-pole approach to a target, computed by repeated
multiplication with a per-sample factor from `tables::EXP_DECAY`:

    release:  v = v * R                      (towards 0)
    attack:   v = 1 - (1 - v) * A            (towards 1)
    decay:    v = S + (v - S) * D            (towards sustain S)

  Level
    1.0 ┐    ╭──╮
        │   ╱    ╲___________
    S   │  │                 ╲
        │ ╱                   ╲__
    0.0 └╯──────────────────────────→ Time
         A    D     (S)       R

Time parameters are 8-bit indices into the 256-entry table. Index 0 is the
fastest segment (factor 0.135) and 255 the slowest (factor 0.99989).


Stages
------

Only three stages exist. Sustain is the target of Decay, not a stage of its
own, so Decay keeps running for as long as the gate is held.

    ┌─────────┐  trigger   ┌────────┐  v == 1.0  ┌───────┐
    │ Release │ ─────────→ │ Attack │ ─────────→ │ Decay │
    └─────────┘            └────────┘            └───────┘
         ↑   gate low           │                    │
         └──────────────────────┴────────────────────┘

Before each sample:

  1. gate low        → Release, whatever the current stage
  2. trigger pending → Attack, whatever the current stage

The trigger is checked as its own flag rather than as a rising gate edge.
Gate and trigger come from the control side at their own pace, and a
retrigger while the gate stays high has no edge to detect.

The value never jumps on a stage change. Retriggering during release starts
the attack from wherever the release had got to.


Arithmetic
----------

The value is Q0.16 and every multiply truncates. Truncation is what makes the
attack settle: once `1 - v` is one LSB, `(1 - v) * A` truncates to zero and
the value lands exactly on 0xFFFF, which is the condition for entering Decay.
Decay works on the signed distance to sustain, so a sustain level raised
above the current value mid-decay pulls the value up instead of wrapping.
The distance times the decay factor needs more than 32 bits at full scale.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AdsrStage {
    #[default]
    Release,
    Attack,
    Decay,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdsrParams {
    pub attack: u8,
    pub decay: u8,
    pub sustain: U0F16,
    pub release: u8,
}

impl AdsrParams {
    pub fn new(attack: u8, decay: u8, sustain: U0F16, release: u8) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self::new(40, 120, U0F16::from_bits(0xB000), 140)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdsrState {
    stage: AdsrStage,
    value: u16,
    gate: bool,
    trigger: bool,
}

#[inline]
fn decay_by(value: u16, index: u8) -> u16 {
    ((value as u32 * EXP_DECAY[index as usize] as u32) >> 16) as u16
}

impl AdsrState {
    pub const fn new() -> Self {
        Self {
            stage: AdsrStage::Release,
            value: 0,
            gate: false,
            trigger: false,
        }
    }

    pub fn stage(&self) -> AdsrStage {
        self.stage
    }

    pub fn value(&self) -> U0F16 {
        U0F16::from_bits(self.value)
    }

    pub fn is_gate_open(&self) -> bool {
        self.gate
    }

    /// Set the held gate level.
    pub fn gate(&mut self, open: bool) {
        self.gate = open;
    }

    /// Request a (re)start of the attack. Consumed by the next sample.
    pub fn trigger(&mut self) {
        self.trigger = true;
    }

    /// Note on: open the gate and trigger.
    pub fn note_on(&mut self) {
        self.gate = true;
        self.trigger = true;
    }

    pub fn note_off(&mut self) {
        self.gate = false;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance one sample with explicit gate and trigger inputs.
    pub fn update(&mut self, params: &AdsrParams, gate: bool, trigger: bool) -> U0F16 {
        if !gate {
            self.stage = AdsrStage::Release;
        } else if trigger {
            self.stage = AdsrStage::Attack;
        }

        match self.stage {
            AdsrStage::Release => {
                self.value = decay_by(self.value, params.release);
            }
            AdsrStage::Attack => {
                self.value = !decay_by(!self.value, params.attack);
                if self.value == u16::MAX {
                    self.stage = AdsrStage::Decay;
                }
            }
            AdsrStage::Decay => {
                let sustain = params.sustain.to_bits() as i64;
                let distance = self.value as i64 - sustain;
                let factor = EXP_DECAY[params.decay as usize] as i64;
                // Division truncates toward zero, so the value lands on
                // sustain from either side
                self.value = (sustain + distance * factor / 65536) as u16;
            }
        }

        U0F16::from_bits(self.value)
    }

    /// Advance one sample using the stored gate and any pending trigger.
    #[inline]
    pub fn next_sample(&mut self, params: &AdsrParams) -> U0F16 {
        let trigger = std::mem::take(&mut self.trigger);
        self.update(params, self.gate, trigger)
    }

    /// Fill `buffer` with Q0.16 envelope values.
    pub fn render(&mut self, params: &AdsrParams, buffer: &mut [u16]) {
        for value in buffer.iter_mut() {
            *value = self.next_sample(params).to_bits();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> AdsrParams {
        AdsrParams::new(20, 60, U0F16::from_bits(0x8000), 40)
    }

    #[test]
    fn test_attack_rises_monotonically_into_decay() {
        let params = params();
        let mut env = AdsrState::new();
        env.note_on();

        let mut last = 0u16;
        let mut samples = 0;
        while env.stage() != AdsrStage::Decay {
            let v = env.next_sample(&params).to_bits();
            assert!(v >= last, "attack fell from {} to {}", last, v);
            if env.stage() == AdsrStage::Attack {
                assert!(v < u16::MAX, "still in attack at full scale");
            } else {
                assert_eq!(v, u16::MAX, "entered decay below full scale");
            }
            last = v;
            samples += 1;
            assert!(samples < 100_000, "attack never settled");
        }
    }

    #[test]
    fn test_decay_approaches_sustain() {
        let params = params();
        let mut env = AdsrState::new();
        env.note_on();
        let mut buffer = vec![0u16; 48_000];
        env.render(&params, &mut buffer);

        assert_eq!(env.stage(), AdsrStage::Decay);
        let sustain = params.sustain.to_bits();
        let settled = *buffer.last().unwrap_or(&0);
        assert!(settled >= sustain && settled - sustain <= 1, "settled at {}", settled);
    }

    #[test]
    fn test_gate_off_releases_from_any_stage() {
        let params = params();
        for run_in in [10usize, 500, 20_000] {
            let mut env = AdsrState::new();
            env.note_on();
            let mut buffer = vec![0u16; run_in];
            env.render(&params, &mut buffer);
            let before = env.value().to_bits();

            env.note_off();
            let mut last = before;
            for _ in 0..20_000 {
                let v = env.next_sample(&params).to_bits();
                assert_eq!(env.stage(), AdsrStage::Release);
                assert!(v <= last, "release rose from {} to {}", last, v);
                last = v;
            }
            assert_eq!(last, 0, "release did not reach zero after {} samples", run_in);
        }
    }

    #[test]
    fn test_release_uses_release_table() {
        let params = params();
        let mut env = AdsrState::new();
        env.note_on();
        env.next_sample(&params);
        let v = env.value().to_bits();
        env.note_off();
        let released = env.next_sample(&params).to_bits();
        let factor = EXP_DECAY[params.release as usize] as u32;
        assert_eq!(released as u32, (v as u32 * factor) >> 16);
    }

    #[test]
    fn test_trigger_without_gate_is_ignored() {
        let params = params();
        let mut env = AdsrState::new();
        assert_eq!(env.update(&params, false, true).to_bits(), 0);
        assert_eq!(env.stage(), AdsrStage::Release);
    }

    #[test]
    fn test_retrigger_continues_from_current_value() {
        let params = params();
        let mut env = AdsrState::new();
        env.note_on();
        let mut buffer = vec![0u16; 2_000];
        env.render(&params, &mut buffer);
        env.note_off();
        env.render(&params, &mut buffer[..5]);
        let released = env.value().to_bits();
        assert!(released > 0);

        env.note_on();
        let v = env.next_sample(&params).to_bits();
        assert_eq!(env.stage(), AdsrStage::Attack);
        assert!(v > released, "attack restarted from {} instead of {}", v, released);
    }

    #[test]
    fn test_retrigger_with_gate_held() {
        let params = params();
        let mut env = AdsrState::new();
        env.note_on();
        let mut buffer = vec![0u16; 48_000];
        env.render(&params, &mut buffer);
        assert_eq!(env.stage(), AdsrStage::Decay);

        // No gate edge, only the trigger flag
        env.trigger();
        env.next_sample(&params);
        assert_eq!(env.stage(), AdsrStage::Attack);
    }

    #[test]
    fn test_trigger_applies_to_first_sample_only() {
        let params = params();
        let mut env = AdsrState::new();
        env.note_on();
        let mut buffer = vec![0u16; 20_000];
        env.render(&params, &mut buffer);
        // Had the trigger stuck, the envelope would never leave attack
        assert_eq!(env.stage(), AdsrStage::Decay);
    }

    #[test]
    fn test_raised_sustain_pulls_value_up() {
        let mut params = params();
        let mut env = AdsrState::new();
        env.note_on();
        let mut buffer = vec![0u16; 48_000];
        env.render(&params, &mut buffer);

        params.sustain = U0F16::from_bits(0xF000);
        env.render(&params, &mut buffer);
        let v = env.value().to_bits();
        assert!(v <= 0xF000 && 0xF000 - v <= 1, "value {} after sustain raise", v);
    }

    #[test]
    fn test_decay_from_full_scale_is_exponential() {
        let params = AdsrParams::new(0, 200, U0F16::ZERO, 10);
        let mut env = AdsrState::new();
        env.note_on();

        let mut values = Vec::new();
        for _ in 0..200 {
            let v = env.next_sample(&params).to_bits();
            if env.stage() == AdsrStage::Decay {
                values.push(v);
            }
        }

        assert!(values.len() > 100);
        let steps: Vec<u16> = values.windows(2).map(|w| w[0] - w[1]).collect();
        for pair in steps.windows(2) {
            assert!(pair[1] <= pair[0], "decay step grew from {} to {}", pair[0], pair[1]);
        }
        let first = steps[0];
        let last = *steps.last().unwrap();
        assert!(last < first, "decay fell linearly at {} per sample", first);
    }

    #[test]
    fn test_every_decay_index_settles_on_sustain() {
        for decay in 0..=u8::MAX {
            let mut params = AdsrParams::new(0, decay, U0F16::ZERO, 0);
            let mut env = AdsrState::new();
            env.note_on();
            while env.stage() != AdsrStage::Decay {
                env.next_sample(&params);
            }

            // Down from full scale to a zero sustain
            let mut last = env.value().to_bits();
            let mut samples = 0;
            while last != 0 {
                let v = env.next_sample(&params).to_bits();
                assert!(v < last, "decay {} stalled or rose at {}", decay, last);
                last = v;
                samples += 1;
                assert!(samples < 30_000, "decay {} never reached zero", decay);
            }

            // Back up to a full scale sustain
            params.sustain = U0F16::from_bits(u16::MAX);
            samples = 0;
            while last != u16::MAX {
                let v = env.next_sample(&params).to_bits();
                assert!(v > last, "decay {} stalled or fell at {}", decay, last);
                last = v;
                samples += 1;
                assert!(samples < 30_000, "decay {} never reached full scale", decay);
            }
            assert_eq!(env.stage(), AdsrStage::Decay);
        }
    }

    #[test]
    fn test_decay_from_below_lands_on_sustain() {
        let mut params = AdsrParams::new(0, 255, U0F16::from_bits(0x8000), 0);
        let mut env = AdsrState::new();
        env.note_on();
        let mut buffer = vec![0u16; 30_000];
        env.render(&params, &mut buffer);
        assert_eq!(env.value().to_bits(), 0x8000);

        params.sustain = U0F16::from_bits(0xF000);
        env.render(&params, &mut buffer);
        assert_eq!(env.value().to_bits(), 0xF000);
    }

    #[test]
    fn test_full_cycle_at_parameter_extremes() {
        const LIMIT: usize = 30_000;
        for attack in [0u8, u8::MAX] {
            for decay in [0u8, u8::MAX] {
                for sustain in [0u16, u16::MAX] {
                    for release in [0u8, u8::MAX] {
                        let params =
                            AdsrParams::new(attack, decay, U0F16::from_bits(sustain), release);
                        let label = format!("a={} d={} s={:#x} r={}", attack, decay, sustain, release);
                        let mut env = AdsrState::new();
                        env.note_on();

                        let mut last = 0u16;
                        let mut samples = 0;
                        while env.stage() != AdsrStage::Decay {
                            let v = env.next_sample(&params).to_bits();
                            assert!(v >= last, "{}: attack fell", label);
                            last = v;
                            samples += 1;
                            assert!(samples < LIMIT, "{}: attack never settled", label);
                        }
                        assert_eq!(last, u16::MAX, "{}: decay entered below full scale", label);

                        samples = 0;
                        while last != sustain {
                            let v = env.next_sample(&params).to_bits();
                            assert!(v <= last && v >= sustain, "{}: decay overshot at {}", label, v);
                            last = v;
                            samples += 1;
                            assert!(samples < LIMIT, "{}: decay never reached sustain", label);
                        }
                        let mut held = vec![0u16; 100];
                        env.render(&params, &mut held);
                        assert!(held.iter().all(|&v| v == sustain), "{}: sustain drifted", label);

                        env.note_off();
                        samples = 0;
                        while last != 0 {
                            let v = env.next_sample(&params).to_bits();
                            assert_eq!(env.stage(), AdsrStage::Release);
                            assert!(v <= last, "{}: release rose", label);
                            last = v;
                            samples += 1;
                            assert!(samples < LIMIT, "{}: release never reached zero", label);
                        }
                    }
                }
            }
        }
    }
}
