//! Knob positions owned by the UI thread

use qsynth::dsp::glide::GlideParams;
use qsynth::dsp::oscillator::{ShapedSawParams, ShapedTriParams, Waveform};
use qsynth::dsp::{AdsrParams, LfoParams, LfoWaveform};
use qsynth::effects::{AmpParams, ChorusParams, StereoDelayParams};
use qsynth::fixedmath::{I1F15, U0F16};

use crate::app::VoiceParams;

/// Half-cents per semitone.
const SEMITONE: i16 = 200;
const CUTOFF_STEP: i16 = 2 * SEMITONE;
const CUTOFF_RANGE: (i16, i16) = (24 * SEMITONE, 127 * SEMITONE);
const NOTE_RANGE: (i16, i16) = (24 * SEMITONE, 96 * SEMITONE);
const RESONANCE_STEP: u16 = 0x1000;
const MIX_STEP: i16 = 0x0800;

const SHAPES: [&str; 6] = ["saw", "ramp", "tri", "pulse", "shaped saw", "shaped tri"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub note: i16,
    pub cutoff: i16,
    pub resonance: u16,
    pub shape: usize,
    pub chorus_mix: i16,
    pub delay_mix: i16,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            note: 45 * SEMITONE,
            cutoff: 84 * SEMITONE,
            resonance: 0x8000,
            shape: 0,
            chorus_mix: 0x4000,
            delay_mix: 0x2000,
        }
    }
}

impl Controls {
    pub fn shape_name(&self) -> &'static str {
        SHAPES[self.shape]
    }

    pub fn next_shape(&mut self) {
        self.shape = (self.shape + 1) % SHAPES.len();
    }

    pub fn transpose(&mut self, semitones: i16) {
        self.note = (self.note + semitones * SEMITONE).clamp(NOTE_RANGE.0, NOTE_RANGE.1);
    }

    pub fn move_cutoff(&mut self, steps: i16) {
        self.cutoff = (self.cutoff + steps * CUTOFF_STEP).clamp(CUTOFF_RANGE.0, CUTOFF_RANGE.1);
    }

    pub fn move_resonance(&mut self, up: bool) {
        self.resonance = if up {
            self.resonance.saturating_add(RESONANCE_STEP)
        } else {
            self.resonance.saturating_sub(RESONANCE_STEP)
        };
    }

    pub fn move_chorus_mix(&mut self, up: bool) {
        self.chorus_mix = step_mix(self.chorus_mix, up);
    }

    pub fn move_delay_mix(&mut self, up: bool) {
        self.delay_mix = step_mix(self.delay_mix, up);
    }

    fn waveform(&self) -> Waveform {
        match self.shape {
            1 => Waveform::Ramp,
            2 => Waveform::Tri,
            3 => Waveform::Rect { pulse_width: 0x5000 },
            4 => Waveform::ShapedSaw(ShapedSawParams::new(U0F16::from_bits(0xC000))),
            5 => Waveform::ShapedTri(ShapedTriParams::new(U0F16::from_bits(0x4000))),
            _ => Waveform::Saw,
        }
    }

    pub fn params(&self) -> VoiceParams {
        VoiceParams {
            waveform: self.waveform(),
            glide: GlideParams::new(self.note, U0F16::from_bits(0x0040)),
            cutoff: self.cutoff,
            resonance: U0F16::from_bits(self.resonance),
            lfo: LfoParams::new(LfoWaveform::Sine, U0F16::from_bits(0x6000)),
            lfo_depth: 6 * SEMITONE,
            envelope: AdsrParams::default(),
            amp: AmpParams::new(U0F16::from_bits(0xC000), I1F15::ZERO),
            chorus: ChorusParams {
                mix: I1F15::from_bits(self.chorus_mix),
                ..ChorusParams::default()
            },
            delay: StereoDelayParams::new(
                125,
                I1F15::from_bits(0x5000),
                I1F15::from_bits(self.delay_mix),
                U0F16::from_bits(0x6000),
                I1F15::from_bits(0x6000),
            ),
        }
    }
}

fn step_mix(mix: i16, up: bool) -> i16 {
    if up {
        mix.saturating_add(MIX_STEP)
    } else {
        mix.saturating_sub(MIX_STEP).max(0)
    }
}
