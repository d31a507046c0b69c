//! Audio side of the rig: one voice into the stereo effects chain.
//!
//! ```text
//! glide -> oscillator -> SVF lowpass -> envelope -> amp/pan -> chorus -> delay
//!                           ^
//!                          LFO
//! ```
//!
//! The UI thread computes [`VoiceParams`] and pushes them through a
//! [`ParamChannel`]; the audio callback picks up the newest value at the
//! start of each block. The device buffer size is whatever the host hands
//! us, so the callback re-blocks into `BLOCK_LEN` chunks.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};

use qsynth::control::{ParamChannel, ParamReceiver, SharedEnvelope};
use qsynth::dsp::glide::{GlideParams, GlideState};
use qsynth::dsp::oscillator::{Phase32, Waveform};
use qsynth::dsp::pitch::note_to_freq;
use qsynth::dsp::{AdsrParams, LfoParams, LfoState, SvfParams, SvfState};
use qsynth::effects::{AmpParams, ChorusParams, ChorusState, StereoDelayParams, StereoDelayState};
use qsynth::fixedmath::{mul_q15, mul_q15_q16, q15_to_f32, U0F16};
use qsynth::{Block, BLOCK_LEN, SAMPLE_RATE};

use super::ui::{Controls, UiApp};

const PARAM_QUEUE_SIZE: usize = 16;
/// About 170 ms of scope samples.
const SCOPE_QUEUE_SIZE: usize = 8192;

/// Everything the audio side needs for one block, computed on the UI thread.
#[derive(Debug, Clone, Copy)]
pub struct VoiceParams {
    pub waveform: Waveform,
    pub glide: GlideParams,
    pub cutoff: i16,
    pub resonance: U0F16,
    pub lfo: LfoParams,
    /// Cutoff swing at full LFO output, in half-cents.
    pub lfo_depth: i16,
    pub envelope: AdsrParams,
    pub amp: AmpParams,
    pub chorus: ChorusParams,
    pub delay: StereoDelayParams,
}

/// Voice and effect states, owned by the audio callback.
pub struct Rig {
    params_rx: ParamReceiver<VoiceParams>,
    params: VoiceParams,
    envelope: SharedEnvelope,
    phase: Phase32,
    glide: GlideState,
    lfo: LfoState,
    filter: SvfState,
    chorus: ChorusState,
    delay: StereoDelayState,
    voice: Block,
    gain: [u16; BLOCK_LEN],
}

impl Rig {
    pub fn new(
        params_rx: ParamReceiver<VoiceParams>,
        envelope: SharedEnvelope,
        params: VoiceParams,
    ) -> Self {
        let mut glide = GlideState::new();
        glide.set(params.glide.note);
        Self {
            params_rx,
            params,
            envelope,
            phase: Phase32::new(),
            glide,
            lfo: LfoState::new(),
            filter: SvfState::new(),
            chorus: ChorusState::new(),
            delay: StereoDelayState::new(),
            voice: [0; BLOCK_LEN],
            gain: [0; BLOCK_LEN],
        }
    }

    pub fn render(&mut self, left: &mut Block, right: &mut Block) {
        self.params_rx.update(&mut self.params);
        let params = &self.params;

        for sample in self.voice.iter_mut() {
            let note = self.glide.next_sample(&params.glide);
            self.phase.advance(note_to_freq(note));
            *sample = params.waveform.sample(self.phase.q16());
        }

        let sweep = mul_q15(self.lfo.update(&params.lfo), params.lfo_depth);
        let cutoff = SvfParams::new(params.cutoff.saturating_add(sweep), params.resonance);
        self.filter.lowpass_block(&cutoff, &mut self.voice);

        self.envelope.render(&params.envelope, &mut self.gain);
        for (sample, &gain) in self.voice.iter_mut().zip(self.gain.iter()) {
            *sample = mul_q15_q16(*sample, gain);
        }

        params.amp.render(&self.voice, left, right);
        self.chorus.render(&params.chorus, left, right);
        self.delay.render(&params.delay, left, right);
    }
}

/// Adapts the block-based rig to the host's interleaved `f32` buffers.
struct Output {
    rig: Rig,
    left: Block,
    right: Block,
    position: usize,
    scope_tx: Producer<f32>,
}

impl Output {
    fn new(rig: Rig, scope_tx: Producer<f32>) -> Self {
        Self {
            rig,
            left: [0; BLOCK_LEN],
            right: [0; BLOCK_LEN],
            position: BLOCK_LEN,
            scope_tx,
        }
    }

    fn fill(&mut self, data: &mut [f32], channels: usize) {
        for frame in data.chunks_mut(channels) {
            if self.position == BLOCK_LEN {
                self.rig.render(&mut self.left, &mut self.right);
                self.position = 0;
            }
            let left = q15_to_f32(self.left[self.position]);
            let right = q15_to_f32(self.right[self.position]);
            self.position += 1;

            for (channel, out) in frame.iter_mut().enumerate() {
                *out = if channel % 2 == 0 { left } else { right };
            }
            // The scope is best effort, a full ring just skips samples
            let _ = self.scope_tx.push(0.5 * (left + right));
        }
    }
}

pub fn run() -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let channels = config.channels() as usize;
    let device_rate = config.sample_rate().0;
    if device_rate != SAMPLE_RATE {
        log::warn!(
            "device runs at {} Hz, tables are built for {} Hz; pitch will be off",
            device_rate,
            SAMPLE_RATE
        );
    }
    log::info!("output: {} channels at {} Hz", channels, device_rate);

    let controls = Controls::default();
    let (params_tx, params_rx) = ParamChannel::new(PARAM_QUEUE_SIZE);
    let (envelope, gate) = SharedEnvelope::new();
    let (scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_QUEUE_SIZE);

    let mut output = Output::new(Rig::new(params_rx, envelope, controls.params()), scope_tx);
    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| output.fill(data, channels),
            |err| log::error!("audio stream error: {}", err),
            None,
        )
        .wrap_err("failed to build output stream")?;
    stream.play().wrap_err("failed to start output stream")?;

    let mut terminal = ratatui::init();
    let result = UiApp::new(scope_rx, params_tx, gate, controls).run(&mut terminal);
    ratatui::restore();
    result
}
