//! Benchmarks for naive, shaped, stacked and noise oscillators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use qsynth::dsp::feedback::{FeedbackParams, FeedbackState};
use qsynth::dsp::noise::{LowpassNoiseParams, LowpassNoiseState};
use qsynth::dsp::oscillator::{self, Phase32, ShapedSawParams, Waveform};
use qsynth::dsp::pitch::note_to_freq;
use qsynth::dsp::supersaw::{SupersawParams, SupersawState};
use qsynth::fixedmath::U0F16;
use qsynth::rand::Rng;

use crate::BLOCK_SIZES;

const A3: i16 = 57 * 200;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let freq = note_to_freq(A3);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0i16; size];

        for (name, waveform) in [
            ("saw", Waveform::Saw),
            ("rect", Waveform::Rect { pulse_width: 0x4000 }),
            (
                "shaped_saw",
                Waveform::ShapedSaw(ShapedSawParams::new(U0F16::from_bits(0x8000))),
            ),
        ] {
            let mut phase = Phase32::new();
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    oscillator::render(black_box(&waveform), &mut phase, freq, 0, &mut buffer);
                })
            });
        }

        let params = SupersawParams::new(A3, freq, U0F16::from_bits(0xA000), U0F16::from_bits(0xC000));
        let mut state = SupersawState::new();
        group.bench_with_input(BenchmarkId::new("supersaw", size), &size, |b, _| {
            b.iter(|| state.render(black_box(&params), black_box(&mut buffer)))
        });

        let params = FeedbackParams::new(U0F16::from_bits(0x6000), U0F16::from_bits(0xC000));
        let mut state = FeedbackState::new();
        let mut phase = Phase32::new();
        group.bench_with_input(BenchmarkId::new("feedback", size), &size, |b, _| {
            b.iter(|| state.render(black_box(&params), &mut phase, freq, &mut buffer))
        });

        let params = LowpassNoiseParams::new(A3, U0F16::from_bits(0x8000), U0F16::from_bits(0x8000));
        let mut state = LowpassNoiseState::with_rng(Rng::with_seed(7));
        group.bench_with_input(BenchmarkId::new("lowpass_noise", size), &size, |b, _| {
            b.iter(|| state.render(black_box(&params), black_box(&mut buffer)))
        });
    }

    group.finish();
}
