//! Benchmarks for the one-pole, vario and state-variable filters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use qsynth::dsp::one_pole::{OnePoleParams, OnePoleState};
use qsynth::dsp::svf::{SvfMode, SvfParams, SvfState};
use qsynth::dsp::vario::VarioParams;
use qsynth::fixedmath::U0F16;

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);
        let mut buffer = input.clone();

        let params = OnePoleParams::from_note(16_000);
        let mut state = OnePoleState::new();
        group.bench_with_input(BenchmarkId::new("one_pole_lowpass", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                state.lowpass_block(black_box(&params), black_box(&mut buffer));
            })
        });

        let params = VarioParams::new(U0F16::from_bits(0xC000));
        let mut state = OnePoleState::new();
        group.bench_with_input(BenchmarkId::new("vario", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                state.vario_block(black_box(&params), black_box(&mut buffer));
            })
        });

        let params = SvfParams::new(16_000, U0F16::from_bits(0xC000));
        for (name, mode) in [
            ("svf_lowpass", SvfMode::Lowpass),
            ("svf_bandpass", SvfMode::Bandpass),
            ("svf_highpass", SvfMode::Highpass),
        ] {
            let mut state = SvfState::new();
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    state.render(black_box(&params), mode, black_box(&mut buffer));
                })
            });
        }
    }

    group.finish();
}
