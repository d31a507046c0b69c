//! Benchmarks for the envelope, glide and LFO.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use qsynth::dsp::glide::{GlideParams, GlideState};
use qsynth::dsp::{AdsrParams, AdsrState, LfoParams, LfoState, LfoWaveform};
use qsynth::fixedmath::U0F16;
use qsynth::rand::Rng;
use qsynth::BLOCK_LEN;

use crate::BLOCK_SIZES;

pub fn bench_modulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/modulation");

    for &size in BLOCK_SIZES {
        // Long attack and release keep the envelope off its fixed points
        let params = AdsrParams::new(200, 200, U0F16::from_bits(0x8000), 200);
        let mut state = AdsrState::new();
        let mut levels = vec![0u16; size];
        let mut gate = false;
        group.bench_with_input(BenchmarkId::new("adsr", size), &size, |b, _| {
            b.iter(|| {
                gate = !gate;
                state.gate(gate);
                state.render(black_box(&params), black_box(&mut levels));
            })
        });

        let mut state = GlideState::new();
        let mut notes = vec![0i16; size];
        let mut target = 0;
        group.bench_with_input(BenchmarkId::new("glide", size), &size, |b, _| {
            b.iter(|| {
                target ^= 12_000;
                let params = GlideParams::new(target, U0F16::from_bits(0x0100));
                state.render(black_box(&params), black_box(&mut notes));
            })
        });

        // The LFO runs once per block
        let blocks = size / BLOCK_LEN;
        let params = LfoParams::new(LfoWaveform::Random, U0F16::from_bits(0xC000));
        let mut state = LfoState::with_rng(Rng::with_seed(3));
        group.bench_with_input(BenchmarkId::new("lfo_random", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..blocks {
                    black_box(state.update(black_box(&params)));
                }
            })
        });
    }

    group.finish();
}
