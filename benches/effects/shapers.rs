//! Benchmarks for the per-sample effects: bitcrusher, distortion, tone,
//! formant and the output VCA.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use qsynth::effects::{
    AmpParams, BitcrusherParams, BitcrusherState, DistortionParams, FormantParams, FormantState,
    ToneParams, ToneState,
};
use qsynth::fixedmath::{I1F15, U0F16};

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_shapers(c: &mut Criterion) {
    let mut group = c.benchmark_group("effects/shapers");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);
        let mut left = input.clone();
        let mut right = input.clone();

        let params = BitcrusherParams::with_bit_depth(U0F16::from_bits(0x2000), 6);
        let mut state = BitcrusherState::new();
        group.bench_with_input(BenchmarkId::new("bitcrusher", size), &size, |b, _| {
            b.iter(|| {
                left.copy_from_slice(&input);
                right.copy_from_slice(&input);
                state.render(black_box(&params), &mut left, &mut right);
            })
        });

        let params = DistortionParams::new(U0F16::from_bits(0xC000), U0F16::from_bits(0x8000));
        group.bench_with_input(BenchmarkId::new("distortion", size), &size, |b, _| {
            b.iter(|| {
                left.copy_from_slice(&input);
                right.copy_from_slice(&input);
                black_box(&params).render(&mut left, &mut right);
            })
        });

        let params = ToneParams::new(I1F15::from_bits(0x4000), I1F15::from_bits(-0x4000));
        let mut state = ToneState::new();
        group.bench_with_input(BenchmarkId::new("tone", size), &size, |b, _| {
            b.iter(|| {
                left.copy_from_slice(&input);
                right.copy_from_slice(&input);
                state.render(black_box(&params), &mut left, &mut right);
            })
        });

        let params = FormantParams::new(0, U0F16::from_bits(0x6000));
        let mut state = FormantState::new();
        group.bench_with_input(BenchmarkId::new("formant", size), &size, |b, _| {
            b.iter(|| {
                left.copy_from_slice(&input);
                state.render(black_box(&params), &mut left);
            })
        });

        let params = AmpParams::new(U0F16::from_bits(0xC000), I1F15::from_bits(0x2000));
        group.bench_with_input(BenchmarkId::new("amp_pan", size), &size, |b, _| {
            b.iter(|| black_box(&params).render(&input, &mut left, &mut right))
        });
    }

    group.finish();
}
