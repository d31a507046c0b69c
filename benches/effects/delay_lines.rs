//! Benchmarks for the block-structured effects: chorus and stereo delay.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use qsynth::effects::{ChorusParams, ChorusState, StereoDelayParams, StereoDelayState};
use qsynth::fixedmath::{I1F15, U0F16};
use qsynth::rand::Rng;
use qsynth::BLOCK_LEN;

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_delay_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("effects/delay_lines");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);
        let mut left = input.clone();
        let mut right = input.clone();

        let params = ChorusParams::default();
        let mut chorus = ChorusState::with_rng(Rng::with_seed(11));
        group.bench_with_input(BenchmarkId::new("chorus", size), &size, |b, _| {
            b.iter(|| {
                left.copy_from_slice(&input);
                right.copy_from_slice(&input);
                for (l, r) in left
                    .chunks_exact_mut(BLOCK_LEN)
                    .zip(right.chunks_exact_mut(BLOCK_LEN))
                {
                    chorus.render(black_box(&params), l, r);
                }
            })
        });

        let params = StereoDelayParams::new(
            100,
            I1F15::from_bits(0x6000),
            I1F15::from_bits(0x4000),
            U0F16::from_bits(0x7000),
            I1F15::from_bits(0x2000),
        );
        let mut delay = StereoDelayState::new();
        group.bench_with_input(BenchmarkId::new("stereo_delay", size), &size, |b, _| {
            b.iter(|| {
                left.copy_from_slice(&input);
                right.copy_from_slice(&input);
                for (l, r) in left
                    .chunks_exact_mut(BLOCK_LEN)
                    .zip(right.chunks_exact_mut(BLOCK_LEN))
                {
                    delay.render(black_box(&params), l, r);
                }
            })
        });
    }

    group.finish();
}
