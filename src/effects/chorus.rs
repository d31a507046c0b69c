//! Stereo chorus with a randomly wandering delay.

/*
Stereo Chorus
=============

Each block is copied into a per-channel ring of 16 blocks (1536 samples,
32 ms at 48 kHz), one block slot ahead of the previous write. The wet signal
is read one block long from a point `delay` samples behind the block just
written, and added to the dry block:

    y[i] = x[i] + mix * ring[write + i - delay]

Delay modulation
----------------

One random LFO (updated once per block) moves the read points. Its value is
split into a common part, shared by both channels, and a differential part
that pushes them apart:

    common = lfo * (1 - spread)
    diff   = lfo * spread
    delay  = base + mod_depth * (common +/- diff) * base / 2

with `base = depth * 3` samples. The delay always lies in
[base / 2, 3 * base / 2], which for `depth <= 255` stays inside the ring.

The ring length is a multiple of the block length, so a write never wraps.
A read starting at an arbitrary sample does, and is split in two.
*/

use crate::dsp::lfo::{LfoParams, LfoState, LfoWaveform};
use crate::fixedmath::{mul_q15_q16, round_shr, sat16, sat16_wide, I1F15, U0F16};
use crate::rand::Rng;
use crate::BLOCK_LEN;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const RING_BLOCKS: usize = 16;
const RING_LEN: usize = RING_BLOCKS * BLOCK_LEN;
const DEPTH_FACTOR: u16 = 3;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChorusParams {
    /// Base delay, in steps of three samples.
    pub depth: u8,
    /// Rate of the random LFO.
    pub rate: U0F16,
    /// How far the LFO moves the delay around its base.
    pub mod_depth: U0F16,
    /// 0 moves both channels together, full moves them in opposite
    /// directions.
    pub spread: U0F16,
    pub mix: I1F15,
}

impl ChorusParams {
    pub fn new(depth: u8, rate: U0F16, mod_depth: U0F16, spread: U0F16, mix: I1F15) -> Self {
        Self {
            depth,
            rate,
            mod_depth,
            spread,
            mix,
        }
    }

    /// Base delay in samples.
    pub fn base_delay(&self) -> u16 {
        self.depth as u16 * DEPTH_FACTOR
    }
}

impl Default for ChorusParams {
    fn default() -> Self {
        Self::new(
            128,
            U0F16::from_bits(0x6000),
            U0F16::from_bits(0x8000),
            U0F16::from_bits(0x8000),
            I1F15::from_bits(0x4000),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChorusState {
    ring_left: [i16; RING_LEN],
    ring_right: [i16; RING_LEN],
    write_block: usize,
    lfo: LfoState,
}

impl Default for ChorusState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChorusState {
    pub fn new() -> Self {
        Self::with_lfo(LfoState::new())
    }

    pub fn with_rng(rng: Rng) -> Self {
        Self::with_lfo(LfoState::with_rng(rng))
    }

    fn with_lfo(lfo: LfoState) -> Self {
        Self {
            ring_left: [0; RING_LEN],
            ring_right: [0; RING_LEN],
            // The first block lands in slot 0
            write_block: RING_BLOCKS - 1,
            lfo,
        }
    }

    pub fn reset(&mut self) {
        self.ring_left.fill(0);
        self.ring_right.fill(0);
        self.write_block = RING_BLOCKS - 1;
    }

    /// Process one stereo block in place. Both slices must be `BLOCK_LEN`
    /// long.
    pub fn render(&mut self, params: &ChorusParams, left: &mut [i16], right: &mut [i16]) {
        debug_assert_eq!(left.len(), BLOCK_LEN);
        debug_assert_eq!(right.len(), BLOCK_LEN);

        self.write_block = (self.write_block + 1) % RING_BLOCKS;
        let write_pos = self.write_block * BLOCK_LEN;
        self.ring_left[write_pos..write_pos + BLOCK_LEN].copy_from_slice(left);
        self.ring_right[write_pos..write_pos + BLOCK_LEN].copy_from_slice(right);

        let lfo_params = LfoParams::new(LfoWaveform::Random, params.rate);
        let lfo = self.lfo.update(&lfo_params);
        let diff = mul_q15_q16(lfo, params.spread.to_bits()) as i32;
        let common = mul_q15_q16(lfo, !params.spread.to_bits()) as i32;

        let base = params.base_delay();
        let read_left = read_pos(write_pos, base, common + diff, params.mod_depth);
        let read_right = read_pos(write_pos, base, common - diff, params.mod_depth);

        add_delayed(&self.ring_left, read_left, params.mix, left);
        add_delayed(&self.ring_right, read_right, params.mix, right);
    }
}

fn read_pos(write_pos: usize, base: u16, modulation: i32, mod_depth: U0F16) -> usize {
    let amount = mul_q15_q16(sat16(modulation), mod_depth.to_bits());
    let offset = mul_q15_q16(amount, base) as i32;
    let pos = write_pos as i32 - base as i32 - offset;
    pos.rem_euclid(RING_LEN as i32) as usize
}

/// `data[i] += mix * ring[start + i]`, wrapping at the end of the ring.
fn add_delayed(ring: &[i16; RING_LEN], start: usize, mix: I1F15, data: &mut [i16]) {
    let first = (RING_LEN - start).min(data.len());
    let (head, tail) = data.split_at_mut(first);
    mix_into(&ring[start..start + first], mix, head);
    mix_into(&ring[..tail.len()], mix, tail);
}

#[inline]
fn mix_into(delayed: &[i16], mix: I1F15, data: &mut [i16]) {
    let mix = mix.to_bits() as i64;
    for (y, &d) in data.iter_mut().zip(delayed) {
        let acc = ((*y as i64) << 15) + d as i64 * mix;
        *y = sat16_wide(round_shr(acc, 15));
    }
}
