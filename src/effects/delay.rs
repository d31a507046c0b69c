//! Stereo feedback delay with a filtered, cross-fed feedback path.

/*
Stereo Delay
============

Each channel owns a ring of 256 blocks. The delay time is a whole number of
blocks, so every read and write is one contiguous block.

Per block, with `d` the block read from `time_blocks` blocks ago:

    dry[k] = dry[k] + mix      * d[k]        (output)
    d[k]   = dry[k] + feedback * d[k]        (next delay-line input)

Both lines use the dry input from before the first line, in one pass. The
delay-line input is then shaped before it is written back:

    1. brightness   vario one-pole on each channel (dark lowpass ... bright
                    highpass, see `dsp::vario`)
    2. spread       L' = (1 - s) * L + s * R
                    R' = s * L + (1 - s) * R

Spread 0 keeps the channels apart. Full spread swaps them on every pass,
which is a ping-pong delay.
*/

use crate::dsp::vario::{StereoVarioState, VarioParams};
use crate::fixedmath::{round_shr, sat16_wide, I1F15, U0F16};
use crate::{Block, BLOCK_LEN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const MAX_DELAY_BLOCKS: usize = 256;
const BLOCK_MASK: usize = MAX_DELAY_BLOCKS - 1;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StereoDelayParams {
    /// Delay in blocks, 1..=255.
    pub time_blocks: u8,
    pub feedback: I1F15,
    pub mix: I1F15,
    pub brightness: VarioParams,
    pub spread: I1F15,
}

impl StereoDelayParams {
    /// A delay time of zero is raised to one block.
    pub fn new(
        time_blocks: u8,
        feedback: I1F15,
        mix: I1F15,
        brightness: U0F16,
        spread: I1F15,
    ) -> Self {
        Self {
            time_blocks: time_blocks.max(1),
            feedback,
            mix,
            brightness: VarioParams::new(brightness),
            spread,
        }
    }

    pub fn delay_samples(&self) -> usize {
        self.time_blocks as usize * BLOCK_LEN
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StereoDelayState {
    line_left: Box<[Block; MAX_DELAY_BLOCKS]>,
    line_right: Box<[Block; MAX_DELAY_BLOCKS]>,
    write_block: usize,
    brightness: StereoVarioState,
}

impl Default for StereoDelayState {
    fn default() -> Self {
        Self::new()
    }
}

impl StereoDelayState {
    pub fn new() -> Self {
        Self {
            line_left: Box::new([[0; BLOCK_LEN]; MAX_DELAY_BLOCKS]),
            line_right: Box::new([[0; BLOCK_LEN]; MAX_DELAY_BLOCKS]),
            write_block: 0,
            brightness: StereoVarioState::new(),
        }
    }

    pub fn reset(&mut self) {
        self.line_left.fill([0; BLOCK_LEN]);
        self.line_right.fill([0; BLOCK_LEN]);
        self.write_block = 0;
        self.brightness.reset();
    }

    /// Process one stereo block in place. Both slices must be `BLOCK_LEN`
    /// long.
    pub fn render(&mut self, params: &StereoDelayParams, left: &mut [i16], right: &mut [i16]) {
        debug_assert_eq!(left.len(), BLOCK_LEN);
        debug_assert_eq!(right.len(), BLOCK_LEN);

        let read_block = self.write_block.wrapping_sub(params.time_blocks as usize) & BLOCK_MASK;
        let mut delayed_left = self.line_left[read_block];
        let mut delayed_right = self.line_right[read_block];

        delay_line_input(left, &mut delayed_left, params.feedback, params.mix);
        delay_line_input(right, &mut delayed_right, params.feedback, params.mix);

        self.brightness
            .render(&params.brightness, &mut delayed_left, &mut delayed_right);
        stereo_spread(&mut delayed_left, &mut delayed_right, params.spread);

        self.line_left[self.write_block] = delayed_left;
        self.line_right[self.write_block] = delayed_right;
        self.write_block = (self.write_block + 1) & BLOCK_MASK;
    }
}

#[inline]
fn mac_q15(acc: i64, a: i16, b: I1F15) -> i64 {
    acc + a as i64 * b.to_bits() as i64
}

/// Output and delay-line input from the same dry sample.
fn delay_line_input(dry: &mut [i16], line: &mut [i16], feedback: I1F15, mix: I1F15) {
    for (x, d) in dry.iter_mut().zip(line.iter_mut()) {
        let base = (*x as i64) << 15;
        let out = mac_q15(base, *d, mix);
        let fed = mac_q15(base, *d, feedback);
        *x = sat16_wide(round_shr(out, 15));
        *d = sat16_wide(round_shr(fed, 15));
    }
}

fn stereo_spread(left: &mut [i16], right: &mut [i16], spread: I1F15) {
    let s = spread.to_bits() as i64;
    for (l, r) in left.iter_mut().zip(right.iter_mut()) {
        let (x_l, x_r) = (*l as i64, *r as i64);
        let acc_l = (x_l << 15) - x_l * s + x_r * s;
        let acc_r = (x_r << 15) - x_r * s + x_l * s;
        *l = sat16_wide(round_shr(acc_l, 15));
        *r = sat16_wide(round_shr(acc_r, 15));
    }
}
