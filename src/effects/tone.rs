//! Two-band (bass/treble) stereo tone control.

/*
Tone Control
============

Two shelving filters in series, treble first. Both are the trapezoidal SVF
with the response taken as a weighted sum of its taps:

    v1 = c0 * s0 + c1 * (x - s1)
    v2 = s1 + c1 * s0 + c2 * (x - s1)
    s0 = 2 * v1 - s0
    s1 = 2 * v2 - s1
    y  = 2 * (c3 * x + c4 * v1 + c5 * v2)

c0..c2 fix the corner and c3..c5 (stored halved) set the shelf. With `g`
the prewarped corner tan(pi * fc / 48000) and a damping of 2:

    c0 = 1 / (1 + g (g + 2)),  c1 = g c0,  c2 = g c1

The bass corner sits at 400 Hz and the treble corner at 2 kHz. Each corner
is where the shelf has reached about half its gain in dB. With `A` the
shelf amplitude:

  bass     A = 1 + 0.414 * bass        c3 = 1/2, c4 = A - 1,
                                       c5 = ((A - 1)^2 + 2 (A - 1)) / 2
  treble   G = 0.707 + 0.293 * treble  c3 = G^2, c4 = 2 (0.707 G - G^2),
                                       c5 = 1/2 - G^2

Either knob at zero gives a flat response. Full boost is about +6 dB and
full cut about -9 dB.

The integrator states carry 16 extra fractional bits. At the bass corner
c1 is under 3% and c2 under 0.1%, far too small to move a Q0.15 state.
*/

use crate::fixedmath::{mul_q15, round_shr, sat16_wide, I1F15};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const STATE_SHIFT: u32 = 16;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfCoeffs(pub [i16; 6]);

impl ShelfCoeffs {
    pub fn bass(bass: I1F15) -> Self {
        let gain = mul_q15(bass.to_bits(), 13573);
        Self([
            31117,
            815,
            21,
            16384,
            gain,
            (mul_q15(gain, gain) >> 1) + gain,
        ])
    }

    pub fn treble(treble: I1F15) -> Self {
        let gain = mul_q15(treble.to_bits(), 9598).saturating_add(23170);
        let c3 = mul_q15(gain, gain);
        Self([
            25587,
            3369,
            443,
            c3,
            (mul_q15(23170, gain) - c3) << 1,
            16384 - c3,
        ])
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneParams {
    pub bass: ShelfCoeffs,
    pub treble: ShelfCoeffs,
}

impl ToneParams {
    /// Both knobs run from full cut (-1) through flat (0) to full boost.
    pub fn new(bass: I1F15, treble: I1F15) -> Self {
        Self {
            bass: ShelfCoeffs::bass(bass),
            treble: ShelfCoeffs::treble(treble),
        }
    }
}

impl Default for ToneParams {
    fn default() -> Self {
        Self::new(I1F15::ZERO, I1F15::ZERO)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShelfState {
    s0: i64,
    s1: i64,
}

impl ShelfState {
    pub const fn new() -> Self {
        Self { s0: 0, s1: 0 }
    }

    #[inline]
    pub fn next_sample(&mut self, coeffs: &ShelfCoeffs, x: i16) -> i16 {
        let [c0, c1, c2, c3, c4, c5] = coeffs.0.map(|c| c as i64);
        let x = (x as i64) << STATE_SHIFT;

        let v1 = round_shr(c0 * self.s0 + c1 * (x - self.s1), 15);
        let v2 = self.s1 + round_shr(c1 * self.s0 + c2 * (x - self.s1), 15);
        self.s0 = 2 * v1 - self.s0;
        self.s1 = 2 * v2 - self.s1;

        // Halved weights, so one bit less of shift
        sat16_wide(round_shr(c3 * x + c4 * v1 + c5 * v2, 15 + STATE_SHIFT - 1))
    }

    pub fn render(&mut self, coeffs: &ShelfCoeffs, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(coeffs, *sample);
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ToneState {
    treble: [ShelfState; 2],
    bass: [ShelfState; 2],
}

impl ToneState {
    pub const fn new() -> Self {
        Self {
            treble: [ShelfState::new(); 2],
            bass: [ShelfState::new(); 2],
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn render(&mut self, params: &ToneParams, left: &mut [i16], right: &mut [i16]) {
        self.treble[0].render(&params.treble, left);
        self.treble[1].render(&params.treble, right);
        self.bass[0].render(&params.bass, left);
        self.bass[1].render(&params.bass, right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(hz: f64, len: usize, amplitude: f64) -> Vec<i16> {
        let w = 2.0 * std::f64::consts::PI * hz / 48_000.0;
        (0..len)
            .map(|i| (amplitude * (w * i as f64).sin()).round() as i16)
            .collect()
    }

    /// Peak of the second half, after the filters settle.
    fn peak(buffer: &[i16]) -> i16 {
        buffer[buffer.len() / 2..].iter().map(|s| s.saturating_abs()).max().unwrap_or(0)
    }

    fn run(bass: i16, treble: i16, input: &[i16]) -> (Vec<i16>, Vec<i16>) {
        let params = ToneParams::new(I1F15::from_bits(bass), I1F15::from_bits(treble));
        let mut state = ToneState::new();
        let mut left = input.to_vec();
        let mut right = input.to_vec();
        state.render(&params, &mut left, &mut right);
        (left, right)
    }

    #[test]
    fn test_flat_settings_pass_signal_unchanged() {
        let input = sine(1000.0, 4800, 8000.0);
        let (left, right) = run(0, 0, &input);
        assert_eq!(left, input);
        assert_eq!(right, input);
    }

    #[test]
    fn test_bass_shelf_moves_lows_only() {
        let low = sine(60.0, 9600, 8000.0);
        let high = sine(15_000.0, 9600, 8000.0);

        let boosted = peak(&run(i16::MAX, 0, &low).0);
        let cut = peak(&run(i16::MIN, 0, &low).0);
        assert!(boosted > 15_000, "boost {}", boosted);
        assert!(cut < 3_500, "cut {}", cut);

        for bass in [i16::MIN, i16::MAX] {
            let p = peak(&run(bass, 0, &high).0);
            assert!((7_900..=8_100).contains(&p), "bass {} moved highs to {}", bass, p);
        }
    }

    #[test]
    fn test_treble_shelf_moves_highs_only() {
        let low = sine(60.0, 9600, 8000.0);
        let high = sine(15_000.0, 9600, 8000.0);

        let boosted = peak(&run(0, i16::MAX, &high).0);
        let cut = peak(&run(0, i16::MIN, &high).0);
        assert!(boosted > 15_000, "boost {}", boosted);
        assert!(cut < 3_500, "cut {}", cut);

        for treble in [i16::MIN, i16::MAX] {
            let p = peak(&run(0, treble, &low).0);
            assert!((7_900..=8_100).contains(&p), "treble {} moved lows to {}", treble, p);
        }
    }

    #[test]
    fn test_shelves_are_half_way_at_their_corners() {
        let bass_corner = sine(400.0, 9600, 8000.0);
        let boosted = peak(&run(i16::MAX, 0, &bass_corner).0);
        let cut = peak(&run(i16::MIN, 0, &bass_corner).0);
        assert!((10_700..13_400).contains(&boosted), "bass boost at corner {}", boosted);
        assert!((4_800..6_000).contains(&cut), "bass cut at corner {}", cut);

        let treble_corner = sine(2000.0, 9600, 8000.0);
        let boosted = peak(&run(0, i16::MAX, &treble_corner).0);
        let cut = peak(&run(0, i16::MIN, &treble_corner).0);
        assert!((10_700..13_400).contains(&boosted), "treble boost at corner {}", boosted);
        assert!((4_800..6_000).contains(&cut), "treble cut at corner {}", cut);
    }

    #[test]
    fn test_bass_shelf_gain_at_dc() {
        let dc = vec![8000i16; 48_000];
        assert_eq!(*run(i16::MAX, 0, &dc).0.last().unwrap_or(&0), 16_000);
        let cut = *run(i16::MIN, 0, &dc).0.last().unwrap_or(&0);
        assert!((2_700..2_800).contains(&cut), "cut DC {}", cut);
    }

    #[test]
    fn test_channels_are_independent() {
        let params = ToneParams::new(I1F15::from_bits(20_000), I1F15::from_bits(-10_000));
        let mut state = ToneState::new();
        let mut left = sine(200.0, 960, 8000.0);
        let mut right = vec![0i16; 960];
        state.render(&params, &mut left, &mut right);
        assert!(right.iter().all(|&s| s == 0));
    }
}
