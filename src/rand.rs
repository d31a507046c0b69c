//! Pseudo-random Q0.15 source for the noise oscillators and the random LFO.
//!
//! The generator is a two-word xor/add recurrence. It is not meant to be
//! statistically strong; it is meant to be cheap, full-scale and bipolar.
//!
//! [`rand_q15`] is the stateless entry point and draws from one process-wide
//! generator. Components that want reproducible noise (tests, offline
//! renders) embed their own [`Rng`] instead.

use std::sync::atomic::{AtomicU64, Ordering};

const SEED_LO: u32 = 0x6745_2301;
const SEED_HI: u32 = 0xefcd_ab89;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rng {
    s1: u32,
    s2: u32,
}

impl Rng {
    pub const fn new() -> Self {
        Self {
            s1: SEED_LO,
            s2: SEED_HI,
        }
    }

    /// Seeded generator. An all-zero seed would lock the recurrence at zero,
    /// so it falls back to the default seed.
    pub const fn with_seed(seed: u64) -> Self {
        if seed == 0 {
            Self::new()
        } else {
            Self::from_packed(seed)
        }
    }

    /// Next sample in Q0.15.
    #[inline]
    pub fn next_q15(&mut self) -> i16 {
        self.s1 ^= self.s2;
        self.s2 = self.s2.wrapping_add(self.s1);
        (self.s2 >> 16) as i16
    }

    /// Fill a buffer with white noise.
    pub fn fill(&mut self, buffer: &mut [i16]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_q15();
        }
    }

    const fn from_packed(packed: u64) -> Self {
        Self {
            s1: packed as u32,
            s2: (packed >> 32) as u32,
        }
    }

    const fn to_packed(self) -> u64 {
        (self.s2 as u64) << 32 | self.s1 as u64
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: AtomicU64 = AtomicU64::new(Rng::new().to_packed());

/// Draw one Q0.15 sample from the process-wide generator.
pub fn rand_q15() -> i16 {
    let mut sample = 0;
    // The closure always returns Some, so the update cannot fail.
    let _ = SHARED.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |packed| {
        let mut rng = Rng::from_packed(packed);
        sample = rng.next_q15();
        Some(rng.to_packed())
    });
    sample
}

/// Seed for a component-owned [`Rng`], drawn from the shared generator so
/// that separately constructed components do not produce identical noise.
pub fn fork() -> Rng {
    let hi = rand_q15() as u16 as u64;
    let lo = rand_q15() as u16 as u64;
    Rng::with_seed((hi << 48) | (lo << 16) | 0x0001_0001)
}
