//! Injected randomness.
//!
//! Nothing in geometriq reaches for a global generator. Operations that need
//! randomness (line extension, shading, fuzzed banding) take a
//! `&mut dyn RandomSource`, so a caller that seeds one [`Xorshift64`] gets a
//! reproducible drawing.

use serde::{Deserialize, Serialize};

/// A source of uniformly distributed `f64` draws in [0, 1).
pub trait RandomSource {
    /// Returns the next draw in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Returns a draw in [min, max).
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Xorshift64 generator with shifts (13, 7, 17).
///
/// The same seed produces the same sequence on every platform. A seed of 0
/// is replaced with a fixed non-zero value because zero is a fixed point of
/// the algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const ZERO_SEED_REPLACEMENT: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 {
                Self::ZERO_SEED_REPLACEMENT
            } else {
                seed
            },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 7;
        s ^= s << 17;
        self.state = s;
        s
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of the next state scaled into [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Handy for pinning down the behaviour of code that branches on a draw,
/// such as fuzzed banding.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    draws: Vec<f64>,
    next: usize,
}

impl Replay {
    /// Creates a replay source. An empty list replays `0.0` forever.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }
}

impl RandomSource for Replay {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}
