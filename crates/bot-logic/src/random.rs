//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible bot behavior.
//! Uses a simple but effective xorshift algorithm.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seeded random number generator
///
/// Deterministic: same seed = same answer sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9e3779b97f4a7c15;
        if state == 0 {
            state = 0x2545f4914f6cdd1d;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Create an RNG seeded from the system clock
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x517cc1b727220a95);
        Self::new(nanos)
    }

    /// Create an RNG for a specific question within a session
    pub fn for_question(&self, index: u32) -> Self {
        let mut new_state = self.state;
        new_state ^= (index as u64).wrapping_mul(0x517cc1b727220a95);

        let mut rng = Self { state: new_state };
        rng.next_u64(); // Mix
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in [0, 1) (for probability checks)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a value in [min, max], inclusive of both bounds
    ///
    /// Assumes min <= max; returns min when the span is empty.
    pub fn range_inclusive(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        min + self.next_u64() % (max - min + 1)
    }

    /// Pick a uniform index in [0, len) that is not `excluded`
    ///
    /// Caller guarantees len >= 2 and excluded < len.
    pub fn pick_other(&mut self, len: usize, excluded: usize) -> usize {
        let raw = (self.next_u64() % (len as u64 - 1)) as usize;
        if raw >= excluded {
            raw + 1
        } else {
            raw
        }
    }
}
