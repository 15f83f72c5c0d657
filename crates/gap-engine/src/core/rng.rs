//! Seedable pseudo-random number generator (xorshift64) and shuffling.
//! Deterministic for a given seed, so sessions can be replayed in tests.

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform integer in `[0, upper_bound)`.
    ///
    /// Rejects the tail of the u64 range so small bounds stay unbiased.
    pub fn next_below(&mut self, upper_bound: usize) -> usize {
        debug_assert!(upper_bound > 0, "next_below called with zero bound");
        let bound = upper_bound.max(1) as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let x = self.next_u64();
            if x < zone {
                return (x % bound) as usize;
            }
        }
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_below(i + 1);
            items.swap(i, j);
        }
    }

    /// A random permutation of `0..len`.
    pub fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut idxs: Vec<usize> = (0..len).collect();
        self.shuffle(&mut idxs);
        idxs
    }
}
