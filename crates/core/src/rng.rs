//! RNG module - seeded random source for dealing
//!
//! Wraps a ChaCha8 stream so a seed reproduces the same sequence of deals
//! across resets, while the shuffle itself stays generic over any
//! [`rand::Rng`].

use rand::{Error, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Session random source used for every deal.
#[derive(Debug, Clone)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed derived from the system clock
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for DeckRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Nanoseconds since the epoch, folded to 64 bits.
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = DeckRng::new(12345);
        let mut rng2 = DeckRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..52), rng2.gen_range(0..52));
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = DeckRng::new(12345);
        let mut rng2 = DeckRng::new(54321);

        let v1: Vec<u32> = (0..8).map(|_| rng1.next_u32()).collect();
        let v2: Vec<u32> = (0..8).map(|_| rng2.next_u32()).collect();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_seed_is_remembered() {
        let mut rng = DeckRng::new(77);
        let _ = rng.next_u64();
        assert_eq!(rng.seed(), 77);
    }
}
