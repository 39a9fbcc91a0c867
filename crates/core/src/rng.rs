//! RNG module - uniform integer draws for level generation
//!
//! The simulation only ever asks for "a uniform integer in `[min, max]`".
//! [`RandomSource`] is that seam; [`SimpleRng`] is the deterministic LCG used
//! by the game, so the same seed always produces the same level.

/// Source of uniform integers, inclusive at both ends.
pub trait RandomSource {
    /// Draw a value in `[min, max]`. Bounds given in reverse order are swapped.
    fn random_int(&mut self, min: i32, max: i32) -> i32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, span)
    ///
    /// Uses the high bits of the state; the low bits of an LCG cycle with a
    /// short period.
    pub fn next_below(&mut self, span: u64) -> u64 {
        ((self.next_u32() as u64) * span) >> 32
    }

    /// Current internal state (feeding it back into [`SimpleRng::new`] resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = (hi as i64 - lo as i64 + 1) as u64;
        (lo as i64 + self.next_below(span) as i64) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_random_int_stays_in_inclusive_range() {
        let mut rng = SimpleRng::new(7);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..10_000 {
            let v = rng.random_int(50, 200);
            assert!((50..=200).contains(&v), "out of range: {}", v);
            seen_min |= v == 50;
            seen_max |= v == 200;
        }
        assert!(seen_min && seen_max, "both bounds should be reachable");
    }

    #[test]
    fn test_random_int_swaps_reversed_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            let v = rng.random_int(10, -10);
            assert!((-10..=10).contains(&v));
        }
    }

    #[test]
    fn test_random_int_single_value_range() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..100 {
            assert_eq!(rng.random_int(380, 380), 380);
        }
    }

    #[test]
    fn test_random_int_handles_negative_ranges() {
        let mut rng = SimpleRng::new(11);
        for _ in 0..1000 {
            let v = rng.random_int(-450, -250);
            assert!((-450..=-250).contains(&v));
        }
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(42);
        let _ = rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
