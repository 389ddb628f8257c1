//! # Humor Messages
//!
//! The original pages sprinkled random one-liners over every result and
//! error. Presentation concern only: the picker is a pure function of an
//! injected random source, so core calculation tests never touch it and
//! front-ends can drop it entirely.

use rand::seq::SliceRandom;
use rand::Rng;

/// Shown after a successful calculation.
pub const SUCCESS_MESSAGES: &[&str] = &[
    "Math says you are safe. Celebrate with coffee!",
    "Numbers aligned! Even ASME would clap.",
    "Calculation done. Now go brag to a welder.",
    "Measure twice, cut once... unless it's Monday morning.",
];

/// Shown when inputs fail validation.
pub const FAILURE_MESSAGES: &[&str] = &[
    "No input, no output. Just like free lunches.",
    "Missing values! I'm good at math, not magic.",
    "Did you forget something? Vessels don't design themselves!",
    "Enter the numbers before the dish collapses!",
];

/// Pick one message from a pool. `None` only for an empty pool.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &'a [&'a str]) -> Option<&'a str> {
    pool.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_is_deterministic_for_seeded_rng() {
        let a = pick(&mut StdRng::seed_from_u64(7), SUCCESS_MESSAGES);
        let b = pick(&mut StdRng::seed_from_u64(7), SUCCESS_MESSAGES);
        assert_eq!(a, b);
        assert!(a.is_some());
    }

    #[test]
    fn test_pick_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let msg = pick(&mut rng, FAILURE_MESSAGES).unwrap();
            assert!(FAILURE_MESSAGES.contains(&msg));
        }
    }

    #[test]
    fn test_empty_pool() {
        assert_eq!(pick(&mut StdRng::seed_from_u64(0), &[]), None);
    }
}
