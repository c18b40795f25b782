use rand::{rngs::StdRng, Rng, SeedableRng};

/// A source of randomness for spread attempts.
pub trait Sampler: Send {
    /// Uniform draw in [0, 1), compared against a profile's infectivity.
    fn roll(&mut self) -> f64;
    /// Uniform index in [0, bound).
    fn pick(&mut self, bound: usize) -> usize;
}

/// Sampler backed by the standard rng, seedable for reproducible runs.
pub struct StdSampler {
    rng: StdRng,
}

impl StdSampler {
    pub fn from_entropy() -> Self {
        StdSampler {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        StdSampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for StdSampler {
    fn roll(&mut self) -> f64 {
        self.rng.gen()
    }

    fn pick(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_in_unit_interval() {
        let mut sampler = StdSampler::from_entropy();
        for _ in 0..1000 {
            let roll = sampler.roll();
            assert!((0.0..1.0).contains(&roll));
        }
    }

    #[test]
    fn picks_stay_in_bound() {
        let mut sampler = StdSampler::seeded(3);
        for bound in 1..100 {
            assert!(sampler.pick(bound) < bound);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdSampler::seeded(42);
        let mut b = StdSampler::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.roll(), b.roll());
            assert_eq!(a.pick(17), b.pick(17));
        }
    }
}
