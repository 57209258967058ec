use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A fair die drawing uniformly from `1..=faces`.
///
/// Every instance owns its generator, so dice handed to separate worker
/// threads produce independent streams.
#[derive(Debug, Clone)]
pub struct Fair {
    faces: Face,
    rng: SmallRng,
}

impl Fair {
    /// Seeds from the thread-local generator.
    pub fn new(faces: Face) -> Self {
        assert!(faces > 0, "a die needs at least one face");
        Self {
            faces,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
    /// Reproducible die for a fixed seed.
    pub fn seeded(faces: Face, seed: u64) -> Self {
        assert!(faces > 0, "a die needs at least one face");
        Self {
            faces,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl From<Sides> for Fair {
    fn from(sides: Sides) -> Self {
        Self::new(sides.faces())
    }
}

impl Dice for Fair {
    fn roll(&mut self) -> Face {
        self.rng.random_range(1..=self.faces)
    }
}
