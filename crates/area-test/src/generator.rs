//! Triangle Generator - Seeded right and non-right triangle cases
//!
//! Right triangles are built from two integer legs and the hypotenuse
//! `sqrt(leg1² + leg2²)`. The non-right variant lengthens the hypotenuse by a
//! fixed offset, which keeps the triangle valid but breaks the Pythagorean
//! relation well beyond the default tolerance. Side order is shuffled so the
//! hypotenuse can land in any position.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generator configuration
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Number of cases per batch
    pub count: usize,
    /// Smallest generated leg (inclusive)
    pub min_leg: u32,
    /// Largest generated leg (exclusive)
    pub max_leg: u32,
    /// Probability that both legs are equal
    pub isosceles_prob: f64,
    /// Added to the hypotenuse of non-right cases
    pub hypotenuse_offset: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: 10,
            min_leg: 1,
            max_leg: 10_000,
            isosceles_prob: 0.2,
            hypotenuse_offset: 0.25,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Few cases for quick tests
    pub fn light() -> Self {
        GeneratorConfig {
            count: 10,
            ..Default::default()
        }
    }

    /// Many cases for thorough testing
    pub fn heavy() -> Self {
        GeneratorConfig {
            count: 10_000,
            ..Default::default()
        }
    }

    /// Legs up to a million. Squared sides reach 1e12, where one ULP exceeds
    /// the default absolute tolerance.
    pub fn wide() -> Self {
        GeneratorConfig {
            count: 1_000,
            max_leg: 1_000_000,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A generated set of sides with the expected classification
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleCase {
    pub sides: [f64; 3],
    pub expect_right: bool,
}

/// Seeded triangle generator
pub struct TriangleGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl TriangleGenerator {
    /// Create a generator. An `isosceles_prob` outside `[0, 1]` is clamped,
    /// and NaN counts as zero.
    pub fn new(mut config: GeneratorConfig) -> Self {
        config.isosceles_prob = if config.isosceles_prob.is_nan() {
            0.0
        } else {
            config.isosceles_prob.clamp(0.0, 1.0)
        };
        let rng = StdRng::seed_from_u64(config.seed);
        TriangleGenerator { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn leg(&mut self) -> f64 {
        let upper = self.config.max_leg.max(self.config.min_leg.saturating_add(1));
        f64::from(self.rng.gen_range(self.config.min_leg..upper))
    }

    /// Legs and hypotenuse, in that order
    fn ordered_right(&mut self) -> [f64; 3] {
        let first = self.leg();
        let second = if self.rng.gen_bool(self.config.isosceles_prob) {
            first
        } else {
            self.leg()
        };
        [first, second, first.hypot(second)]
    }

    fn shuffled(&mut self, mut sides: [f64; 3]) -> [f64; 3] {
        sides.shuffle(&mut self.rng);
        sides
    }

    /// One right triangle, sides in random order
    pub fn right(&mut self) -> TriangleCase {
        let sides = self.ordered_right();
        TriangleCase {
            sides: self.shuffled(sides),
            expect_right: true,
        }
    }

    /// One triangle that is close to right but is not
    pub fn not_right(&mut self) -> TriangleCase {
        let [first, second, hypotenuse] = self.ordered_right();
        let sides = [first, second, hypotenuse + self.config.hypotenuse_offset];
        TriangleCase {
            sides: self.shuffled(sides),
            expect_right: false,
        }
    }

    /// `count` right triangles
    pub fn right_batch(&mut self) -> Vec<TriangleCase> {
        (0..self.config.count).map(|_| self.right()).collect()
    }

    /// `count` non-right triangles
    pub fn not_right_batch(&mut self) -> Vec<TriangleCase> {
        (0..self.config.count).map(|_| self.not_right()).collect()
    }

    /// `count` cases of each kind, interleaved
    pub fn mixed_batch(&mut self) -> Vec<TriangleCase> {
        let mut cases = Vec::with_capacity(self.config.count * 2);
        for _ in 0..self.config.count {
            cases.push(self.right());
            cases.push(self.not_right());
        }
        cases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let mut g1 = TriangleGenerator::new(GeneratorConfig::light());
        let mut g2 = TriangleGenerator::new(GeneratorConfig::light());

        assert_eq!(g1.mixed_batch(), g2.mixed_batch());
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut g1 = TriangleGenerator::new(GeneratorConfig::light().with_seed(1));
        let mut g2 = TriangleGenerator::new(GeneratorConfig::light().with_seed(2));

        assert_ne!(g1.right_batch(), g2.right_batch());
    }

    #[test]
    fn test_legs_within_range() {
        let config = GeneratorConfig {
            count: 200,
            min_leg: 5,
            max_leg: 50,
            ..Default::default()
        };
        let mut generator = TriangleGenerator::new(config);

        for case in generator.right_batch() {
            let mut sides = case.sides;
            sides.sort_by(f64::total_cmp);
            assert!(sides[0] >= 5.0 && sides[1] < 50.0);
            assert_eq!(sides[0].fract(), 0.0);
            assert_eq!(sides[1].fract(), 0.0);
        }
    }

    #[test]
    fn test_isosceles_only() {
        let config = GeneratorConfig {
            count: 50,
            isosceles_prob: 1.0,
            ..Default::default()
        };
        let mut generator = TriangleGenerator::new(config);

        for case in generator.right_batch() {
            let mut sides = case.sides;
            sides.sort_by(f64::total_cmp);
            assert_eq!(sides[0], sides[1]);
        }
    }

    #[test]
    fn test_out_of_range_probability_clamped() {
        for prob in [-0.5, 1.5, f64::NAN, f64::INFINITY] {
            let config = GeneratorConfig {
                count: 20,
                isosceles_prob: prob,
                ..Default::default()
            };
            let mut generator = TriangleGenerator::new(config);
            let prob = generator.config().isosceles_prob;
            assert!((0.0..=1.0).contains(&prob));
            assert_eq!(generator.mixed_batch().len(), 40);
        }

        let config = GeneratorConfig {
            isosceles_prob: 2.0,
            ..Default::default()
        };
        assert_eq!(TriangleGenerator::new(config).config().isosceles_prob, 1.0);
    }

    #[test]
    fn test_batch_sizes() {
        let mut generator = TriangleGenerator::new(GeneratorConfig::light());
        assert_eq!(generator.right_batch().len(), 10);
        assert_eq!(generator.not_right_batch().len(), 10);

        let mixed = generator.mixed_batch();
        assert_eq!(mixed.len(), 20);
        assert_eq!(mixed.iter().filter(|c| c.expect_right).count(), 10);
    }
}
