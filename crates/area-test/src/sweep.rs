//! Classification Sweep - Runs generated cases through the right-angle check
//!
//! Every case is constructed with `TriangleDescription::create` and then
//! classified with `is_right_within`. The report counts how many cases agree
//! with the generator's expectation and where the others went.

use area_core::{Tolerance, TriangleDescription};

use crate::{GeneratorConfig, TriangleCase, TriangleGenerator};

/// Outcome of a sweep
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Cases processed
    pub checked: usize,
    /// Classified as expected
    pub matched: usize,
    /// Classified opposite to the expectation
    pub mismatched: usize,
    /// Rejected at construction
    pub rejected: usize,
    /// Right-angle check could not be evaluated
    pub overflowed: usize,
}

impl SweepReport {
    /// Every case constructed and classified as expected
    pub fn is_clean(&self) -> bool {
        self.checked == self.matched
    }

    /// Fraction of cases classified as expected
    pub fn match_rate(&self) -> f64 {
        if self.checked == 0 {
            1.0
        } else {
            self.matched as f64 / self.checked as f64
        }
    }

    fn record(&mut self, case: &TriangleCase, tolerance: Tolerance) {
        self.checked += 1;

        let [a, b, c] = case.sides;
        let triangle = match TriangleDescription::create(a, b, c) {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(error = %e, ?case, "generated case rejected");
                self.rejected += 1;
                return;
            }
        };

        match triangle.is_right_within(tolerance) {
            Ok(right) if right == case.expect_right => self.matched += 1,
            Ok(_) => {
                tracing::debug!(%triangle, expected = case.expect_right, "misclassified");
                self.mismatched += 1;
            }
            Err(e) => {
                tracing::debug!(error = %e, %triangle, "right-angle check overflowed");
                self.overflowed += 1;
            }
        }
    }
}

/// Classification sweep over generated triangles
pub struct ClassificationSweep {
    generator: TriangleGenerator,
    tolerance: Tolerance,
}

impl ClassificationSweep {
    pub fn new(config: GeneratorConfig) -> Self {
        ClassificationSweep {
            generator: TriangleGenerator::new(config),
            tolerance: Tolerance::default(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Classify a fixed set of cases
    pub fn check(&self, cases: &[TriangleCase]) -> SweepReport {
        let mut report = SweepReport::default();
        for case in cases {
            report.record(case, self.tolerance);
        }
        report
    }

    /// Generate a mixed batch and classify it
    pub fn run(&mut self) -> SweepReport {
        let cases = self.generator.mixed_batch();
        let report = self.check(&cases);
        tracing::debug!(?report, "sweep finished");
        report
    }
}
