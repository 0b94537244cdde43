//! Triangle description
//!
//! A triangle is described by the lengths of its three sides. Construction
//! runs in two phases:
//! 1. Each side is checked on its own, in the order a, b, c
//! 2. The sides together must satisfy the strict triangle inequality
//!
//! The first failure wins, so `(NaN, 0, 1)` is reported against `a`.

use std::fmt;

use crate::{validate, AreaError, AreaResult, CalculateArea, Tolerance};

/// A non-degenerate triangle, described by its side lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleDescription {
    a: f64,
    b: f64,
    c: f64,
}

impl TriangleDescription {
    /// Create a triangle description.
    ///
    /// # Errors
    /// - [`AreaError::OutOfRange`] for an infinite, zero or negative side
    /// - [`AreaError::InvalidArgument`] for a NaN side, for sides whose pairwise
    ///   sums overflow, or for sides that cannot form a triangle
    pub fn create(a: f64, b: f64, c: f64) -> AreaResult<Self> {
        let a = validate::length("a", a)?;
        let b = validate::length("b", b)?;
        let c = validate::length("c", c)?;

        Self::check_existence(a, b, c)?;

        Ok(TriangleDescription { a, b, c })
    }

    fn check_existence(a: f64, b: f64, c: f64) -> AreaResult<()> {
        let ab = a + b;
        let bc = b + c;
        let ac = a + c;

        if ab.is_infinite() || bc.is_infinite() || ac.is_infinite() {
            tracing::debug!(a, b, c, "rejected triangle with overflowing side sums");
            return Err(AreaError::invalid_argument("sides", "the triangle is too large"));
        }

        if ab <= c || bc <= a || ac <= b {
            tracing::debug!(a, b, c, "rejected sides violating the triangle inequality");
            return Err(AreaError::invalid_argument("sides", "such a triangle cannot exist"));
        }

        Ok(())
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Sides in declaration order
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Check whether the triangle is right, using the default absolute
    /// tolerance of [`crate::RIGHT_ANGLE_TOLERANCE`].
    ///
    /// # Errors
    /// [`AreaError::InvalidOperation`] if the squared sides overflow.
    pub fn is_right(&self) -> AreaResult<bool> {
        self.is_right_within(Tolerance::default())
    }

    /// Check whether the triangle is right within `tolerance`.
    ///
    /// # Errors
    /// [`AreaError::InvalidOperation`] if the squared sides overflow.
    pub fn is_right_within(&self, tolerance: Tolerance) -> AreaResult<bool> {
        let (left, right) = self.pythagorean_terms();

        if left.is_infinite() || right.is_infinite() {
            tracing::debug!(triangle = %self, "right-angle check overflowed");
            return Err(AreaError::invalid_operation(
                "the triangle is too large to check by the Pythagorean theorem",
            ));
        }

        Ok(tolerance.accepts(left, right))
    }

    /// `(max², min1² + min2²)`. Ties for the longest side resolve to the
    /// earliest side in declaration order.
    fn pythagorean_terms(&self) -> (f64, f64) {
        let (a, b, c) = (self.a, self.b, self.c);
        let max = a.max(b.max(c));

        let (min1, min2) = if max == a {
            (b, c)
        } else if max == b {
            (a, c)
        } else {
            (a, b)
        };

        (max * max, min1 * min1 + min2 * min2)
    }
}

impl CalculateArea for TriangleDescription {
    /// Heron's formula. `+∞` when the semi-perimeter products overflow.
    fn calculate_area(&self) -> f64 {
        let p = (self.a + self.b + self.c) / 2.0;
        (p * (p - self.a) * (p - self.b) * (p - self.c)).sqrt()
    }
}

impl TryFrom<(f64, f64, f64)> for TriangleDescription {
    type Error = AreaError;

    fn try_from((a, b, c): (f64, f64, f64)) -> AreaResult<Self> {
        TriangleDescription::create(a, b, c)
    }
}

impl TryFrom<[f64; 3]> for TriangleDescription {
    type Error = AreaError;

    fn try_from([a, b, c]: [f64; 3]) -> AreaResult<Self> {
        TriangleDescription::create(a, b, c)
    }
}

impl fmt::Display for TriangleDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "triangle(a={}, b={}, c={})", self.a, self.b, self.c)
    }
}
