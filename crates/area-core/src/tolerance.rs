//! Comparison tolerance for the right-angle check
//!
//! The Pythagorean relation is tested on squared lengths, so the margin
//! applies to `max²` versus `min1² + min2²`, not to the sides themselves.

use crate::{validate, AreaResult};

/// Default absolute margin for the right-angle check
pub const RIGHT_ANGLE_TOLERANCE: f64 = 0.000_001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// `|left - right| <= eps`
    Absolute,
    /// `|left - right| <= eps * max(|left|, |right|)`
    Relative,
}

/// How close two squared lengths must be to count as equal.
///
/// The margin is always finite and non-negative; values only come from
/// [`Tolerance::absolute`], [`Tolerance::relative`], [`Tolerance::ulps`] and
/// [`Default`].
///
/// With an absolute margin, large triangles near the margin may be
/// misclassified, since the spacing between representable values grows with
/// magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    mode: Mode,
    eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            mode: Mode::Absolute,
            eps: RIGHT_ANGLE_TOLERANCE,
        }
    }
}

impl Tolerance {
    /// Absolute margin. Zero means exact comparison.
    ///
    /// # Errors
    /// NaN is an invalid argument; infinite or negative margins are out of range.
    pub fn absolute(eps: f64) -> AreaResult<Self> {
        let eps = validate::non_negative("eps", eps)?;
        Ok(Tolerance {
            mode: Mode::Absolute,
            eps,
        })
    }

    /// Margin relative to the larger operand.
    ///
    /// # Errors
    /// Same rules as [`Tolerance::absolute`].
    pub fn relative(eps: f64) -> AreaResult<Self> {
        let eps = validate::non_negative("eps", eps)?;
        Ok(Tolerance {
            mode: Mode::Relative,
            eps,
        })
    }

    /// Scale-aware preset, a few ULPs wide
    pub fn ulps() -> Self {
        Tolerance {
            mode: Mode::Relative,
            eps: 4.0 * f64::EPSILON,
        }
    }

    /// The margin, as given to the constructor
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.eps
    }

    /// Whether the margin scales with the compared values
    #[inline]
    pub fn is_relative(&self) -> bool {
        self.mode == Mode::Relative
    }

    /// Whether `left` and `right` are equal within this tolerance
    pub fn accepts(&self, left: f64, right: f64) -> bool {
        let diff = (left - right).abs();
        match self.mode {
            Mode::Absolute => diff <= self.eps,
            Mode::Relative => diff <= self.eps * left.abs().max(right.abs()),
        }
    }
}
