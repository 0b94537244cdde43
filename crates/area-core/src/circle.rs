//! Circle description

use std::f64::consts::PI;
use std::fmt;

use crate::{validate, AreaError, AreaResult, CalculateArea};

/// A circle, described by its radius.
///
/// The radius is always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDescription {
    radius: f64,
}

impl CircleDescription {
    /// Create a circle description.
    ///
    /// # Errors
    /// - [`AreaError::OutOfRange`] for an infinite, zero or negative radius
    /// - [`AreaError::InvalidArgument`] for a NaN radius
    pub fn create(radius: f64) -> AreaResult<Self> {
        let radius = validate::length("radius", radius)?;
        Ok(CircleDescription { radius })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl CalculateArea for CircleDescription {
    /// `π·r²`; `+∞` once the square overflows.
    #[inline]
    fn calculate_area(&self) -> f64 {
        PI * (self.radius * self.radius)
    }
}

impl TryFrom<f64> for CircleDescription {
    type Error = AreaError;

    fn try_from(radius: f64) -> AreaResult<Self> {
        CircleDescription::create(radius)
    }
}

impl fmt::Display for CircleDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle(r={})", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const RADII: [f64; 5] = [1.0, 10.0, 100_000.0, 0.0001, 1_000_000_000.0];

    #[test]
    fn test_create_with_appropriate_radius() {
        for radius in RADII {
            let circle = CircleDescription::create(radius).unwrap();
            assert_eq!(circle.radius(), radius);
        }
    }

    #[test]
    fn test_create_rejects_nan() {
        let err = CircleDescription::create(f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.param(), Some("radius"));
    }

    #[test]
    fn test_create_rejects_infinite() {
        for radius in [f64::INFINITY, f64::NEG_INFINITY] {
            let err = CircleDescription::create(radius).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
        }
    }

    #[test]
    fn test_create_rejects_zero_and_negative() {
        assert_eq!(
            CircleDescription::create(0.0).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        for radius in RADII {
            let err = CircleDescription::create(-radius).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
        }
    }

    #[test]
    fn test_area_for_reasonable_radii() {
        let unit = CircleDescription::create(1.0).unwrap();
        assert!((unit.calculate_area() - 3.141_592_65).abs() < 1e-6);
        let ten = CircleDescription::create(10.0).unwrap();
        assert!((ten.calculate_area() - 314.159_265).abs() < 1e-6);

        for radius in RADII {
            let circle = CircleDescription::create(radius).unwrap();
            let expected = PI * (radius * radius);
            assert!((circle.calculate_area() - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_area_overflows_to_infinity() {
        let circle = CircleDescription::create(f64::MAX).unwrap();
        assert_eq!(circle.calculate_area(), f64::INFINITY);
    }

    #[test]
    fn test_area_is_stable() {
        let circle = CircleDescription::create(2.5).unwrap();
        let first = circle.calculate_area();
        for _ in 0..10 {
            assert_eq!(circle.calculate_area().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_try_from_and_display() {
        let circle = CircleDescription::try_from(2.0).unwrap();
        assert_eq!(circle.to_string(), "circle(r=2)");
        assert!(CircleDescription::try_from(-2.0).is_err());
    }
}
