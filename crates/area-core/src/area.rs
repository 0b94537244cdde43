//! The shared area capability

/// A shape whose area can be computed.
///
/// Object safe, so mixed shapes can live behind `&dyn CalculateArea`.
pub trait CalculateArea {
    /// Area of the shape. May be `+∞` when the computation overflows.
    fn calculate_area(&self) -> f64;
}

impl<T: CalculateArea + ?Sized> CalculateArea for &T {
    #[inline]
    fn calculate_area(&self) -> f64 {
        (**self).calculate_area()
    }
}

impl<T: CalculateArea + ?Sized> CalculateArea for Box<T> {
    #[inline]
    fn calculate_area(&self) -> f64 {
        (**self).calculate_area()
    }
}
