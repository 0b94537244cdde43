//! Area Core - Validated shape descriptions
//!
//! This crate defines the shape value types and their shared capability:
//! - Circle description (radius)
//! - Triangle description (three side lengths, right-angle check)
//! - The `CalculateArea` trait
//! - Right-angle tolerance configuration
//! - Error types
//!
//! Every shape is validated when it is created and never changes afterwards.
//!
//! ```rust
//! use area_core::{CalculateArea, CircleDescription, TriangleDescription};
//!
//! let circle = CircleDescription::create(1.0).unwrap();
//! assert!((circle.calculate_area() - std::f64::consts::PI).abs() < 1e-12);
//!
//! let triangle = TriangleDescription::create(3.0, 4.0, 5.0).unwrap();
//! assert_eq!(triangle.is_right(), Ok(true));
//! assert!((triangle.calculate_area() - 6.0).abs() < 1e-12);
//! ```

pub mod area;
pub mod circle;
pub mod error;
pub mod tolerance;
pub mod triangle;

mod validate;

pub use area::*;
pub use circle::*;
pub use error::*;
pub use tolerance::*;
pub use triangle::*;
