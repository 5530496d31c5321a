//! The numeric seam between coordinate types and the transforms.
//!
//! [`Zoom`](crate::Zoom) and [`Projection`](crate::Projection) scale
//! coordinates by integer factors, and what "divide" means depends on the
//! coordinate domain: a pixel index has to land in a definite cell, while a
//! continuous coordinate must not round at all. [`Coordinate`] pins that
//! policy down once per type so a single generic transform serves both
//! domains.

use std::ops::Sub;

use num_traits::Zero;

/// A scalar coordinate that [`Zoom`](crate::Zoom) and
/// [`Projection`](crate::Projection) can transform.
///
/// Implementations choose one of two rounding policies for division by a
/// positive integer factor:
///
/// - **integer types** (`i32`, `i64`) divide with floor rounding
///   (`div_euclid`), so the coordinate map stays monotone across zero and
///   spans that touch keep touching after scaling;
/// - **floating-point types** (`f32`, `f64`) multiply and divide exactly,
///   with no rounding step anywhere.
///
/// Multiplication is always carried out in `Self`'s own arithmetic and is
/// expected to be exact; keeping coordinates within a range where the
/// intermediate products fit the type is the caller's obligation. Dividing
/// by zero follows the numeric domain as well: integer types panic, floats
/// produce infinities or NaNs.
///
/// The trait is open. A coordinate representation outside this crate joins
/// the transforms by picking one of the two policies — the crate's
/// integration tests run a 128-bit decimal type through it.
///
/// # Examples
///
/// ```
/// use lupe::Coordinate;
///
/// assert_eq!((-7i32).div_factor(2), -4); // floor, not truncation
/// assert_eq!(7.0f64.div_factor(2), 3.5); // floats stay exact
/// ```
pub trait Coordinate: Copy + PartialOrd + Zero + Sub<Output = Self> {
    /// Multiplies by a positive integer factor, exactly.
    fn mul_factor(self, factor: i32) -> Self;

    /// Divides by a positive integer factor, with the per-type rounding
    /// policy described on the trait.
    fn div_factor(self, factor: i32) -> Self;
}

impl Coordinate for i32 {
    fn mul_factor(self, factor: i32) -> Self {
        self * factor
    }

    fn div_factor(self, factor: i32) -> Self {
        self.div_euclid(factor)
    }
}

impl Coordinate for i64 {
    fn mul_factor(self, factor: i32) -> Self {
        self * i64::from(factor)
    }

    fn div_factor(self, factor: i32) -> Self {
        self.div_euclid(i64::from(factor))
    }
}

impl Coordinate for f32 {
    fn mul_factor(self, factor: i32) -> Self {
        self * factor as f32
    }

    fn div_factor(self, factor: i32) -> Self {
        self / factor as f32
    }
}

impl Coordinate for f64 {
    fn mul_factor(self, factor: i32) -> Self {
        self * f64::from(factor)
    }

    fn div_factor(self, factor: i32) -> Self {
        self / f64::from(factor)
    }
}
