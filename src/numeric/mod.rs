#![warn(missing_docs)]
//! Numeric capability contract used by all optical formulas.
//!
//! The physics code of this crate never works on a concrete number type. Instead it is written
//! against the [`Scalar`] trait (real values such as lengths, curvatures or refractive indices)
//! and the [`ComplexScalar`] trait (the complex beam parameter). Two strategies are provided:
//!
//!   - plain `f64` (with `Complex<f64>`): no dimension information, all dimension checks succeed.
//!   - [`Quantity`] (with [`ComplexQuantity`]): a value tagged with its power of length. Dimension
//!     checks are performed at construction time of elements and beams.
use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Sub},
};

use num::complex::Complex;

pub mod quantity;
pub use quantity::{ComplexQuantity, Quantity};

/// Physical dimension of a value, expressed as a power of length.
///
/// The exponent is stored in half-steps so that the square root of any dimension is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    half_exponent: i32,
}
impl Dimension {
    /// dimensionless (e.g. refractive index, angle, matrix elements A and D)
    pub const NONE: Self = Self { half_exponent: 0 };
    /// length (e.g. propagation distance, focal length, matrix element B)
    pub const LENGTH: Self = Self { half_exponent: 2 };
    /// inverse length (e.g. curvature, matrix element C)
    pub const INVERSE_LENGTH: Self = Self { half_exponent: -2 };
    /// Create a dimension representing `length^exponent`.
    #[must_use]
    pub const fn length_power(exponent: i32) -> Self {
        Self {
            half_exponent: 2 * exponent,
        }
    }
    /// Return the exponent of length of this [`Dimension`].
    #[must_use]
    pub fn length_exponent(&self) -> f64 {
        f64::from(self.half_exponent) / 2.0
    }
    /// Returns `true` if this [`Dimension`] is dimensionless.
    #[must_use]
    pub const fn is_dimensionless(&self) -> bool {
        self.half_exponent == 0
    }
    /// Dimension of the square root of a value of this dimension.
    ///
    /// Returns `None` if the result would not be representable (odd number of half-steps).
    #[must_use]
    pub const fn sqrt(self) -> Option<Self> {
        if self.half_exponent % 2 == 0 {
            Some(Self {
                half_exponent: self.half_exponent / 2,
            })
        } else {
            None
        }
    }
}
impl Mul for Dimension {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            half_exponent: self.half_exponent + rhs.half_exponent,
        }
    }
}
impl Div for Dimension {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self {
            half_exponent: self.half_exponent - rhs.half_exponent,
        }
    }
}
impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.half_exponent {
            0 => write!(f, "1"),
            2 => write!(f, "m"),
            -2 => write!(f, "1/m"),
            _ => write!(f, "m^{}", self.length_exponent()),
        }
    }
}

/// Capability contract for real-valued numbers (dimensionless or dimensioned).
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// complex representation of the same strategy
    type Complex: ComplexScalar<Real = Self>;

    /// Create a value of the given dimension from its SI magnitude.
    fn from_f64(value: f64, dimension: Dimension) -> Self;
    /// SI magnitude of this value.
    fn value(&self) -> f64;
    /// Check whether this value carries the given dimension.
    ///
    /// This is a check of the *dimension*, not of the value. Strategies without dimension
    /// information always return `true`.
    fn has_dimension(&self, dimension: Dimension) -> bool;
    /// Check whether two values carry the same dimension.
    fn same_dimension(&self, other: &Self) -> bool;
    /// Square root (the dimension is halved).
    #[must_use]
    fn sqrt(self) -> Self;
    /// Absolute value.
    #[must_use]
    fn abs(self) -> Self;
    /// Sine of a dimensionless value (radians).
    #[must_use]
    fn sin(self) -> Self;
    /// Cosine of a dimensionless value (radians).
    #[must_use]
    fn cos(self) -> Self;
    /// Arcsine of a dimensionless value.
    #[must_use]
    fn asin(self) -> Self;
    /// Promote to the complex representation of the same dimension.
    fn to_complex(self) -> Self::Complex;

    /// The value zero of the given dimension.
    #[must_use]
    fn zero_of(dimension: Dimension) -> Self {
        Self::from_f64(0.0, dimension)
    }
    /// The value one of the given dimension.
    #[must_use]
    fn one_of(dimension: Dimension) -> Self {
        Self::from_f64(1.0, dimension)
    }
    /// Positive infinity of the given dimension.
    #[must_use]
    fn infinity_of(dimension: Dimension) -> Self {
        Self::from_f64(f64::INFINITY, dimension)
    }
    /// Multiply by a plain factor, keeping the dimension.
    #[must_use]
    fn scale(self, factor: f64) -> Self {
        self * Self::from_f64(factor, Dimension::NONE)
    }
    /// Returns `true` if the magnitude is NaN.
    fn is_nan(&self) -> bool {
        self.value().is_nan()
    }
    /// Returns `true` if the magnitude is zero.
    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
    /// Returns `true` if the magnitude is +/- infinity.
    fn is_infinite(&self) -> bool {
        self.value().is_infinite()
    }
}

/// Capability contract for complex-valued numbers (used for the complex beam parameter).
pub trait ComplexScalar:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// real representation of the same strategy
    type Real: Scalar<Complex = Self>;

    /// Create a complex value from real and imaginary part.
    fn new(re: Self::Real, im: Self::Real) -> Self;
    /// Real part.
    fn re(&self) -> Self::Real;
    /// Imaginary part.
    fn im(&self) -> Self::Real;
    /// Reciprocal value `1/self` (the dimension is inverted).
    #[must_use]
    fn recip(self) -> Self;
}

impl Scalar for f64 {
    type Complex = Complex<Self>;

    fn from_f64(value: f64, _dimension: Dimension) -> Self {
        value
    }
    fn value(&self) -> f64 {
        *self
    }
    fn has_dimension(&self, _dimension: Dimension) -> bool {
        true
    }
    fn same_dimension(&self, _other: &Self) -> bool {
        true
    }
    fn sqrt(self) -> Self {
        Self::sqrt(self)
    }
    fn abs(self) -> Self {
        Self::abs(self)
    }
    fn sin(self) -> Self {
        Self::sin(self)
    }
    fn cos(self) -> Self {
        Self::cos(self)
    }
    fn asin(self) -> Self {
        Self::asin(self)
    }
    fn to_complex(self) -> Complex<Self> {
        Complex::new(self, 0.0)
    }
}

impl ComplexScalar for Complex<f64> {
    type Real = f64;

    fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
    fn re(&self) -> f64 {
        self.re
    }
    fn im(&self) -> f64 {
        self.im
    }
    fn recip(self) -> Self {
        self.inv()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    #[test]
    fn dimension_arithmetic() {
        assert_eq!(Dimension::LENGTH * Dimension::INVERSE_LENGTH, Dimension::NONE);
        assert_eq!(
            Dimension::NONE / Dimension::LENGTH,
            Dimension::INVERSE_LENGTH
        );
        assert_eq!(
            Dimension::LENGTH * Dimension::LENGTH,
            Dimension::length_power(2)
        );
        assert_eq!(Dimension::length_power(2).sqrt(), Some(Dimension::LENGTH));
        assert_eq!(Dimension::LENGTH.sqrt().unwrap().length_exponent(), 0.5);
        assert_eq!(Dimension::LENGTH.sqrt().unwrap().sqrt(), None);
        assert!(Dimension::NONE.is_dimensionless());
        assert!(!Dimension::LENGTH.is_dimensionless());
    }
    #[test]
    fn dimension_display() {
        assert_eq!(format!("{}", Dimension::NONE), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "m");
        assert_eq!(format!("{}", Dimension::INVERSE_LENGTH), "1/m");
        assert_eq!(format!("{}", Dimension::length_power(2)), "m^2");
    }
    #[test]
    fn float_strategy() {
        assert_eq!(f64::zero_of(Dimension::LENGTH), 0.0);
        assert_eq!(f64::one_of(Dimension::INVERSE_LENGTH), 1.0);
        assert!(f64::infinity_of(Dimension::LENGTH).is_infinite());
        assert!(2.0_f64.has_dimension(Dimension::LENGTH));
        assert!(2.0_f64.has_dimension(Dimension::NONE));
        assert_eq!(Scalar::scale(2.0_f64, 1.5), 3.0);
        assert_relative_eq!(Scalar::sqrt(4.0_f64), 2.0);
        assert_eq!(Scalar::to_complex(2.0_f64), Complex::new(2.0, 0.0));
    }
    #[test]
    fn complex_float_strategy() {
        let q = <Complex<f64> as ComplexScalar>::new(0.0, 2.0);
        assert_eq!(q.re(), 0.0);
        assert_eq!(q.im(), 2.0);
        let inv = ComplexScalar::recip(q);
        assert_relative_eq!(inv.im, -0.5);
        assert_relative_eq!(inv.re, 0.0);
    }
}
