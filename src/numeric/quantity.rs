//! Runtime-dimensioned numbers.
//!
//! A [`Quantity`] stores its SI magnitude together with its [`Dimension`]. Products and quotients
//! combine the dimensions, sums and differences require equal dimensions. A sum of mismatched
//! dimensions does not panic but yields a NaN magnitude (use [`Quantity::try_add`] for an explicit
//! check). Values from the [`uom`] unit system are converted at the API boundary.
use std::{
    cmp::Ordering,
    fmt::Display,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num::complex::Complex;
use uom::si::{
    angle::radian,
    f64::{Angle, Length, Ratio, ReciprocalLength},
    length::meter,
    ratio::ratio,
    reciprocal_length::reciprocal_meter,
};

use super::{ComplexScalar, Dimension, Scalar};
use crate::error::{AbcdError, AbcdResult};

/// A real value tagged with its physical [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: f64,
    dimension: Dimension,
}
impl Quantity {
    /// Creates a new [`Quantity`] from its SI magnitude and dimension.
    #[must_use]
    pub const fn new(value: f64, dimension: Dimension) -> Self {
        Self { value, dimension }
    }
    /// Create a dimensionless [`Quantity`].
    #[must_use]
    pub const fn dimensionless(value: f64) -> Self {
        Self::new(value, Dimension::NONE)
    }
    /// Returns the dimension of this [`Quantity`].
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }
    /// Add two quantities, checking their dimensions.
    ///
    /// # Errors
    ///
    /// This function will return an error if the dimensions of both operands differ.
    pub fn try_add(self, rhs: Self) -> AbcdResult<Self> {
        self.check_same_dimension(&rhs, "add")?;
        Ok(self + rhs)
    }
    /// Subtract two quantities, checking their dimensions.
    ///
    /// # Errors
    ///
    /// This function will return an error if the dimensions of both operands differ.
    pub fn try_sub(self, rhs: Self) -> AbcdResult<Self> {
        self.check_same_dimension(&rhs, "subtract")?;
        Ok(self - rhs)
    }
    fn check_same_dimension(&self, rhs: &Self, operation: &str) -> AbcdResult<()> {
        if self.dimension == rhs.dimension {
            Ok(())
        } else {
            Err(AbcdError::Domain(format!(
                "cannot {operation} quantities of dimension {} and {}",
                self.dimension, rhs.dimension
            )))
        }
    }
    fn combine(self, rhs: Self, value: f64) -> Self {
        if self.dimension == rhs.dimension {
            Self::new(value, self.dimension)
        } else {
            Self::new(f64::NAN, self.dimension)
        }
    }
}
impl Add for Quantity {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, self.value + rhs.value)
    }
}
impl Sub for Quantity {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, self.value - rhs.value)
    }
}
impl Mul for Quantity {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value, self.dimension * rhs.dimension)
    }
}
impl Div for Quantity {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value, self.dimension / rhs.dimension)
    }
}
impl Neg for Quantity {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value, self.dimension)
    }
}
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimension == other.dimension {
            self.value.partial_cmp(&other.value)
        } else {
            None
        }
    }
}
impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.dimension.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.dimension)
        }
    }
}
impl Scalar for Quantity {
    type Complex = ComplexQuantity;

    fn from_f64(value: f64, dimension: Dimension) -> Self {
        Self::new(value, dimension)
    }
    fn value(&self) -> f64 {
        self.value
    }
    fn has_dimension(&self, dimension: Dimension) -> bool {
        self.dimension == dimension
    }
    fn same_dimension(&self, other: &Self) -> bool {
        self.dimension == other.dimension
    }
    fn sqrt(self) -> Self {
        self.dimension.sqrt().map_or_else(
            || Self::new(f64::NAN, Dimension::NONE),
            |dimension| Self::new(self.value.sqrt(), dimension),
        )
    }
    fn abs(self) -> Self {
        Self::new(self.value.abs(), self.dimension)
    }
    fn sin(self) -> Self {
        Self::dimensionless(self.dimensionless_value().sin())
    }
    fn cos(self) -> Self {
        Self::dimensionless(self.dimensionless_value().cos())
    }
    fn asin(self) -> Self {
        Self::dimensionless(self.dimensionless_value().asin())
    }
    fn to_complex(self) -> ComplexQuantity {
        ComplexQuantity::new(Complex::new(self.value, 0.0), self.dimension)
    }
}
impl Quantity {
    fn dimensionless_value(self) -> f64 {
        if self.dimension.is_dimensionless() {
            self.value
        } else {
            f64::NAN
        }
    }
}
impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::dimensionless(value)
    }
}
impl From<Length> for Quantity {
    fn from(length: Length) -> Self {
        Self::new(length.get::<meter>(), Dimension::LENGTH)
    }
}
impl From<ReciprocalLength> for Quantity {
    fn from(curvature: ReciprocalLength) -> Self {
        Self::new(
            curvature.get::<reciprocal_meter>(),
            Dimension::INVERSE_LENGTH,
        )
    }
}
impl From<Angle> for Quantity {
    fn from(angle: Angle) -> Self {
        Self::dimensionless(angle.get::<radian>())
    }
}
impl From<Ratio> for Quantity {
    fn from(r: Ratio) -> Self {
        Self::dimensionless(r.get::<ratio>())
    }
}
impl TryFrom<Quantity> for Length {
    type Error = AbcdError;

    fn try_from(q: Quantity) -> AbcdResult<Self> {
        if q.dimension == Dimension::LENGTH {
            Ok(Self::new::<meter>(q.value))
        } else {
            Err(AbcdError::Domain(format!(
                "quantity of dimension {} is not a length",
                q.dimension
            )))
        }
    }
}
impl TryFrom<Quantity> for f64 {
    type Error = AbcdError;

    fn try_from(q: Quantity) -> AbcdResult<Self> {
        if q.dimension.is_dimensionless() {
            Ok(q.value)
        } else {
            Err(AbcdError::Domain(format!(
                "quantity of dimension {} is not dimensionless",
                q.dimension
            )))
        }
    }
}

/// A complex value tagged with its physical [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexQuantity {
    value: Complex<f64>,
    dimension: Dimension,
}
impl ComplexQuantity {
    /// Creates a new [`ComplexQuantity`].
    #[must_use]
    pub const fn new(value: Complex<f64>, dimension: Dimension) -> Self {
        Self { value, dimension }
    }
    /// Returns the complex SI magnitude.
    #[must_use]
    pub const fn value(&self) -> Complex<f64> {
        self.value
    }
    /// Returns the dimension of this [`ComplexQuantity`].
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }
    fn combine(self, rhs: Self, value: Complex<f64>) -> Self {
        if self.dimension == rhs.dimension {
            Self::new(value, self.dimension)
        } else {
            Self::new(Complex::new(f64::NAN, f64::NAN), self.dimension)
        }
    }
}
impl Add for ComplexQuantity {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, self.value + rhs.value)
    }
}
impl Sub for ComplexQuantity {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, self.value - rhs.value)
    }
}
impl Mul for ComplexQuantity {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value, self.dimension * rhs.dimension)
    }
}
impl Div for ComplexQuantity {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value, self.dimension / rhs.dimension)
    }
}
impl Neg for ComplexQuantity {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value, self.dimension)
    }
}
impl ComplexScalar for ComplexQuantity {
    type Real = Quantity;

    fn new(re: Quantity, im: Quantity) -> Self {
        let value = Complex::new(re.value, im.value);
        if re.dimension == im.dimension {
            Self::new(value, re.dimension)
        } else {
            Self::new(Complex::new(f64::NAN, f64::NAN), re.dimension)
        }
    }
    fn re(&self) -> Quantity {
        Quantity::new(self.value.re, self.dimension)
    }
    fn im(&self) -> Quantity {
        Quantity::new(self.value.im, self.dimension)
    }
    fn recip(self) -> Self {
        Self::new(self.value.inv(), Dimension::NONE / self.dimension)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{degree, millimeter};
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use uom::si::length::millimeter;

    #[test]
    fn from_uom() {
        let l = Quantity::from(millimeter!(2.0));
        assert_relative_eq!(l.value(), 2.0e-3);
        assert_eq!(l.dimension(), Dimension::LENGTH);
        let a = Quantity::from(degree!(180.0));
        assert_relative_eq!(a.value(), std::f64::consts::PI);
        assert!(a.has_dimension(Dimension::NONE));
        let c = Quantity::from(ReciprocalLength::new::<reciprocal_meter>(4.0));
        assert_eq!(c.dimension(), Dimension::INVERSE_LENGTH);
        assert_eq!(Quantity::from(1.5).dimension(), Dimension::NONE);
    }
    #[test]
    fn to_uom() {
        let l = Length::try_from(Quantity::from(millimeter!(3.0))).unwrap();
        assert_relative_eq!(l.get::<millimeter>(), 3.0);
        assert_matches!(
            Length::try_from(Quantity::dimensionless(3.0)),
            Err(AbcdError::Domain(_))
        );
        assert_eq!(f64::try_from(Quantity::dimensionless(3.0)).unwrap(), 3.0);
        assert!(f64::try_from(Quantity::from(millimeter!(3.0))).is_err());
    }
    #[test]
    fn arithmetic() {
        let l = Quantity::new(2.0, Dimension::LENGTH);
        let c = Quantity::new(0.5, Dimension::INVERSE_LENGTH);
        assert_eq!(l * c, Quantity::dimensionless(1.0));
        assert_eq!(l / l, Quantity::dimensionless(1.0));
        assert_eq!(l + l, Quantity::new(4.0, Dimension::LENGTH));
        assert_eq!(l - l, Quantity::new(0.0, Dimension::LENGTH));
        assert_eq!(-l, Quantity::new(-2.0, Dimension::LENGTH));
        assert_eq!((l * l).sqrt(), l);
        assert_eq!(Quantity::dimensionless(1.0) / l, c);
        assert_eq!(l.scale(3.0), Quantity::new(6.0, Dimension::LENGTH));
    }
    #[test]
    fn mismatched_dimensions() {
        let l = Quantity::new(2.0, Dimension::LENGTH);
        let n = Quantity::dimensionless(1.0);
        assert!((l + n).value().is_nan());
        assert!((l - n).value().is_nan());
        assert_matches!(l.try_add(n), Err(AbcdError::Domain(_)));
        assert_matches!(l.try_sub(n), Err(AbcdError::Domain(_)));
        assert_eq!(l.try_add(l).unwrap(), Quantity::new(4.0, Dimension::LENGTH));
        assert!(l.sin().value().is_nan());
        assert_eq!(l.partial_cmp(&n), None);
        assert!(l > Quantity::new(1.0, Dimension::LENGTH));
    }
    #[test]
    fn complex() {
        let q = ComplexQuantity::new(Complex::new(1.0, 2.0), Dimension::LENGTH);
        assert_eq!(q.re(), Quantity::new(1.0, Dimension::LENGTH));
        assert_eq!(q.im(), Quantity::new(2.0, Dimension::LENGTH));
        let inv = q.recip();
        assert_eq!(inv.dimension(), Dimension::INVERSE_LENGTH);
        assert_relative_eq!(inv.value().re, 0.2);
        assert_relative_eq!(inv.value().im, -0.4);
        let built = <ComplexQuantity as ComplexScalar>::new(
            Quantity::new(1.0, Dimension::LENGTH),
            Quantity::dimensionless(2.0),
        );
        assert!(built.value().re.is_nan());
        assert_eq!((q * inv).dimension(), Dimension::NONE);
        assert!((q + inv).value().im.is_nan());
    }
    #[test]
    fn display() {
        assert_eq!(format!("{}", Quantity::new(2.0, Dimension::LENGTH)), "2 m");
        assert_eq!(format!("{}", Quantity::dimensionless(2.0)), "2");
    }
}
