#![warn(missing_docs)]
//! Ray-transfer (ABCD) matrices.
//!
//! A [`RayTransferMatrix`] maps the pair (radial position x, slope k) in front of an element onto
//! the same pair behind it. The elements carry the dimensions
//!
//! | element | dimension      |
//! |---------|----------------|
//! | A, D    | dimensionless  |
//! | B       | length         |
//! | C       | inverse length |
//!
//! The determinant AD - BC is 1 for all elements which preserve the refractive index. For an
//! interface it equals the index ratio η.
use approx::{AbsDiffEq, RelativeEq};
use log::debug;
use nalgebra::Matrix2;
use std::ops::Mul;

use crate::{
    element::Element,
    error::{AbcdError, AbcdResult},
    numeric::{ComplexScalar, Dimension, Scalar},
};

/// A 2x2 ray-transfer matrix [[A, B], [C, D]].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTransferMatrix<T: Scalar> {
    a: T,
    b: T,
    c: T,
    d: T,
}
impl<T: Scalar> RayTransferMatrix<T> {
    /// Creates a new [`RayTransferMatrix`] from its four elements.
    pub const fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }
    /// The identity matrix with correctly dimensioned elements.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(
            T::one_of(Dimension::NONE),
            T::zero_of(Dimension::LENGTH),
            T::zero_of(Dimension::INVERSE_LENGTH),
            T::one_of(Dimension::NONE),
        )
    }
    /// Matrix element A.
    pub fn a(&self) -> T {
        self.a
    }
    /// Matrix element B.
    pub fn b(&self) -> T {
        self.b
    }
    /// Matrix element C.
    pub fn c(&self) -> T {
        self.c
    }
    /// Matrix element D.
    pub fn d(&self) -> T {
        self.d
    }
    /// Determinant AD - BC.
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.c
    }
    /// Apply this matrix to a ray given by its radial position and slope.
    pub fn apply_ray(&self, radial_pos: T, slope: T) -> (T, T) {
        (
            self.a * radial_pos + self.b * slope,
            self.c * radial_pos + self.d * slope,
        )
    }
    /// Apply this matrix to a complex beam parameter q.
    ///
    /// This is the Möbius transform q' = (Aq + B) / (Cq + D).
    pub fn apply_q(&self, q: T::Complex) -> T::Complex {
        (self.a.to_complex() * q + self.b.to_complex())
            / (self.c.to_complex() * q + self.d.to_complex())
    }
    /// The SI magnitudes of all matrix elements.
    pub fn values(&self) -> Matrix2<f64> {
        Matrix2::new(
            self.a.value(),
            self.b.value(),
            self.c.value(),
            self.d.value(),
        )
    }
    /// Check that all elements carry the dimensions of a ray-transfer matrix.
    pub fn has_valid_dimensions(&self) -> bool {
        self.a.has_dimension(Dimension::NONE)
            && self.b.has_dimension(Dimension::LENGTH)
            && self.c.has_dimension(Dimension::INVERSE_LENGTH)
            && self.d.has_dimension(Dimension::NONE)
    }
    /// Find the self-consistent complex beam parameter of a round-trip matrix.
    ///
    /// The self-consistent q is a fixed point of the Möbius transform q = (Aq + B) / (Cq + D),
    /// i.e. a root of C q² + (D - A) q - B = 0. Of the two complex conjugated roots the one with
    /// positive imaginary part (physical beam) is returned.
    ///
    /// # Errors
    ///
    /// This function will return an error if the matrix does not support a stable mode:
    ///   - C = 0 (no focussing power)
    ///   - the roots are real (|A + D| >= 2 for a unit determinant)
    pub fn self_consistent_q(&self) -> AbcdResult<T::Complex> {
        if self.c.is_zero() {
            return Err(AbcdError::Cavity(
                "round-trip matrix has no focussing power (C = 0)".into(),
            ));
        }
        let a_minus_d = self.a - self.d;
        let discriminant = a_minus_d * a_minus_d + (self.b * self.c).scale(4.0);
        if discriminant.value() >= 0.0 || discriminant.is_nan() {
            return Err(AbcdError::Cavity(format!(
                "round-trip matrix does not support a stable mode (discriminant {discriminant})"
            )));
        }
        let two_c = self.c.scale(2.0);
        let re = a_minus_d / two_c;
        let im = (-discriminant).sqrt() / two_c.abs();
        debug!("self-consistent beam parameter q = {re} + i {im}");
        Ok(T::Complex::new(re, im))
    }
}
impl<T: Scalar> Mul for RayTransferMatrix<T> {
    type Output = Self;
    /// Matrix product `self * rhs`. Note that `rhs` is applied first.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.a * rhs.a + self.b * rhs.c,
            self.a * rhs.b + self.b * rhs.d,
            self.c * rhs.a + self.d * rhs.c,
            self.c * rhs.b + self.d * rhs.d,
        )
    }
}
impl<T: Scalar> AbsDiffEq for RayTransferMatrix<T> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.has_same_dimensions(other) && self.values().abs_diff_eq(&other.values(), epsilon)
    }
}
impl<T: Scalar> RelativeEq for RayTransferMatrix<T> {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.has_same_dimensions(other)
            && self
                .values()
                .relative_eq(&other.values(), epsilon, max_relative)
    }
}
impl<T: Scalar> RayTransferMatrix<T> {
    fn has_same_dimensions(&self, other: &Self) -> bool {
        self.a.same_dimension(&other.a)
            && self.b.same_dimension(&other.b)
            && self.c.same_dimension(&other.c)
            && self.d.same_dimension(&other.d)
    }
}

impl<T: Scalar> Element<T> {
    /// Derive the ray-transfer matrix of this element.
    ///
    /// Bare interfaces and lenses use their normal-incidence matrix. The angle of incidence is
    /// only taken into account by the tangential and sagittal projections (see Kogelnik & Li,
    /// Appl. Opt. 5, 1550 (1966)). At normal incidence the projections of a lens reduce to the bare
    /// matrix.
    ///
    /// The bare interface matrix is [[1, 0], [(η - 1) / R, η]]. Note that the projections use
    /// C = (cos θ2 - η cos θ1) / R, which at normal incidence is (1 - η) / R, i.e. the opposite
    /// sign of the bare matrix.
    pub fn matrix(&self) -> RayTransferMatrix<T> {
        let one = T::one_of(Dimension::NONE);
        match self {
            Self::FreeSpace(space) => RayTransferMatrix::new(
                one,
                space.length(),
                T::zero_of(Dimension::INVERSE_LENGTH),
                one,
            ),
            Self::Interface(interface) => {
                let eta = interface.ratio();
                RayTransferMatrix::new(
                    one,
                    T::zero_of(Dimension::LENGTH),
                    (eta - one) / interface.roc(),
                    eta,
                )
            }
            Self::ThinLens(lens) => lens_matrix(lens.focal_length()),
            Self::Tangential(inner) => match inner.as_ref() {
                Self::ThinLens(lens) => lens_matrix(lens.focal_length() * lens.angle().cos()),
                Self::Interface(interface) => {
                    let eta = interface.ratio();
                    let (cos1, cos2) = refraction_cosines(eta, interface.angle());
                    RayTransferMatrix::new(
                        cos2 / cos1,
                        T::zero_of(Dimension::LENGTH),
                        (cos2 - eta * cos1) / (interface.roc() * cos1 * cos2),
                        eta * cos1 / cos2,
                    )
                }
                Self::FreeSpace(_) | Self::Tangential(_) | Self::Sagittal(_) => inner.matrix(),
            },
            Self::Sagittal(inner) => match inner.as_ref() {
                Self::ThinLens(lens) => lens_matrix(lens.focal_length() / lens.angle().cos()),
                Self::Interface(interface) => {
                    let eta = interface.ratio();
                    let (cos1, cos2) = refraction_cosines(eta, interface.angle());
                    RayTransferMatrix::new(
                        one,
                        T::zero_of(Dimension::LENGTH),
                        (cos2 - eta * cos1) / interface.roc(),
                        eta,
                    )
                }
                Self::FreeSpace(_) | Self::Tangential(_) | Self::Sagittal(_) => inner.matrix(),
            },
        }
    }
}
fn lens_matrix<T: Scalar>(focal_length: T) -> RayTransferMatrix<T> {
    let one = T::one_of(Dimension::NONE);
    RayTransferMatrix::new(one, T::zero_of(Dimension::LENGTH), -(one / focal_length), one)
}
/// Cosines of the angles of incidence θ1 and refraction θ2 = asin(η sin θ1).
fn refraction_cosines<T: Scalar>(eta: T, angle: T) -> (T, T) {
    (angle.cos(), (eta * angle.sin()).asin().cos())
}

/// Compose the matrices of an ordered sequence of elements.
///
/// The first element is the first one traversed by the beam, so the result is M_n * ... * M_1.
pub fn system_matrix<'a, T: Scalar + 'a>(
    elements: impl IntoIterator<Item = &'a Element<T>>,
) -> RayTransferMatrix<T> {
    elements
        .into_iter()
        .fold(RayTransferMatrix::identity(), |acc, element| {
            element.matrix() * acc
        })
}

impl<T: Scalar> AbsDiffEq for Element<T> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.matrix().abs_diff_eq(&other.matrix(), epsilon)
            && self
                .propagation_length()
                .value()
                .abs_diff_eq(&other.propagation_length().value(), epsilon)
    }
}
impl<T: Scalar> RelativeEq for Element<T> {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.matrix()
            .relative_eq(&other.matrix(), epsilon, max_relative)
            && self.propagation_length().value().relative_eq(
                &other.propagation_length().value(),
                epsilon,
                max_relative,
            )
    }
}
