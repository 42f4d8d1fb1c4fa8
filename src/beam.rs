#![warn(missing_docs)]
//! Beam states.
//!
//! Two representations are provided: a [`GeometricBeam`] (a single paraxial ray) and a
//! [`GaussianBeam`] which additionally carries the complex beam parameter q. Both are immutable
//! values. Crossing an element produces a new state (see [`Beam::transform`]).
use log::debug;
use std::f64::consts::PI;

use crate::{
    element::Element,
    error::{AbcdError, AbcdResult},
    matrix::RayTransferMatrix,
    numeric::{ComplexScalar, Dimension, Scalar},
    system::System,
};

/// Accessors common to all beam representations.
pub trait Beam<T: Scalar>: Clone {
    /// Position z along the optical axis.
    fn location(&self) -> T;
    /// Refractive index n of the medium the beam is currently in.
    fn ior(&self) -> T;
    /// Radial offset x of the (chief) ray.
    fn radial_pos(&self) -> T;
    /// Slope k of the (chief) ray.
    fn slope(&self) -> T;
    /// Return the state of this beam after crossing the given element.
    ///
    /// The ray is transformed by the element's matrix, the location is advanced by the element's
    /// propagation length and the refractive index is divided by the element's ratio η.
    #[must_use]
    fn transform(&self, element: &Element<T>) -> Self;
}

/// A geometric (paraxial) ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricBeam<T: Scalar> {
    location: T,
    ior: T,
    radial_pos: T,
    slope: T,
}
impl<T: Scalar> GeometricBeam<T> {
    /// Creates a new [`GeometricBeam`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - location or radial position are not lengths or not finite.
    ///   - refractive index or slope are not dimensionless.
    ///   - the refractive index is not positive and finite.
    ///   - the slope is not finite.
    pub fn new(location: T, ior: T, radial_pos: T, slope: T) -> AbcdResult<Self> {
        check_position(location, "location")?;
        check_position(radial_pos, "radial position")?;
        check_ior(ior)?;
        if !slope.has_dimension(Dimension::NONE) {
            return Err(AbcdError::Domain("slope must be dimensionless".into()));
        }
        if slope.is_nan() || slope.is_infinite() {
            return Err(AbcdError::Argument("slope must be finite".into()));
        }
        Ok(Self {
            location,
            ior,
            radial_pos,
            slope,
        })
    }
    /// Creates a new [`GeometricBeam`] on the optical axis (radial position and slope zero).
    ///
    /// # Errors
    ///
    /// This function will return an error if the location or the refractive index are invalid
    /// (see [`GeometricBeam::new`]).
    pub fn on_axis(location: T, ior: T) -> AbcdResult<Self> {
        Self::new(
            location,
            ior,
            T::zero_of(Dimension::LENGTH),
            T::zero_of(Dimension::NONE),
        )
    }
    fn propagate(&self, matrix: &RayTransferMatrix<T>, element: &Element<T>) -> Self {
        let (radial_pos, slope) = matrix.apply_ray(self.radial_pos, self.slope);
        Self {
            location: self.location + element.propagation_length(),
            ior: self.ior / element.ratio(),
            radial_pos,
            slope,
        }
    }
}
impl<T: Scalar> Beam<T> for GeometricBeam<T> {
    fn location(&self) -> T {
        self.location
    }
    fn ior(&self) -> T {
        self.ior
    }
    fn radial_pos(&self) -> T {
        self.radial_pos
    }
    fn slope(&self) -> T {
        self.slope
    }
    fn transform(&self, element: &Element<T>) -> Self {
        self.propagate(&element.matrix(), element)
    }
}

/// A fundamental mode Gaussian beam.
///
/// The beam is described by its wavelength λ (in vacuum) and the complex beam parameter
/// q = (z - z0) + i zR where z0 is the waist location and zR = π n w0² / λ the Rayleigh range.
/// The embedded [`GeometricBeam`] tracks location, refractive index and the chief ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBeam<T: Scalar> {
    geometric: GeometricBeam<T>,
    wavelength: T,
    beam_parameter: T::Complex,
}
impl<T: Scalar> GaussianBeam<T> {
    /// Returns a builder for a [`GaussianBeam`] given by its waist.
    #[must_use]
    pub fn builder() -> GaussianBeamBuilder<T> {
        GaussianBeamBuilder::default()
    }
    /// Creates a new [`GaussianBeam`] directly from its complex beam parameter q.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - real or imaginary part of q are not lengths.
    ///   - the imaginary part of q (Rayleigh range) is not positive.
    ///   - wavelength, refractive index or location are invalid.
    pub fn from_beam_parameter(
        beam_parameter: T::Complex,
        wavelength: T,
        ior: T,
        location: T,
    ) -> AbcdResult<Self> {
        let (re, im) = (beam_parameter.re(), beam_parameter.im());
        if !re.has_dimension(Dimension::LENGTH) || !im.has_dimension(Dimension::LENGTH) {
            return Err(AbcdError::Domain("beam parameter must be a length".into()));
        }
        if re.is_nan() || re.is_infinite() || im.value() <= 0.0 || im.is_nan() || im.is_infinite()
        {
            return Err(AbcdError::Domain(format!(
                "non-physical beam parameter q = {re} + i {im}"
            )));
        }
        check_wavelength(wavelength)?;
        Ok(Self {
            geometric: GeometricBeam::on_axis(location, ior)?,
            wavelength,
            beam_parameter,
        })
    }
    /// Creates the eigenmode of an optical resonator.
    ///
    /// The given system is interpreted as one round trip through the resonator, starting in front
    /// of its first element. The returned beam describes the mode right behind the first element
    /// (e.g. the beam leaving the first mirror) and is located at z = 0. Its beam parameter
    /// reproduces itself after the remaining elements followed by the first one.
    ///
    /// The refractive index `ior` is the one in front of the first element.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the resonator is not stable (see [`RayTransferMatrix::self_consistent_q`]).
    ///   - wavelength or refractive index are invalid.
    pub fn from_cavity(system: &System<T>, wavelength: T, ior: T) -> AbcdResult<Self> {
        let input_q = system.matrix().self_consistent_q()?;
        let (beam_parameter, ior) = match system.iter().next() {
            Some(first) => (first.matrix().apply_q(input_q), ior / first.ratio()),
            None => (input_q, ior),
        };
        let beam = Self::from_beam_parameter(
            beam_parameter,
            wavelength,
            ior,
            T::zero_of(Dimension::LENGTH),
        )?;
        debug!(
            "cavity eigenmode: waist radius {} at {}",
            beam.waist_radius(),
            beam.waist_location()
        );
        Ok(beam)
    }
    /// Complex beam parameter q.
    pub fn beam_parameter(&self) -> T::Complex {
        self.beam_parameter
    }
    /// Wavelength λ in vacuum.
    pub fn wavelength(&self) -> T {
        self.wavelength
    }
    /// The embedded geometric ray state.
    pub fn geometric(&self) -> &GeometricBeam<T> {
        &self.geometric
    }
    /// Radius w of the beam at its current location (1/e² intensity).
    ///
    /// w = sqrt(-λ / (π n Im(1/q)))
    pub fn spot_radius(&self) -> T {
        let inverse_q = self.beam_parameter.recip();
        (-(self.wavelength / (self.ior() * inverse_q.im())))
            .scale(1.0 / PI)
            .sqrt()
    }
    /// Radius of curvature of the wavefront at the current location.
    ///
    /// Returns +∞ at the waist (plane wavefront).
    pub fn wavefront_roc(&self) -> T {
        let curvature = self.beam_parameter.recip().re();
        if curvature.is_zero() {
            T::infinity_of(Dimension::LENGTH)
        } else {
            T::one_of(Dimension::NONE) / curvature
        }
    }
    /// Rayleigh range zR.
    pub fn rayleigh_range(&self) -> T {
        self.beam_parameter.im()
    }
    /// Absolute location z0 of the beam waist.
    pub fn waist_location(&self) -> T {
        self.location() - self.beam_parameter.re()
    }
    /// Distance from the current location to the waist.
    ///
    /// The distance is negative if the waist lies behind the current location.
    pub fn waist_distance(&self) -> T {
        -self.beam_parameter.re()
    }
    /// Radius w0 of the beam waist.
    pub fn waist_radius(&self) -> T {
        (self.wavelength * self.beam_parameter.im() / self.ior())
            .scale(1.0 / PI)
            .sqrt()
    }
    /// Far-field divergence half-angle w0 / zR.
    pub fn divergence(&self) -> T {
        self.waist_radius() / self.rayleigh_range()
    }
    /// Beam parameter product w0 · θ = λ / (π n).
    pub fn beam_parameter_product(&self) -> T {
        self.waist_radius() * self.divergence()
    }
}
impl<T: Scalar> Beam<T> for GaussianBeam<T> {
    fn location(&self) -> T {
        self.geometric.location()
    }
    fn ior(&self) -> T {
        self.geometric.ior()
    }
    fn radial_pos(&self) -> T {
        self.geometric.radial_pos()
    }
    fn slope(&self) -> T {
        self.geometric.slope()
    }
    fn transform(&self, element: &Element<T>) -> Self {
        let matrix = element.matrix();
        Self {
            geometric: self.geometric.propagate(&matrix, element),
            wavelength: self.wavelength,
            beam_parameter: matrix.apply_q(self.beam_parameter),
        }
    }
}

/// Builder for a [`GaussianBeam`] given by its waist.
///
/// Wavelength and waist radius are mandatory. Location and waist location default to z = 0, the
/// refractive index defaults to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBeamBuilder<T: Scalar> {
    wavelength: Option<T>,
    waist_radius: Option<T>,
    waist_location: Option<T>,
    location: Option<T>,
    ior: Option<T>,
}
impl<T: Scalar> Default for GaussianBeamBuilder<T> {
    fn default() -> Self {
        Self {
            wavelength: None,
            waist_radius: None,
            waist_location: None,
            location: None,
            ior: None,
        }
    }
}
impl<T: Scalar> GaussianBeamBuilder<T> {
    /// Set the wavelength (in vacuum).
    #[must_use]
    pub fn with_wavelength(mut self, wavelength: T) -> Self {
        self.wavelength = Some(wavelength);
        self
    }
    /// Set the waist radius w0.
    #[must_use]
    pub fn with_waist_radius(mut self, waist_radius: T) -> Self {
        self.waist_radius = Some(waist_radius);
        self
    }
    /// Set the absolute location z0 of the waist.
    #[must_use]
    pub fn with_waist_location(mut self, waist_location: T) -> Self {
        self.waist_location = Some(waist_location);
        self
    }
    /// Set the starting location z of the beam.
    #[must_use]
    pub fn with_location(mut self, location: T) -> Self {
        self.location = Some(location);
        self
    }
    /// Set the refractive index of the medium at the starting location.
    #[must_use]
    pub fn with_ior(mut self, ior: T) -> Self {
        self.ior = Some(ior);
        self
    }
    /// Create the [`GaussianBeam`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - wavelength or waist radius are missing.
    ///   - wavelength or waist radius are not positive lengths.
    ///   - location or waist location are not finite lengths.
    ///   - the refractive index is not positive and finite.
    pub fn build(self) -> AbcdResult<GaussianBeam<T>> {
        let Some(wavelength) = self.wavelength else {
            return Err(AbcdError::Argument("wavelength missing".into()));
        };
        let Some(waist_radius) = self.waist_radius else {
            return Err(AbcdError::Argument("waist radius missing".into()));
        };
        check_wavelength(wavelength)?;
        if !waist_radius.has_dimension(Dimension::LENGTH) {
            return Err(AbcdError::Domain("waist radius must be a length".into()));
        }
        if waist_radius.value() <= 0.0 || waist_radius.is_nan() || waist_radius.is_infinite() {
            return Err(AbcdError::Argument(
                "waist radius must be positive and finite".into(),
            ));
        }
        let location = self
            .location
            .unwrap_or_else(|| T::zero_of(Dimension::LENGTH));
        let waist_location = self
            .waist_location
            .unwrap_or_else(|| T::zero_of(Dimension::LENGTH));
        check_position(waist_location, "waist location")?;
        let ior = self.ior.unwrap_or_else(|| T::one_of(Dimension::NONE));
        let geometric = GeometricBeam::on_axis(location, ior)?;
        let rayleigh_range = (ior * waist_radius * waist_radius / wavelength).scale(PI);
        Ok(GaussianBeam {
            geometric,
            wavelength,
            beam_parameter: T::Complex::new(location - waist_location, rayleigh_range),
        })
    }
}

fn check_position<T: Scalar>(position: T, name: &str) -> AbcdResult<()> {
    if !position.has_dimension(Dimension::LENGTH) {
        return Err(AbcdError::Domain(format!("{name} must be a length")));
    }
    if position.is_nan() || position.is_infinite() {
        return Err(AbcdError::Argument(format!("{name} must be finite")));
    }
    Ok(())
}
fn check_ior<T: Scalar>(ior: T) -> AbcdResult<()> {
    if !ior.has_dimension(Dimension::NONE) {
        return Err(AbcdError::Domain(
            "refractive index must be dimensionless".into(),
        ));
    }
    if ior.value() <= 0.0 || ior.is_nan() || ior.is_infinite() {
        return Err(AbcdError::Argument(
            "refractive index must be positive and finite".into(),
        ));
    }
    Ok(())
}
fn check_wavelength<T: Scalar>(wavelength: T) -> AbcdResult<()> {
    if !wavelength.has_dimension(Dimension::LENGTH) {
        return Err(AbcdError::Domain("wavelength must be a length".into()));
    }
    if wavelength.value() <= 0.0 || wavelength.is_nan() || wavelength.is_infinite() {
        return Err(AbcdError::Argument(
            "wavelength must be positive and finite".into(),
        ));
    }
    Ok(())
}
