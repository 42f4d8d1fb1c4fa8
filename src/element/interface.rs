//! Refractive boundary between two media
use crate::{
    error::{AbcdError, AbcdResult},
    numeric::{Dimension, Scalar},
};

/// A (possibly curved) interface between two media.
///
/// The interface is described by
///   - the index ratio η. Crossing the interface divides the refractive index of the beam by η,
///     so that `n_after = n_before / η`.
///   - the angle of incidence θ (only relevant for the tangential or sagittal projection).
///   - the radius of curvature R. The bare matrix of the interface has C = (η - 1) / R.
///
/// The default interface (η = 1, θ = 0, R = ∞) does not change the beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interface<T: Scalar> {
    ratio: T,
    angle: T,
    roc: T,
}
impl<T: Scalar> Default for Interface<T> {
    fn default() -> Self {
        Self {
            ratio: T::one_of(Dimension::NONE),
            angle: T::zero_of(Dimension::NONE),
            roc: T::infinity_of(Dimension::LENGTH),
        }
    }
}
impl<T: Scalar> Interface<T> {
    /// Creates a new flat [`Interface`] with unity index ratio.
    ///
    /// Use the `with_*` functions for setting further parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Modifies the index ratio of an [`Interface`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the ratio is not dimensionless, zero or NaN.
    pub fn with_ratio(mut self, ratio: T) -> AbcdResult<Self> {
        if !ratio.has_dimension(Dimension::NONE) {
            return Err(AbcdError::Domain("index ratio must be dimensionless".into()));
        }
        if ratio.is_zero() || ratio.is_nan() {
            return Err(AbcdError::Argument(
                "index ratio must not be 0.0 or NaN".into(),
            ));
        }
        self.ratio = ratio;
        Ok(self)
    }
    /// Modifies the angle of incidence (in radians) of an [`Interface`].
    ///
    /// # Errors
    ///
    /// This function will return an error if the angle is not dimensionless or not finite.
    pub fn with_angle(mut self, angle: T) -> AbcdResult<Self> {
        if !angle.has_dimension(Dimension::NONE) {
            return Err(AbcdError::Domain("angle must be dimensionless".into()));
        }
        if angle.is_nan() || angle.is_infinite() {
            return Err(AbcdError::Argument("angle must be finite".into()));
        }
        self.angle = angle;
        Ok(self)
    }
    /// Modifies the radius of curvature of an [`Interface`].
    ///
    /// A radius of curvature of +/- infinity corresponds to a flat interface.
    ///
    /// # Errors
    ///
    /// This function will return an error if the radius of curvature is not a length, zero or NaN.
    pub fn with_roc(mut self, roc: T) -> AbcdResult<Self> {
        if !roc.has_dimension(Dimension::LENGTH) {
            return Err(AbcdError::Domain(
                "radius of curvature must be a length".into(),
            ));
        }
        if roc.is_zero() || roc.is_nan() {
            return Err(AbcdError::Argument(
                "radius of curvature must not be 0.0 or NaN".into(),
            ));
        }
        self.roc = roc;
        Ok(self)
    }
    /// Returns the index ratio of this [`Interface`].
    pub fn ratio(&self) -> T {
        self.ratio
    }
    /// Returns the angle of incidence of this [`Interface`].
    pub fn angle(&self) -> T {
        self.angle
    }
    /// Returns the radius of curvature of this [`Interface`].
    pub fn roc(&self) -> T {
        self.roc
    }
}
