//! Infinitely thin lenses and mirrors
use approx::relative_eq;
use log::debug;

use super::Element;
use crate::{
    error::{AbcdError, AbcdResult},
    numeric::{Dimension, Scalar},
};

/// An ideal thin lens.
///
/// A positive focal length corresponds to a focussing lens while a negative focal length
/// represents a defocussing lens. The angle of incidence θ is only used by the tangential and
/// sagittal projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThinLens<T: Scalar> {
    focal_length: T,
    angle: T,
}
impl<T: Scalar> ThinLens<T> {
    /// Creates a new [`ThinLens`].
    ///
    /// An infinite focal length is allowed and corresponds to a flat mirror or a plain window.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the focal length is not a length, zero or NaN.
    ///   - the angle is not dimensionless or not finite.
    pub fn new(focal_length: T, angle: T) -> AbcdResult<Self> {
        if !focal_length.has_dimension(Dimension::LENGTH) {
            return Err(AbcdError::Domain("focal length must be a length".into()));
        }
        if focal_length.is_zero() || focal_length.is_nan() {
            return Err(AbcdError::Argument(
                "focal length must not be 0.0 or NaN".into(),
            ));
        }
        if !angle.has_dimension(Dimension::NONE) {
            return Err(AbcdError::Domain("angle must be dimensionless".into()));
        }
        if angle.is_nan() || angle.is_infinite() {
            return Err(AbcdError::Argument("angle must be finite".into()));
        }
        Ok(Self {
            focal_length,
            angle,
        })
    }
    /// Returns the focal length of this [`ThinLens`].
    pub fn focal_length(&self) -> T {
        self.focal_length
    }
    /// Returns the angle of incidence of this [`ThinLens`].
    pub fn angle(&self) -> T {
        self.angle
    }
}

/// Builder for a curved mirror.
///
/// A mirror is modelled as a [`ThinLens`] with a focal length of half its radius of curvature
/// (unfolded beam path). Either the radius of curvature or the focal length has to be given. If
/// both are given, they must be consistent (roc = 2f).
///
/// ```
/// use abcd::element::Mirror;
///
/// let mirror = Mirror::new().with_roc(400.0).build().unwrap();
/// assert!(Mirror::new().with_roc(400.0).with_focal_length(100.0).build().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mirror<T: Scalar> {
    roc: Option<T>,
    focal_length: Option<T>,
    angle: Option<T>,
}
impl<T: Scalar> Default for Mirror<T> {
    fn default() -> Self {
        Self {
            roc: None,
            focal_length: None,
            angle: None,
        }
    }
}
impl<T: Scalar> Mirror<T> {
    /// Creates a new (empty) [`Mirror`] builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Set the radius of curvature.
    #[must_use]
    pub fn with_roc(mut self, roc: T) -> Self {
        self.roc = Some(roc);
        self
    }
    /// Set the focal length.
    #[must_use]
    pub fn with_focal_length(mut self, focal_length: T) -> Self {
        self.focal_length = Some(focal_length);
        self
    }
    /// Set the angle of incidence (in radians).
    #[must_use]
    pub fn with_angle(mut self, angle: T) -> Self {
        self.angle = Some(angle);
        self
    }
    /// Create the [`Element`] representing this mirror.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - neither radius of curvature nor focal length was given.
    ///   - the radius of curvature is not a length.
    ///   - radius of curvature and focal length are given but roc ≉ 2f.
    ///   - the resulting [`ThinLens`] is invalid (see [`ThinLens::new`]).
    pub fn build(self) -> AbcdResult<Element<T>> {
        let angle = self.angle.unwrap_or_else(|| T::zero_of(Dimension::NONE));
        let focal_length = match (self.roc, self.focal_length) {
            (None, None) => {
                return Err(AbcdError::Argument(
                    "mirror needs a radius of curvature or a focal length".into(),
                ))
            }
            (None, Some(focal_length)) => focal_length,
            (Some(roc), focal_length) => {
                if !roc.has_dimension(Dimension::LENGTH) {
                    return Err(AbcdError::Domain(
                        "radius of curvature must be a length".into(),
                    ));
                }
                let half_roc = roc.scale(0.5);
                if let Some(focal_length) = focal_length {
                    if !focal_length.same_dimension(&roc)
                        || !relative_eq!(
                            focal_length.value(),
                            half_roc.value(),
                            max_relative = 1.0e-9
                        )
                    {
                        return Err(AbcdError::Argument(format!(
                            "inconsistent mirror: roc={roc} is not twice the focal length f={focal_length}"
                        )));
                    }
                }
                half_roc
            }
        };
        debug!("mirror with focal length {focal_length}");
        Ok(Element::ThinLens(ThinLens::new(focal_length, angle)?))
    }
}
