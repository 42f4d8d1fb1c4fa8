#![warn(missing_docs)]
//! Idealized optical elements.
//!
//! An optical system is modelled as an ordered sequence of [`Element`]s. Each element is an
//! immutable value, created through a validating constructor. The element kinds form a closed
//! set, so that the derivation of the ray-transfer matrix ([`Element::matrix`](crate::matrix))
//! is an exhaustive match.
//!
//! Off-normal incidence on curved interfaces and lenses introduces astigmatism. This is modelled
//! by wrapping an element into a tangential or sagittal plane projection (see
//! [`Element::tangential`] and [`Element::sagittal`]).
use std::fmt::Display;

use log::warn;

use crate::{
    error::AbcdResult,
    numeric::{Dimension, Scalar},
};

mod free_space;
mod interface;
mod thin_lens;

pub use free_space::FreeSpace;
pub use interface::Interface;
pub use thin_lens::{Mirror, ThinLens};

/// An idealized optical element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<T: Scalar> {
    /// Propagation over a given length in a homogeneous medium
    FreeSpace(FreeSpace<T>),
    /// A (possibly curved) boundary between two media
    Interface(Interface<T>),
    /// An ideal thin lens (or mirror)
    ThinLens(ThinLens<T>),
    /// The tangential ("parallel") plane behaviour of the wrapped element
    Tangential(Box<Element<T>>),
    /// The sagittal plane behaviour of the wrapped element
    Sagittal(Box<Element<T>>),
}
impl<T: Scalar> Element<T> {
    /// Create a [`FreeSpace`] element of the given length.
    ///
    /// # Errors
    ///
    /// This function will return an error if the length is not a length or NaN.
    pub fn free_space(length: T) -> AbcdResult<Self> {
        Ok(Self::FreeSpace(FreeSpace::new(length)?))
    }
    /// Create a [`ThinLens`] element with the given focal length at normal incidence.
    ///
    /// # Errors
    ///
    /// This function will return an error if the focal length is not a length, zero or NaN.
    pub fn thin_lens(focal_length: T) -> AbcdResult<Self> {
        Ok(Self::ThinLens(ThinLens::new(
            focal_length,
            T::zero_of(Dimension::NONE),
        )?))
    }
    /// Create a mirror with the given radius of curvature at normal incidence.
    ///
    /// This is a shortcut for `Mirror::new().with_roc(roc).build()`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the radius of curvature is not a length, zero or NaN.
    pub fn mirror(roc: T) -> AbcdResult<Self> {
        Mirror::new().with_roc(roc).build()
    }
    /// Return the tangential plane projection of this element.
    ///
    /// Free space is isotropic, so a [`FreeSpace`] element is returned unchanged. An element
    /// which is already projected keeps its existing projection.
    #[must_use]
    pub fn tangential(&self) -> Self {
        match self {
            Self::FreeSpace(_) => self.clone(),
            Self::Tangential(_) | Self::Sagittal(_) => {
                warn!("element is already projected, keeping existing projection");
                self.clone()
            }
            _ => Self::Tangential(Box::new(self.clone())),
        }
    }
    /// Return the sagittal plane projection of this element.
    ///
    /// Free space is isotropic, so a [`FreeSpace`] element is returned unchanged. An element
    /// which is already projected keeps its existing projection.
    #[must_use]
    pub fn sagittal(&self) -> Self {
        match self {
            Self::FreeSpace(_) => self.clone(),
            Self::Tangential(_) | Self::Sagittal(_) => {
                warn!("element is already projected, keeping existing projection");
                self.clone()
            }
            _ => Self::Sagittal(Box::new(self.clone())),
        }
    }
    /// Distance along the optical axis a beam advances while crossing this element.
    ///
    /// Only [`FreeSpace`] occupies space. The path length is not weighted with the refractive
    /// index.
    #[must_use]
    pub fn propagation_length(&self) -> T {
        match self {
            Self::FreeSpace(space) => space.length(),
            Self::Tangential(inner) | Self::Sagittal(inner) => inner.propagation_length(),
            Self::Interface(_) | Self::ThinLens(_) => T::zero_of(Dimension::LENGTH),
        }
    }
    /// Ratio η by which the refractive index is divided when crossing this element.
    #[must_use]
    pub fn ratio(&self) -> T {
        match self {
            Self::Interface(interface) => interface.ratio(),
            Self::Tangential(inner) | Self::Sagittal(inner) => inner.ratio(),
            Self::FreeSpace(_) | Self::ThinLens(_) => T::one_of(Dimension::NONE),
        }
    }
    /// Returns `true` if this element occupies space along the optical axis.
    #[must_use]
    pub fn is_space_occupying(&self) -> bool {
        match self {
            Self::FreeSpace(_) => true,
            Self::Tangential(inner) | Self::Sagittal(inner) => inner.is_space_occupying(),
            Self::Interface(_) | Self::ThinLens(_) => false,
        }
    }
}
impl<T: Scalar> From<FreeSpace<T>> for Element<T> {
    fn from(space: FreeSpace<T>) -> Self {
        Self::FreeSpace(space)
    }
}
impl<T: Scalar> From<Interface<T>> for Element<T> {
    fn from(interface: Interface<T>) -> Self {
        Self::Interface(interface)
    }
}
impl<T: Scalar> From<ThinLens<T>> for Element<T> {
    fn from(lens: ThinLens<T>) -> Self {
        Self::ThinLens(lens)
    }
}
impl<T: Scalar> Display for Element<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FreeSpace(space) => write!(f, "FreeSpace({})", space.length()),
            Self::Interface(interface) => write!(
                f,
                "Interface(η={}, θ={}, R={})",
                interface.ratio(),
                interface.angle(),
                interface.roc()
            ),
            Self::ThinLens(lens) => {
                write!(f, "ThinLens(f={}, θ={})", lens.focal_length(), lens.angle())
            }
            Self::Tangential(inner) => write!(f, "Tangential({inner})"),
            Self::Sagittal(inner) => write!(f, "Sagittal({inner})"),
        }
    }
}
