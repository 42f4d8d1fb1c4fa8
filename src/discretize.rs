#![warn(missing_docs)]
//! Splitting of space-occupying elements into equal sub-elements.
//!
//! A discretized system has the same transfer matrix as the original one but provides more
//! intermediate beam states when traced (e.g. for plotting a beam profile).
use crate::{
    element::{Element, FreeSpace},
    error::{AbcdError, AbcdResult},
    numeric::Scalar,
    system::System,
    utils::usize_to_f64,
};

impl<T: Scalar> Element<T> {
    /// Split this element into `n` equal sub-elements.
    ///
    /// A [`FreeSpace`] of length L becomes `n` copies of a [`FreeSpace`] of length L/n. Projected
    /// elements are split like the element they wrap. All other elements are returned unchanged
    /// (as a single element).
    ///
    /// # Errors
    ///
    /// This function will return an error if `n` is zero.
    pub fn discretize(&self, n: usize) -> AbcdResult<Vec<Self>> {
        if n == 0 {
            return Err(AbcdError::Argument(
                "number of sub-elements must be at least 1".into(),
            ));
        }
        match self {
            Self::FreeSpace(space) => {
                let part = FreeSpace::new(space.length().scale(1.0 / usize_to_f64(n)))?;
                Ok(vec![Self::FreeSpace(part); n])
            }
            Self::Tangential(inner) => Ok(inner
                .discretize(n)?
                .into_iter()
                .map(|part| Self::Tangential(Box::new(part)))
                .collect()),
            Self::Sagittal(inner) => Ok(inner
                .discretize(n)?
                .into_iter()
                .map(|part| Self::Sagittal(Box::new(part)))
                .collect()),
            Self::Interface(_) | Self::ThinLens(_) => Ok(vec![self.clone()]),
        }
    }
}

/// Split all space-occupying elements of a system into `n` equal sub-elements.
///
/// The order of the elements is preserved. The resulting system contains
/// `(n - 1) * (number of space-occupying elements) + (number of elements)` elements.
///
/// # Errors
///
/// This function will return an error if `n` is zero.
pub fn discretize<T: Scalar>(system: &System<T>, n: usize) -> AbcdResult<System<T>> {
    let mut elements = Vec::with_capacity(system.len() * n);
    for element in system {
        elements.extend(element.discretize(n)?);
    }
    Ok(System::new(elements))
}
