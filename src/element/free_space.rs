//! Propagation in a homogeneous medium
use crate::{
    error::{AbcdError, AbcdResult},
    numeric::{Dimension, Scalar},
};

/// Free-space propagation over a given length.
///
/// The length is expected to be positive but this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeSpace<T: Scalar> {
    length: T,
}
impl<T: Scalar> FreeSpace<T> {
    /// Creates a new [`FreeSpace`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given `length` is not of dimension length.
    ///   - the given `length` is NaN.
    pub fn new(length: T) -> AbcdResult<Self> {
        if !length.has_dimension(Dimension::LENGTH) {
            return Err(AbcdError::Domain(
                "free space length must be a length".into(),
            ));
        }
        if length.is_nan() {
            return Err(AbcdError::Argument(
                "free space length must not be NaN".into(),
            ));
        }
        Ok(Self { length })
    }
    /// Returns the length of this [`FreeSpace`].
    pub fn length(&self) -> T {
        self.length
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{millimeter, numeric::Quantity};
    use assert_matches::assert_matches;
    #[test]
    fn new() {
        assert_eq!(FreeSpace::new(2.0).unwrap().length(), 2.0);
        assert!(FreeSpace::new(-2.0).is_ok());
        assert!(FreeSpace::new(0.0).is_ok());
        assert_matches!(FreeSpace::new(f64::NAN), Err(AbcdError::Argument(_)));
        let l = Quantity::from(millimeter!(2.0));
        assert_eq!(FreeSpace::new(l).unwrap().length(), l);
        assert_matches!(
            FreeSpace::new(Quantity::dimensionless(2.0)),
            Err(AbcdError::Domain(_))
        );
    }
}
