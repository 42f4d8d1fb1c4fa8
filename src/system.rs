#![warn(missing_docs)]
//! Ordered sequences of optical elements.
use approx::{AbsDiffEq, RelativeEq};
use std::fmt::Display;

use crate::{
    element::Element,
    error::AbcdResult,
    matrix::{system_matrix, RayTransferMatrix},
    numeric::{Dimension, Scalar},
};

/// An optical system, i.e. an ordered, finite sequence of [`Element`]s.
///
/// The order of the elements corresponds to the propagation direction of the beam and is never
/// changed. Like its elements, a [`System`] is immutable: all modifying functions return a new
/// [`System`].
#[derive(Debug, Clone, PartialEq)]
pub struct System<T: Scalar> {
    elements: Vec<Element<T>>,
}
impl<T: Scalar> Default for System<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}
impl<T: Scalar> System<T> {
    /// Creates a new [`System`] from the given elements.
    #[must_use]
    pub const fn new(elements: Vec<Element<T>>) -> Self {
        Self { elements }
    }
    /// Returns a new [`System`] with the given element appended.
    #[must_use]
    pub fn then(&self, element: Element<T>) -> Self {
        let mut elements = self.elements.clone();
        elements.push(element);
        Self { elements }
    }
    /// Returns the concatenation of this system followed by `other`.
    ///
    /// Concatenation is not commutative.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
    /// Returns the elements of this [`System`].
    #[must_use]
    pub fn elements(&self) -> &[Element<T>] {
        &self.elements
    }
    /// Returns an iterator over the elements in propagation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element<T>> {
        self.elements.iter()
    }
    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    /// Returns `true` if this [`System`] has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    /// Returns the system consisting of the first `n` elements.
    #[must_use]
    pub fn prefix(&self, n: usize) -> Self {
        self.iter().take(n).cloned().collect()
    }
    /// Composed ray-transfer matrix of the whole system.
    #[must_use]
    pub fn matrix(&self) -> RayTransferMatrix<T> {
        system_matrix(self.iter())
    }
    /// Returns the tangential plane projection of all elements.
    #[must_use]
    pub fn tangential(&self) -> Self {
        self.iter().map(Element::tangential).collect()
    }
    /// Returns the sagittal plane projection of all elements.
    #[must_use]
    pub fn sagittal(&self) -> Self {
        self.iter().map(Element::sagittal).collect()
    }
    /// Total length along the optical axis.
    #[must_use]
    pub fn propagation_length(&self) -> T {
        self.iter().fold(
            T::zero_of(Dimension::LENGTH),
            |acc, element| acc + element.propagation_length(),
        )
    }
    /// Split all space-occupying elements into `n` equal sub-elements.
    ///
    /// See [`discretize`](crate::discretize::discretize).
    ///
    /// # Errors
    ///
    /// This function will return an error if `n` is zero.
    pub fn discretize(&self, n: usize) -> AbcdResult<Self> {
        crate::discretize::discretize(self, n)
    }
}
impl<T: Scalar> From<Vec<Element<T>>> for System<T> {
    fn from(elements: Vec<Element<T>>) -> Self {
        Self::new(elements)
    }
}
impl<T: Scalar> FromIterator<Element<T>> for System<T> {
    fn from_iter<I: IntoIterator<Item = Element<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
impl<'a, T: Scalar> IntoIterator for &'a System<T> {
    type Item = &'a Element<T>;
    type IntoIter = std::slice::Iter<'a, Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T: Scalar> Display for System<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}
impl<T: Scalar> AbsDiffEq for System<T> {
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
impl<T: Scalar> RelativeEq for System<T> {
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::element::{Interface, ThinLens};
    use approx::{assert_abs_diff_eq, assert_relative_eq, relative_eq};

    fn telescope() -> System<f64> {
        System::new(vec![
            Element::thin_lens(100.0).unwrap(),
            Element::free_space(300.0).unwrap(),
            Element::thin_lens(200.0).unwrap(),
        ])
    }
    #[test]
    fn default() {
        let system = System::<f64>::default();
        assert!(system.is_empty());
        assert_eq!(system.len(), 0);
        assert_eq!(system.matrix(), RayTransferMatrix::identity());
    }
    #[test]
    fn then() {
        let system = telescope();
        let longer = system.then(Element::free_space(10.0).unwrap());
        assert_eq!(system.len(), 3);
        assert_eq!(longer.len(), 4);
        assert_eq!(longer.elements()[3], Element::free_space(10.0).unwrap());
    }
    #[test]
    fn concat_is_ordered() {
        let a = System::new(vec![Element::free_space(10.0).unwrap()]);
        let b = System::new(vec![Element::thin_lens(5.0).unwrap()]);
        let ab = a.concat(&b);
        let ba = b.concat(&a);
        assert_eq!(ab.elements()[0], a.elements()[0]);
        assert_eq!(ab.elements()[1], b.elements()[0]);
        assert!(!relative_eq!(ab.matrix(), ba.matrix()));
        assert_relative_eq!(ab.matrix(), b.matrix() * a.matrix());
    }
    #[test]
    fn prefix() {
        let system = telescope();
        assert_eq!(system.prefix(0).len(), 0);
        assert_eq!(system.prefix(2).elements(), &system.elements()[..2]);
        assert_eq!(system.prefix(10), system);
    }
    #[test]
    fn matrix() {
        let m = telescope().matrix().values();
        // Kepler telescope: magnification -2, afocal
        assert_relative_eq!(m[(0, 0)], -2.0);
        assert_abs_diff_eq!(m[(1, 0)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(m[(1, 1)], -0.5);
    }
    #[test]
    fn propagation_length() {
        assert_eq!(telescope().propagation_length(), 300.0);
    }
    #[test]
    fn symmetric_projections() {
        let system = System::new(vec![
            Element::free_space(10.0).unwrap(),
            Interface::new()
                .with_ratio(1.0 / 1.5)
                .unwrap()
                .with_roc(30.0)
                .unwrap()
                .into(),
            Element::free_space(5.0).unwrap(),
            Element::thin_lens(100.0).unwrap(),
        ]);
        assert_relative_eq!(system.tangential().matrix(), system.sagittal().matrix());
        // projected interfaces flip the sign of C with respect to the bare matrix
        assert!(!relative_eq!(system.tangential().matrix(), system.matrix()));
        let lenses = System::new(vec![
            Element::free_space(10.0).unwrap(),
            Element::thin_lens(100.0).unwrap(),
        ]);
        assert_relative_eq!(lenses.tangential().matrix(), lenses.matrix());
    }
    #[test]
    fn astigmatic_projections() {
        let system = System::new(vec![
            Element::free_space(10.0).unwrap(),
            ThinLens::new(100.0, 0.4).unwrap().into(),
        ]);
        assert!(!relative_eq!(
            system.tangential().matrix(),
            system.sagittal().matrix()
        ));
        assert_eq!(system.tangential().len(), 2);
        assert_eq!(system.tangential().elements()[0], system.elements()[0]);
    }
    #[test]
    fn collect() {
        let system: System<f64> = telescope().iter().cloned().collect();
        assert_eq!(system, telescope());
        let mut count = 0;
        for _ in &system {
            count += 1;
        }
        assert_eq!(count, 3);
        assert_eq!(System::from(vec![Element::free_space(1.0).unwrap()]).len(), 1);
    }
    #[test]
    fn display() {
        let system = System::new(vec![
            Element::free_space(10.0).unwrap(),
            Element::thin_lens(5.0).unwrap(),
        ]);
        assert_eq!(format!("{system}"), "[FreeSpace(10), ThinLens(f=5, θ=0)]");
    }
    #[test]
    fn approx() {
        assert_relative_eq!(telescope(), telescope());
        let longer = telescope().then(Element::free_space(1.0).unwrap());
        assert!(!relative_eq!(telescope(), longer));
    }
}
