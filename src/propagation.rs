#![warn(missing_docs)]
//! Propagation of beams through optical systems.
//!
//! All functions are pure: the given system and beam are never modified and each call returns
//! new beam states.
use log::debug;

use crate::{
    beam::{Beam, GaussianBeam},
    element::{Element, FreeSpace},
    error::{AbcdError, AbcdResult},
    numeric::Scalar,
    system::System,
    utils::usize_to_f64,
};

/// Behaviour of a spot radius function for positions outside of the traced range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutsidePolicy<T: Scalar> {
    /// Return an [`AbcdError::Domain`] error
    Raise,
    /// Return the given value
    Fill(T),
}
impl<T: Scalar> Default for OutsidePolicy<T> {
    fn default() -> Self {
        Self::Raise
    }
}

/// Return the state of the beam after crossing a single element.
#[must_use]
pub fn transform<T: Scalar, B: Beam<T>>(element: &Element<T>, beam: &B) -> B {
    beam.transform(element)
}
/// Return the state of the beam after crossing all elements of the system in order.
#[must_use]
pub fn transform_system<T: Scalar, B: Beam<T>>(system: &System<T>, beam: &B) -> B {
    system
        .iter()
        .fold(beam.clone(), |beam, element| beam.transform(element))
}
/// Trace a beam through a system.
///
/// Returns the initial beam followed by the beam state behind each element (i.e. `N + 1` states
/// for a system of `N` elements).
#[must_use]
pub fn beam_trace<T: Scalar, B: Beam<T>>(system: &System<T>, beam: &B) -> Vec<B> {
    let mut trace = Vec::with_capacity(system.len() + 1);
    let mut current = beam.clone();
    for element in system {
        let next = current.transform(element);
        trace.push(current);
        current = next;
    }
    trace.push(current);
    trace
}
/// Trace a beam through the discretized system.
///
/// Every space-occupying element is split into `n` sub-elements (see
/// [`discretize`](crate::discretize::discretize)) before tracing.
///
/// # Errors
///
/// This function will return an error if `n` is zero.
pub fn dense_trace<T: Scalar, B: Beam<T>>(
    system: &System<T>,
    beam: &B,
    n: usize,
) -> AbcdResult<Vec<B>> {
    Ok(beam_trace(&system.discretize(n)?, beam))
}
/// Return the spot radius of a Gaussian beam as a function of the axial position.
///
/// The beam is traced through the system once. For a requested position z the last traced state
/// at or before z is propagated through free space over the remaining distance. Positions
/// outside the traced range are handled according to the given [`OutsidePolicy`].
///
/// ```
/// use abcd::{
///     beam::GaussianBeam,
///     element::Element,
///     propagation::{spot_radius_fn, OutsidePolicy},
///     system::System,
/// };
///
/// let system = System::new(vec![Element::free_space(100.0).unwrap()]);
/// let beam = GaussianBeam::builder()
///     .with_wavelength(1.0e-3)
///     .with_waist_radius(1.0)
///     .build()
///     .unwrap();
/// let spot_radius = spot_radius_fn(&system, &beam, OutsidePolicy::Fill(0.0));
/// assert!(spot_radius(50.0).unwrap() > 1.0);
/// assert_eq!(spot_radius(200.0).unwrap(), 0.0);
/// ```
pub fn spot_radius_fn<T: Scalar>(
    system: &System<T>,
    beam: &GaussianBeam<T>,
    outside: OutsidePolicy<T>,
) -> impl Fn(T) -> AbcdResult<T> {
    let trace = beam_trace(system, beam);
    let start = beam.location();
    let end = trace.last().map_or(start, Beam::location);
    move |z: T| {
        let inside = z >= start && z <= end;
        if !inside {
            return match outside {
                OutsidePolicy::Raise => Err(AbcdError::Domain(format!(
                    "position {z} is outside of the traced range [{start}, {end}]"
                ))),
                OutsidePolicy::Fill(value) => {
                    debug!("position {z} is outside of the traced range, returning {value}");
                    Ok(value)
                }
            };
        }
        let index = trace.partition_point(|state| state.location() <= z);
        let state = index
            .checked_sub(1)
            .and_then(|i| trace.get(i))
            .ok_or_else(|| AbcdError::Domain(format!("no traced state before position {z}")))?;
        let gap = Element::FreeSpace(FreeSpace::new(z - state.location())?);
        Ok(state.transform(&gap).spot_radius())
    }
}
/// Sample the spot radius on an evenly spaced grid of axial positions.
///
/// Returns `samples` pairs of (position, spot radius) covering the closed interval `window`. This
/// is the input of a radius-vs-position plot.
///
/// # Errors
///
/// This function will return an error if
///   - less than two samples are requested.
///   - the window is not within the traced range of the system.
pub fn spot_radius_profile<T: Scalar>(
    system: &System<T>,
    beam: &GaussianBeam<T>,
    window: (T, T),
    samples: usize,
) -> AbcdResult<Vec<(T, T)>> {
    if samples < 2 {
        return Err(AbcdError::Argument(
            "spot radius profile needs at least two samples".into(),
        ));
    }
    let spot_radius = spot_radius_fn(system, beam, OutsidePolicy::Raise);
    let (start, end) = window;
    let last = samples - 1;
    (0..samples)
        .map(|i| {
            let z = if i == last {
                end
            } else {
                start + (end - start).scale(usize_to_f64(i) / usize_to_f64(last))
            };
            Ok((z, spot_radius(z)?))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        beam::GeometricBeam,
        element::{Interface, ThinLens},
        millimeter, nanometer,
        numeric::{Dimension, Quantity},
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use assert_matches::assert_matches;

    fn expander() -> System<f64> {
        System::new(vec![
            Element::thin_lens(100.0).unwrap(),
            Element::free_space(300.0).unwrap(),
            Element::thin_lens(200.0).unwrap(),
            Element::free_space(1000.0).unwrap(),
        ])
    }
    fn beam() -> GaussianBeam<f64> {
        GaussianBeam::builder()
            .with_wavelength(1.0e-3)
            .with_waist_radius(1.0)
            .build()
            .unwrap()
    }
    fn asymmetric() -> System<f64> {
        System::new(vec![
            Element::free_space(10.0).unwrap(),
            Element::thin_lens(25.0).unwrap(),
            Interface::new()
                .with_ratio(1.0 / 1.5)
                .unwrap()
                .with_roc(-40.0)
                .unwrap()
                .into(),
            Element::free_space(7.0).unwrap(),
        ])
    }
    #[test]
    fn default_policy() {
        assert_eq!(OutsidePolicy::<f64>::default(), OutsidePolicy::Raise);
    }
    #[test]
    fn single_element() {
        let ray = GeometricBeam::new(0.0, 1.0, 2.0, 0.5).unwrap();
        let space = Element::free_space(4.0).unwrap();
        let moved = transform(&space, &ray);
        assert_eq!(moved.location(), 4.0);
        assert_eq!(moved.radial_pos(), 4.0);
        assert_eq!(moved.slope(), 0.5);
        assert_eq!(moved, ray.transform(&space));
    }
    #[test]
    fn empty_system() {
        let system = System::default();
        let ray = GeometricBeam::new(1.0, 1.0, 2.0, 0.5).unwrap();
        assert_eq!(beam_trace(&system, &ray), vec![ray]);
        assert_eq!(transform_system(&system, &ray), ray);
        assert_eq!(beam_trace(&system, &beam()), vec![beam()]);
    }
    #[test]
    fn system_is_folded_in_order() {
        let system = System::new(vec![
            Element::free_space(10.0).unwrap(),
            Element::thin_lens(25.0).unwrap(),
        ]);
        let ray = GeometricBeam::new(0.0, 1.0, 1.0, 0.1).unwrap();
        let result = transform_system(&system, &ray);
        let first_twice = ray
            .transform(&system.elements()[0])
            .transform(&system.elements()[0]);
        assert_ne!(result, first_twice);
        assert_eq!(result.location(), 10.0);
        assert_relative_eq!(result.radial_pos(), 2.0);
        assert_relative_eq!(result.slope(), 0.1 - 2.0 / 25.0, max_relative = 1e-12);
        let (x, k) = system.matrix().apply_ray(1.0, 0.1);
        assert_relative_eq!(result.radial_pos(), x, max_relative = 1e-12);
        assert_relative_eq!(result.slope(), k, max_relative = 1e-12);
    }
    #[test]
    fn transform_is_last_of_trace() {
        let system = asymmetric();
        let ray = GeometricBeam::new(0.0, 1.0, 1.0, -0.05).unwrap();
        let trace = beam_trace(&system, &ray);
        assert_eq!(trace.len(), system.len() + 1);
        assert_eq!(trace.last(), Some(&transform_system(&system, &ray)));
        let gaussian_trace = beam_trace(&system, &beam());
        assert_eq!(
            gaussian_trace.last(),
            Some(&transform_system(&system, &beam()))
        );
    }
    #[test]
    fn trace_equals_prefixes() {
        let system = asymmetric();
        let trace = beam_trace(&system, &beam());
        for (i, state) in trace.iter().enumerate() {
            assert_eq!(state, &transform_system(&system.prefix(i), &beam()));
        }
        assert_relative_eq!(trace[4].ior(), 1.5, max_relative = 1e-12);
        assert_eq!(trace[4].location(), 17.0);
    }
    #[test]
    fn trace_is_monotonic() {
        let trace = beam_trace(&expander(), &beam());
        assert!(trace
            .windows(2)
            .all(|pair| pair[0].location() <= pair[1].location()));
    }
    #[test]
    fn dense_trace_states() {
        let trace = dense_trace(&expander(), &beam(), 8).unwrap();
        assert_eq!(trace.len(), 2 * 7 + 4 + 1);
        assert_eq!(trace[2].location(), 37.5);
        assert_relative_eq!(
            trace.last().unwrap().spot_radius(),
            transform_system(&expander(), &beam()).spot_radius(),
            max_relative = 1e-9
        );
        assert!(dense_trace(&expander(), &beam(), 0).is_err());
    }
    #[test]
    fn beam_expander() {
        let system = expander();
        let output = transform_system(&system.prefix(3), &beam());
        assert_relative_eq!(output.beam_parameter().re, -600.0, max_relative = 1e-6);
        assert_relative_eq!(
            output.beam_parameter().im,
            12_566.370_614,
            max_relative = 1e-6
        );
        let spot_radius = spot_radius_fn(&system, &beam(), OutsidePolicy::Raise);
        assert_relative_eq!(spot_radius(0.0).unwrap(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(spot_radius(50.0).unwrap(), 0.500_253, max_relative = 1e-5);
        assert_relative_eq!(spot_radius(300.0).unwrap(), 2.002_278, max_relative = 1e-5);
        assert_relative_eq!(spot_radius(900.0).unwrap(), 2.0, max_relative = 0.01);
        assert_relative_eq!(spot_radius(1300.0).unwrap(), 2.001_013, max_relative = 1e-5);
    }
    #[test]
    fn spot_radius_matches_dense_trace() {
        let system = expander();
        let spot_radius = spot_radius_fn(&system, &beam(), OutsidePolicy::Raise);
        for state in dense_trace(&system, &beam(), 8).unwrap() {
            assert_relative_eq!(
                spot_radius(state.location()).unwrap(),
                state.spot_radius(),
                max_relative = 1e-9
            );
        }
    }
    #[test]
    fn outside_raise() {
        let spot_radius = spot_radius_fn(&expander(), &beam(), OutsidePolicy::default());
        assert_matches!(spot_radius(-1.0), Err(AbcdError::Domain(_)));
        assert_matches!(spot_radius(1300.1), Err(AbcdError::Domain(_)));
        assert_matches!(spot_radius(f64::NAN), Err(AbcdError::Domain(_)));
    }
    #[test]
    fn outside_fill() {
        testing_logger::setup();
        let spot_radius = spot_radius_fn(&expander(), &beam(), OutsidePolicy::Fill(-1.0));
        assert_eq!(spot_radius(-1.0).unwrap(), -1.0);
        assert_eq!(spot_radius(2000.0).unwrap(), -1.0);
        assert!(spot_radius(1000.0).unwrap() > 0.0);
        testing_logger::validate(|captured_logs| {
            assert_eq!(captured_logs.len(), 2);
            assert_eq!(captured_logs[0].level, log::Level::Debug);
            assert!(captured_logs[0].body.contains("outside of the traced range"));
        });
    }
    #[test]
    fn profile() {
        let profile = spot_radius_profile(&expander(), &beam(), (0.0, 1300.0), 27).unwrap();
        assert_eq!(profile.len(), 27);
        assert_eq!(profile[0].0, 0.0);
        assert_relative_eq!(profile[0].1, 1.0, max_relative = 1e-12);
        assert_eq!(profile[26].0, 1300.0);
        assert_relative_eq!(profile[6].0, 300.0, max_relative = 1e-12);
        assert!(spot_radius_profile(&expander(), &beam(), (0.0, 1300.0), 1).is_err());
        assert!(spot_radius_profile(&expander(), &beam(), (0.0, 1400.0), 10).is_err());
    }
    #[test]
    fn with_units() {
        let mm = |v: f64| Quantity::from(millimeter!(v));
        let system = System::new(vec![
            Element::thin_lens(mm(100.0)).unwrap(),
            Element::free_space(mm(300.0)).unwrap(),
            ThinLens::new(mm(200.0), Quantity::dimensionless(0.0))
                .unwrap()
                .into(),
            Element::free_space(mm(1000.0)).unwrap(),
        ]);
        let beam = GaussianBeam::builder()
            .with_wavelength(Quantity::from(nanometer!(1000.0)))
            .with_waist_radius(mm(1.0))
            .build()
            .unwrap();
        let spot_radius = spot_radius_fn(&system, &beam, OutsidePolicy::Raise);
        let w = spot_radius(mm(1000.0)).unwrap();
        assert!(w.has_dimension(Dimension::LENGTH));
        assert_relative_eq!(w.value(), 2.000_063e-3, max_relative = 1e-5);
        assert_matches!(
            spot_radius(Quantity::dimensionless(1.0)),
            Err(AbcdError::Domain(_))
        );
        let output = transform_system(&system, &beam);
        assert!(output.location().has_dimension(Dimension::LENGTH));
        assert_relative_eq!(output.location().value(), 1.3, max_relative = 1e-12);
        assert_abs_diff_eq!(output.radial_pos().value(), 0.0);
    }
}
