//! This is the documentation for the **abcd** package. **abcd** propagates paraxial rays and
//! Gaussian laser beams through sequences of idealized optical elements using the ray-transfer
//! matrix (ABCD) formalism.
//!
//! An optical [`System`](system::System) is an ordered sequence of
//! [`Element`](element::Element)s (free space, interfaces, thin lenses and mirrors). A beam state
//! ([`GeometricBeam`](beam::GeometricBeam) or [`GaussianBeam`](beam::GaussianBeam)) is traced
//! through it by the functions of the [`propagation`] module.
//!
//! All physics is generic over the numeric type. Plain `f64` values may be used as well as
//! [`Quantity`](numeric::Quantity) values which carry their physical dimension:
//!
//! ```
//! use abcd::{
//!     beam::GaussianBeam,
//!     element::Element,
//!     millimeter, nanometer,
//!     numeric::Quantity,
//!     propagation::transform_system,
//!     system::System,
//! };
//!
//! let system = System::new(vec![
//!     Element::thin_lens(Quantity::from(millimeter!(100.0))).unwrap(),
//!     Element::free_space(Quantity::from(millimeter!(100.0))).unwrap(),
//! ]);
//! let beam = GaussianBeam::builder()
//!     .with_wavelength(Quantity::from(nanometer!(1064.0)))
//!     .with_waist_radius(Quantity::from(millimeter!(2.0)))
//!     .build()
//!     .unwrap();
//! let focus = transform_system(&system, &beam);
//! assert!(focus.spot_radius() < beam.spot_radius());
//! ```
#![allow(clippy::module_name_repetitions)]

pub mod beam;
pub mod console;
pub mod discretize;
pub mod element;
pub mod error;
pub mod matrix;
pub mod numeric;
pub mod propagation;
pub mod system;
pub mod utils;
