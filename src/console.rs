//! Handling the `abcd` CLI
//!
//! This module handles the command line parsing and the two demonstration scenarios of the binary.
//! All lengths on the command line are given in millimeters, wavelengths in nanometers.
use clap::{Parser, Subcommand};
use uom::si::{f64::Length, length::millimeter};

use crate::{
    beam::{Beam, GaussianBeam},
    element::{Element, Mirror},
    error::{AbcdError, AbcdResult},
    millimeter, nanometer,
    numeric::Quantity,
    propagation::spot_radius_profile,
    system::System,
};

/// Command line arguments as given by the user (not yet validated).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    command: CliCommand,
}
#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Calculate the eigenmode of a two-mirror resonator
    #[command(allow_negative_numbers = true)]
    Cavity {
        /// radius of curvature of the first mirror
        #[arg(long, default_value_t = 4000.0)]
        roc1: f64,
        /// radius of curvature of the second mirror
        #[arg(long, default_value_t = 3000.0)]
        roc2: f64,
        /// distance between the mirrors
        #[arg(short, long, default_value_t = 500.0)]
        length: f64,
        /// wavelength in nm
        #[arg(short, long, default_value_t = 500.0)]
        wavelength: f64,
    },
    /// Calculate the spot radius profile behind a Kepler telescope beam expander
    Expander {
        /// focal length of the input lens
        #[arg(long, default_value_t = 100.0)]
        f1: f64,
        /// focal length of the output lens
        #[arg(long, default_value_t = 200.0)]
        f2: f64,
        /// waist radius of the input beam (located at the input lens)
        #[arg(long, default_value_t = 1.0)]
        waist: f64,
        /// wavelength in nm
        #[arg(short, long, default_value_t = 1000.0)]
        wavelength: f64,
        /// propagation distance behind the output lens
        #[arg(short, long, default_value_t = 1000.0)]
        output_length: f64,
        /// number of sampling points of the profile
        #[arg(short, long, default_value_t = 14)]
        samples: usize,
    },
}

/// Validated command line arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    /// two-mirror resonator
    Cavity(CavityArgs),
    /// Kepler telescope beam expander
    Expander(ExpanderArgs),
}
/// Parameters of a two-mirror resonator.
#[derive(Debug, Clone, PartialEq)]
pub struct CavityArgs {
    /// radius of curvature of the first mirror
    pub roc1: Length,
    /// radius of curvature of the second mirror
    pub roc2: Length,
    /// distance between the mirrors
    pub length: Length,
    /// wavelength
    pub wavelength: Length,
}
/// Parameters of a Kepler telescope beam expander.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpanderArgs {
    /// focal length of the input lens
    pub f1: Length,
    /// focal length of the output lens
    pub f2: Length,
    /// waist radius of the input beam
    pub waist: Length,
    /// wavelength
    pub wavelength: Length,
    /// propagation distance behind the output lens
    pub output_length: Length,
    /// number of sampling points of the profile
    pub samples: usize,
}

fn positive(value: f64, name: &str) -> AbcdResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AbcdError::Console(format!(
            "{name} must be positive and finite"
        )))
    }
}
fn non_zero(value: f64, name: &str) -> AbcdResult<f64> {
    if value.is_nan() || value == 0.0 {
        Err(AbcdError::Console(format!("{name} must not be zero or NaN")))
    } else {
        Ok(value)
    }
}

impl TryFrom<CliArgs> for Args {
    type Error = AbcdError;

    fn try_from(cli_args: CliArgs) -> AbcdResult<Self> {
        match cli_args.command {
            CliCommand::Cavity {
                roc1,
                roc2,
                length,
                wavelength,
            } => Ok(Self::Cavity(CavityArgs {
                roc1: millimeter!(non_zero(roc1, "roc1")?),
                roc2: millimeter!(non_zero(roc2, "roc2")?),
                length: millimeter!(positive(length, "length")?),
                wavelength: nanometer!(positive(wavelength, "wavelength")?),
            })),
            CliCommand::Expander {
                f1,
                f2,
                waist,
                wavelength,
                output_length,
                samples,
            } => {
                if samples < 2 {
                    return Err(AbcdError::Console(
                        "number of samples must be at least 2".into(),
                    ));
                }
                Ok(Self::Expander(ExpanderArgs {
                    f1: millimeter!(positive(f1, "f1")?),
                    f2: millimeter!(positive(f2, "f2")?),
                    waist: millimeter!(positive(waist, "waist")?),
                    wavelength: nanometer!(positive(wavelength, "wavelength")?),
                    output_length: millimeter!(positive(output_length, "output length")?),
                    samples,
                }))
            }
        }
    }
}
impl Args {
    /// Run the selected scenario and return the result as printable text.
    ///
    /// # Errors
    ///
    /// This function will return an error if the scenario cannot be calculated (e.g. unstable
    /// resonator).
    pub fn run(&self) -> AbcdResult<String> {
        match self {
            Self::Cavity(args) => cavity_report(args),
            Self::Expander(args) => expander_report(args),
        }
    }
}

fn mm(value: Quantity) -> AbcdResult<f64> {
    Ok(Length::try_from(value)?.get::<millimeter>())
}

fn cavity_report(args: &CavityArgs) -> AbcdResult<String> {
    let gap = Element::free_space(Quantity::from(args.length))?;
    let cavity = System::new(vec![
        Mirror::new().with_roc(Quantity::from(args.roc1)).build()?,
        gap.clone(),
        Element::mirror(Quantity::from(args.roc2))?,
        gap.clone(),
    ]);
    let mode = GaussianBeam::from_cavity(
        &cavity,
        Quantity::from(args.wavelength),
        Quantity::dimensionless(1.0),
    )?;
    // the eigenmode is given right behind the first mirror
    let at_second_mirror = mode.transform(&gap);
    let mut report = String::from("two-mirror resonator eigenmode\n");
    report.push_str(&format!(
        "  Rayleigh range:            {:>10.3} mm\n",
        mm(mode.rayleigh_range())?
    ));
    report.push_str(&format!(
        "  waist radius:              {:>10.3} µm\n",
        mm(mode.waist_radius())? * 1000.0
    ));
    report.push_str(&format!(
        "  waist distance (mirror 1): {:>10.3} mm\n",
        mm(mode.waist_distance())?
    ));
    report.push_str(&format!(
        "  spot radius at mirror 1:   {:>10.3} µm\n",
        mm(mode.spot_radius())? * 1000.0
    ));
    report.push_str(&format!(
        "  spot radius at mirror 2:   {:>10.3} µm\n",
        mm(at_second_mirror.spot_radius())? * 1000.0
    ));
    Ok(report)
}

fn expander_report(args: &ExpanderArgs) -> AbcdResult<String> {
    let expander = System::new(vec![
        Element::thin_lens(Quantity::from(args.f1))?,
        Element::free_space(Quantity::from(args.f1 + args.f2))?,
        Element::thin_lens(Quantity::from(args.f2))?,
        Element::free_space(Quantity::from(args.output_length))?,
    ]);
    let beam = GaussianBeam::builder()
        .with_wavelength(Quantity::from(args.wavelength))
        .with_waist_radius(Quantity::from(args.waist))
        .build()?;
    let profile = spot_radius_profile(
        &expander,
        &beam,
        (Quantity::from(millimeter!(0.0)), expander.propagation_length()),
        args.samples,
    )?;
    let mut report = format!(
        "beam expander (magnification {:.3})\n      z [mm]      w [mm]\n",
        (args.f2 / args.f1).value
    );
    for (z, w) in profile {
        report.push_str(&format!("  {:>10.3}  {:>10.5}\n", mm(z)?, mm(w)?));
    }
    Ok(report)
}

/// Create the banner shown at program start.
#[must_use]
pub fn create_intro() -> String {
    format!(
        "{: ^79}\n{: ^79}\n",
        "abcd - ray-transfer matrix propagation of rays and Gaussian beams",
        format!("version {}", env!("CARGO_PKG_VERSION"))
    )
}
