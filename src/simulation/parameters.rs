//! The physical setup of the experiment, in SI units
//! ExperimentParameters::default() is the only place the starting setup is defined; the
//! viewer's sliders start from it too.

use std::f64::consts::PI;
use std::fmt;

use strum_macros::EnumIter;
use thiserror::Error;

use super::variables::{SCREEN_DISTANCE, SLIT_SEPARATION, SLIT_WIDTH, Variable, WAVELENGTH};

/// Slit width, wavelength, slit separation and screen distance, all in metres.
///
/// The model assumes every field is finite and strictly positive. Nothing checks this
/// when computing a pattern: a zero `wavelength`, `slit_width` or `screen_distance`
/// produces NaN/Inf in the output. Call [`ExperimentParameters::validate`] first if the
/// values come from somewhere untrusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentParameters {
    pub slit_width: f64,
    pub wavelength: f64,
    pub slit_separation: f64,
    pub screen_distance: f64,
}

impl Default for ExperimentParameters {
    fn default() -> Self {
        ExperimentParameters {
            slit_width: 100e-6,
            wavelength: 500e-9,
            slit_separation: 1e-3,
            screen_distance: 0.5,
        }
    }
}

impl ExperimentParameters {
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Wavelength => self.wavelength,
            Parameter::SlitWidth => self.slit_width,
            Parameter::SlitSeparation => self.slit_separation,
            Parameter::ScreenDistance => self.screen_distance,
        }
    }

    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        match parameter {
            Parameter::Wavelength => self.wavelength = value,
            Parameter::SlitWidth => self.slit_width = value,
            Parameter::SlitSeparation => self.slit_separation = value,
            Parameter::ScreenDistance => self.screen_distance = value,
        }
        self
    }

    /// Returns the first parameter that is not finite and strictly positive.
    pub fn validate(&self) -> Result<(), ParameterError> {
        use strum::IntoEnumIterator;
        for parameter in Parameter::iter() {
            let value = self.get(parameter);
            if !(value.is_finite() && value > 0.0) {
                return Err(ParameterError::NotPositive { parameter, value });
            }
        }
        Ok(())
    }

    // small angle approx. screen position over screen distance, sin(theta) = tan(theta) = theta
    pub fn sin_theta(&self, x: f64) -> f64 {
        x / self.screen_distance
    }

    pub fn path_difference(&self, sin_theta: f64) -> f64 {
        self.slit_separation * sin_theta
    }

    pub fn phase_difference(&self, path_difference: f64) -> f64 {
        (2.0 * PI / self.wavelength) * path_difference
    }

    /// Argument of the single slit sinc envelope.
    pub fn diffraction(&self, sin_theta: f64) -> f64 {
        (PI * self.slit_width / self.wavelength) * sin_theta
    }

    /// Distance between neighbouring bright fringes, `λL/d`.
    pub fn fringe_spacing(&self) -> f64 {
        self.wavelength * self.screen_distance / self.slit_separation
    }

    /// Screen position of the first dark band of the diffraction envelope, `λL/a`.
    pub fn first_envelope_null(&self) -> f64 {
        self.wavelength * self.screen_distance / self.slit_width
    }

    /// Number of bright fringes strictly inside the central diffraction lobe.
    ///
    /// Fringes of order `m` sit at `m·λL/d` and the lobe ends at `λL/a`, so every order with
    /// `|m| < d/a` is counted. When `d/a` is a whole number the fringes at `±d/a` land on
    /// the envelope nulls (missing orders) and are left out.
    pub fn fringes_in_central_envelope(&self) -> usize {
        let ratio = self.slit_separation / self.slit_width;
        let nearest = ratio.round();
        let orders = if (ratio - nearest).abs() < 1e-9 {
            nearest
        } else {
            ratio.ceil()
        };
        (2.0 * orders - 1.0).max(0.0) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Parameter {
    Wavelength,
    SlitWidth,
    SlitSeparation,
    ScreenDistance,
}

impl Parameter {
    pub fn properties(&self) -> ParameterProperties {
        self.retrieve_properties()
    }

    fn retrieve_properties(&self) -> ParameterProperties {
        match self {
            Parameter::Wavelength => ParameterProperties {
                name: "Wavelength",
                symbol: "λ",
                variable: &WAVELENGTH,
            },
            Parameter::SlitWidth => ParameterProperties {
                name: "Slit width",
                symbol: "a",
                variable: &SLIT_WIDTH,
            },
            Parameter::SlitSeparation => ParameterProperties {
                name: "Slit separation",
                symbol: "d",
                variable: &SLIT_SEPARATION,
            },
            Parameter::ScreenDistance => ParameterProperties {
                name: "Screen distance",
                symbol: "L",
                variable: &SCREEN_DISTANCE,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.properties().name
    }

    pub fn symbol(&self) -> &'static str {
        self.properties().symbol
    }

    pub fn variable(&self) -> &'static Variable {
        self.properties().variable
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy)]
pub struct ParameterProperties {
    pub name: &'static str,
    pub symbol: &'static str,
    pub variable: &'static Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("{parameter} must be finite and strictly positive, got {value}")]
    NotPositive { parameter: Parameter, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_green_light_through_a_millimetre_pair() {
        let params = ExperimentParameters::default();
        assert_eq!(params.slit_width, 100e-6);
        assert_eq!(params.wavelength, 500e-9);
        assert_eq!(params.slit_separation, 1e-3);
        assert_eq!(params.screen_distance, 0.5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn defaults_sit_inside_the_slider_ranges() {
        use strum::IntoEnumIterator;
        let params = ExperimentParameters::default();
        for parameter in Parameter::iter() {
            let variable = parameter.variable();
            let display = variable.from_si(params.get(parameter));
            assert!(
                variable.range().contains(&display),
                "{parameter} default {display} {} is outside its slider",
                variable.unit
            );
        }
    }

    #[test]
    fn validate_names_the_offending_parameter() {
        let params = ExperimentParameters::default().with(Parameter::ScreenDistance, 0.0);
        assert_eq!(
            params.validate(),
            Err(ParameterError::NotPositive {
                parameter: Parameter::ScreenDistance,
                value: 0.0,
            })
        );

        let params = ExperimentParameters::default().with(Parameter::Wavelength, -1e-9);
        let err = params.validate().unwrap_err();
        assert!(err.to_string().starts_with("Wavelength must be finite"));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let params = ExperimentParameters::default().with(Parameter::SlitWidth, f64::NAN);
        assert!(matches!(
            params.validate(),
            Err(ParameterError::NotPositive {
                parameter: Parameter::SlitWidth,
                ..
            })
        ));
        let params = ExperimentParameters::default().with(Parameter::SlitSeparation, f64::INFINITY);
        assert!(params.validate().is_err());
    }

    #[test]
    fn derived_lengths_for_the_default_setup() {
        let params = ExperimentParameters::default();
        assert!((params.fringe_spacing() - 0.25e-3).abs() < 1e-15);
        assert!((params.first_envelope_null() - 2.5e-3).abs() < 1e-15);
    }

    #[test]
    fn central_lobe_fringe_count_skips_missing_orders() {
        // d/a = 10: orders -9..=9, the 10th order sits on the envelope null
        assert_eq!(ExperimentParameters::default().fringes_in_central_envelope(), 19);

        let params = ExperimentParameters::default().with(Parameter::SlitSeparation, 250e-6);
        assert_eq!(params.fringes_in_central_envelope(), 5);

        let params = ExperimentParameters::default().with(Parameter::SlitSeparation, 100e-6);
        assert_eq!(params.fringes_in_central_envelope(), 1);
    }

    #[test]
    fn parameter_lookup_round_trips_through_with() {
        use strum::IntoEnumIterator;
        for parameter in Parameter::iter() {
            let params = ExperimentParameters::default().with(parameter, 42.0);
            assert_eq!(params.get(parameter), 42.0);
        }
    }
}
