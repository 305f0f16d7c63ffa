//! Slider ranges for each experiment parameter, in the units they are displayed in.
//! Starting values come from `ExperimentParameters::default()`.

use static_assertions::const_assert;
use std::ops::RangeInclusive;

pub struct Variable {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    /// multiply a display value by this to get metres
    pub si_scale: f64,
}

impl Variable {
    pub fn range(&self) -> RangeInclusive<f64> {
        self.min..=self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn to_si(&self, value: f64) -> f64 {
        value * self.si_scale
    }

    pub fn from_si(&self, value: f64) -> f64 {
        value / self.si_scale
    }
}

pub const NANOMETRE: f64 = 1e-9;
pub const MICROMETRE: f64 = 1e-6;
pub const MILLIMETRE: f64 = 1e-3;
pub const CENTIMETRE: f64 = 1e-2;

pub const WAVELENGTH: Variable = Variable {
    min: 100.0,
    max: 1000.0,
    unit: "nm",
    si_scale: NANOMETRE,
};
pub const SLIT_WIDTH: Variable = Variable {
    min: 10.0,
    max: 1000.0,
    unit: "µm",
    si_scale: MICROMETRE,
};
pub const SLIT_SEPARATION: Variable = Variable {
    min: 0.1,
    max: 10.0,
    unit: "mm",
    si_scale: MILLIMETRE,
};
pub const SCREEN_DISTANCE: Variable = Variable {
    min: 10.0,
    max: 100.0,
    unit: "cm",
    si_scale: CENTIMETRE,
};

// screen viewed as a 1d array, +/- 5mm at 0.01mm resolution
pub const SCREEN_MIN: f64 = -0.005;
pub const SCREEN_MAX: f64 = 0.005;
pub const SCREEN_STEP: f64 = 0.00001;

const_assert!(WAVELENGTH.min > 0.0);
const_assert!(SLIT_WIDTH.min > 0.0);
const_assert!(SLIT_SEPARATION.min > 0.0);
const_assert!(SCREEN_DISTANCE.min > 0.0);

const_assert!(SCREEN_MIN < 0.0 && SCREEN_MAX > 0.0 && SCREEN_STEP > 0.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_values_inside_the_slider_range() {
        assert_eq!(WAVELENGTH.clamp(50.0), 100.0);
        assert_eq!(WAVELENGTH.clamp(2000.0), 1000.0);
        assert_eq!(WAVELENGTH.clamp(632.8), 632.8);
    }

    #[test]
    fn display_units_convert_to_metres() {
        assert!((WAVELENGTH.to_si(500.0) - 500e-9).abs() < 1e-20);
        assert!((SLIT_WIDTH.to_si(100.0) - 100e-6).abs() < 1e-18);
        assert!((SLIT_SEPARATION.to_si(1.0) - 1e-3).abs() < 1e-15);
        assert!((SCREEN_DISTANCE.to_si(50.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn from_si_inverts_to_si() {
        for (variable, value) in [
            (&WAVELENGTH, 632.8),
            (&SLIT_WIDTH, 45.0),
            (&SLIT_SEPARATION, 2.5),
            (&SCREEN_DISTANCE, 75.0),
        ] {
            let back = variable.from_si(variable.to_si(value));
            assert!((back - value).abs() < 1e-9 * value);
        }
    }
}
