//! Contains all simulation logic: the intensity model and the parameter state the viewer drives

pub mod curve;
pub mod parameters;
pub mod pattern;
pub mod screen;
pub mod variables;

pub use curve::Curve;
pub use parameters::{ExperimentParameters, Parameter, ParameterError};
pub use pattern::{IntensityPattern, IntensitySample};
pub use screen::Screen;

use log::{debug, error, info, warn};
use static_assertions::assert_impl_all;
use strum::{EnumCount, IntoEnumIterator};

assert_impl_all!(ExperimentParameters: Send, Sync, Copy);
assert_impl_all!(Screen: Send, Sync);
assert_impl_all!(IntensityPattern: Send, Sync);

/// Viewer state: the current parameters, curve visibility, and the pattern for those
/// parameters. The pattern is only recomputed by [`Simulation::update`].
pub struct Simulation {
    params: ExperimentParameters,
    visible: [bool; Curve::COUNT],
    screen: Screen,
    pattern: IntensityPattern,
    stale: bool,
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_screen(Screen::default())
    }

    pub fn with_screen(screen: Screen) -> Self {
        let mut simulation = Simulation {
            params: ExperimentParameters::default(),
            visible: [true; Curve::COUNT],
            screen,
            pattern: IntensityPattern::default(),
            stale: true,
        };
        simulation.update();
        simulation
    }

    pub fn parameters(&self) -> ExperimentParameters {
        self.params
    }

    /// Current value in the slider's display units.
    pub fn value(&self, parameter: Parameter) -> f64 {
        parameter.variable().from_si(self.params.get(parameter))
    }

    /// Sets a parameter from a display-unit value, clamped to the slider range.
    /// Returns whether the stored value changed.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> bool {
        if value.is_nan() {
            warn!("Ignoring NaN for {parameter}");
            return false;
        }
        let variable = parameter.variable();
        let value = variable.clamp(value);
        if value == self.value(parameter) {
            return false;
        }
        self.store(parameter, variable.to_si(value))
    }

    fn store(&mut self, parameter: Parameter, si: f64) -> bool {
        if self.params.get(parameter) == si {
            return false;
        }
        self.params = self.params.with(parameter, si);
        self.stale = true;
        true
    }

    pub fn reset(&mut self, parameter: Parameter) {
        info!("Resetting {parameter}");
        self.store(parameter, ExperimentParameters::default().get(parameter));
    }

    pub fn reset_all(&mut self) {
        for parameter in Parameter::iter() {
            self.reset(parameter);
        }
    }

    pub fn is_visible(&self, curve: Curve) -> bool {
        self.visible[curve.index()]
    }

    pub fn set_visible(&mut self, curve: Curve, visible: bool) {
        self.visible[curve.index()] = visible;
    }

    pub fn toggle(&mut self, curve: Curve) {
        self.visible[curve.index()] ^= true;
    }

    pub fn visible_curves(&self) -> impl Iterator<Item = Curve> + '_ {
        Curve::iter().filter(|curve| self.is_visible(*curve))
    }

    /// Recomputes the pattern if any parameter changed since the last call.
    /// Returns whether a new pattern was computed.
    pub fn update(&mut self) -> bool {
        if !self.stale {
            return false;
        }
        self.stale = false;
        let params = self.params;
        if let Err(err) = params.validate() {
            error!("Keeping previous pattern: {err}");
            return false;
        }
        debug!(
            "Computing {} samples for a = {:e} m, λ = {:e} m, d = {:e} m, L = {:e} m",
            self.screen.len(),
            params.slit_width,
            params.wavelength,
            params.slit_separation,
            params.screen_distance,
        );
        self.pattern = pattern::compute(&params, self.screen.positions());
        true
    }

    pub fn pattern(&self) -> &IntensityPattern {
        &self.pattern
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
