//! The intensity model: single slit diffraction envelope times two slit interference.
//!
//! Every quantity is a function of one screen position only, so a pattern is a single
//! elementwise pass over the positions. The envelope is computed separately from the
//! interference term so that each effect can be inspected or drawn on its own.

use ndarray::{Array1, ArrayView1};

use super::curve::Curve;
use super::parameters::ExperimentParameters;

/// Everything the model derives for a single screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensitySample {
    pub position: f64,
    pub sin_theta: f64,
    pub path_difference: f64,
    pub phase_difference: f64,
    pub diffraction: f64,
    pub envelope: f64,
    pub interference: f64,
    pub intensity: f64,
}

/// Two slit interference factor, `cos²(φ/2)`.
pub fn interference(phase_difference: f64) -> f64 {
    (phase_difference / 2.0).cos().powi(2)
}

/// Single slit diffraction envelope, `(sin α / α)²`.
///
/// The expression is 0/0 at `α = 0` but the limit there is 1. Only an exact zero takes
/// that branch: any nonzero `α`, however small, goes through the division.
pub fn envelope(diffraction: f64) -> f64 {
    if diffraction == 0.0 {
        1.0
    } else {
        (diffraction.sin() / diffraction).powi(2)
    }
}

pub fn sample(params: &ExperimentParameters, x: f64) -> IntensitySample {
    let sin_theta = params.sin_theta(x);
    let path_difference = params.path_difference(sin_theta);
    let phase_difference = params.phase_difference(path_difference);
    let diffraction = params.diffraction(sin_theta);
    let envelope = envelope(diffraction);
    let interference = interference(phase_difference);
    IntensitySample {
        position: x,
        sin_theta,
        path_difference,
        phase_difference,
        diffraction,
        envelope,
        interference,
        intensity: envelope * interference,
    }
}

/// Computes the pattern at every position in `positions`.
///
/// Fresh arrays are allocated on each call, and the output has the same length as
/// `positions` (possibly zero). Parameters are not validated.
pub fn compute(params: &ExperimentParameters, positions: ArrayView1<f64>) -> IntensityPattern {
    let sin_theta = positions.mapv(|x| params.sin_theta(x));
    let path_difference = sin_theta.mapv(|s| params.path_difference(s));
    let phase_difference = path_difference.mapv(|delta| params.phase_difference(delta));
    let interference = phase_difference.mapv(interference);
    let diffraction = sin_theta.mapv(|s| params.diffraction(s));
    let envelope = diffraction.mapv(envelope);
    let intensity = &envelope * &interference;

    IntensityPattern {
        positions: positions.to_owned(),
        sin_theta,
        path_difference,
        phase_difference,
        diffraction,
        envelope,
        interference,
        intensity,
    }
}

/// Parallel sequences, one entry per screen position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntensityPattern {
    positions: Array1<f64>,
    sin_theta: Array1<f64>,
    path_difference: Array1<f64>,
    phase_difference: Array1<f64>,
    diffraction: Array1<f64>,
    envelope: Array1<f64>,
    interference: Array1<f64>,
    intensity: Array1<f64>,
}

impl IntensityPattern {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> ArrayView1<'_, f64> {
        self.positions.view()
    }

    pub fn sin_theta(&self) -> ArrayView1<'_, f64> {
        self.sin_theta.view()
    }

    /// Path difference between the two slits, Δ.
    pub fn path_difference(&self) -> ArrayView1<'_, f64> {
        self.path_difference.view()
    }

    /// Phase difference between the two slits, φ.
    pub fn phase_difference(&self) -> ArrayView1<'_, f64> {
        self.phase_difference.view()
    }

    /// Diffraction parameter, α.
    pub fn diffraction(&self) -> ArrayView1<'_, f64> {
        self.diffraction.view()
    }

    pub fn envelope(&self) -> ArrayView1<'_, f64> {
        self.envelope.view()
    }

    pub fn interference(&self) -> ArrayView1<'_, f64> {
        self.interference.view()
    }

    pub fn intensity(&self) -> ArrayView1<'_, f64> {
        self.intensity.view()
    }

    pub fn curve(&self, curve: Curve) -> ArrayView1<'_, f64> {
        match curve {
            Curve::Envelope => self.envelope(),
            Curve::Interference => self.interference(),
            Curve::Intensity => self.intensity(),
        }
    }

    pub fn get(&self, i: usize) -> Option<IntensitySample> {
        if i >= self.len() {
            return None;
        }
        Some(IntensitySample {
            position: self.positions[i],
            sin_theta: self.sin_theta[i],
            path_difference: self.path_difference[i],
            phase_difference: self.phase_difference[i],
            diffraction: self.diffraction[i],
            envelope: self.envelope[i],
            interference: self.interference[i],
            intensity: self.intensity[i],
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = IntensitySample> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

/// Indices of the interior local maxima of `values`.
///
/// A sample counts when it is strictly above its left neighbour and not below its right
/// one, so a peak straddling two equal samples is reported once. The end points are never
/// reported.
pub fn local_maxima(values: ArrayView1<f64>) -> Vec<usize> {
    let n = values.len();
    if n < 3 {
        return Vec::new();
    }
    (1..n - 1)
        .filter(|&i| values[i - 1] < values[i] && values[i] >= values[i + 1])
        .collect()
}
