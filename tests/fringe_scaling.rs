use std::f64::consts::PI;

use double_slit::simulation::pattern::{compute, local_maxima, sample};
use double_slit::simulation::{ExperimentParameters, Parameter, Screen};

const STEP: f64 = 1e-5;

fn interference_peaks(params: &ExperimentParameters, screen: &Screen) -> Vec<f64> {
    let pattern = compute(params, screen.positions());
    local_maxima(pattern.interference())
        .into_iter()
        .map(|i| screen.position_at(i))
        .collect()
}

/// Position of the first minimum of the envelope to the right of the centre.
fn first_envelope_minimum(params: &ExperimentParameters) -> f64 {
    let screen = Screen::new(0.0, 0.005, 1e-7);
    let pattern = compute(params, screen.positions());
    let envelope = pattern.envelope();
    let i = (1..envelope.len() - 1)
        .find(|&i| envelope[i] <= envelope[i - 1] && envelope[i] < envelope[i + 1])
        .expect("envelope has a null on the screen");
    screen.position_at(i)
}

#[test]
fn default_setup_at_half_a_millimetre() {
    let s = sample(&ExperimentParameters::default(), 0.0005);

    assert!((s.sin_theta - 0.001).abs() < 1e-15);
    assert!((s.path_difference - 1e-6).abs() < 1e-18);
    assert!((s.phase_difference - 4.0 * PI).abs() < 1e-9);
    assert!((s.interference - 1.0).abs() < 1e-12);
    assert!((s.diffraction - 0.2 * PI).abs() < 1e-12);
    assert!((s.envelope - 0.8751).abs() < 1e-3);
    assert!((s.intensity - 0.8751).abs() < 1e-3);
    assert_eq!(s.intensity, s.envelope * s.interference);
}

#[test]
fn default_grid_has_no_non_finite_values() {
    let pattern = compute(&ExperimentParameters::default(), Screen::default().positions());
    assert_eq!(pattern.len(), 1000);
    for s in pattern.samples() {
        assert!(s.envelope.is_finite(), "envelope at {}", s.position);
        assert!(s.interference.is_finite(), "interference at {}", s.position);
        assert!(s.intensity.is_finite(), "intensity at {}", s.position);
    }
}

#[test]
fn envelope_tends_to_one_near_the_centre() {
    let params = ExperimentParameters::default();
    for x in [1e-9, -1e-9, 1e-12, -1e-12] {
        assert!((sample(&params, x).envelope - 1.0).abs() < 1e-9);
    }
}

#[test]
fn fringe_peaks_sit_on_multiples_of_the_fringe_spacing() {
    let screen = Screen::default();
    for separation in [1e-3, 2e-3] {
        let params = ExperimentParameters::default().with(Parameter::SlitSeparation, separation);
        let spacing = params.fringe_spacing();
        let peaks = interference_peaks(&params, &screen);
        assert!(!peaks.is_empty());
        for peak in peaks {
            let order = (peak / spacing).round();
            assert!(
                (peak - order * spacing).abs() <= STEP / 2.0 + 1e-12,
                "peak at {peak} is not near order {order}"
            );
        }
    }
}

#[test]
fn doubling_slit_separation_halves_fringe_spacing() {
    let screen = Screen::default();
    let params = ExperimentParameters::default();
    let doubled = params.with(Parameter::SlitSeparation, 2.0 * params.slit_separation);

    assert!((doubled.fringe_spacing() - params.fringe_spacing() / 2.0).abs() < 1e-15);

    let peaks = interference_peaks(&params, &screen);
    let doubled_peaks = interference_peaks(&doubled, &screen);
    let ratio = doubled_peaks.len() as f64 / peaks.len() as f64;
    assert!((ratio - 2.0).abs() < 0.1, "{} vs {} peaks", doubled_peaks.len(), peaks.len());
}

#[test]
fn doubling_slit_width_halves_the_first_envelope_null() {
    let params = ExperimentParameters::default();
    let doubled = params.with(Parameter::SlitWidth, 2.0 * params.slit_width);

    assert!((doubled.first_envelope_null() - params.first_envelope_null() / 2.0).abs() < 1e-15);

    let null = first_envelope_minimum(&params);
    let doubled_null = first_envelope_minimum(&doubled);
    assert!((null - params.first_envelope_null()).abs() < 2e-7);
    assert!((doubled_null - doubled.first_envelope_null()).abs() < 2e-7);
    assert!((doubled_null - null / 2.0).abs() < 2e-7);
}
