//! Intensity pattern of Young's double slit experiment.
//!
//! [`simulation::pattern::compute`] maps the experiment parameters and a set of screen
//! positions to the diffraction envelope, the interference term and their product.
//! [`simulation::Simulation`] holds the slider state the viewer drives.

pub mod simulation;
