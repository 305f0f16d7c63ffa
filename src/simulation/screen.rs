use ndarray::{Array, Array1, ArrayView1};
use std::ops::Index;

use super::variables::{SCREEN_MAX, SCREEN_MIN, SCREEN_STEP};

/// Ordered positions on the screen, in metres, at which the pattern is sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    points: Array1<f64>,
}

impl Screen {
    /// Half open sweep `[min, max)` in steps of `step`, matching the usual `arange` convention.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Screen {
            points: Array::range(min, max, step),
        }
    }

    pub fn from_positions(points: Array1<f64>) -> Self {
        Screen { points }
    }

    pub fn positions(&self) -> ArrayView1<'_, f64> {
        self.points.view()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last position, or `None` for an empty screen.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let last = self.points.len().checked_sub(1)?;
        Some((self.points[0], self.points[last]))
    }

    pub fn position_at(&self, idx: usize) -> f64 {
        self.points[idx]
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::new(SCREEN_MIN, SCREEN_MAX, SCREEN_STEP)
    }
}

impl Index<usize> for Screen {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}
