//! Positions passed into and out of the kinematics

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::NUM_ACTUATORS;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Tool tip position in the machine's stationary frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartesianPos {
    /// Units: millimeters
    pub x_mm: f64,

    /// Units: millimeters
    pub y_mm: f64,

    /// Units: millimeters
    pub z_mm: f64,
}

/// Position of each linear actuator, indexed by actuator (0 is the front left
/// arm, 1 the front right, 2 the back middle).
///
/// Each value is how far the actuator has retracted from its fully extended
/// length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActuatorPos {
    /// Units: millimeters
    pub axes_mm: [f64; NUM_ACTUATORS],
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl CartesianPos {
    pub fn new(x_mm: f64, y_mm: f64, z_mm: f64) -> Self {
        Self { x_mm, y_mm, z_mm }
    }
}

impl From<[f64; 3]> for CartesianPos {
    fn from(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }
}

impl From<CartesianPos> for [f64; 3] {
    fn from(pos: CartesianPos) -> Self {
        [pos.x_mm, pos.y_mm, pos.z_mm]
    }
}

impl From<Point3<f64>> for CartesianPos {
    fn from(point: Point3<f64>) -> Self {
        Self::new(point.x, point.y, point.z)
    }
}

impl From<CartesianPos> for Point3<f64> {
    fn from(pos: CartesianPos) -> Self {
        Point3::new(pos.x_mm, pos.y_mm, pos.z_mm)
    }
}

impl ActuatorPos {
    pub fn new(a0_mm: f64, a1_mm: f64, a2_mm: f64) -> Self {
        Self {
            axes_mm: [a0_mm, a1_mm, a2_mm],
        }
    }

    /// Find the first actuator whose value is negative or not finite, which
    /// means the target that produced it cannot be reached.
    ///
    /// Returns the actuator index and value.
    pub fn first_unreachable(&self) -> Option<(usize, f64)> {
        self.axes_mm
            .iter()
            .enumerate()
            .find(|(_, a)| !a.is_finite() || **a < 0.0)
            .map(|(i, a)| (i, *a))
    }

    /// True if every actuator value is finite and non-negative.
    pub fn is_reachable(&self) -> bool {
        self.first_unreachable().is_none()
    }
}

impl From<[f64; NUM_ACTUATORS]> for ActuatorPos {
    fn from(axes_mm: [f64; NUM_ACTUATORS]) -> Self {
        Self { axes_mm }
    }
}
