//! Shoulder pivot layout

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Point2;
use serde::Serialize;

use super::NUM_ACTUATORS;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// sin(60 degrees)
pub const SIN_60: f64 = 0.8660254037844386;

/// cos(60 degrees)
pub const COS_60: f64 = 0.5;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Ground plane positions of the three arm shoulder pivots, indexed by
/// actuator.
///
/// Units: millimeters
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pivots {
    pub arms_mm: [Point2<f64>; NUM_ACTUATORS],
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pivots {
    /// Lay the pivots out 120 degrees apart on a circle of the given radius.
    ///
    /// Pivot 1 is at 210 degrees (front left), pivot 2 at 330 degrees (front
    /// right) and pivot 3 at 90 degrees (back middle).
    pub fn from_radius(radius_mm: f64) -> Self {
        Self {
            arms_mm: [
                Point2::new(-SIN_60 * radius_mm, -COS_60 * radius_mm),
                Point2::new(SIN_60 * radius_mm, -COS_60 * radius_mm),
                Point2::new(0.0, radius_mm),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Radius of the pivot circle for a given spacing between shoulder bolts.
pub fn radius_from_bolt_spacing(bolt_spacing_size_mm: f64) -> f64 {
    (bolt_spacing_size_mm / 2.0) / SIN_60
}
