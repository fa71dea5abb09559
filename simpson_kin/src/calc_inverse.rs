//! Inverse kinematics calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Vector3;

// Internal imports
use super::*;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimpsonSolution {
    /// Find the actuator positions that place the tool tip at the given
    /// cartesian position.
    ///
    /// Each arm must span the straight line from the tool tip to its shoulder
    /// pivot, with the pivot offset from the tip's z plane by the arm's
    /// shoulder height. The actuator position is how much shorter than its
    /// maximum length that span is.
    ///
    /// No clamping is performed. A target out of an arm's reach gives a
    /// negative value for that actuator.
    pub(crate) fn calc_inverse(&self, cartesian: &CartesianPos) -> ActuatorPos {
        let mut axes_mm = [0f64; NUM_ACTUATORS];

        for i in 0..NUM_ACTUATORS {
            let pivot = &self.pivots.arms_mm[i];

            let span_mm = Vector3::new(
                cartesian.x_mm - pivot.x,
                cartesian.y_mm - pivot.y,
                cartesian.z_mm + self.shoulder_height_mm[i],
            )
            .norm();

            axes_mm[i] = self.max_arm_length_mm[i] - span_mm;
        }

        ActuatorPos { axes_mm }
    }
}
