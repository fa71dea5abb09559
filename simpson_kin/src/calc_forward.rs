//! Forward kinematics calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use super::*;
use util::maths::{round_dp, sq};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimpsonSolution {
    /// Find the tool tip position for the given actuator positions.
    ///
    /// Only the bolt spacing geometry has a forward solution, `None` is
    /// returned otherwise.
    ///
    /// The tip lies on three spheres centred on the shoulder pivots, each of
    /// radius `max_arm_length - actuator`. The trilateration is solved in a
    /// frame with pivot 1 at the origin, pivot 2 on the x axis at `d` and
    /// pivot 3 at `(i, j)`, and the z axis measured up from the shoulder
    /// plane. The 120 degree layout gives `d = 2 * pivot_2.x`,
    /// `i = pivot_2.x` and `j = -3 * pivot_2.y`. The result is moved back
    /// into the machine frame and rounded to `FORWARD_DECIMAL_PLACES`.
    ///
    /// If the spheres do not meet the tip is placed on the bed, `z = 0`,
    /// rather than returning NaN.
    ///
    /// All three shoulders are taken to sit on one plane at the mean
    /// shoulder height. If the configured heights differ the result is only
    /// an approximation and does not round trip with `calc_inverse`.
    pub(crate) fn calc_forward(&self, actuator: &ActuatorPos) -> Option<CartesianPos> {
        if let Geometry::Independent { .. } = self.geometry {
            return None;
        }

        let pivot_1 = self.pivots.arms_mm[0];
        let pivot_2 = self.pivots.arms_mm[1];

        let d = 2.0 * pivot_2.x;
        let i = pivot_2.x;
        let j = -3.0 * pivot_2.y;

        // Sphere radii
        let mut r_sq = [0f64; NUM_ACTUATORS];
        for k in 0..NUM_ACTUATORS {
            r_sq[k] = sq(self.max_arm_length_mm[k] - actuator.axes_mm[k]);
        }

        let x = (r_sq[0] - r_sq[1] + sq(d)) / (2.0 * d);
        let y = (r_sq[0] - r_sq[2] - sq(x) + sq(x - i) + sq(j)) / (2.0 * j);

        // No intersection, take the planar solution on the bed
        let z_sq = r_sq[0] - sq(x) - sq(y);
        let z_mm = if z_sq < 0.0 {
            0.0
        } else {
            round_dp(z_sq.sqrt() - self.shoulder_plane_mm, FORWARD_DECIMAL_PLACES)
        };

        Some(CartesianPos {
            x_mm: round_dp(x + pivot_1.x, FORWARD_DECIMAL_PLACES),
            y_mm: round_dp(y + pivot_1.y, FORWARD_DECIMAL_PLACES),
            z_mm,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Half a unit in the last rounded place, plus float noise
    const TOL: f64 = 0.5e-4 + 1e-9;

    fn assert_close(a: &CartesianPos, b: &CartesianPos) {
        assert!(
            (a.x_mm - b.x_mm).abs() <= TOL
                && (a.y_mm - b.y_mm).abs() <= TOL
                && (a.z_mm - b.z_mm).abs() <= TOL,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_round_trip() {
        let solution = SimpsonSolution::new(&Params::bolt_spacing());

        let targets = [
            CartesianPos::new(0.0, 0.0, 0.0),
            CartesianPos::new(10.0, -20.0, 5.0),
            CartesianPos::new(50.0, 30.0, 100.0),
            CartesianPos::new(-40.0, 60.0, 20.0),
            CartesianPos::new(-33.3333, -12.3456, 47.5),
        ];

        for target in targets.iter() {
            let actuator = solution.cartesian_to_actuator(target);
            let cartesian = solution.actuator_to_cartesian(&actuator).unwrap();

            assert_close(&cartesian, target);
        }
    }

    #[test]
    fn test_round_trip_other_size() {
        let solution = SimpsonSolution::new(&Params {
            bolt_spacing_size: 300.0,
            max_arm_length_x: 350.0,
            max_arm_length_y: 340.0,
            max_arm_length_z: 345.0,
            shoulder_height_x: 50.0,
            shoulder_height_y: 50.0,
            shoulder_height_z: 50.0,
            ..Params::bolt_spacing()
        });

        let target = CartesianPos::new(-25.0, 40.0, 80.0);
        let actuator = solution.cartesian_to_actuator(&target);

        assert_close(&solution.actuator_to_cartesian(&actuator).unwrap(), &target);
    }

    #[test]
    fn test_output_is_rounded() {
        let solution = SimpsonSolution::new(&Params::bolt_spacing());
        let cartesian = solution
            .actuator_to_cartesian(&ActuatorPos::new(120.123456, 130.654321, 125.5))
            .unwrap();

        for v in <[f64; 3]>::from(cartesian).iter() {
            assert_eq!(*v, round_dp(*v, FORWARD_DECIMAL_PLACES));
        }
    }

    #[test]
    fn test_z_clamp() {
        let solution = SimpsonSolution::new(&Params {
            shoulder_height_x: 0.0,
            shoulder_height_y: 0.0,
            shoulder_height_z: 0.0,
            ..Params::bolt_spacing()
        });

        // Each sphere is only 5 mm in radius so they cannot meet
        let cartesian = solution
            .actuator_to_cartesian(&ActuatorPos::new(290.0, 290.0, 290.0))
            .unwrap();

        assert!(!cartesian.z_mm.is_nan());
        assert_eq!(cartesian.z_mm, 0.0);
        assert!(cartesian.x_mm.abs() <= TOL);
        assert!(cartesian.y_mm.abs() <= TOL);
    }

    #[test]
    fn test_z_clamp_with_shoulder_height() {
        let solution = SimpsonSolution::new(&Params::bolt_spacing());

        let cartesian = solution
            .actuator_to_cartesian(&ActuatorPos::new(290.0, 290.0, 290.0))
            .unwrap();

        assert!(!cartesian.z_mm.is_nan());
        assert_eq!(cartesian.z_mm, 0.0);
        assert!(cartesian.x_mm.abs() <= TOL);
        assert!(cartesian.y_mm.abs() <= TOL);
    }

    #[test]
    fn test_unequal_shoulder_heights_use_mean_plane() {
        let solution = SimpsonSolution::new(&Params {
            shoulder_height_x: 60.0,
            shoulder_height_y: 70.0,
            shoulder_height_z: 80.0,
            ..Params::bolt_spacing()
        });

        // The spheres are treated as sharing the 70 mm plane, so the answer
        // drifts away from the target (to roughly (-4.6, -8.43, 49.89))
        let centre = CartesianPos::new(0.0, 0.0, 50.0);
        let actuator = solution.cartesian_to_actuator(&centre);
        let cartesian = solution.actuator_to_cartesian(&actuator).unwrap();
        assert!((cartesian.x_mm + 4.6).abs() < 0.01);
        assert!((cartesian.y_mm + 8.4293).abs() < 0.01);
        assert!((cartesian.z_mm - 49.8935).abs() < 0.01);

        // With equal heights at the mean the same target does round trip
        let mean = SimpsonSolution::new(&Params::bolt_spacing());
        let actuator = mean.cartesian_to_actuator(&centre);
        assert_close(&mean.actuator_to_cartesian(&actuator).unwrap(), &centre);
    }

    #[test]
    fn test_independent_has_no_forward() {
        let solution = SimpsonSolution::new(&Params::default());
        let actuator = solution.cartesian_to_actuator(&CartesianPos::default());

        assert_eq!(solution.actuator_to_cartesian(&actuator), None);
    }
}
