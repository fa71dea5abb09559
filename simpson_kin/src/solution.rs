//! Simpson arm solution state

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, trace, warn};
use serde::Serialize;

// Internal
use super::{
    pivots::radius_from_bolt_spacing,
    ActuatorPos, ArmOption, ArmOptions, CartesianPos, KinError, Params, Pivots, Variant,
    NUM_ACTUATORS,
};
use util::params;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Conversion between cartesian space and actuator space for an arm.
///
/// This is the interface used by the motion planner, which calls it once per
/// planned segment. Implementations must not allocate or block.
pub trait ArmSolution {
    /// Inverse kinematics, find the actuator positions for a tool tip
    /// position.
    fn cartesian_to_actuator(&self, cartesian: &CartesianPos) -> ActuatorPos;

    /// Forward kinematics, find the tool tip position for some actuator
    /// positions, or `None` if the arm has no forward solution.
    fn actuator_to_cartesian(&self, actuator: &ActuatorPos) -> Option<CartesianPos>;

    /// Apply a sparse set of runtime options, leaving those not given
    /// unchanged.
    fn set_options(&mut self, options: &ArmOptions) -> Result<(), KinError>;

    /// Get the current value of every runtime option, or `None` if the arm
    /// has no runtime options.
    fn get_options(&self) -> Option<ArmOptions>;
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Source of the printable radius, along with the values only meaningful for
/// that source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Geometry {
    /// Radius configured directly.
    ///
    /// Units: millimeters
    Independent {
        effector_height_mm: f64,
        arm_length_mm: f64,
        printable_radius_mm: f64,
    },

    /// Radius derived from the spacing of the shoulder bolts.
    ///
    /// Units: millimeters
    BoltSpacing { bolt_spacing_size_mm: f64 },
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Kinematics of the three armed Simpson parallel manipulator.
///
/// The pivots are derived from the geometry whenever the printable radius
/// changes and are never modified otherwise.
#[derive(Clone, Debug, Serialize)]
pub struct SimpsonSolution {
    pub(crate) geometry: Geometry,

    pub(crate) printable_radius_mm: f64,

    pub(crate) max_arm_length_mm: [f64; NUM_ACTUATORS],

    pub(crate) shoulder_height_mm: [f64; NUM_ACTUATORS],

    /// Height of the common shoulder plane used by forward kinematics.
    pub(crate) shoulder_plane_mm: f64,

    pub(crate) pivots: Pivots,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Geometry {
    fn from_params(params: &Params) -> Self {
        match params.variant {
            Variant::Independent => Geometry::Independent {
                effector_height_mm: params.effector_height,
                arm_length_mm: params.arm_length,
                printable_radius_mm: params.printable_radius,
            },
            Variant::BoltSpacing => Geometry::BoltSpacing {
                bolt_spacing_size_mm: params.bolt_spacing_size,
            },
        }
    }

    /// The radius of the pivot circle.
    pub fn printable_radius_mm(&self) -> f64 {
        match self {
            Geometry::Independent {
                printable_radius_mm,
                ..
            } => *printable_radius_mm,
            Geometry::BoltSpacing {
                bolt_spacing_size_mm,
            } => radius_from_bolt_spacing(*bolt_spacing_size_mm),
        }
    }

    /// The variant this geometry was built from.
    pub fn variant(&self) -> Variant {
        match self {
            Geometry::Independent { .. } => Variant::Independent,
            Geometry::BoltSpacing { .. } => Variant::BoltSpacing,
        }
    }
}

impl SimpsonSolution {
    /// Build the solution from a set of parameters.
    pub fn new(params: &Params) -> Self {
        let geometry = Geometry::from_params(params);
        let printable_radius_mm = geometry.printable_radius_mm();

        let mut solution = Self {
            geometry,
            printable_radius_mm,
            max_arm_length_mm: params.max_arm_length_mm(),
            shoulder_height_mm: params.shoulder_height_mm(),
            shoulder_plane_mm: 0.0,
            pivots: Pivots::from_radius(printable_radius_mm),
        };
        solution.update_shoulder_plane();

        debug!(
            "SimpsonSolution configured ({:?}): radius {:.4} mm, max arm lengths {:?} mm, \
            shoulder heights {:?} mm",
            solution.geometry.variant(),
            solution.printable_radius_mm,
            solution.max_arm_length_mm,
            solution.shoulder_height_mm
        );
        trace!("Pivots: {:?}", solution.pivots);

        solution
    }

    /// Load the parameter file at the given path (relative to the params
    /// directory) and build the solution from it.
    pub fn from_params_file(param_file_path: &str) -> Result<Self, KinError> {
        let params: Params = params::load(param_file_path)?;

        Ok(Self::new(&params))
    }

    /// Replace every parameter, re-deriving the pivots.
    pub fn reconfigure(&mut self, params: &Params) {
        *self = Self::new(params);
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn printable_radius_mm(&self) -> f64 {
        self.printable_radius_mm
    }

    pub fn pivots(&self) -> &Pivots {
        &self.pivots
    }

    pub fn max_arm_length_mm(&self) -> [f64; NUM_ACTUATORS] {
        self.max_arm_length_mm
    }

    pub fn shoulder_height_mm(&self) -> [f64; NUM_ACTUATORS] {
        self.shoulder_height_mm
    }

    /// True if forward kinematics are available for this geometry.
    pub fn has_forward(&self) -> bool {
        self.geometry.variant() == Variant::BoltSpacing
    }

    /// Inverse kinematics, failing if the target cannot be reached.
    ///
    /// The target is unreachable if any actuator would need to extend past
    /// its maximum length (a negative value) or if the result is not finite.
    pub fn try_cartesian_to_actuator(
        &self,
        cartesian: &CartesianPos,
    ) -> Result<ActuatorPos, KinError> {
        let actuator = self.calc_inverse(cartesian);

        match actuator.first_unreachable() {
            Some((axis, value_mm)) => Err(KinError::Unreachable { axis, value_mm }),
            None => Ok(actuator),
        }
    }

    /// Forward kinematics, failing if this geometry has no forward solution.
    pub fn try_actuator_to_cartesian(
        &self,
        actuator: &ActuatorPos,
    ) -> Result<CartesianPos, KinError> {
        self.calc_forward(actuator).ok_or(KinError::ForwardNotSupported)
    }

    /// Re-derive the pivots from the current radius.
    fn derive_pivots(&mut self) {
        self.printable_radius_mm = self.geometry.printable_radius_mm();
        self.pivots = Pivots::from_radius(self.printable_radius_mm);

        trace!("Pivots: {:?}", self.pivots);
    }

    /// Forward kinematics need all shoulders on one plane. Use the mean of the
    /// shoulder heights as that plane.
    fn update_shoulder_plane(&mut self) {
        let h = self.shoulder_height_mm;
        self.shoulder_plane_mm = h.iter().sum::<f64>() / NUM_ACTUATORS as f64;

        if self.has_forward() && h.iter().any(|&s| s != h[0]) {
            warn!(
                "Shoulder heights differ ({:?} mm), forward kinematics will use a shoulder plane \
                of {:.4} mm",
                h, self.shoulder_plane_mm
            );
        }
    }
}

impl ArmSolution for SimpsonSolution {
    fn cartesian_to_actuator(&self, cartesian: &CartesianPos) -> ActuatorPos {
        self.calc_inverse(cartesian)
    }

    /// Forward kinematics, only available for the bolt spacing geometry.
    ///
    /// The solution assumes every shoulder sits on one plane. If the shoulder
    /// heights differ their mean is used, so the result is approximate and
    /// will not match the target given to `cartesian_to_actuator`.
    fn actuator_to_cartesian(&self, actuator: &ActuatorPos) -> Option<CartesianPos> {
        self.calc_forward(actuator)
    }

    /// Apply runtime options.
    ///
    /// Only supported by the independent geometry. The pivots are only
    /// re-derived when the printable radius is given.
    fn set_options(&mut self, options: &ArmOptions) -> Result<(), KinError> {
        let (effector_height_mm, arm_length_mm, printable_radius_mm) = match &mut self.geometry {
            Geometry::Independent {
                effector_height_mm,
                arm_length_mm,
                printable_radius_mm,
            } => (effector_height_mm, arm_length_mm, printable_radius_mm),
            Geometry::BoltSpacing { .. } => return Err(KinError::OptionsNotSupported),
        };

        for (option, value) in options.iter() {
            debug!("Setting arm option {} to {}", option.key(), value);

            match option {
                ArmOption::EffectorHeight => *effector_height_mm = value,
                ArmOption::ArmLength => *arm_length_mm = value,
                ArmOption::PrintableRadius => *printable_radius_mm = value,
            }
        }

        if options.printable_radius.is_some() {
            self.derive_pivots();
        }

        Ok(())
    }

    fn get_options(&self) -> Option<ArmOptions> {
        match self.geometry {
            Geometry::Independent {
                effector_height_mm,
                arm_length_mm,
                printable_radius_mm,
            } => Some(ArmOptions {
                effector_height: Some(effector_height_mm),
                arm_length: Some(arm_length_mm),
                printable_radius: Some(printable_radius_mm),
            }),
            Geometry::BoltSpacing { .. } => None,
        }
    }
}
