//! Parameters structure for the Simpson arm kinematics

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use super::NUM_ACTUATORS;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Default vertical distance from the shoulder swivel to the wrist hinge with
/// the tool tip on the bed.
pub const DEFAULT_EFFECTOR_HEIGHT_MM: f64 = 70.0;

/// Default distance between the hinge bolt centres with the endstop
/// triggered.
pub const DEFAULT_ARM_LENGTH_MM: f64 = 300.0;

/// Default distance from an arm swivel point to the bed centre.
pub const DEFAULT_PRINTABLE_RADIUS_MM: f64 = 144.37;

/// Default distance between any pair of shoulder bolts.
pub const DEFAULT_BOLT_SPACING_SIZE_MM: f64 = 250.0;

/// Default fully extended actuator length.
pub const DEFAULT_MAX_ARM_LENGTH_MM: f64 = 295.0;

/// Default shoulder height.
pub const DEFAULT_SHOULDER_HEIGHT_MM: f64 = 70.0;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// How the printable radius of the machine is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Effector height, arm length and printable radius are all configured
    /// directly and may be changed at runtime. No forward kinematics.
    Independent,

    /// The printable radius is derived from the shoulder bolt spacing.
    /// Forward kinematics are available.
    BoltSpacing,
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the Simpson arm kinematics.
///
/// Every key is optional in the parameter file, missing keys take the
/// documented default. Values are not validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Params {
    /// Which geometry variant to use.
    pub variant: Variant,

    // ---- INDEPENDENT GEOMETRY ----

    /// Approximate vertical distance from the shoulder swivel to the wrist
    /// hinge with the tool tip on the bed.
    ///
    /// Units: millimeters
    pub effector_height: f64,

    /// Approximate distance between the centres of the hinge bolts when the
    /// endstop is triggered.
    ///
    /// Units: millimeters
    pub arm_length: f64,

    /// Distance from each arm swivel point to the bed centre.
    ///
    /// Units: millimeters
    pub printable_radius: f64,

    // ---- BOLT SPACING GEOMETRY ----

    /// Distance between any pair of shoulder bolts.
    ///
    /// Units: millimeters
    pub bolt_spacing_size: f64,

    // ---- PER AXIS ----

    /// Fully extended length of each actuator. These must be updated with
    /// calibrated values for a real machine.
    ///
    /// Units: millimeters
    pub max_arm_length_x: f64,
    pub max_arm_length_y: f64,
    pub max_arm_length_z: f64,

    /// Height of each arm's shoulder pivot relative to the z = 0 plane.
    ///
    /// Units: millimeters
    pub shoulder_height_x: f64,
    pub shoulder_height_y: f64,
    pub shoulder_height_z: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Variant {
    fn default() -> Self {
        Variant::Independent
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            effector_height: DEFAULT_EFFECTOR_HEIGHT_MM,
            arm_length: DEFAULT_ARM_LENGTH_MM,
            printable_radius: DEFAULT_PRINTABLE_RADIUS_MM,
            bolt_spacing_size: DEFAULT_BOLT_SPACING_SIZE_MM,
            max_arm_length_x: DEFAULT_MAX_ARM_LENGTH_MM,
            max_arm_length_y: DEFAULT_MAX_ARM_LENGTH_MM,
            max_arm_length_z: DEFAULT_MAX_ARM_LENGTH_MM,
            shoulder_height_x: DEFAULT_SHOULDER_HEIGHT_MM,
            shoulder_height_y: DEFAULT_SHOULDER_HEIGHT_MM,
            shoulder_height_z: DEFAULT_SHOULDER_HEIGHT_MM,
        }
    }
}

impl Params {
    /// Default parameters for the bolt spacing variant.
    pub fn bolt_spacing() -> Self {
        Self {
            variant: Variant::BoltSpacing,
            ..Default::default()
        }
    }

    /// Max arm lengths indexed by actuator.
    pub fn max_arm_length_mm(&self) -> [f64; NUM_ACTUATORS] {
        [self.max_arm_length_x, self.max_arm_length_y, self.max_arm_length_z]
    }

    /// Shoulder heights indexed by actuator.
    pub fn shoulder_height_mm(&self) -> [f64; NUM_ACTUATORS] {
        [
            self.shoulder_height_x,
            self.shoulder_height_y,
            self.shoulder_height_z,
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;
    use util::params::{load_path, load_str, LoadError};

    fn shipped_params_path(file: &str) -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.pop();
        path.push("params");
        path.push(file);
        path
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let params: Params = load_str("").unwrap();

        assert_eq!(params, Params::default());
        assert_eq!(params.variant, Variant::Independent);
        assert_eq!(params.max_arm_length_mm(), [295.0; NUM_ACTUATORS]);
        assert_eq!(params.shoulder_height_mm(), [70.0; NUM_ACTUATORS]);
    }

    #[test]
    fn test_sparse_keys() {
        let params: Params = load_str(
            r#"
            variant = "bolt-spacing"
            bolt-spacing-size = 260.0
            max-arm-length-y = 301.5
            shoulder-height-z = 65.0
            "#,
        )
        .unwrap();

        assert_eq!(params.variant, Variant::BoltSpacing);
        assert_eq!(params.bolt_spacing_size, 260.0);
        assert_eq!(params.max_arm_length_mm(), [295.0, 301.5, 295.0]);
        assert_eq!(params.shoulder_height_mm(), [70.0, 70.0, 65.0]);
        assert_eq!(params.printable_radius, DEFAULT_PRINTABLE_RADIUS_MM);
    }

    #[test]
    fn test_unknown_variant() {
        match load_str::<Params>("variant = \"scara\"") {
            Err(LoadError::DeserialiseError(_)) => (),
            r => panic!("Expected a deserialise error, got {:?}", r),
        }
    }

    #[test]
    fn test_shipped_params() {
        let independent: Params = load_path(shipped_params_path("simpson_kin.toml")).unwrap();
        assert_eq!(independent, Params::default());

        let bolt_spacing: Params =
            load_path(shipped_params_path("simpson_kin_bolt_spacing.toml")).unwrap();
        assert_eq!(bolt_spacing, Params::bolt_spacing());
    }
}
