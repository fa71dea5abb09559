//! # Simpson arm kinematics
//!
//! Converts between tool tip positions in the machine's cartesian frame and
//! the extensions of the three linear actuators of a Simpson (delta style)
//! parallel arm.
//!
//! The three arm shoulder pivots sit 120 degrees apart on a circle of the
//! printable radius:
//!
//! - pivot 1 (actuator 0) at 210 degrees, front left,
//! - pivot 2 (actuator 1) at 330 degrees, front right,
//! - pivot 3 (actuator 2) at 90 degrees, back middle.
//!
//! All lengths are in millimeters.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod calc_forward;
mod calc_inverse;
mod options;
mod params;
mod pivots;
mod pos;
mod solution;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

pub use options::*;
pub use params::*;
pub use pivots::*;
pub use pos::*;
pub use solution::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of linear actuators (and so arms) on the machine.
pub const NUM_ACTUATORS: usize = 3;

/// Number of decimal places forward kinematics results are rounded to.
pub const FORWARD_DECIMAL_PLACES: i32 = 4;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur while configuring or using the kinematics.
#[derive(Debug, thiserror::Error)]
pub enum KinError {
    #[error("Could not load the kinematics parameters: {0}")]
    ParamsLoad(#[from] util::params::LoadError),

    #[error("Unrecognised arm option: {0:?}")]
    UnknownOption(String),

    #[error("Runtime arm options are not supported by the bolt spacing geometry")]
    OptionsNotSupported,

    #[error("Forward kinematics are not available for the independent geometry")]
    ForwardNotSupported,

    #[error("Target is unreachable, actuator {axis} would be at {value_mm} mm")]
    Unreachable { axis: usize, value_mm: f64 },
}
