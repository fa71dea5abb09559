//! Host platform utility functions

use std::path::PathBuf;

/// The environment variable holding the software root directory.
pub const SW_ROOT_ENV_VAR: &str = "SIMPSON_SW_ROOT";

/// Get the software root directory from the environment.
///
/// The root is the directory containing the `params` folder.
pub fn get_sw_root() -> Result<PathBuf, std::env::VarError> {
    std::env::var(SW_ROOT_ENV_VAR).map(PathBuf::from)
}
