//! Shared path helpers

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Get the install root holding the bundled Python package, worker scripts
/// (`code/*.py`), and schemas.
///
/// IOXDEV_HOME overrides the platform data directory so containerized and
/// relocated installs can point at their own script tree.
pub fn install_root() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("IOXDEV_HOME") {
        return Ok(PathBuf::from(home));
    }

    dirs::data_dir()
        .map(|d| d.join("ioxdev"))
        .ok_or_else(|| Error::invalid_config("could not determine a data directory for ioxdev"))
}
