//! ioxdev.yaml configuration loading

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Config file name looked up in the workspace root
pub const CONFIG_FILE: &str = "ioxdev.yaml";

/// Platform-standard interpreter invocation name
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Tool configuration.
///
/// One option is recognized today: the Python interpreter override, which is
/// substituted as the launch binary for dependency checks only. Worker
/// scripts are always launched with the standard interpreter name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IoxConfig {
    #[serde(default)]
    pub python: PythonConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PythonConfig {
    /// Interpreter used for dependency-check invocations
    pub interpreter: Option<String>,
}

impl IoxConfig {
    /// Load configuration from `<workspace_root>/ioxdev.yaml`.
    ///
    /// A missing file or missing workspace yields the defaults; only a file
    /// that exists but fails to parse is an error.
    pub fn load(workspace_root: Option<&Path>) -> Result<Self> {
        let Some(root) = workspace_root else {
            return Ok(Self::default());
        };
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(serde_yaml_ng::from_str(&raw)?)
    }

    /// Interpreter for dependency checks, falling back to the default.
    pub fn interpreter(&self) -> &str {
        self.python
            .interpreter
            .as_deref()
            .unwrap_or(DEFAULT_INTERPRETER)
    }
}
