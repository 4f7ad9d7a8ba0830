use crate::errors::{Result, StackedError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub git: GitSettings,
    pub shell: ShellSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// Program used for `for-each-ref` and `checkout`
    pub executable: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    /// Shell that runs each expanded command; the platform shell when unset
    pub program: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Printed in front of every command before it runs
    pub echo_prefix: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            executable: "git".to_string(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            echo_prefix: "> ".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StackedError::config(format!("Failed to read config file: {e}")))?;

        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| StackedError::config(format!("Failed to parse config file: {e}")))?;

        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.git.executable.trim().is_empty() {
            return Err(StackedError::config("git.executable must not be empty"));
        }

        if let Some(program) = &self.shell.program {
            if program.trim().is_empty() {
                return Err(StackedError::config("shell.program must not be empty"));
            }
        }

        Ok(())
    }
}
