//! Environment manager configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_manager() -> String {
    "conda".to_string()
}

fn default_make_program() -> String {
    "make".to_string()
}

fn default_make_target() -> String {
    "create_environment".to_string()
}

fn default_env_prompt() -> String {
    "({name})".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvironmentConfig {
    /// Executable probed on `PATH` and used for the prompt setting.
    #[serde(default = "default_manager")]
    pub manager: String,

    #[serde(default = "default_make_program")]
    pub make_program: String,

    /// Build target that creates the environment.
    #[serde(default = "default_make_target")]
    pub make_target: String,

    /// Value written to the manager's `env_prompt` setting.
    #[serde(default = "default_env_prompt")]
    pub env_prompt: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            manager: default_manager(),
            make_program: default_make_program(),
            make_target: default_make_target(),
            env_prompt: default_env_prompt(),
        }
    }
}

impl EnvironmentConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("environment.manager", &self.manager),
            ("environment.make_program", &self.make_program),
            ("environment.make_target", &self.make_target),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }
        Ok(())
    }
}
