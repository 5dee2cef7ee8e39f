//! Bootstrapper switches read from the environment

use crate::env_source::{EnvSource, DRY_RUN_VAR, VERBOSE_VAR};

/// Behavior of the bootstrapper itself, as opposed to the launched JVM
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Emit debug diagnostics on stderr
    pub verbose: bool,
    /// Print the command line as JSON instead of launching it
    pub dry_run: bool,
}

impl Settings {
    pub fn from_env(env: &impl EnvSource) -> Self {
        Self {
            verbose: env.flag(VERBOSE_VAR),
            dry_run: env.flag(DRY_RUN_VAR),
        }
    }
}
