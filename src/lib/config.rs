//! Configuration resolution
//!
//! Turns environment overrides and the bootstrapper's own location into the
//! install layout the proxy is launched from:
//!
//! ```text
//! <prefix>/bin/zookeeper-proxy
//! <prefix>/lib/*.jar
//! <prefix>/etc/log4j2.xml
//! ```

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, Level};

use crate::env_source::{EnvSource, ETC_VAR, JAVA_ARGS_VAR, LIB_VAR, LOG_CONFIG_VAR, PREFIX_VAR};
use crate::log_config::discover_log_config_with;
use crate::shell_words;

/// Library directory relative to the install prefix
pub const LIB_SUFFIX: &str = "lib";
/// Configuration directory relative to the install prefix
pub const ETC_SUFFIX: &str = "etc";

/// Everything needed to build the JVM command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub install_prefix: PathBuf,
    pub library_dir: PathBuf,
    pub config_dir: PathBuf,
    /// `-Dlog4j.configurationFile=...` or the override, if any
    pub log_config_flag: Option<String>,
    /// Extra JVM arguments, in order
    pub extra_args: Vec<String>,
}

impl ResolvedConfig {
    /// Resolve against the real filesystem
    pub fn resolve(env: &impl EnvSource, self_path: &Path) -> Self {
        Self::resolve_with(env, self_path, |p| p.is_file())
    }

    /// Resolve using `is_file` for log configuration discovery
    pub fn resolve_with<F>(env: &impl EnvSource, self_path: &Path, is_file: F) -> Self
    where
        F: FnMut(&Path) -> bool,
    {
        let install_prefix = env
            .get(PREFIX_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_install_prefix(self_path));
        let library_dir = env
            .get(LIB_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| install_prefix.join(LIB_SUFFIX));
        let config_dir = env
            .get(ETC_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| install_prefix.join(ETC_SUFFIX));

        let log_config_flag = discover_log_config_with(
            &config_dir,
            env.get_string(LOG_CONFIG_VAR).as_deref(),
            is_file,
        );

        let extra_args = env
            .get_string(JAVA_ARGS_VAR)
            .map(|args| shell_words::split(&args))
            .unwrap_or_default();

        let config = Self {
            install_prefix,
            library_dir,
            config_dir,
            log_config_flag,
            extra_args,
        };
        if tracing::enabled!(Level::DEBUG) {
            match serde_json::to_string(&config) {
                Ok(json) => debug!(config = %json, "resolved configuration"),
                // Paths that are not valid unicode cannot be written as JSON
                Err(_) => debug!(?config, "resolved configuration"),
            }
        }
        config
    }
}

/// Grandparent of the bootstrapper, i.e. the directory containing `bin/`
pub fn default_install_prefix(self_path: &Path) -> PathBuf {
    match self_path.parent().and_then(Path::parent) {
        Some(prefix) if !prefix.as_os_str().is_empty() => prefix.to_path_buf(),
        _ => self_path
            .ancestors()
            .last()
            .filter(|root| root.has_root())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

/// Absolute path of the running bootstrapper
///
/// Prefers the OS view of the executable; falls back to `argv[0]` made
/// absolute against the working directory.
pub fn self_location() -> PathBuf {
    if let Ok(exe) = env::current_exe() {
        return exe;
    }

    let argv0 = env::args_os().next().map(PathBuf::from).unwrap_or_default();
    if argv0.is_absolute() {
        return argv0;
    }
    env::current_dir()
        .map(|cwd| cwd.join(&argv0))
        .unwrap_or(argv0)
}
