//! zookeeper-proxy-bootstrap library
//!
//! Resolves install paths, JVM flags and log configuration for the ZooKeeper
//! proxy, then replaces the current process with the JVM.

pub mod bootstrap;
pub mod command;
pub mod config;
pub mod entry_point;
pub mod env_source;
pub mod launcher;
pub mod log_config;
pub mod logging;
pub mod settings;
pub mod shell_words;

// Re-export commonly used items
pub use bootstrap::{build_command, run};
pub use command::{java_executable, CommandVector, CLASSPATH_FLAG, JAVA};
pub use config::{default_install_prefix, self_location, ResolvedConfig, ETC_SUFFIX, LIB_SUFFIX};
pub use entry_point::EntryPoint;
pub use env_source::{
    EnvSource, MapEnv, ProcessEnv, DRY_RUN_VAR, ETC_VAR, JAVA_ARGS_VAR, JAVA_HOME_VAR, LIB_VAR,
    LOG_CONFIG_VAR, PREFIX_VAR, VERBOSE_VAR,
};
pub use launcher::{launch, LaunchError, EXIT_LAUNCH_FAILED, EXIT_NOT_EXECUTABLE, EXIT_NOT_FOUND};
pub use log_config::{
    discover_log_config, discover_log_config_with, log_config_flag, LOG_CONFIG_CANDIDATES,
    LOG_CONFIG_PROPERTY,
};
pub use settings::Settings;
