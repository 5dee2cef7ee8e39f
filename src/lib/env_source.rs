//! Read-only access to environment variables
//!
//! Resolution code never calls `std::env` directly; it takes an [`EnvSource`]
//! so tests can describe an environment without touching the real one.

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;

/// Overrides the install prefix
pub const PREFIX_VAR: &str = "ZOOKEEPER_PROXY_PREFIX";
/// Overrides the library directory
pub const LIB_VAR: &str = "ZOOKEEPER_PROXY_LIB";
/// Overrides the configuration directory
pub const ETC_VAR: &str = "ZOOKEEPER_PROXY_ETC";
/// Log configuration flag, passed to the JVM verbatim
pub const LOG_CONFIG_VAR: &str = "ZOOKEEPER_PROXY_LOG_CONFIG";
/// JVM installation root
pub const JAVA_HOME_VAR: &str = "JAVA_HOME";
/// Extra JVM arguments, shell-word split
pub const JAVA_ARGS_VAR: &str = "JAVA_ARGS";
/// Enables debug diagnostics
pub const VERBOSE_VAR: &str = "ZOOKEEPER_PROXY_VERBOSE";
/// Prints the command instead of launching it
pub const DRY_RUN_VAR: &str = "ZOOKEEPER_PROXY_DRY_RUN";

/// A read-only view of environment variables
///
/// A variable that is set counts as present even when empty or not valid
/// unicode.
pub trait EnvSource {
    /// Raw value of `name`, if set
    fn get(&self, name: &str) -> Option<OsString>;

    /// Value of `name` as text, replacing invalid unicode
    fn get_string(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string_lossy().into_owned())
    }

    /// `true` when `name` is `1` or `true`
    fn flag(&self, name: &str) -> bool {
        self.get_string(name).is_some_and(|v| v == "1" || v == "true")
    }
}

/// The environment of the current process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<OsString> {
        env::var_os(name)
    }
}

/// An in-memory environment
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    /// An environment with no variables set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, name: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(name.to_string(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }
}
