//! JVM command line assembly

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::config::ResolvedConfig;
use crate::entry_point::EntryPoint;
use crate::env_source::{EnvSource, JAVA_HOME_VAR};

/// Executable name used when `JAVA_HOME` is not set
pub const JAVA: &str = "java";

/// Classpath flag understood by the JVM
pub const CLASSPATH_FLAG: &str = "-classpath";

/// Locate the `java` executable
///
/// `$JAVA_HOME/bin/java` when `JAVA_HOME` is set, even to an empty value,
/// otherwise the bare name so the OS resolves it through `PATH` at exec time.
pub fn java_executable(env: &impl EnvSource) -> PathBuf {
    match env.get(JAVA_HOME_VAR) {
        Some(home) => PathBuf::from(home).join("bin").join(JAVA),
        None => PathBuf::from(JAVA),
    }
}

/// The complete, ordered process invocation
///
/// `[java, -classpath, <lib>/*, (log flag)?, extra args..., main class, caller args...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVector {
    tokens: Vec<OsString>,
}

impl CommandVector {
    /// Build the invocation; `caller_args` excludes the bootstrapper's own name
    pub fn assemble<I, S>(
        config: &ResolvedConfig,
        entry_point: &EntryPoint,
        java: PathBuf,
        caller_args: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut tokens: Vec<OsString> = vec![
            java.into_os_string(),
            CLASSPATH_FLAG.into(),
            config
                .library_dir
                .join(entry_point.library_glob)
                .into_os_string(),
        ];
        if let Some(ref flag) = config.log_config_flag {
            tokens.push(flag.into());
        }
        tokens.extend(config.extra_args.iter().map(OsString::from));
        tokens.push(entry_point.main_class.into());
        tokens.extend(caller_args.into_iter().map(Into::into));

        Self { tokens }
    }

    /// The executable to run
    pub fn program(&self) -> &OsStr {
        &self.tokens[0]
    }

    /// Arguments after the executable
    pub fn args(&self) -> &[OsString] {
        &self.tokens[1..]
    }

    /// Every token, executable first
    pub fn tokens(&self) -> &[OsString] {
        &self.tokens
    }

    /// Tokens as strings, replacing invalid unicode
    pub fn to_lossy_strings(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|t| t.to_string_lossy().into_owned())
            .collect()
    }

    /// JSON array of the tokens, for dry runs
    pub fn to_json(&self) -> String {
        serde_json::Value::from(self.to_lossy_strings()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_source::MapEnv;

    fn bare_config() -> ResolvedConfig {
        ResolvedConfig {
            install_prefix: PathBuf::from("/opt/zk"),
            library_dir: PathBuf::from("/opt/zk/lib"),
            config_dir: PathBuf::from("/opt/zk/etc"),
            log_config_flag: None,
            extra_args: Vec::new(),
        }
    }

    #[test]
    fn test_java_from_path_by_default() {
        assert_eq!(java_executable(&MapEnv::new()), PathBuf::from("java"));
    }

    #[test]
    fn test_empty_java_home_is_still_used() {
        assert_eq!(
            java_executable(&MapEnv::new().with(JAVA_HOME_VAR, "")),
            PathBuf::from("bin/java")
        );
    }

    #[test]
    fn test_java_from_java_home() {
        let env = MapEnv::new().with(JAVA_HOME_VAR, "/usr/lib/jvm/java-17");
        assert_eq!(
            java_executable(&env),
            PathBuf::from("/usr/lib/jvm/java-17/bin/java")
        );
    }

    #[test]
    fn test_assemble_minimal() {
        let cmd = CommandVector::assemble(
            &bare_config(),
            &EntryPoint::BASE,
            PathBuf::from("java"),
            Vec::<String>::new(),
        );
        assert_eq!(
            cmd.to_lossy_strings(),
            vec![
                "java",
                "-classpath",
                "/opt/zk/lib/*",
                "edu.uw.zookeeper.proxy.Main"
            ]
        );
        assert_eq!(cmd.program(), OsStr::new("java"));
        assert_eq!(cmd.args().len(), 3);
    }

    #[test]
    fn test_assemble_every_slot() {
        let config = ResolvedConfig {
            log_config_flag: Some("-Dlog4j.configurationFile=/opt/zk/etc/log4j2.xml".into()),
            extra_args: vec!["-Xmx1g".into(), "-Dname=a b".into()],
            ..bare_config()
        };
        let cmd = CommandVector::assemble(
            &config,
            &EntryPoint::NETTY,
            PathBuf::from("/jdk/bin/java"),
            ["--port", "2182"],
        );
        assert_eq!(
            cmd.to_lossy_strings(),
            vec![
                "/jdk/bin/java",
                "-classpath",
                "/opt/zk/lib/*",
                "-Dlog4j.configurationFile=/opt/zk/etc/log4j2.xml",
                "-Xmx1g",
                "-Dname=a b",
                "edu.uw.zookeeper.proxy.netty.Main",
                "--port",
                "2182",
            ]
        );
    }

    #[test]
    fn test_caller_args_pass_through_opaque() {
        let cmd = CommandVector::assemble(
            &bare_config(),
            &EntryPoint::BASE,
            PathBuf::from("java"),
            ["*", "a; rm -rf /", "\"quoted\"", "two words"],
        );
        assert_eq!(
            &cmd.to_lossy_strings()[4..],
            &["*", "a; rm -rf /", "\"quoted\"", "two words"]
        );
    }

    #[test]
    fn test_to_json() {
        let cmd = CommandVector::assemble(
            &bare_config(),
            &EntryPoint::BASE,
            PathBuf::from("java"),
            ["say \"hi\""],
        );
        let parsed: Vec<String> = serde_json::from_str(&cmd.to_json()).unwrap();
        assert_eq!(parsed, cmd.to_lossy_strings());
    }
}
