//! End-to-end bootstrap: resolve, assemble, launch
//!
//! Both binaries call [`run`]; they differ only in the [`EntryPoint`] they pass.

use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::process;

use tracing::debug;

use crate::command::{java_executable, CommandVector};
use crate::config::{self_location, ResolvedConfig};
use crate::entry_point::EntryPoint;
use crate::env_source::{EnvSource, ProcessEnv};
use crate::launcher::launch;
use crate::logging;
use crate::settings::Settings;

/// Build the JVM invocation for `entry_point` from an environment and location
pub fn build_command<E, I, S>(
    entry_point: &EntryPoint,
    env: &E,
    self_path: &Path,
    caller_args: I,
) -> CommandVector
where
    E: EnvSource,
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let config = ResolvedConfig::resolve(env, self_path);
    let java = java_executable(env);
    CommandVector::assemble(&config, entry_point, java, caller_args)
}

/// Run the bootstrapper for `entry_point` in the current process
///
/// Never returns: either the process image is replaced, the dry-run output is
/// printed, or the process exits with the launch failure status.
pub fn run(entry_point: EntryPoint) -> ! {
    let process_env = ProcessEnv;
    let settings = Settings::from_env(&process_env);
    logging::init(settings.verbose);

    let self_path = self_location();
    debug!(self_path = %self_path.display(), main_class = entry_point.main_class, "bootstrapping");

    let command = build_command(
        &entry_point,
        &process_env,
        &self_path,
        env::args_os().skip(1),
    );

    if settings.dry_run {
        println!("{}", command.to_json());
        process::exit(0);
    }

    let err = launch(&command);
    eprintln!("Error: {}", err);
    process::exit(err.exit_code());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_source::{MapEnv, JAVA_ARGS_VAR, JAVA_HOME_VAR, LOG_CONFIG_VAR, PREFIX_VAR};

    #[test]
    fn test_build_command_from_defaults() {
        let cmd = build_command(
            &EntryPoint::BASE,
            &MapEnv::new(),
            Path::new("/nonexistent/zk/bin/zookeeper-proxy"),
            ["--help"],
        );
        assert_eq!(
            cmd.to_lossy_strings(),
            vec![
                "java",
                "-classpath",
                "/nonexistent/zk/lib/*",
                "edu.uw.zookeeper.proxy.Main",
                "--help",
            ]
        );
    }

    #[test]
    fn test_build_command_from_full_environment() {
        let env = MapEnv::new()
            .with(PREFIX_VAR, "/srv/zk")
            .with(JAVA_HOME_VAR, "/jdk")
            .with(LOG_CONFIG_VAR, "-Dlog4j.configurationFile=/cfg/log.xml")
            .with(JAVA_ARGS_VAR, "-server '-Dzk.name=proxy one'");
        let cmd = build_command(
            &EntryPoint::NETTY,
            &env,
            Path::new("/ignored/bin/zookeeper-proxy-netty"),
            Vec::<OsString>::new(),
        );
        assert_eq!(
            cmd.to_lossy_strings(),
            vec![
                "/jdk/bin/java",
                "-classpath",
                "/srv/zk/lib/*",
                "-Dlog4j.configurationFile=/cfg/log.xml",
                "-server",
                "-Dzk.name=proxy one",
                "edu.uw.zookeeper.proxy.netty.Main",
            ]
        );
    }
}
