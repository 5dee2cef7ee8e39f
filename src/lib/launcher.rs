//! Process launch
//!
//! On Unix the bootstrapper replaces its own process image with the JVM: same
//! PID, same file descriptors, same environment. Elsewhere the JVM runs as a
//! child and the bootstrapper exits with its status.

use std::io;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

use crate::command::CommandVector;

/// Exit status when the executable does not exist
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit status when the executable exists but cannot be run
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Exit status for any other launch failure
pub const EXIT_LAUNCH_FAILED: i32 = 1;

/// Why the launch did not happen
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("{}: {source}", program.display())]
    ExecutableNotFound {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", program.display())]
    NotExecutable {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch {}: {source}", program.display())]
    Failed {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Classify an OS error returned while starting `program`
    pub fn from_io(program: impl Into<PathBuf>, source: io::Error) -> Self {
        let program = program.into();
        match classify(&source) {
            EXIT_NOT_FOUND => LaunchError::ExecutableNotFound { program, source },
            EXIT_NOT_EXECUTABLE => LaunchError::NotExecutable { program, source },
            _ => LaunchError::Failed { program, source },
        }
    }

    /// Process exit status to report for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::ExecutableNotFound { .. } => EXIT_NOT_FOUND,
            LaunchError::NotExecutable { .. } => EXIT_NOT_EXECUTABLE,
            LaunchError::Failed { .. } => EXIT_LAUNCH_FAILED,
        }
    }
}

#[cfg(unix)]
fn classify(err: &io::Error) -> i32 {
    match err.raw_os_error() {
        Some(libc::ENOENT) | Some(libc::ENOTDIR) => EXIT_NOT_FOUND,
        Some(libc::EACCES) | Some(libc::ENOEXEC) | Some(libc::EPERM) => EXIT_NOT_EXECUTABLE,
        Some(_) => EXIT_LAUNCH_FAILED,
        None => classify_kind(err),
    }
}

#[cfg(not(unix))]
fn classify(err: &io::Error) -> i32 {
    classify_kind(err)
}

fn classify_kind(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::NotFound => EXIT_NOT_FOUND,
        io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
        _ => EXIT_LAUNCH_FAILED,
    }
}

fn build(command: &CommandVector) -> Command {
    let mut cmd = Command::new(command.program());
    cmd.args(command.args());
    cmd
}

/// Replace the current process with `command`
///
/// Only returns if the exec failed.
#[cfg(unix)]
pub fn launch(command: &CommandVector) -> LaunchError {
    use std::os::unix::process::CommandExt;

    debug!(command = ?command.to_lossy_strings(), "exec");
    let err = build(command).exec();
    LaunchError::from_io(command.program(), err)
}

/// Run `command` as a child and exit with its status
///
/// Only returns if the child could not be started.
#[cfg(not(unix))]
pub fn launch(command: &CommandVector) -> LaunchError {
    debug!(command = ?command.to_lossy_strings(), "spawn");
    match build(command).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(EXIT_LAUNCH_FAILED)),
        Err(err) => LaunchError::from_io(command.program(), err),
    }
}
