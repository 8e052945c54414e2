//! Bounded child-process invocation
//!
//! The platform display strategies and the connection summary shell out to
//! OS utilities. Every invocation runs under an explicit timeout with
//! `kill_on_drop`, so a hung utility is reaped and its pipes released on
//! every exit path. No invocation is ever retried.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("command timed out after {0:?}")]
    Timeout(Duration),

    #[error("command exited with {0}")]
    NonZeroExit(std::process::ExitStatus),

    #[error("failed to run command: {0}")]
    Io(#[from] std::io::Error),
}

/// Run `program` with `args`, returning captured stdout.
///
/// Any outcome other than a zero exit within the timeout is an error; callers
/// in the discovery chain treat every error as "zero records".
pub async fn run_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<String, CommandError> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(Ok(output)) => Err(CommandError::NonZeroExit(output.status)),
        Ok(Err(io_err)) => Err(io_err.into()),
        // kill_on_drop reaps the child when the future is dropped here
        Err(_elapsed) => Err(CommandError::Timeout(timeout)),
    }
}
