//! Fire-and-forget command dispatch.

use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

const DEFAULT_SHELL: &str = "/bin/sh";

/// Runs a command string without waiting for it.
pub trait CommandRunner {
    fn run(&self, command: &str);
}

/// Hands commands to the host shell via `sh -c`.
///
/// Must be called from within a tokio runtime; the child is reaped by a
/// background task and its exit status is only logged at debug level.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::with_shell(DEFAULT_SHELL)
    }

    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) {
        let spawned = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                let command = command.to_string();
                tokio::spawn(async move {
                    match child.wait().await {
                        Ok(status) => debug!("'{command}' exited with {status}"),
                        Err(e) => debug!("failed to wait for '{command}': {e}"),
                    }
                });
            }
            Err(e) => warn!("failed to spawn '{command}': {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn run_executes_through_shell() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("sent");

        ShellRunner::new().run(&format!("echo on > '{}'", marker.display()));

        let mut content = String::new();
        for _ in 0..200 {
            content = std::fs::read_to_string(&marker).unwrap_or_default();
            if !content.is_empty() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(content.trim(), "on");
    }

    #[tokio::test]
    async fn run_returns_before_command_finishes() {
        let started = std::time::Instant::now();
        ShellRunner::new().run("sleep 2");
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn failing_command_is_ignored() {
        ShellRunner::new().run("exit 3");
        ShellRunner::new().run("definitely-not-a-real-binary-rfgate");
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn missing_shell_does_not_panic() {
        ShellRunner::with_shell("/nonexistent/shell").run("true");
    }
}
