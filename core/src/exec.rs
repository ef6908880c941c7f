//! Shell-backed implementation of the [`CommandRunner`] port.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use neighmap_common::exec::CommandRunner;

/// Runs command lines through the platform shell, buffering stdout until
/// the child exits. No timeout: a hung command hangs the lookup.
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, command_line: &str) -> anyhow::Result<String> {
        debug!(command = command_line, "spawning shell command");
        let output = if cfg!(target_family = "windows") {
            Command::new("cmd")
                .arg("/C")
                .arg(command_line)
                .output()
                .await?
        } else {
            Command::new("/bin/sh")
                .arg("-c")
                .arg(command_line)
                .output()
                .await?
        };
        if !output.status.success() {
            warn!(command = command_line, status = %output.status, "shell command failed");
            anyhow::bail!("command {command_line:?} exited with {}", output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
