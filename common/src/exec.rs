use async_trait::async_trait;

/// Outbound port for running a command line and capturing its output.
///
/// The resolver only depends on this contract, so table parsing can be
/// exercised against canned output without spawning a process.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `command_line` to completion and returns its stdout, or an error
    /// when the process could not be spawned or exited non-zero.
    async fn run(&self, command_line: &str) -> anyhow::Result<String>;
}
