use super::runner::CommandRunner;
use super::types::{Checkpoint, CommandRecord, CommandStatus};
use tracing::{info, warn};

const GIT: &str = "git";

/// version-control checkpoints driven through a `CommandRunner`
///
/// every command outcome is logged and recorded, none of them aborts the
/// caller
pub struct GitOps<'r> {
    runner: &'r dyn CommandRunner,
}

impl<'r> GitOps<'r> {
    pub fn new(runner: &'r dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// run a single git subcommand and log its outcome
    pub fn run(&self, command: &str, args: &[&str]) -> CommandRecord {
        let mut full_args = Vec::with_capacity(args.len() + 1);
        full_args.push(command);
        full_args.extend_from_slice(args);

        let command_line = format!("{} {}", GIT, full_args.join(" "));
        info!("Running: {}", command_line);

        match self.runner.execute(GIT, &full_args) {
            Ok(output) if output.is_success() => {
                info!("Success: {}", output.stdout.trim_end());
                CommandRecord::new(command_line, CommandStatus::Succeeded, output.stdout)
            }
            Ok(output) => {
                warn!("Error: {}", output.stderr.trim_end());
                CommandRecord::new(command_line, CommandStatus::Failed, output.stderr)
            }
            Err(e) => {
                warn!("Error: {}", e);
                CommandRecord::new(command_line, CommandStatus::Failed, e.to_string())
            }
        }
    }

    /// stage everything and commit it with `message`
    pub fn commit_all(&self, message: &str) -> Checkpoint {
        let add = self.run("add", &["."]);
        let commit = self.run("commit", &["-m", message]);

        Checkpoint {
            message: message.to_string(),
            commands: vec![add, commit],
        }
    }

    /// publish history, setting the upstream for `branch`
    pub fn push(&self, remote: &str, branch: &str) -> CommandRecord {
        self.run("push", &["-u", remote, branch])
    }
}
