use serde::{Deserialize, Serialize};

/// captured result of a finished external command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(exit_code: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(stdout: impl Into<String>) -> Self {
        Self::new(Some(0), stdout, "")
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::new(Some(exit_code), "", stderr)
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Succeeded,
    /// non-zero exit, signal, or the program could not be started
    Failed,
}

/// one logged invocation of the version-control tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub command: String,
    pub status: CommandStatus,
    pub message: String,
}

impl CommandRecord {
    pub fn new(command: String, status: CommandStatus, message: String) -> Self {
        Self {
            command,
            status,
            message,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status == CommandStatus::Succeeded
    }
}

/// outcome of a stage-and-commit checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub message: String,
    pub commands: Vec<CommandRecord>,
}

impl Checkpoint {
    pub fn succeeded(&self) -> bool {
        self.commands.iter().all(CommandRecord::succeeded)
    }
}
