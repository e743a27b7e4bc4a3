use super::types::CommandOutput;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// synchronous execution of an external program
pub trait CommandRunner {
    /// run `program` with `args` to completion and capture its output
    ///
    /// a non-zero exit is reported through `CommandOutput`, only a failure
    /// to start the program is an error
    fn execute(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// runs commands as child processes in a fixed working directory
#[derive(Debug, Clone)]
pub struct SystemRunner {
    working_dir: PathBuf,
}

impl SystemRunner {
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn execute(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| Error::CommandSpawn {
                program: program.to_string(),
                source: e,
            })?;

        Ok(CommandOutput::new(
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp_dir = TempDir::new().unwrap();
        let runner = SystemRunner::new(temp_dir.path());

        let result = runner.execute("repogen-definitely-not-installed", &["--version"]);
        assert!(matches!(result, Err(Error::CommandSpawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout_and_exit_code() {
        let temp_dir = TempDir::new().unwrap();
        let runner = SystemRunner::new(temp_dir.path());

        let ok = runner.execute("sh", &["-c", "printf hello"]).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.stdout, "hello");

        let failed = runner.execute("sh", &["-c", "printf oops >&2; exit 3"]).unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.exit_code, Some(3));
        assert_eq!(failed.stderr, "oops");
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("marker.txt"), "").unwrap();
        let runner = SystemRunner::new(temp_dir.path());

        let output = runner.execute("ls", &[]).unwrap();
        assert!(output.stdout.contains("marker.txt"));
    }
}
