use crate::error::{Error, Result};
use crate::utils::git_ops::{CommandOutput, CommandRunner};
use std::cell::RefCell;
use std::collections::VecDeque;

/// fake `CommandRunner` that records every call
///
/// scripted outputs are returned in order, once they run out every call
/// succeeds with empty output
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Vec<String>>>,
    responses: RefCell<VecDeque<CommandOutput>>,
    unavailable: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// runner whose program can never be started
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// queue the output for the next unanswered call
    pub fn respond_with(&self, output: CommandOutput) {
        self.responses.borrow_mut().push_back(output);
    }

    /// every call so far as `[program, args...]`
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// calls whose first argument is `subcommand`
    pub fn calls_to(&self, subcommand: &str) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.get(1).map(String::as_str) == Some(subcommand))
            .cloned()
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn execute(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|a| a.to_string()));
        self.calls.borrow_mut().push(call);

        if self.unavailable {
            return Err(Error::CommandSpawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            });
        }

        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| CommandOutput::success("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_responses_then_default_success() {
        let runner = RecordingRunner::new();
        runner.respond_with(CommandOutput::failure(128, "fatal"));

        let first = runner.execute("git", &["push"]).unwrap();
        let second = runner.execute("git", &["status"]).unwrap();

        assert!(!first.is_success());
        assert!(second.is_success());
        assert_eq!(runner.calls().len(), 2);
        assert_eq!(runner.calls_to("push"), vec![vec!["git", "push"]]);
    }
}
