use crate::utils::git_ops::{Checkpoint, CommandRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// one step of the tree mutator pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Create,
    Commit,
    Modify,
    Delete,
    Rename,
    FinalModify,
    Push,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Create => write!(f, "create"),
            Phase::Commit => write!(f, "commit"),
            Phase::Modify => write!(f, "modify"),
            Phase::Delete => write!(f, "delete"),
            Phase::Rename => write!(f, "rename"),
            Phase::FinalModify => write!(f, "final_modify"),
            Phase::Push => write!(f, "push"),
        }
    }
}

/// a file moved to a new name in the same directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl RenamedFile {
    pub fn new(from: PathBuf, to: PathBuf) -> Self {
        Self { from, to }
    }
}

/// which optional phases the pipeline runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationPlan {
    pub modify: bool,
    pub delete: bool,
    pub rename: bool,
    pub final_modify: bool,
    pub push: bool,
}

impl Default for MutationPlan {
    // create, commit and push only
    fn default() -> Self {
        Self {
            modify: false,
            delete: false,
            rename: false,
            final_modify: false,
            push: true,
        }
    }
}

impl MutationPlan {
    /// every mutation pass enabled
    pub fn full() -> Self {
        Self {
            modify: true,
            delete: true,
            rename: true,
            final_modify: true,
            push: true,
        }
    }
}

/// what one phase touched, zero for phases that touch no files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSummary {
    pub phase: Phase,
    pub files: usize,
}

/// outcome of a full pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub phases: Vec<PhaseSummary>,
    pub checkpoints: Vec<Checkpoint>,
    pub push: Option<CommandRecord>,
    pub tracked_files: usize,
}

impl PipelineReport {
    pub fn record(&mut self, phase: Phase, files: usize) {
        self.phases.push(PhaseSummary { phase, files });
    }

    /// files touched by the first run of `phase`
    pub fn files_for(&self, phase: Phase) -> Option<usize> {
        self.phases.iter().find(|s| s.phase == phase).map(|s| s.files)
    }
}
