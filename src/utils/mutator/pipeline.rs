use super::phases::{create_files, delete_files, modify_files, rename_files};
use super::tracked_set::TrackedSet;
use super::types::{MutationPlan, Phase, PipelineReport};
use crate::error::Result;
use crate::utils::config::MutatorConfig;
use crate::utils::git_ops::{CommandRunner, GitOps};
use crate::utils::random::RandomSource;
use std::path::{Path, PathBuf};
use tracing::info;

/// drives create, mutate and checkpoint phases against one working tree
pub struct TreeMutator<'a> {
    root: PathBuf,
    config: &'a MutatorConfig,
    git: GitOps<'a>,
}

impl<'a> TreeMutator<'a> {
    pub fn new<P: AsRef<Path>>(
        root: P,
        config: &'a MutatorConfig,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
            git: GitOps::new(runner),
        }
    }

    /// run the phases enabled in `plan`
    ///
    /// `CREATE → COMMIT → [MODIFY → COMMIT] → [DELETE → COMMIT] →
    /// [RENAME → COMMIT] → [FINAL MODIFY → COMMIT] → PUSH`
    ///
    /// version-control failures are recorded in the report, only
    /// filesystem errors end the run early
    pub fn run(&self, plan: &MutationPlan, rng: &mut dyn RandomSource) -> Result<PipelineReport> {
        let mut report = PipelineReport::default();

        info!("Step 1: Creating initial files...");
        let mut tracked = create_files(&self.root, self.config, rng)?;
        report.record(Phase::Create, tracked.len());
        self.checkpoint(
            &mut report,
            &tracked,
            &format!("Initial commit with {} files", tracked.len()),
        );

        if plan.modify {
            info!("Step 2: Modifying files...");
            let modified = modify_files(
                &tracked,
                self.config.modify_count,
                self.config.content_length(),
                rng,
            )?;
            report.record(Phase::Modify, modified.len());
            self.checkpoint(
                &mut report,
                &tracked,
                &format!("Modified {} files", modified.len()),
            );
        }

        if plan.delete {
            info!("Step 3: Deleting files...");
            let deleted = delete_files(&tracked, self.config.delete_count, rng)?;
            tracked.remove_all(&deleted);
            report.record(Phase::Delete, deleted.len());
            self.checkpoint(
                &mut report,
                &tracked,
                &format!("Deleted {} files", deleted.len()),
            );
        }

        if plan.rename {
            info!("Step 4: Renaming files...");
            let renamed = rename_files(&tracked, self.config.rename_count, rng)?;
            tracked.apply_renames(&renamed);
            report.record(Phase::Rename, renamed.len());
            self.checkpoint(
                &mut report,
                &tracked,
                &format!("Renamed {} files", renamed.len()),
            );
        }

        if plan.final_modify {
            info!("Step 5: Final modifications...");
            let modified = modify_files(
                &tracked,
                self.config.modify_count / 2,
                self.config.content_length(),
                rng,
            )?;
            report.record(Phase::FinalModify, modified.len());
            self.checkpoint(
                &mut report,
                &tracked,
                &format!("Final modifications to {} files", modified.len()),
            );
        }

        if plan.push {
            info!("Pushing changes to remote...");
            report.push = Some(self.git.push(&self.config.remote, &self.config.branch));
            report.record(Phase::Push, 0);
        }

        report.tracked_files = tracked.len();
        info!("Simulation complete!");

        Ok(report)
    }

    fn checkpoint(&self, report: &mut PipelineReport, tracked: &TrackedSet, message: &str) {
        report.checkpoints.push(self.git.commit_all(message));
        report.record(Phase::Commit, tracked.len());
    }
}
