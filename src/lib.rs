pub mod error;
pub mod utils;

pub use error::*;
pub use utils::config::{FixtureConfig, MutatorConfig, RepogenConfig};
pub use utils::fixtures::{
    FixtureGenerator, FixtureReport, ServiceDefinition, ServiceDocument, ServiceRecord,
};
pub use utils::git_ops::{
    Checkpoint, CommandOutput, CommandRecord, CommandRunner, CommandStatus, GitOps, SystemRunner,
};
pub use utils::mutator::{
    MutationPlan, Phase, PhaseSummary, PipelineReport, RenamedFile, TrackedSet, TreeMutator,
};
pub use utils::random::{RandomSource, RngSource};
