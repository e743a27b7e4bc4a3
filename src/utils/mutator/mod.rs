// randomized working tree population and mutation

pub mod phases;
pub mod pipeline;
pub mod tracked_set;
pub mod types;

pub use phases::{create_directories, create_files, delete_files, modify_files, rename_files};
pub use pipeline::TreeMutator;
pub use tracked_set::TrackedSet;
pub use types::*;
