pub mod repository;
pub mod runner;
pub mod types;

pub use repository::GitOps;
pub use runner::{CommandRunner, SystemRunner};
pub use types::*;
