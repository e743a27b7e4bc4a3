pub mod config;
pub mod fixtures;
pub mod git_ops;
pub mod mutator;
pub mod random;

pub mod testing;
