// testing utilities for exercising the generators without real side effects

pub mod recording_runner;
pub mod work_tree;

pub use recording_runner::RecordingRunner;
pub use work_tree::TestWorkTree;
