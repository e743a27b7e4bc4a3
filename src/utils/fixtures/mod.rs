// structured service fixture generation

pub mod generator;
pub mod types;

pub use generator::FixtureGenerator;
pub use types::*;
