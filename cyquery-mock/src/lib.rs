// Include the fixture module directly from run.rs
#[path = "run.rs"]
pub mod run;

// Re-export what the binary and integration tests share
pub use run::{FixtureOptions, Mode, run_fixture};
