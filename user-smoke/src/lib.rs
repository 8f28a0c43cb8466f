pub mod config;
pub mod error;
pub mod probe;
pub mod runner;

pub use config::{Fixtures, SmokeConfig};
pub use error::SmokeError;
pub use probe::UserProbe;
pub use runner::{run_sequence, run_tests, SmokeReport};
