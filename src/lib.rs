pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::sink::{ConsoleSink, OutputFormat, RecordingSink};
pub use crate::core::program::{expected_transcript, run, run_default, ProgramParams};
pub use crate::core::transcript::Transcript;
pub use domain::entity::{Base, Derived};
pub use domain::model::{EntityKind, LifecycleEvent, Phase};
pub use domain::ports::EventSink;
pub use utils::error::{LifecycleError, Result};
