pub mod program;
pub mod transcript;

pub use crate::domain::entity::{Base, Derived};
pub use crate::domain::model::{EntityKind, LifecycleEvent, Phase};
pub use crate::domain::ports::EventSink;
pub use crate::utils::error::Result;
