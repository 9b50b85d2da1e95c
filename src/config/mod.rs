use crate::adapters::sink::OutputFormat;
use crate::core::program::ProgramParams;
use crate::domain::entity::{Base, Derived};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "scope-lifecycle")]
#[command(about = "Prints the construction and destruction order of composed entities")]
pub struct CliConfig {
    #[arg(long, default_value_t = Derived::DEFAULT_INHERITED, allow_negative_numbers = true)]
    pub inherited: i32,

    #[arg(long, default_value_t = Derived::DEFAULT_MEMBER, allow_negative_numbers = true)]
    pub member: i32,

    #[arg(long, default_value_t = Base::DEFAULT_VALUE, allow_negative_numbers = true)]
    pub base: i32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Verify the emitted events against the expected order")]
    pub check: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn params(&self) -> ProgramParams {
        ProgramParams {
            inherited: self.inherited,
            member: self.member,
            base: self.base,
        }
    }
}
