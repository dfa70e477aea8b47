//! CLI module
//!
//! Command-line interface for downloading collections.
//!
//! Each subcommand maps to one resource, e.g. `pgdata systems --search osaka`
//! or `pgdata irradiation-daily --source JMA-47772 --start 2023-01-01 --end 2023-01-31`.

mod commands;
mod runner;

pub use commands::{Cli, Commands, DateRange, StatementArgs, TimeRange};
pub use runner::{write_records, Runner};
