//! Command-line front end built on the library API

pub mod orchestration;

pub use orchestration::{run_command, Command, CommandOutcome, Line};
