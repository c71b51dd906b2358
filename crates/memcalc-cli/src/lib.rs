//! memcalc CLI Library
//!
//! Command-line front end for the memcalc keypad calculator: keys come from
//! the argument list or stdin, and the resulting display is printed as text
//! or JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Reporter;
pub use runner::{parse_key_args, split_keys, Session, SessionReport, Step};
