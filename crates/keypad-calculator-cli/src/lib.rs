//! Keypad CLI Library
//!
//! Command-line front end for the keypad calculator: replays button labels
//! on a fresh engine and prints the display.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, FormatArg, LayoutArgs, PressArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{
    layout_entries, render_display, render_json, render_layout, render_steps, LayoutEntry,
    OutputFormat, PressStep,
};
