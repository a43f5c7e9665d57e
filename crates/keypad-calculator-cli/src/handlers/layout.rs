//! `keypad layout` - print the keypad

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{layout_entries, render_json, render_layout, OutputFormat};
use keypad_calculator::keypad::Keypad;
use std::io::Write;

/// Runs the layout command, writing the grid to `out`
pub fn execute_layout(config: &CliConfig, out: &mut impl Write) -> CliResult<()> {
    let keypad = Keypad::new();
    let rendered = match config.format {
        OutputFormat::Text => render_layout(&keypad, config.color.should_color()),
        OutputFormat::Json => render_json(&layout_entries(&keypad))?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
