//! `keypad press` - replay button labels on a fresh calculator

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_display, render_json, render_steps, OutputFormat, PressStep};
use keypad_calculator::driver::{CalculatorDriver, EngineDriver};
use keypad_calculator::keypad::Button;
use std::io::Write;
use tracing::info;

/// Parses every label up front, so a typo fails before anything is printed
pub fn parse_buttons(labels: &[String]) -> CliResult<Vec<Button>> {
    Ok(labels
        .iter()
        .map(|label| label.parse::<Button>())
        .collect::<Result<Vec<_>, _>>()?)
}

/// Runs the press command, writing the result to `out`
pub fn execute_press(config: &CliConfig, args: &PressArgs, out: &mut impl Write) -> CliResult<()> {
    let buttons = parse_buttons(&args.buttons)?;
    info!(presses = buttons.len(), "replaying buttons");

    let mut driver = EngineDriver::new();
    let mut steps = Vec::with_capacity(if args.steps { buttons.len() } else { 0 });
    for button in buttons {
        driver.press(button)?;
        if args.steps {
            steps.push(PressStep::new(button, driver.display()));
        }
    }

    let use_color = config.color.should_color();
    let rendered = match (config.format, args.steps) {
        (OutputFormat::Text, false) => render_display(&driver.display(), use_color),
        (OutputFormat::Text, true) => render_steps(&steps, use_color),
        (OutputFormat::Json, false) => render_json(&driver.display())?,
        (OutputFormat::Json, true) => render_json(&steps)?,
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
