//! Keypad CLI: press calculator buttons from the command line
//!
//! ## Usage
//!
//! ```bash
//! keypad press 1 2 + 3 =           # Print the final display
//! keypad press --steps 5 0 %       # Print the display after every press
//! keypad press --format json 9 / 0 =
//! keypad layout                    # Print the keypad grid
//! ```

use clap::Parser;
use keypad_calculator_cli::{
    handlers::{execute_layout, execute_press},
    logging::init_logging,
    Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    init_logging(config.verbosity);

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Press(args) => {
            let config = config.with_format(args.format.into());
            execute_press(&config, &args, &mut stdout)
        }
        Commands::Layout(args) => {
            let config = config.with_format(args.format.into());
            execute_layout(&config, &mut stdout)
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
