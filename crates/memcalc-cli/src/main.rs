//! memcalc: keypad calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! memcalc 2 + 3 '*' 4 =          # prints "20"
//! memcalc --steps 1 0 BIN        # display after every key
//! echo "5 M+ M+" | memcalc --json
//! ```

use clap::Parser;
use memcalc::config::CalculatorConfig;
use memcalc_cli::{
    logging, parse_key_args, split_keys, Cli, CliConfig, CliResult, Reporter, Session, Verbosity,
};
use std::io::Read;
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
    let config = build_config(&cli);
    logging::init_tracing(config.verbosity, cli.log_json)?;

    let calculator_config = match &cli.config {
        Some(path) => CalculatorConfig::from_path(path)?,
        None => CalculatorConfig::default(),
    };

    let keys = if cli.keys.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        split_keys(&input)
    } else {
        cli.keys.clone()
    };
    let actions = parse_key_args(&keys)?;

    let reporter = Reporter::new(config.clone());
    let mut session = Session::new(calculator_config, config.steps && config.json);
    session.run(&actions, |step| {
        if let Some(line) = reporter.render_step(step) {
            println!("{line}");
        }
    });

    println!("{}", reporter.render_report(&session.report())?);
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.clone().into())
        .with_json(cli.json)
        .with_steps(cli.steps)
}
