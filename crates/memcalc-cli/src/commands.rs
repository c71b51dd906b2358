//! CLI command definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// memcalc: keypad calculator with memory and binary display
///
/// Each KEY is a button label: 0-9 . + - * ÷ = DEL AC BIN M+ M-.
/// The keyboard aliases / Enter Backspace Escape b are accepted too.
/// With no KEYS, whitespace-separated keys are read from stdin.
#[derive(Parser, Debug)]
#[command(name = "memcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (print only the current display line)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorArg,

    /// Calculator configuration file (YAML, or JSON by extension)
    #[arg(short, long, env = "MEMCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,

    /// Emit log records as JSON on stderr
    #[arg(long)]
    pub log_json: bool,

    /// Keys to press, in order
    #[arg(value_name = "KEYS", allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Detect terminal support
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}
