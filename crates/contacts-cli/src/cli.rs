//! CLI argument definitions for the contact converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use contacts_core::sanitize::DEFAULT_REGION;

#[derive(Parser)]
#[command(
    name = "contacts-ghl",
    version,
    about = "Convert university contact sheets into GHL import CSVs",
    long_about = "Convert a spreadsheet of university contacts into a CSV ready for \
                  GoHighLevel import.\n\n\
                  Emails, phones and countries are sanitized, contacts are tagged by \
                  country and career keywords (with an optional LLM fallback), and \
                  rows are deduplicated by email."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a contact sheet into a GHL import CSV.
    Convert(ConvertArgs),

    /// List the countries present in a contact sheet.
    Countries(CountriesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Contact sheet (.xlsx, .xls, .ods or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Keep only rows whose País contains this text (case-insensitive).
    #[arg(short = 'c', long = "country", value_name = "COUNTRY")]
    pub country: Option<String>,

    /// Tag with keyword rules only; never call the LLM.
    #[arg(long = "no-oracle")]
    pub no_oracle: bool,

    /// Report statistics without writing the CSV.
    #[arg(long = "validate-only")]
    pub validate_only: bool,

    /// Region assumed for phone numbers without a country code.
    #[arg(long = "default-region", value_name = "REGION", default_value = DEFAULT_REGION)]
    pub default_region: String,

    /// Output file (default: contactos_<country>_ghl.csv or contactos_todos_paises.csv).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory for the default output file name.
    #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,

    /// Reference data directory (default: CONTACTS_STANDARDS_DIR or the bundled standards).
    #[arg(long = "standards-dir", value_name = "DIR")]
    pub standards_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CountriesArgs {
    /// Contact sheet (.xlsx, .xls, .ods or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
