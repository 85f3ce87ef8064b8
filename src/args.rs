// src/args.rs
use std::path::PathBuf;

use brushfilter_infra::io::DocumentFormat;
use clap::{Args as ClapArgs, Parser, ValueEnum, ValueHint};

#[derive(Parser, Debug)]
#[command(name = "brushfilter", version, about = "Apply a chart brush selection to a dashboard's filters")]
pub struct Args {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(ClapArgs, Debug)]
pub struct InputOptions {
    /// Brush event document (`-` for stdin)
    #[arg(long, short = 'e', value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub event: PathBuf,

    /// Current filter state document; empty when omitted
    #[arg(long, short = 's', value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub state: Option<PathBuf>,

    /// Timepicker config (JSON or YAML)
    #[arg(long, short = 'c', value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Report format; defaults to the output file's extension, else JSON
    #[arg(long, value_enum, help_heading = "Output")]
    pub format: Option<OutputFormat>,

    /// Write the report here instead of stdout
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Merge queued filters into the applied filters
    #[arg(long, help_heading = "Behavior")]
    pub commit: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(OutputFormat, DocumentFormat, Json, Yaml);
