use clap::{Parser, ValueEnum};
use logmonitor_common::io_args::WriterArgs;
use logmonitor_common::logging::TraceLevel;

#[derive(Parser, Debug)]
#[command(
    name = "logmonitor",
    version,
    about = "Forward lines from stdin to the console through the shared log writer"
)]
pub struct Cli {
    /// Level to tag each forwarded line with; `none` forwards lines unchanged
    #[arg(long, value_enum, default_value_t = ForwardLevel::None)]
    pub level: ForwardLevel,

    #[command(flatten)]
    pub writer: WriterArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ForwardLevel {
    None,
    Error,
    Warning,
    Info,
}

impl ForwardLevel {
    pub fn trace_level(self) -> Option<TraceLevel> {
        match self {
            ForwardLevel::None => None,
            ForwardLevel::Error => Some(TraceLevel::Error),
            ForwardLevel::Warning => Some(TraceLevel::Warning),
            ForwardLevel::Info => Some(TraceLevel::Info),
        }
    }
}
