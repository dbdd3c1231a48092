use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "proflens")]
#[command(about = "Inspect profiling runs and decode trace artifacts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log directory containing the plugins/profile asset tree
    #[arg(long, default_value = ".", global = true)]
    pub logdir: String,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List runs and the tools with data for each
    Runs,
    /// List hosts with data for a run and tool
    Hosts { run: String, tool: String },
    /// Print an artifact payload, decoded for the trace tool
    Show {
        run: String,
        tool: String,
        /// Host name; leave empty for single-file tools
        #[arg(long, default_value = "")]
        host: String,
        /// Write the payload to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show the asset root and whether any run has data
    Status,
}
