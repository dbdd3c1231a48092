//! Inspection CLI for proflens: issues the same queries a routing layer
//! would, over a local log directory.

mod args;
mod handlers;

pub use args::{Cli, Commands, LogLevel};

use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let client = handlers::client_for(&cli);
    match &cli.command {
        Commands::Runs => handlers::runs(&client),
        Commands::Hosts { run, tool } => handlers::hosts(&client, run, tool),
        Commands::Show {
            run,
            tool,
            host,
            output,
        } => handlers::show(&client, run, tool, host, output.as_deref()),
        Commands::Status => handlers::status(&client),
    }
}
