use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use proflens_sdk::Client;

use crate::args::Cli;

pub fn client_for(cli: &Cli) -> Client {
    Client::new(expand_home_path(&cli.logdir))
}

/// Expand a leading `~/` using the platform home directory
fn expand_home_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

pub fn runs(client: &Client) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&client.runs())?);
    Ok(())
}

pub fn hosts(client: &Client, run: &str, tool: &str) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&client.hosts(run, tool))?);
    Ok(())
}

pub fn show(
    client: &Client,
    run: &str,
    tool: &str,
    host: &str,
    output: Option<&str>,
) -> Result<()> {
    let data = client
        .tool_data(run, tool, host)
        .with_context(|| format!("Failed to decode {}/{} for host '{}'", run, tool, host))?;
    let Some(data) = data else {
        bail!("No data for run '{}', tool '{}', host '{}'", run, tool, host);
    };
    let bytes = data.into_bytes();
    match output {
        Some(path) => {
            fs::write(path, &bytes).with_context(|| format!("Failed to write {}", path))?
        }
        None => std::io::stdout().write_all(&bytes)?,
    }
    Ok(())
}

pub fn status(client: &Client) -> Result<()> {
    println!("asset root: {}", client.asset_root().display());
    println!("active: {}", client.is_active());
    Ok(())
}
