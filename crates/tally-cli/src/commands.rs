use std::fs;
use std::path::Path;

use anyhow::{bail, Context};

use tally_rules::{is_valid_receipt, score};
use tally_server::{ServerConfig, TallyServer};
use tally_types::Receipt;

use crate::cli::{Cli, Command, ScoreArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Score(args) => cmd_score(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig {
        bind_addr: args
            .bind
            .parse()
            .with_context(|| format!("invalid bind address: {}", args.bind))?,
    };
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(TallyServer::new(config).serve())?;
    Ok(())
}

fn cmd_score(args: ScoreArgs) -> anyhow::Result<()> {
    let points = score_file(&args.file)?;
    println!("{points}");
    Ok(())
}

/// Read, validate, and score a receipt JSON file.
fn score_file(path: &Path) -> anyhow::Result<u64> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let payload: serde_json::Value =
        serde_json::from_str(&raw).context("parsing receipt JSON")?;
    if !is_valid_receipt(&payload) {
        bail!("receipt failed validation");
    }
    let receipt: Receipt = serde_json::from_value(payload)?;
    Ok(score(&receipt)?)
}
