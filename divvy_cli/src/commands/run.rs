use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::session::{Session, Summary};

pub fn run<P: AsRef<Path>>(file: P, config: Config) -> Result<Summary> {
    let file_path = file.as_ref();

    if !file_path.exists() {
        bail!("Script file not found: {}", file_path.display());
    }

    info!(script = %file_path.display(), "running script");

    let script = File::open(file_path)
        .with_context(|| format!("Failed to open script: {}", file_path.display()))?;

    let mut session = Session::new(config);
    let summary = session.drive(
        BufReader::new(script),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        None,
    )?;

    info!(
        executed = summary.executed,
        failed = summary.failed,
        groups = session.ledger().group_count(),
        "script finished"
    );

    Ok(summary)
}
