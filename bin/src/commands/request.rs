use super::read_source;
use anyhow::{Context, Result};
use std::{io::Write, path::Path};
use stylus::{AnalyzeRequest, Target};

pub fn run(file: Option<&Path>, target: Target) -> Result<()> {
    let code = read_source(file)?;
    let output = request_json(code, target)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write request")?;
    Ok(())
}

pub fn request_json(code: String, target: Target) -> Result<String> {
    tracing::info!(%target, label = target.label(), "building analysis request");
    serde_json::to_string_pretty(&AnalyzeRequest::new(code, target))
        .context("Failed to serialize analysis request")
}
