use super::read_source;
use anyhow::{Context, Result};
use std::{io::Write, path::Path};
use stylus::Config;
use stylus_text::{highlight::render_page, render, tokenize_with};

pub fn run(file: Option<&Path>, page: bool, config: &Config) -> Result<()> {
    let source = read_source(file)?;
    let output = markup(&source, page, config);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write markup")?;
    Ok(())
}

/// Overlay markup for `source`, or the full page when `page` is set.
pub fn markup(source: &str, page: bool, config: &Config) -> String {
    if page {
        return render_page(source, config.lexer());
    }
    let tokens = tokenize_with(source, config.lexer());
    tracing::debug!(tokens = tokens.len(), "highlighted source");
    render(&tokens)
}
