use super::read_source;
use anyhow::{Context, Result};
use std::{io::Write, path::PathBuf};
use stylus::{Config, EditorState, InputSimulator, Selection};

pub fn run(
    sequence: &str,
    file: Option<PathBuf>,
    selection: Selection,
    config: &Config,
) -> Result<()> {
    let text = match file {
        Some(path) => read_source(Some(&path))?,
        None => stylus::DEFAULT_DOCUMENT.to_string(),
    };
    let output = replay(&text, selection, sequence, config);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write buffer")?;
    Ok(())
}

/// Press `sequence` against `text` and show the resulting buffer with its
/// selection marked.
pub fn replay(text: &str, selection: Selection, sequence: &str, config: &Config) -> String {
    let mut simulator =
        InputSimulator::with_state(EditorState::with_selection(text, selection), config);
    simulator.type_sequence(sequence);
    tracing::debug!(selection = %simulator.selection(), "replayed keys");

    mark_selection(simulator.session().state())
}

/// `|` at a caret, `[` and `]` around a range.
fn mark_selection(state: &EditorState) -> String {
    let selection = state.selection();
    let before = state.text_before(selection.start);
    let after = state.text_after(selection.end);

    if selection.is_caret() {
        return format!("{before}|{after}");
    }
    let inner = &state.text()[before.len()..state.text().len() - after.len()];
    format!("{before}[{inner}]{after}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_block_sequence() {
        let output = replay("", Selection::caret(0), "if(x){<Enter>y;", &Config::default());
        assert_eq!(output, "if(x){\n    y;|\n}");
    }

    #[test]
    fn marks_ranges() {
        let state = EditorState::with_selection("hello", Selection::new(1, 3));
        assert_eq!(mark_selection(&state), "h[el]lo");
    }

    #[test]
    fn tab_width_comes_from_config() {
        let config = Config {
            tab_width: 2,
            ..Config::default()
        };
        assert_eq!(replay("x", Selection::caret(0), "<Tab>", &config), "  |x");
    }

    #[test]
    fn auto_close_can_be_disabled() {
        let config = Config {
            auto_close: false,
            ..Config::default()
        };
        assert_eq!(replay("", Selection::caret(0), "(", &config), "(|");
    }
}
