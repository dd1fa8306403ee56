use bookkeeper::commands::Prompt;
use bookkeeper::error::{AssistantError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, IsTerminal, StdinLock};

/// Where input lines come from: a line editor on a terminal, plain stdin
/// lines when piped.
pub enum LineSource {
    Editor(Box<DefaultEditor>),
    Piped(io::Lines<StdinLock<'static>>),
}

impl LineSource {
    pub fn detect() -> Result<Self> {
        if io::stdin().is_terminal() {
            let editor = DefaultEditor::new().map_err(readline_error)?;
            Ok(LineSource::Editor(Box::new(editor)))
        } else {
            Ok(LineSource::Piped(io::stdin().lock().lines()))
        }
    }

    /// Next line, or `None` at end of input (EOF or Ctrl-C).
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self {
            LineSource::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.as_str()).map_err(readline_error)?;
                    }
                    Ok(Some(line))
                }
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
                Err(e) => Err(readline_error(e)),
            },
            LineSource::Piped(lines) => lines.next().transpose().map_err(AssistantError::Io),
        }
    }
}

impl Prompt for LineSource {
    fn ask(&mut self, message: &str) -> Result<String> {
        self.read_line(message)?
            .ok_or_else(|| AssistantError::Input("input ended".to_string()))
    }
}

fn readline_error(e: ReadlineError) -> AssistantError {
    AssistantError::Input(e.to_string())
}
