//! Line sources for console prompts
//!
//! [`InputHandler`] reads from the terminal through rustyline with optional
//! persistent history. [`ScriptedInput`] replays a fixed list of lines and is
//! what the tests drive the apps with.

use crate::errors::Result;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Something that can answer a prompt with one line of text
///
/// Returns:
/// - Ok(Some(line)) for normal input (may be empty)
/// - Ok(None) once the input is exhausted
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Input handler managing the readline interface and command history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InputHandler {
    /// Create new input handler without history persistence
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
        })
    }

    /// Create input handler with persistent history
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        // Load existing history if file exists
        if history_file.exists() {
            if let Err(e) = editor.load_history(&history_file) {
                tracing::warn!("Could not load history {}: {}", history_file.display(), e);
            }
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
        })
    }

    /// Save history to disk
    ///
    /// Called on graceful shutdown
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    /// Get history size
    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}

impl LineSource for InputHandler {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(rustyline::error::ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Replays pre-recorded answers, one per prompt
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts seen so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().map(|line| line.trim().to_string()))
    }
}
