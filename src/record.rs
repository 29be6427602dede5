use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// One cheat-sheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Owning tool, e.g. `vim` or `tmux`.
    pub program: String,
    /// Human-readable action, one or more space-separated words.
    pub command: String,
    /// Literal key sequence invoking the action.
    pub shortcut: String,
    #[serde(default, alias = "desc")]
    pub description: String,
}

impl Record {
    pub fn new(program: &str, command: &str, shortcut: &str) -> Self {
        Record {
            program: program.to_string(),
            command: command.to_string(),
            shortcut: shortcut.to_string(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Check the fields every matcher relies on being present.
    pub fn validate(&self, index: usize) -> Result<(), DatasetError> {
        if self.program.is_empty() {
            return Err(DatasetError::EmptyField {
                index,
                field: "program",
            });
        }
        if self.command.is_empty() {
            return Err(DatasetError::EmptyField {
                index,
                field: "command",
            });
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.program, self.command, self.shortcut)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}
