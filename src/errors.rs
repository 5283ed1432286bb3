use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkGraphError {
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl LinkGraphError {
    pub fn io<T: Into<String>>(msg: T) -> Self {
        LinkGraphError::Io(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        LinkGraphError::InvalidInput(msg.into())
    }
}

/// One line a loader could not fully parse. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineError {
    pub line: usize,
    pub content: String,
}

/// Outcome of a bulk load: how many lines were consumed from the source and
/// which of them failed to parse. A bad line never aborts the load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub lines_read: usize,
    pub skipped: Vec<LineError>,
}

impl LoadReport {
    pub fn record(&mut self, line: usize, content: &str) {
        self.skipped.push(LineError {
            line,
            content: content.to_string(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
