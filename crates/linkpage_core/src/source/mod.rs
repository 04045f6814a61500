//! Link-source ingestion boundary.
//!
//! # Responsibility
//! - Turn raw link files into typed `RawRecord`s.
//! - Discover and load source files, skipping unreadable ones with a warning.
//!
//! # Invariants
//! - Everything past this module works on `Entry`; shape checks live here.
//! - A bad source never aborts loading of the remaining sources.

pub mod diagnostic;
pub mod loader;
pub mod node;
pub mod record;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Result type for source ingestion APIs.
pub type SourceResult<T> = Result<T, SourceError>;

/// Ingestion error for one source (or for discovery itself).
#[derive(Debug)]
pub enum SourceError {
    /// File could not be listed or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Text is not valid YAML.
    Yaml {
        origin: String,
        source: serde_yaml::Error,
        /// Caret-marked excerpt, present when the parser reported a location.
        snippet: Option<String>,
    },
    /// YAML is valid but does not have the header -> links shape.
    InvalidShape {
        origin: String,
        header: Option<String>,
        detail: String,
    },
    /// Discovery glob pattern does not compile.
    Pattern {
        pattern: String,
        source: globset::Error,
    },
}

impl SourceError {
    /// Returns a multi-line, human-oriented description for terminal output.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Yaml {
                snippet: Some(snippet),
                ..
            } => format!("{self}\n{snippet}"),
            _ => self.to_string(),
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not read `{}`: {source}", path.display())
            }
            Self::Yaml { origin, source, .. } => {
                write!(f, "`{origin}` is not a valid YAML file: {source}")
            }
            Self::InvalidShape {
                origin,
                header: Some(header),
                detail,
            } => write!(f, "`{origin}` section `{header}` is malformed: {detail}"),
            Self::InvalidShape {
                origin,
                header: None,
                detail,
            } => write!(f, "`{origin}` is malformed: {detail}"),
            Self::Pattern { pattern, source } => {
                write!(f, "invalid source pattern `{pattern}`: {source}")
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml { source, .. } => Some(source),
            Self::InvalidShape { .. } => None,
            Self::Pattern { source, .. } => Some(source),
        }
    }
}
