//! Taxonomy construction from merged link sources.
//!
//! # Responsibility
//! - Classify section headers into (area, subarea) pairs.
//! - Merge every record into one `Taxonomy`, rejecting integrity problems.
//!
//! # Invariants
//! - Ambiguous headers and duplicate descriptions abort the merge.
//! - No partial taxonomy is returned on error.

pub mod builder;
pub mod header;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for taxonomy construction.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

/// Fatal merge errors. Each one names the offending input and its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// Header contains more than one `" - "` separator.
    AmbiguousHeader {
        header: String,
        separators: usize,
        origin: String,
    },
    /// Area or subarea part of the header is blank.
    EmptyHeaderComponent { header: String, origin: String },
    /// Description already present under the same (area, subarea).
    DuplicateDescription {
        description: String,
        area: String,
        subarea: String,
        origin: String,
    },
}

impl Display for TaxonomyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmbiguousHeader {
                header,
                separators,
                origin,
            } => write!(
                f,
                "header `{header}` in `{origin}` has {separators} ` - ` separators; expected zero or one"
            ),
            Self::EmptyHeaderComponent { header, origin } => write!(
                f,
                "header `{header}` in `{origin}` has an empty area or subarea"
            ),
            Self::DuplicateDescription {
                description,
                area,
                subarea,
                origin,
            } => write!(
                f,
                "description `{description}` in area `{area}`, subarea `{subarea}` is not unique (repeated in `{origin}`)"
            ),
        }
    }
}

impl Error for TaxonomyError {}

/// Merge configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Area assigned to headers without a separator.
    pub default_area: String,
}

/// Area used for separator-less headers unless configured otherwise.
pub const DEFAULT_AREA: &str = "General";

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            default_area: DEFAULT_AREA.to_string(),
        }
    }
}
