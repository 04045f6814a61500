//! File discovery and loading for link sources.
//!
//! # Responsibility
//! - List link files in one directory by glob pattern.
//! - Read and parse each file, collecting failures instead of aborting.
//!
//! # Invariants
//! - Discovered paths are sorted, so processing order is stable across runs.
//! - `load_sources` never fails as a whole; bad files land in `skipped`.

use crate::source::record::RawRecord;
use crate::source::{SourceError, SourceResult};
use globset::Glob;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Default file pattern: one `links_<host>.yml` per contributor.
pub const DEFAULT_SOURCE_PATTERN: &str = "links_*.yml";

/// Source that was not loaded, with the reason.
#[derive(Debug)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub error: SourceError,
}

/// Result of loading a batch of source files.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<RawRecord>,
    pub skipped: Vec<SkippedSource>,
}

/// Lists regular files in `dir` whose file name matches `pattern`.
///
/// # Errors
/// - `SourceError::Pattern` when `pattern` is not a valid glob.
/// - `SourceError::Io` when `dir` cannot be listed.
pub fn discover_sources(dir: &Path, pattern: &str) -> SourceResult<Vec<PathBuf>> {
    let matcher = Glob::new(pattern)
        .map_err(|source| SourceError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let io_err = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for dir_entry in std::fs::read_dir(dir).map_err(io_err)? {
        let dir_entry = dir_entry.map_err(io_err)?;
        let path = dir_entry.path();
        if !path.is_file() {
            continue;
        }
        if dir_entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.is_match(name))
        {
            paths.push(path);
        }
    }
    paths.sort();

    debug!(
        "event=sources_discovered module=source status=ok dir={} pattern={} count={}",
        dir.display(),
        pattern,
        paths.len()
    );
    Ok(paths)
}

/// Reads and parses one link file.
pub fn load_source(path: &Path) -> SourceResult<RawRecord> {
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    RawRecord::from_yaml_str(origin_label(path), &text)
}

/// Loads every path in order, skipping failures with a warning.
///
/// The warning is the only report of a skipped source; it carries the
/// caret excerpt for YAML syntax errors.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();
    for path in paths {
        let path = path.as_ref();
        match load_source(path) {
            Ok(record) => {
                debug!(
                    "event=source_loaded module=source status=ok origin={} sections={} entries={}",
                    record.origin,
                    record.sections.len(),
                    record.entry_count()
                );
                outcome.records.push(record);
            }
            Err(error) => {
                warn!(
                    "event=source_skipped module=source status=error path={} error={}",
                    path.display(),
                    error.diagnostic()
                );
                outcome.skipped.push(SkippedSource {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }
    outcome
}

fn origin_label(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}
