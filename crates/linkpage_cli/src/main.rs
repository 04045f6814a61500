//! `linkpage` command line entry point.
//!
//! # Responsibility
//! - Discover contributor link files, build the page, write it to disk.
//! - Treat merge errors as fatal; skipped sources only lower the counts.
//!
//! # Invariants
//! - A merge error never leaves a partially written output file.
//! - Exit code is non-zero on any fatal error.

use clap::{Parser, ValueEnum};
use linkpage_core::render::html::DEFAULT_TITLE;
use linkpage_core::{
    build_page, default_log_level, discover_sources, init_logging, load_sources, LogTarget,
    PageConfig, SourceError, SubareaOrder, TaxonomyError, DEFAULT_AREA, DEFAULT_SOURCE_PATTERN,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::process::ExitCode;

/// Merge per-host link files into one categorized static HTML page.
#[derive(Debug, Parser)]
#[command(name = "linkpage", version, about)]
struct Cli {
    /// Page title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Directory holding the link files
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// File name glob selecting link files inside `input_dir`
    #[arg(long, default_value = DEFAULT_SOURCE_PATTERN)]
    pattern: String,

    /// Where to write the rendered document
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,

    /// Area for headers without an `Area - ` prefix
    #[arg(long, default_value = DEFAULT_AREA)]
    default_area: String,

    /// Subarea display order inside each area
    #[arg(long, value_enum, default_value_t = OrderArg::Alphabetical)]
    subarea_order: OrderArg,

    /// trace|debug|info|warn|error; defaults by build mode
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; stderr when omitted
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Alphabetical,
    Compact,
}

impl From<OrderArg> for SubareaOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Alphabetical => Self::Alphabetical,
            OrderArg::Compact => Self::Compact,
        }
    }
}

impl Cli {
    fn page_config(&self) -> PageConfig {
        PageConfig {
            title: self.title.clone(),
            default_area: self.default_area.clone(),
            subarea_order: self.subarea_order.into(),
        }
    }

    fn log_target(&self) -> LogTarget {
        match &self.log_dir {
            Some(dir) => LogTarget::Directory(dir.clone()),
            None => LogTarget::Stderr,
        }
    }
}

/// Fatal run errors.
#[derive(Debug)]
enum CliError {
    Discover(SourceError),
    Merge(TaxonomyError),
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discover(err) => write!(f, "{err}"),
            Self::Merge(err) => write!(f, "{err}; aborting"),
            Self::Write { path, source } => {
                write!(f, "could not write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Discover(err) => Some(err),
            Self::Merge(err) => Some(err),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<TaxonomyError> for CliError {
    fn from(value: TaxonomyError) -> Self {
        Self::Merge(value)
    }
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunSummary {
    sources: usize,
    skipped: usize,
    areas: usize,
    entries: usize,
}

fn run(cli: &Cli) -> Result<RunSummary, CliError> {
    let paths = discover_sources(&cli.input_dir, &cli.pattern).map_err(CliError::Discover)?;
    // Skipped sources are reported by the loader's warnings.
    let outcome = load_sources(&paths);

    let page = build_page(&outcome.records, &cli.page_config())?;
    std::fs::write(&cli.output, page.html.as_bytes()).map_err(|source| CliError::Write {
        path: cli.output.clone(),
        source,
    })?;

    let summary = RunSummary {
        sources: outcome.records.len(),
        skipped: outcome.skipped.len(),
        areas: page.taxonomy.area_count(),
        entries: page.taxonomy.entry_count(),
    };
    info!(
        "event=page_written module=cli status=ok output={} sources={} skipped={} areas={} entries={}",
        cli.output.display(),
        summary.sources,
        summary.skipped,
        summary.areas,
        summary.entries
    );
    Ok(summary)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &cli.log_target()) {
        eprintln!("ERROR: {err}");
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(summary) => {
            println!(
                "Wrote {} ({} areas, {} links from {} files)",
                cli.output.display(),
                summary.areas,
                summary.entries,
                summary.sources
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Cli, CliError, OrderArg};
    use clap::Parser;
    use std::fs;
    use std::path::Path;

    fn cli_for(dir: &Path) -> Cli {
        Cli::parse_from([
            "linkpage",
            "--title",
            "Team Links",
            "--input-dir",
            dir.to_str().unwrap(),
            "--output",
            dir.join("index.html").to_str().unwrap(),
        ])
    }

    #[test]
    fn parses_defaults() {
        let cli = Cli::parse_from(["linkpage"]);
        assert_eq!(cli.title, "Links");
        assert_eq!(cli.pattern, "links_*.yml");
        assert_eq!(cli.default_area, "General");
        assert_eq!(cli.subarea_order, OrderArg::Alphabetical);
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn writes_page_and_skips_broken_sources() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("links_a.yml"),
            "AI - Papers:\n  Causal Inference: http://x\n",
        )
        .unwrap();
        fs::write(dir.path().join("links_b.yml"), "AI: [broken\n").unwrap();

        let summary = run(&cli_for(dir.path())).unwrap();
        assert_eq!(summary.sources, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.areas, 1);
        assert_eq!(summary.entries, 1);

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("<title>Team Links</title>"));
        assert!(html.contains("Causal Inference"));
    }

    #[test]
    fn duplicate_keys_abort_without_writing_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("links_a.yml"),
            "AI - Papers:\n  Causal Inference: http://x\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("links_b.yml"),
            "AI - Papers:\n  Causal Inference: http://y\n",
        )
        .unwrap();

        let err = run(&cli_for(dir.path())).unwrap_err();
        assert!(matches!(err, CliError::Merge(_)));
        assert!(err.to_string().contains("Causal Inference"));
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn duplicate_key_inside_one_file_aborts_without_writing_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("links_a.yml"),
            "AI - Papers:\n  Causal Inference: http://x\n  Causal Inference: http://y\nAWS - Docs:\n  d: http://d\n",
        )
        .unwrap();

        let err = run(&cli_for(dir.path())).unwrap_err();
        assert!(matches!(err, CliError::Merge(_)));
        assert!(err.to_string().contains("links_a.yml"));
        assert!(!dir.path().join("index.html").exists());
    }
}
