//! Core pipeline for merging contributor link files into one static page.
//! This crate owns the taxonomy invariants; front-ends only do I/O.

pub mod color;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod taxonomy;

pub use color::{color_for, SET3_PALETTE};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::entry::Entry;
pub use model::taxonomy::{Area, DuplicateEntry, Subarea, SubareaOrder, Taxonomy};
pub use pipeline::{build_page, BuiltPage, PageConfig};
pub use render::escape::escape_html;
pub use render::html::{render, RenderOptions};
pub use render::slug::slug;
pub use source::loader::{
    discover_sources, load_source, load_sources, LoadOutcome, SkippedSource,
    DEFAULT_SOURCE_PATTERN,
};
pub use source::record::{RawRecord, RawSection};
pub use source::{SourceError, SourceResult};
pub use taxonomy::builder::merge;
pub use taxonomy::header::{normalize_category_name, parse_header, CategoryPath};
pub use taxonomy::{MergeOptions, TaxonomyError, TaxonomyResult, DEFAULT_AREA};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
