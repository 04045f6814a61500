//! End-to-end page build: records -> taxonomy -> document.
//!
//! # Responsibility
//! - Wire merge, color assignment and rendering into one pure call.
//!
//! # Invariants
//! - No state survives between calls; every build starts from scratch.
//! - A merge error is returned before any rendering happens.

use crate::color::color_for;
use crate::model::taxonomy::{SubareaOrder, Taxonomy};
use crate::render::html::{render, RenderOptions, DEFAULT_TITLE};
use crate::source::record::RawRecord;
use crate::taxonomy::builder::merge;
use crate::taxonomy::{MergeOptions, TaxonomyResult, DEFAULT_AREA};

/// Page-level configuration shared by merge and render stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub default_area: String,
    pub subarea_order: SubareaOrder,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            default_area: DEFAULT_AREA.to_string(),
            subarea_order: SubareaOrder::default(),
        }
    }
}

impl PageConfig {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            default_area: self.default_area.clone(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            subarea_order: self.subarea_order,
        }
    }
}

/// Built page plus the taxonomy it was rendered from.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    pub taxonomy: Taxonomy,
    pub html: String,
}

/// Merges `records` and renders the page.
pub fn build_page(records: &[RawRecord], config: &PageConfig) -> TaxonomyResult<BuiltPage> {
    let taxonomy = merge(records, &config.merge_options())?;
    let html = render(&taxonomy, color_for, &config.render_options());
    Ok(BuiltPage { taxonomy, html })
}
