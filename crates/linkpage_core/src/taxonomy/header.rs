//! Section header classification.
//!
//! Header grammar: `"<Area> - <Subarea>"` or `"<Subarea>"`. The separator is
//! the literal space-dash-space; a bare dash inside a word is plain text.

use crate::taxonomy::{TaxonomyError, TaxonomyResult};

/// Literal area/subarea separator.
pub const HEADER_SEPARATOR: &str = " - ";

/// Normalized (area, subarea) location for one header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPath {
    pub area: String,
    pub subarea: String,
}

/// Splits and normalizes one header.
///
/// # Errors
/// - `AmbiguousHeader` when the separator occurs more than once.
/// - `EmptyHeaderComponent` when a part is blank after trimming.
pub fn parse_header(
    header: &str,
    origin: &str,
    default_area: &str,
) -> TaxonomyResult<CategoryPath> {
    let separators = header.matches(HEADER_SEPARATOR).count();
    let (area, subarea) = match header.split_once(HEADER_SEPARATOR) {
        None => (default_area, header),
        Some((area, subarea)) if separators == 1 => (area, subarea),
        Some(_) => {
            return Err(TaxonomyError::AmbiguousHeader {
                header: header.to_string(),
                separators,
                origin: origin.to_string(),
            })
        }
    };

    let area = normalize_category_name(area);
    let subarea = normalize_category_name(subarea);
    if area.is_empty() || subarea.is_empty() {
        return Err(TaxonomyError::EmptyHeaderComponent {
            header: header.to_string(),
            origin: origin.to_string(),
        });
    }
    Ok(CategoryPath { area, subarea })
}

/// Trims and capitalizes a category name.
///
/// Names that are already all upper-case (acronyms such as `AWS`, or text
/// without cased letters) are kept verbatim; otherwise only the first
/// character is upper-cased.
pub fn normalize_category_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == trimmed.to_uppercase() {
        return trimmed.to_string();
    }
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
