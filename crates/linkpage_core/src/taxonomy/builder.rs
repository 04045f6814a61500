//! Record merge into one taxonomy.
//!
//! # Invariants
//! - Entries are appended in record order, then sorted raw-header order,
//!   then description order. Sorting is stable, so a header repeated in one
//!   record keeps its file order.
//! - Description keys are unique per (area, subarea) across all records.
//! - The first integrity error aborts the merge.

use crate::model::taxonomy::Taxonomy;
use crate::source::record::RawRecord;
use crate::taxonomy::header::{normalize_category_name, parse_header};
use crate::taxonomy::{MergeOptions, TaxonomyError, TaxonomyResult};
use log::{debug, error, info};

/// Merges all records into a fresh taxonomy.
///
/// # Errors
/// - `AmbiguousHeader` / `EmptyHeaderComponent` for a malformed header.
/// - `DuplicateDescription` when a description repeats under one subarea.
pub fn merge(records: &[RawRecord], options: &MergeOptions) -> TaxonomyResult<Taxonomy> {
    let default_area = normalize_category_name(&options.default_area);
    let mut taxonomy = Taxonomy::new();

    for record in records {
        merge_record(&mut taxonomy, record, &default_area).inspect_err(|err| {
            error!(
                "event=taxonomy_merge module=taxonomy status=error origin={} error={}",
                record.origin, err
            );
        })?;
        debug!(
            "event=record_merged module=taxonomy status=ok origin={} sections={}",
            record.origin,
            record.sections.len()
        );
    }

    info!(
        "event=taxonomy_merge module=taxonomy status=ok records={} areas={} subareas={} entries={}",
        records.len(),
        taxonomy.area_count(),
        taxonomy.subarea_count(),
        taxonomy.entry_count()
    );
    Ok(taxonomy)
}

fn merge_record(
    taxonomy: &mut Taxonomy,
    record: &RawRecord,
    default_area: &str,
) -> TaxonomyResult<()> {
    let mut sections = record.sections.iter().collect::<Vec<_>>();
    sections.sort_by(|left, right| left.header.cmp(&right.header));

    for section in sections {
        let path = parse_header(&section.header, &record.origin, default_area)?;
        taxonomy.ensure_subarea(&path.area, &path.subarea);
        for entry in &section.entries {
            taxonomy
                .insert_entry(&path.area, &path.subarea, entry.clone())
                .map_err(|dup| TaxonomyError::DuplicateDescription {
                    description: dup.description,
                    area: dup.area,
                    subarea: dup.subarea,
                    origin: record.origin.clone(),
                })?;
        }
    }
    Ok(())
}
