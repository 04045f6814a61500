//! Two-level category tree: area -> subarea -> entries.
//!
//! # Responsibility
//! - Hold merged entries keyed by normalized area and subarea names.
//! - Enforce description uniqueness per (area, subarea) on insert.
//! - Provide deterministic display orderings.
//!
//! # Invariants
//! - Area and subarea names are unique keys at their level.
//! - Entry order inside a subarea is insertion order.
//! - Sorted views are total: case-insensitive first, exact name on ties.

use crate::model::entry::Entry;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display order for subareas inside one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubareaOrder {
    /// Case-insensitive by subarea name.
    #[default]
    Alphabetical,
    /// Fewest entries first, ties by name; packs short lists together.
    Compact,
}

/// Rejected insert: description already present under the same subarea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub area: String,
    pub subarea: String,
    pub description: String,
}

impl Display for DuplicateEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "description `{}` already exists in `{} - {}`",
            self.description, self.area, self.subarea
        )
    }
}

impl Error for DuplicateEntry {}

/// Full merged tree for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    areas: BTreeMap<String, Area>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the area, inserting an empty one when missing.
    pub fn ensure_area(&mut self, name: &str) -> &mut Area {
        self.areas
            .entry(name.to_string())
            .or_insert_with(|| Area::new(name))
    }

    /// Returns the subarea, inserting empty area/subarea nodes when missing.
    pub fn ensure_subarea(&mut self, area: &str, subarea: &str) -> &mut Subarea {
        self.ensure_area(area)
            .subareas
            .entry(subarea.to_string())
            .or_insert_with(|| Subarea::new(subarea))
    }

    /// Appends one entry under `(area, subarea)`.
    ///
    /// # Errors
    /// - Returns `DuplicateEntry` when the description is already present
    ///   under the same subarea; the tree is left unchanged.
    pub fn insert_entry(
        &mut self,
        area: &str,
        subarea: &str,
        entry: Entry,
    ) -> Result<(), DuplicateEntry> {
        let node = self.ensure_subarea(area, subarea);
        if !node.descriptions.insert(entry.description.clone()) {
            return Err(DuplicateEntry {
                area: area.to_string(),
                subarea: subarea.to_string(),
                description: entry.description,
            });
        }
        node.entries.push(entry);
        Ok(())
    }

    pub fn area(&self, name: &str) -> Option<&Area> {
        self.areas.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn subarea_count(&self) -> usize {
        self.areas.values().map(|area| area.subareas.len()).sum()
    }

    pub fn entry_count(&self) -> usize {
        self.areas.values().map(Area::entry_count).sum()
    }

    /// Returns areas sorted case-insensitively by name.
    pub fn areas_sorted(&self) -> Vec<&Area> {
        let mut areas = self.areas.values().collect::<Vec<_>>();
        areas.sort_by(|a, b| compare_names(&a.name, &b.name));
        areas
    }
}

/// Top-level category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub name: String,
    subareas: BTreeMap<String, Subarea>,
}

impl Area {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subareas: BTreeMap::new(),
        }
    }

    pub fn subarea(&self, name: &str) -> Option<&Subarea> {
        self.subareas.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.subareas.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.subareas.values().map(|sub| sub.entries.len()).sum()
    }

    /// Returns subareas in the requested display order.
    pub fn subareas_sorted(&self, order: SubareaOrder) -> Vec<&Subarea> {
        let mut subareas = self.subareas.values().collect::<Vec<_>>();
        match order {
            SubareaOrder::Alphabetical => {
                subareas.sort_by(|a, b| compare_names(&a.name, &b.name));
            }
            SubareaOrder::Compact => {
                subareas.sort_by(|a, b| {
                    a.entries
                        .len()
                        .cmp(&b.entries.len())
                        .then_with(|| compare_names(&a.name, &b.name))
                });
            }
        }
        subareas
    }
}

/// Second-level category holding entries in merge order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subarea {
    pub name: String,
    entries: Vec<Entry>,
    #[serde(skip)]
    descriptions: BTreeSet<String>,
}

impl Subarea {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
            descriptions: BTreeSet::new(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn contains(&self, description: &str) -> bool {
        self.descriptions.contains(description)
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::{SubareaOrder, Taxonomy};
    use crate::model::entry::Entry;

    #[test]
    fn insert_rejects_duplicate_description_and_keeps_first() {
        let mut taxonomy = Taxonomy::new();
        taxonomy
            .insert_entry("AI", "Papers", Entry::new("Causal", "http://x"))
            .expect("first insert should succeed");
        let err = taxonomy
            .insert_entry("AI", "Papers", Entry::new("Causal", "http://y"))
            .expect_err("duplicate should fail");
        assert_eq!(err.description, "Causal");

        let sub = taxonomy.area("AI").unwrap().subarea("Papers").unwrap();
        assert_eq!(sub.entries(), &[Entry::new("Causal", "http://x")]);
    }

    #[test]
    fn same_description_is_allowed_under_different_subareas() {
        let mut taxonomy = Taxonomy::new();
        taxonomy
            .insert_entry("AI", "Papers", Entry::new("Intro", "http://a"))
            .unwrap();
        taxonomy
            .insert_entry("AI", "Talks", Entry::new("Intro", "http://b"))
            .unwrap();
        assert_eq!(taxonomy.entry_count(), 2);
        assert_eq!(taxonomy.subarea_count(), 2);
    }

    #[test]
    fn areas_sort_case_insensitively() {
        let mut taxonomy = Taxonomy::new();
        for name in ["beta", "AWS", "Alpha", "ai"] {
            taxonomy.ensure_area(name);
        }
        let names = taxonomy
            .areas_sorted()
            .into_iter()
            .map(|area| area.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["ai", "Alpha", "AWS", "beta"]);
    }

    #[test]
    fn compact_order_puts_short_subareas_first_with_name_ties() {
        let mut taxonomy = Taxonomy::new();
        taxonomy
            .insert_entry("AI", "Zeta", Entry::new("z1", "u"))
            .unwrap();
        taxonomy
            .insert_entry("AI", "Long", Entry::new("l1", "u"))
            .unwrap();
        taxonomy
            .insert_entry("AI", "Long", Entry::new("l2", "u"))
            .unwrap();
        taxonomy
            .insert_entry("AI", "alpha", Entry::new("a1", "u"))
            .unwrap();

        let area = taxonomy.area("AI").unwrap();
        let compact = area
            .subareas_sorted(SubareaOrder::Compact)
            .into_iter()
            .map(|sub| sub.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(compact, vec!["alpha", "Zeta", "Long"]);

        let alphabetical = area
            .subareas_sorted(SubareaOrder::Alphabetical)
            .into_iter()
            .map(|sub| sub.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(alphabetical, vec!["alpha", "Long", "Zeta"]);
    }
}
