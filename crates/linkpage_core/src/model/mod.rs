//! Domain model for merged link collections.
//!
//! # Responsibility
//! - Define the single well-typed item shape (`Entry`) used after ingestion.
//! - Define the two-level category tree (`Taxonomy`) consumed by rendering.
//!
//! # Invariants
//! - Within one (area, subarea), description strings are unique.
//! - Display ordering is derived on read, never stored.

pub mod entry;
pub mod taxonomy;
