//! Static HTML rendering of a taxonomy.
//!
//! # Responsibility
//! - Produce one self-contained document (inline CSS, no external assets).
//! - Escape every user-supplied string and URL before embedding.
//!
//! # Invariants
//! - Rendering is total: any taxonomy, including an empty one, renders.
//! - Output depends only on the taxonomy, the color function and options.

pub mod escape;
pub mod html;
pub mod slug;
