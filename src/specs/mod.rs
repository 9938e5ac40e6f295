// src/specs/mod.rs
//! # Table specs
//!
//! Per-table extraction and classification for the index page. Each spec
//! encodes *where the ground truth lives in its table* (which caption to
//! look for, which cell carries the name, which columns feed
//! classification) and turns rows into finished schema records.
//!
//! ## What lives here
//! - Caption constants the locator matches against.
//! - Column-index constants and name extraction per table shape.
//! - The classification policies themselves (fixed raw-tag override and
//!   the `empty` token for elements; catalogue tiers, value-text fallback
//!   and the row-merge rules for attributes).
//!
//! ## What does **not** live here
//! - Document navigation (`core::dom`); specs consume located tables.
//! - The override catalogue data (`catalogue`) and its cross-checks
//!   (`validate`).
//! - Output rendering (`lua`) and run orchestration (`runner`).
//!
//! ## Conventions & invariants
//! - Rows whose header cell carries no name token are grouping rows and
//!   are skipped; named rows that cannot be classified abort the run.
//! - Record order is document order, first encounter wins the slot.

pub mod attributes;
pub mod elements;
