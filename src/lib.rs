//! # Rowscan - runtime column-to-field mapping
//!
//! Rowscan joins the ordered, named columns of a row-shaped data source
//! against the mapping tags declared on a destination struct, then delegates
//! the actual value transfer back to the source. No per-type mapping code:
//! declare the tags once, scan any source that speaks [`RowSource`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  RowSource  │────▶│ StructScanner │────▶│   FieldSet   │────▶│ RowSource   │
//! │  .columns() │     │  (join order) │     │ (tag lookup) │     │ .scan(tgts) │
//! └─────────────┘     └───────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rowscan::{tag_mapped, sources::memory::MemoryRows, StructScanner};
//! use serde_json::json;
//!
//! #[derive(Default)]
//! struct Entity {
//!     id: i64,
//!     name: String,
//! }
//!
//! tag_mapped! {
//!     Entity {
//!         id => "id",
//!         name => "name",
//!     }
//! }
//!
//! let rows = MemoryRows::new(["id", "name"], vec![vec![json!(1), json!("Alice")]]);
//! let mut scanner = StructScanner::new(rows);
//! scanner.source_mut().advance();
//!
//! let mut entity = Entity::default();
//! scanner.scan(&mut entity).unwrap();
//! assert_eq!(entity.name, "Alice");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types of the shipped sources
//! - [`record`] - Destination records, mapping tags, writable targets
//! - [`resolve`] - Tag-to-field resolution
//! - [`scan`] - The scan orchestrator
//! - [`source`] - The data-source capability
//! - [`value`] - JSON value assignment onto targets
//! - [`sources`] - Shipped sources (in-memory, CSV)

// Core modules
pub mod error;
pub mod record;
pub mod resolve;
pub mod scan;
pub mod source;

// Value assignment
pub mod value;

// Shipped sources
pub mod sources;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{AssignError, CsvSourceError, MemorySourceError};

// =============================================================================
// Re-exports - Records & Targets
// =============================================================================

pub use record::{ScanTarget, TagMapped, TaggedField};

// =============================================================================
// Re-exports - Resolution
// =============================================================================

pub use resolve::FieldSet;

// =============================================================================
// Re-exports - Scanning
// =============================================================================

pub use scan::StructScanner;
pub use source::RowSource;

// =============================================================================
// Re-exports - Sources
// =============================================================================

pub use sources::csv::CsvRows;
pub use sources::memory::MemoryRows;
