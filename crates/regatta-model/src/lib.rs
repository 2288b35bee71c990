//! `regatta-model` defines the in-memory race-results data structures.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the upload/ingestion layer (CSV and workbook readers)
//! - the view pipeline (filtering, axis synthesis)
//! - a presentation adapter via `serde` (JSON-safe schema)
//!
//! A session holds exactly one [`Dataset`], built once per upload by
//! [`normalize`] and read-only afterwards; [`filter`] selects subsets
//! without ever mutating records.

mod filter;
pub mod import;
mod normalize;
mod record;
mod schema;
mod stage;
mod table;
mod value;

pub use filter::{filter, Selection, Selections};
pub use normalize::normalize;
pub use record::{Dataset, ResultRecord};
pub use schema::{canonical_column_name, DatasetKind, SchemaError};
pub use stage::{stage_rank, stage_sort_key, UNKNOWN_STAGE_RANK};
pub use table::RawTable;
pub use value::CellValue;
