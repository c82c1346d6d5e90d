//! scan-grid - server-side grid backend for code-scan results
//!
//! Answers the redraw requests of a paging, sortable, searchable grid widget
//! from a set of flattened per-file scan records, and describes the grid's
//! columns (titles, data paths, visibility presets) for its initialization.
//!
//! # Architecture
//!
//! The library follows hexagonal architecture:
//!
//! - **Domain Layer** (`grid`): the column catalog, query model, records and cell rendering
//! - **Application Layer** (`application`): request translation, use cases and read models
//! - **Ports** (`ports`): interface definitions for the record store and output
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scan_grid::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let source = Arc::new(JsonFileRecordSource::new(PathBuf::from("scan.json")));
//! let use_case = QueryGridUseCase::new(source);
//!
//! let request = GridRequest::for_catalog(ColumnCatalog::global(), 1, 0, 10)
//!     .ordered_by(0, "asc")
//!     .with_column_search("path", "lib");
//! let response = use_case.execute(request).await?;
//!
//! println!("{} of {} records match", response.records_filtered, response.records_total);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod grid;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonFileRecordSource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::memory::InMemoryRecordSource;
    pub use crate::application::dto::{GridRequest, GridResponse, RenderMode};
    pub use crate::application::read_models::{RenderedGridView, TableSetup};
    pub use crate::application::translation::QueryTranslator;
    pub use crate::application::use_cases::QueryGridUseCase;
    pub use crate::grid::domain::{
        ColumnCatalog, ColumnDescriptor, ColumnGroup, FlattenedRecord, Predicate, SortDirection,
        SortKey, StructuredQuery,
    };
    pub use crate::grid::services::CellFormatter;
    pub use crate::ports::inbound::GridDataPort;
    pub use crate::ports::outbound::{OutputPresenter, ProgressReporter, RecordSource};
    pub use crate::shared::Result;
}
