//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs handed to the grid widget:
//! its init payload and pre-rendered pages.

pub mod rendered_grid;
pub mod table_setup;

pub use rendered_grid::RenderedGridView;
pub use table_setup::{ColumnDefinitionView, TableSetup};
