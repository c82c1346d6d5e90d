//! Widget initialization payload
//!
//! Everything the grid widget needs once, before its first redraw: the
//! column definitions and the presets behind its column-visibility menu.

use crate::grid::domain::{ColumnCatalog, ColumnDescriptor, ColumnGroup, VisibilityPreset};
use serde::Serialize;

/// Columns pinned to the left edge while scrolling horizontally (the path)
pub const FIXED_LEFT_COLUMNS: usize = 1;

/// A column definition as the widget expects it at init
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinitionView {
    pub name: String,
    pub title: String,
    /// Field path, or `field[separator]` for array columns the widget joins itself
    pub data: String,
}

impl From<&ColumnDescriptor> for ColumnDefinitionView {
    fn from(column: &ColumnDescriptor) -> Self {
        Self {
            name: column.name().to_string(),
            title: column.title().to_string(),
            data: column.data_source(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSetup {
    pub columns: Vec<ColumnDefinitionView>,
    pub visibility_presets: Vec<VisibilityPreset>,
    pub fixed_left_columns: usize,
}

impl TableSetup {
    pub fn build(catalog: &ColumnCatalog) -> Self {
        Self {
            columns: Self::column_definitions(catalog, None),
            visibility_presets: catalog.visibility_presets(),
            fixed_left_columns: FIXED_LEFT_COLUMNS,
        }
    }

    /// Column definitions for the whole catalog or for one group
    pub fn column_definitions(
        catalog: &ColumnCatalog,
        group: Option<ColumnGroup>,
    ) -> Vec<ColumnDefinitionView> {
        match group {
            Some(group) => catalog.subset(group).iter().map(Into::into).collect(),
            None => catalog.columns().iter().map(Into::into).collect(),
        }
    }
}
