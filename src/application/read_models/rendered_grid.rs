//! Grid response with every cell pre-rendered to display HTML

use crate::application::dto::GridResponse;
use crate::grid::domain::ColumnCatalog;
use crate::grid::services::CellFormatter;
use serde::Serialize;

/// A grid response whose rows are arrays of rendered cells in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedGridView {
    pub draw: u64,
    pub columns: Vec<String>,
    pub data: Vec<Vec<String>>,
    pub records_total: u64,
    pub records_filtered: u64,
}

impl RenderedGridView {
    /// Renders every record of `response` across the full catalog
    pub fn build(response: &GridResponse, catalog: &ColumnCatalog) -> Self {
        let columns = catalog.columns();
        let data = response
            .data
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| CellFormatter::render(column, record))
                    .collect()
            })
            .collect();

        Self {
            draw: response.draw,
            columns: columns.iter().map(|c| c.name().to_string()).collect(),
            data,
            records_total: response.records_total,
            records_filtered: response.records_filtered,
        }
    }
}
