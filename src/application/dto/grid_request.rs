use crate::grid::domain::{ColumnCatalog, SortDirection};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page length the widget uses when a request omits it
pub const DEFAULT_PAGE_LENGTH: i64 = 10;

fn default_page_length() -> i64 {
    DEFAULT_PAGE_LENGTH
}

fn enabled() -> bool {
    true
}

/// A search box value as sent by the widget
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub value: String,
    /// Sent by the widget but not honoured: terms are always matched literally
    #[serde(default)]
    pub regex: bool,
}

impl SearchRequest {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            regex: false,
        }
    }

    /// The term to filter on, or `None` when the box is empty
    pub fn term(&self) -> Option<&str> {
        if self.value.is_empty() {
            None
        } else {
            Some(&self.value)
        }
    }
}

/// One column as declared in the widget's request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub name: String,
    #[serde(default = "enabled")]
    pub searchable: bool,
    #[serde(default = "enabled")]
    pub orderable: bool,
    #[serde(default)]
    pub search: SearchRequest,
}

impl ColumnRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: None,
            name: name.into(),
            searchable: true,
            orderable: true,
            search: SearchRequest::default(),
        }
    }
}

/// One ordering instruction: a column position and a direction marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub column: usize,
    #[serde(default)]
    pub dir: String,
}

/// GridRequest - a redraw request from the grid widget
///
/// Mirrors the widget's server-side request body so it can be deserialized
/// directly. Field names follow the widget: `start` is the page offset,
/// `length` the page size (negative means "all rows") and `draw` the
/// correlation number echoed back in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRequest {
    pub draw: u64,
    #[serde(default)]
    pub start: u64,
    #[serde(default = "default_page_length")]
    pub length: i64,
    #[serde(default)]
    pub order: Vec<OrderRequest>,
    #[serde(default)]
    pub columns: Vec<ColumnRequest>,
    #[serde(default)]
    pub search: SearchRequest,
}

impl GridRequest {
    pub fn new(draw: u64, start: u64, length: i64) -> Self {
        Self {
            draw,
            start,
            length,
            order: Vec::new(),
            columns: Vec::new(),
            search: SearchRequest::default(),
        }
    }

    /// Request declaring every catalog column, as the widget does after init
    pub fn for_catalog(catalog: &ColumnCatalog, draw: u64, start: u64, length: i64) -> Self {
        let columns = catalog
            .columns()
            .iter()
            .map(|column| ColumnRequest {
                data: Some(Value::String(column.data_source())),
                ..ColumnRequest::new(column.name())
            })
            .collect();
        Self {
            columns,
            ..Self::new(draw, start, length)
        }
    }

    pub fn with_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = names.into_iter().map(ColumnRequest::new).collect();
        self
    }

    /// Replaces the ordering with a single column/direction pair
    pub fn ordered_by(mut self, column: usize, dir: &str) -> Self {
        self.order = vec![OrderRequest {
            column,
            dir: dir.to_string(),
        }];
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = SearchRequest::new(term);
        self
    }

    /// Sets a column's search box; a column not yet declared is appended
    pub fn with_column_search(mut self, name: &str, term: impl Into<String>) -> Self {
        let search = SearchRequest::new(term);
        match self.columns.iter_mut().find(|column| column.name == name) {
            Some(column) => column.search = search,
            None => self.columns.push(ColumnRequest {
                search,
                ..ColumnRequest::new(name)
            }),
        }
        self
    }

    pub fn draw_sequence_number(&self) -> u64 {
        self.draw
    }

    pub fn page_offset(&self) -> u64 {
        self.start
    }

    /// Page size, or `None` when the widget asked for every row
    pub fn page_length(&self) -> Option<u64> {
        u64::try_from(self.length).ok()
    }

    /// Position of the primary sort column, if the request orders at all
    pub fn sort_column_index(&self) -> Option<usize> {
        self.order.first().map(|order| order.column)
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.order
            .first()
            .map(|order| SortDirection::from_marker(&order.dir))
            .unwrap_or_default()
    }

    pub fn global_search_term(&self) -> Option<&str> {
        self.search.term()
    }
}
