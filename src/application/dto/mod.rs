/// Data Transfer Objects for application layer
///
/// DTOs carry the widget's request and response shapes across the
/// application boundary, keeping the domain layer free of wire concerns.
mod grid_request;
mod grid_response;
mod render_mode;

pub use grid_request::{
    ColumnRequest, GridRequest, OrderRequest, SearchRequest, DEFAULT_PAGE_LENGTH,
};
pub use grid_response::GridResponse;
pub use render_mode::RenderMode;
