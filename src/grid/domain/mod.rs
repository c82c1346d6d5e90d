pub mod catalog;
pub mod column;
pub mod query;
pub mod record;

pub use catalog::{ColumnCatalog, VisibilityPreset};
pub use column::{CellRenderer, ColumnCategory, ColumnDescriptor, ColumnGroup};
pub use query::{Predicate, SortDirection, SortKey, StructuredQuery};
pub use record::FlattenedRecord;
