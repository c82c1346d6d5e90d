use crate::grid::domain::{FlattenedRecord, Predicate, StructuredQuery};
use crate::shared::Result;
use async_trait::async_trait;

/// RecordSource port for reading flattened scan records
///
/// This port abstracts the storage and query engine holding the dataset.
/// Implementations interpret the typed `Predicate` tree themselves.
///
/// # Async Support
/// Both reads are async so a redraw can issue them concurrently.
/// Implementations must be `Send + Sync` to be shared between requests.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Returns the page of records selected by the query
    ///
    /// # Arguments
    /// * `query` - Filter, ordering and page window
    ///
    /// # Returns
    /// At most `query.limit()` records, starting at the `query.offset()`-th
    /// match under the query's ordering. An offset past the last match
    /// yields an empty page, not an error.
    ///
    /// # Errors
    /// Returns an error if the source is unavailable or the read fails
    async fn find_all(&self, query: &StructuredQuery) -> Result<Vec<FlattenedRecord>>;

    /// Counts the records matching `predicate`; `None` counts every record
    ///
    /// # Errors
    /// Returns an error if the source is unavailable or the read fails
    async fn count(&self, predicate: Option<&Predicate>) -> Result<u64>;
}
