use crate::application::dto::{GridRequest, GridResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// GridDataPort - Inbound port answering grid redraws
///
/// The grid widget calls this once per redraw (paging, sorting, searching or
/// a programmatic reload). Calls are independent: overlapping redraws each
/// complete on their own and echo their own draw number, so the widget can
/// drop stale responses.
#[async_trait]
pub trait GridDataPort: Send + Sync {
    /// Answers one redraw request
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request references a sort column that does not exist
    /// - The request names a column the catalog does not know
    /// - Any of the record source reads fails or times out
    async fn respond(&self, request: GridRequest) -> Result<GridResponse>;
}
