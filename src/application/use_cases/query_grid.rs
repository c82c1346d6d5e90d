use crate::application::dto::{GridRequest, GridResponse};
use crate::application::read_models::RenderedGridView;
use crate::application::translation::QueryTranslator;
use crate::grid::domain::ColumnCatalog;
use crate::ports::inbound::GridDataPort;
use crate::ports::outbound::RecordSource;
use crate::shared::error::GridError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Read timeout applied when none is configured (seconds)
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// QueryGridUseCase - answers grid redraws from a record source
///
/// Each redraw translates the request, then issues three reads against the
/// record source concurrently:
/// 1. the page of matching records
/// 2. the count of every record
/// 3. the count of records matching the page's predicate
///
/// The response is assembled only once all three have completed. Any failed
/// read (or the optional timeout) fails the whole redraw.
///
/// # Type Parameters
/// * `RS` - RecordSource implementation
pub struct QueryGridUseCase<RS> {
    record_source: Arc<RS>,
    catalog: &'static ColumnCatalog,
    read_timeout: Option<Duration>,
}

impl<RS> QueryGridUseCase<RS>
where
    RS: RecordSource,
{
    /// Creates a use case over the global catalog with the default read timeout
    pub fn new(record_source: Arc<RS>) -> Self {
        Self {
            record_source,
            catalog: ColumnCatalog::global(),
            read_timeout: Some(Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS)),
        }
    }

    /// Overrides the read timeout; `None` waits indefinitely
    pub fn with_read_timeout(mut self, read_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn catalog(&self) -> &'static ColumnCatalog {
        self.catalog
    }

    /// Executes one redraw
    ///
    /// # Errors
    /// - Request translation fails (invalid sort index, unknown column)
    /// - Any of the three record source reads fails
    /// - The reads do not finish within the read timeout
    pub async fn execute(&self, request: GridRequest) -> Result<GridResponse> {
        let draw = request.draw_sequence_number();
        let query = QueryTranslator::new(self.catalog).translate(&request)?;

        let reads = async {
            futures::try_join!(
                async {
                    self.record_source
                        .find_all(&query)
                        .await
                        .context("Failed to read the requested page of records")
                },
                async {
                    self.record_source
                        .count(None)
                        .await
                        .context("Failed to count all records")
                },
                async {
                    self.record_source
                        .count(query.predicate())
                        .await
                        .context("Failed to count filtered records")
                },
            )
        };

        let (rows, records_total, records_filtered) = match self.read_timeout {
            Some(limit) => tokio::time::timeout(limit, reads)
                .await
                .map_err(|_| GridError::ReadTimeout {
                    draw,
                    millis: limit.as_millis(),
                })??,
            None => reads.await?,
        };

        tracing::debug!(
            draw,
            rows = rows.len(),
            records_total,
            records_filtered,
            "assembled grid response"
        );

        Ok(GridResponse::new(
            draw,
            rows,
            records_total,
            records_filtered,
        ))
    }

    /// Renders a response's rows into HTML cells in catalog order
    pub fn render(&self, response: &GridResponse) -> RenderedGridView {
        RenderedGridView::build(response, self.catalog)
    }
}

#[async_trait]
impl<RS> GridDataPort for QueryGridUseCase<RS>
where
    RS: RecordSource,
{
    async fn respond(&self, request: GridRequest) -> Result<GridResponse> {
        self.execute(request).await
    }
}
