use async_trait::async_trait;
use scan_grid::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Which of the three redraw reads a mock should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingRead {
    Page,
    TotalCount,
    FilteredCount,
}

/// Mock RecordSource backed by the in-memory engine
///
/// Adds an optional per-read delay, an optional failing read and call counters.
pub struct MockRecordSource {
    inner: InMemoryRecordSource,
    delay: Option<Duration>,
    failing: Option<FailingRead>,
    find_all_calls: AtomicUsize,
    count_calls: AtomicUsize,
}

impl MockRecordSource {
    pub fn new(records: Vec<FlattenedRecord>) -> Self {
        Self {
            inner: InMemoryRecordSource::new(records),
            delay: None,
            failing: None,
            find_all_calls: AtomicUsize::new(0),
            count_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing_on(mut self, read: FailingRead) -> Self {
        self.failing = Some(read);
        self
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn find_all(&self, query: &StructuredQuery) -> Result<Vec<FlattenedRecord>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if self.failing == Some(FailingRead::Page) {
            anyhow::bail!("Mock page read failure");
        }
        self.inner.find_all(query).await
    }

    async fn count(&self, predicate: Option<&Predicate>) -> Result<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        let failing = match predicate {
            None => FailingRead::TotalCount,
            Some(_) => FailingRead::FilteredCount,
        };
        if self.failing == Some(failing) {
            anyhow::bail!("Mock count failure");
        }
        self.inner.count(predicate).await
    }
}
