use crate::adapters::outbound::memory::InMemoryRecordSource;
use crate::grid::domain::{FlattenedRecord, Predicate, StructuredQuery};
use crate::ports::outbound::RecordSource;
use crate::shared::error::GridError;
use crate::shared::security::{inspect_input_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;

/// JsonFileRecordSource adapter - serves records from a scan export on disk
///
/// The file holds a JSON array of flattened records. It is loaded on the
/// first read and kept for every later redraw; concurrent first reads share
/// a single load. A failed load is not remembered, so the next redraw tries
/// again.
pub struct JsonFileRecordSource {
    path: PathBuf,
    loaded: OnceCell<InMemoryRecordSource>,
}

impl JsonFileRecordSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            loaded: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn records(&self) -> Result<&InMemoryRecordSource> {
        self.loaded
            .get_or_try_init(|| async {
                let path = self.path.clone();
                let records = tokio::task::spawn_blocking(move || load_records(&path))
                    .await
                    .context("Scan records loader task failed")??;

                tracing::info!(
                    path = %self.path.display(),
                    records = records.len(),
                    "loaded scan records"
                );
                Ok::<_, anyhow::Error>(InMemoryRecordSource::new(records))
            })
            .await
    }
}

/// Reads and parses a scan export after the usual file safety checks
fn load_records(path: &Path) -> Result<Vec<FlattenedRecord>> {
    if !path.exists() {
        return Err(GridError::RecordsFileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    inspect_input_file(path, "scan records", MAX_INPUT_FILE_SIZE)?;

    let content = fs::read_to_string(path).map_err(|e| GridError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let records: Vec<FlattenedRecord> =
        serde_json::from_str(&content).map_err(|e| GridError::RecordsParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    Ok(records)
}

#[async_trait]
impl RecordSource for JsonFileRecordSource {
    async fn find_all(&self, query: &StructuredQuery) -> Result<Vec<FlattenedRecord>> {
        Ok(self.records().await?.select(query))
    }

    async fn count(&self, predicate: Option<&Predicate>) -> Result<u64> {
        Ok(self.records().await?.count_matching(predicate))
    }
}
