/// Use cases module containing application business logic orchestration
mod query_grid;

pub use query_grid::{QueryGridUseCase, DEFAULT_READ_TIMEOUT_SECS};
