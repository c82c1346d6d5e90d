/// Grid domain layer
///
/// Pure data and rules for the scan-results grid: the column catalog,
/// the typed query model, flattened records and cell formatting.
/// Nothing in here performs I/O.
pub mod domain;
pub mod services;
