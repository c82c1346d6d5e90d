/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: record sources, output
/// presenters and the console reporter. The CLI in `main.rs` is the only
/// driving adapter.
pub mod outbound;
