/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (the grid
/// widget's transport, the CLI) use to interact with the application core.
pub mod grid_data_port;

pub use grid_data_port::GridDataPort;
