/// Domain services - pure functions over domain types
pub mod cell_formatter;

pub use cell_formatter::CellFormatter;
