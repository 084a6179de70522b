//! Exchange-rate data ingestion

pub mod parser;

pub use parser::{load_dataset, parse_lines, try_load_dataset, ObservationParser};
