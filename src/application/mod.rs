//! Application layer - Use cases and orchestration

pub mod convert;
pub mod init;

pub use convert::{ConversionReport, ConvertService};
