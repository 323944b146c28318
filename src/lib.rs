pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{ArchiveConfig, ConvertConfig};
pub use core::convert::ConvertEngine;
pub use domain::model::{ArchiveOutcome, ConversionRequest, ConversionSummary};
pub use utils::error::{Result, ToolError};
