use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single rasterization job: square output of `size` x `size` pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub size: u32,
}

#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub backend: &'static str,
    pub output: PathBuf,
    pub bytes: u64,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    Archived { from: PathBuf, to: PathBuf },
    Skipped { path: PathBuf },
}
