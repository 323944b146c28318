use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Task file not found: {}", path.display())]
    TaskNotFound { path: PathBuf },

    #[error("Could not find unique archive filename for: {}", path.display())]
    ArchiveNameExhausted { path: PathBuf },

    #[error("SVG file not found: {}", path.display())]
    SvgNotFound { path: PathBuf },

    #[error("No suitable conversion tools found")]
    NoBackendAvailable,

    #[error("Conversion failed using {backend}: {detail}")]
    ConversionFailed {
        backend: &'static str,
        detail: String,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    pub fn recovery_suggestion(&self) -> String {
        match self {
            ToolError::TaskNotFound { .. } => {
                "Check the --task path; relative paths are resolved against --workspace".to_string()
            }
            ToolError::ArchiveNameExhausted { .. } => {
                "Remove stale copies from .vscode/tasks/archive/ and retry".to_string()
            }
            ToolError::SvgNotFound { .. } => {
                "Run with --help to see the expected arguments".to_string()
            }
            ToolError::NoBackendAvailable => {
                "Install one of the supported conversion tools".to_string()
            }
            ToolError::ConversionFailed { .. } => {
                "Check the backend diagnostic output above".to_string()
            }
            ToolError::InvalidConfigValue { .. } => {
                "Check the command line arguments".to_string()
            }
            ToolError::Io(_) => "Check filesystem permissions and paths".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
