use crate::core::backends;
use crate::domain::model::{ConversionRequest, ConversionSummary};
use crate::domain::ports::ConversionBackend;
use crate::utils::error::{Result, ToolError};
use std::fs;

/// Drives one conversion: selects the first available backend, invokes
/// exactly that one, and verifies the output file exists before reporting
/// success. A selected backend that fails is terminal.
pub struct ConvertEngine {
    backends: Vec<Box<dyn ConversionBackend>>,
}

impl ConvertEngine {
    pub fn new(backends: Vec<Box<dyn ConversionBackend>>) -> Self {
        Self { backends }
    }

    pub fn with_default_backends() -> Self {
        Self::new(backends::default_backends())
    }

    pub fn backends(&self) -> &[Box<dyn ConversionBackend>] {
        &self.backends
    }

    pub fn run(&self, request: &ConversionRequest) -> Result<ConversionSummary> {
        if !request.input.exists() {
            return Err(ToolError::SvgNotFound {
                path: request.input.clone(),
            });
        }

        if let Some(parent) = request.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let backend = self.select_backend()?;
        tracing::info!(
            "Converting using {}: {} -> {} ({}x{})",
            backend.name(),
            request.input.display(),
            request.output.display(),
            request.size,
            request.size
        );

        backend.convert(request)?;

        if !request.output.exists() {
            return Err(ToolError::ConversionFailed {
                backend: backend.name(),
                detail: "backend reported success but produced no output file".to_string(),
            });
        }

        let bytes = fs::metadata(&request.output)?.len();
        Ok(ConversionSummary {
            backend: backend.name(),
            output: request.output.clone(),
            bytes,
            size: request.size,
        })
    }

    fn select_backend(&self) -> Result<&dyn ConversionBackend> {
        for backend in &self.backends {
            if backend.is_available() {
                return Ok(backend.as_ref());
            }
            tracing::debug!("Backend {} is not available", backend.name());
        }
        Err(ToolError::NoBackendAvailable)
    }
}
