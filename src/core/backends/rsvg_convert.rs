use crate::domain::model::ConversionRequest;
use crate::domain::ports::ConversionBackend;
use crate::utils::error::{Result, ToolError};
use std::process::{Command, Stdio};

const NAME: &str = "rsvg-convert";

/// External librsvg command-line rasterizer. Preserves transparency by
/// default.
pub struct RsvgConvertBackend;

impl ConversionBackend for RsvgConvertBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        Command::new(NAME)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn convert(&self, request: &ConversionRequest) -> Result<()> {
        let size = request.size.to_string();
        let output = Command::new(NAME)
            .args(["--width", size.as_str(), "--height", size.as_str(), "--output"])
            .arg(&request.output)
            .arg(&request.input)
            .output()
            .map_err(|e| ToolError::ConversionFailed {
                backend: NAME,
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ToolError::ConversionFailed {
                backend: NAME,
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    fn install_hint(&self) -> &'static str {
        "brew install librsvg (macOS) or apt-get install librsvg2-bin (Ubuntu)"
    }
}
