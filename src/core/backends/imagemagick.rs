use crate::domain::model::ConversionRequest;
use crate::domain::ports::ConversionBackend;
use crate::utils::error::{Result, ToolError};
use std::process::{Command, Stdio};

const NAME: &str = "imagemagick";
const BINARY: &str = "convert";

/// External ImageMagick `convert` tool, invoked with a transparent
/// background so alpha survives rasterization.
pub struct ImageMagickBackend;

impl ConversionBackend for ImageMagickBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        Command::new(BINARY)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn convert(&self, request: &ConversionRequest) -> Result<()> {
        let geometry = format!("{}x{}", request.size, request.size);
        let output = Command::new(BINARY)
            .args(["-background", "transparent", "-size", geometry.as_str()])
            .arg(&request.input)
            .arg(&request.output)
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
        "brew install imagemagick (macOS) or apt-get install imagemagick (Ubuntu)"
    }
}
