use crate::domain::model::ConversionRequest;
use crate::domain::ports::ConversionBackend;
use crate::utils::error::Result;

#[cfg(not(feature = "magick"))]
use crate::utils::error::ToolError;

const NAME: &str = "magick";

/// In-process ImageMagick binding. Requires the native ImageMagick library
/// at build time, so it ships behind an off-by-default feature.
pub struct MagickBackend;

impl ConversionBackend for MagickBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "magick")
    }

    #[cfg(feature = "magick")]
    fn convert(&self, request: &ConversionRequest) -> Result<()> {
        render(request)
    }

    #[cfg(not(feature = "magick"))]
    fn convert(&self, _request: &ConversionRequest) -> Result<()> {
        Err(ToolError::ConversionFailed {
            backend: NAME,
            detail: "ImageMagick support is not compiled in".to_string(),
        })
    }

    fn install_hint(&self) -> &'static str {
        "rebuild with `--features magick` (requires ImageMagick to be installed)"
    }
}

#[cfg(feature = "magick")]
fn render(request: &ConversionRequest) -> Result<()> {
    use crate::utils::error::ToolError;
    use magick_rust::{magick_wand_genesis, FilterType, MagickWand};
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(magick_wand_genesis);

    let fail = |detail: String| ToolError::ConversionFailed {
        backend: NAME,
        detail,
    };

    let size = request.size as usize;
    let mut wand = MagickWand::new();
    wand.read_image(&request.input.to_string_lossy())
        .map_err(|e| fail(e.to_string()))?;
    wand.resize_image(size, size, FilterType::LanczosFilter)
        .map_err(|e| fail(e.to_string()))?;
    wand.set_image_format("PNG")
        .map_err(|e| fail(e.to_string()))?;
    wand.write_image(&request.output.to_string_lossy())
        .map_err(|e| fail(e.to_string()))
}
