use crate::domain::model::ConversionRequest;
use crate::domain::ports::ConversionBackend;
use crate::utils::error::Result;

#[cfg(not(feature = "resvg"))]
use crate::utils::error::ToolError;

const NAME: &str = "resvg";

/// In-process SVG rasterizer. Renders onto a transparent pixmap, so alpha
/// is preserved without extra flags.
pub struct ResvgBackend;

impl ConversionBackend for ResvgBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "resvg")
    }

    #[cfg(feature = "resvg")]
    fn convert(&self, request: &ConversionRequest) -> Result<()> {
        render(request)
    }

    #[cfg(not(feature = "resvg"))]
    fn convert(&self, _request: &ConversionRequest) -> Result<()> {
        Err(ToolError::ConversionFailed {
            backend: NAME,
            detail: "resvg support is not compiled in".to_string(),
        })
    }

    fn install_hint(&self) -> &'static str {
        "rebuild with the `resvg` cargo feature enabled (on by default)"
    }
}

#[cfg(feature = "resvg")]
fn render(request: &ConversionRequest) -> Result<()> {
    use crate::utils::error::ToolError;
    use resvg::{tiny_skia, usvg};

    let fail = |detail: String| ToolError::ConversionFailed {
        backend: NAME,
        detail,
    };

    let data = std::fs::read(&request.input)?;
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &options).map_err(|e| fail(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(request.size, request.size)
        .ok_or_else(|| fail(format!("invalid pixmap size {}", request.size)))?;

    let tree_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        request.size as f32 / tree_size.width(),
        request.size as f32 / tree_size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(&request.output)
        .map_err(|e| fail(e.to_string()))
}
