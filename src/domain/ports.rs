use crate::domain::model::ConversionRequest;
use crate::utils::error::Result;

/// A conversion mechanism (library or external executable) capable of
/// rasterizing a vector image to a fixed pixel size.
pub trait ConversionBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Non-fatal probe; an unavailable backend is passed over in priority order.
    fn is_available(&self) -> bool;

    fn convert(&self, request: &ConversionRequest) -> Result<()>;

    /// Installation guidance, shown when no backend is available.
    fn install_hint(&self) -> &'static str;
}
