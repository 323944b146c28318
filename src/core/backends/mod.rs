pub mod imagemagick;
pub mod magick;
pub mod resvg;
pub mod rsvg_convert;

use crate::domain::ports::ConversionBackend;

/// All known backends in fixed priority order: in-process libraries first,
/// then external command-line tools. Compiled-out library backends stay in
/// the list so their install hints can be reported, but never probe as
/// available.
pub fn default_backends() -> Vec<Box<dyn ConversionBackend>> {
    vec![
        Box::new(resvg::ResvgBackend),
        Box::new(magick::MagickBackend),
        Box::new(rsvg_convert::RsvgConvertBackend),
        Box::new(imagemagick::ImageMagickBackend),
    ]
}
