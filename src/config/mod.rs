pub mod archive;
pub mod convert;

pub use archive::ArchiveConfig;
pub use convert::ConvertConfig;
