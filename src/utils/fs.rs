use crate::utils::error::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Moves a file. Rename when possible; on a cross-device error, copy, then
/// verify, then delete the source. Any other error propagates unchanged.
pub fn move_file(source: &Path, dest: &Path) -> Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!(
                "Cross-device rename, copying {} -> {}",
                source.display(),
                dest.display()
            );
            fs::copy(source, dest)?;
            if !dest.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("Copy produced no file at {}", dest.display()),
                )
                .into());
            }
            fs::remove_file(source)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
