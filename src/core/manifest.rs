use crate::utils::error::Result;
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

/// Rewrites the manifest's icon field from `from` to `to`, matching the
/// exact literal `"icon": "<from>"` only. A missing manifest or a
/// reference written in any other form is left untouched. Returns whether
/// a rewrite happened.
pub fn update_icon_reference(manifest: &Path, from: &Path, to: &Path) -> Result<bool> {
    if !manifest.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(manifest)?;
    let needle = format!("\"icon\": \"{}\"", from.display());
    if !content.contains(&needle) {
        tracing::debug!(
            "No icon reference to {} in {}",
            from.display(),
            manifest.display()
        );
        return Ok(false);
    }

    let replacement = format!("\"icon\": \"{}\"", to.display());
    fs::write(manifest, content.replace(&needle, &replacement))?;
    tracing::info!("Updated {} to reference {}", manifest.display(), to.display());
    Ok(true)
}
