use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::WriteError;

/// Replace the contents of `dest` with `data`.
///
/// The data goes to a temporary file next to `dest` first, which is then
/// renamed over it, so a failure never leaves a partial file behind. The
/// result keeps the permissions of `dest`, or takes those of `template` when
/// `dest` does not exist yet.
pub fn write_file_atomically(dest: &Path, data: &[u8], template: &Path) -> Result<(), WriteError> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(dest)
        .or_else(|_| fs::metadata(template))
        .map(|meta| meta.permissions())
        .ok();

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    if let Some(permissions) = permissions {
        temp.as_file().set_permissions(permissions)?;
    }
    temp.as_file().sync_all()?;
    debug!(
        "Moving {} into place at {}",
        temp.path().display(),
        dest.display()
    );
    temp.persist(dest)?;
    Ok(())
}
