use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SeederError};

/// Write the generated script to `path`, replacing any prior content.
///
/// The script is written to a sibling `.tmp` file first and renamed into
/// place, so a failed run never leaves a truncated script at the final path.
/// Filesystem errors (missing parent directory, permissions) propagate.
pub fn write_script(path: &Path, contents: &str) -> Result<()> {
    let tmp = tmp_path(path);

    fs::write(&tmp, contents).map_err(|source| SeederError::Write {
        path: tmp.clone(),
        source,
    })?;

    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        SeederError::Write {
            path: path.to_owned(),
            source,
        }
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote seed script");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
