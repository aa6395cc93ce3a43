//! Content volume reset

use crate::error::FixtureError;
use functest_config::VolumeConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Delete every entry inside the code and SPDX directories, keeping the
/// directories themselves.
pub fn reset_volume(volumes: &VolumeConfig) -> Result<(), FixtureError> {
    clear_dir(&volumes.code_dir)?;
    clear_dir(&volumes.spdx_dir)?;
    Ok(())
}

fn clear_dir(dir: &Path) -> Result<(), FixtureError> {
    let wrap = |source| FixtureError::Volume {
        dir: dir.to_path_buf(),
        source,
    };

    let mut removed = 0usize;
    for entry in fs::read_dir(dir).map_err(wrap)? {
        let entry = entry.map_err(wrap)?;
        let path = entry.path();
        if entry.file_type().map_err(wrap)?.is_dir() {
            fs::remove_dir_all(&path).map_err(wrap)?;
        } else {
            fs::remove_file(&path).map_err(wrap)?;
        }
        removed += 1;
    }
    debug!("cleared {} entries from {}", removed, dir.display());
    Ok(())
}
