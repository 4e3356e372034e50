//! Recursive template tree copying
//!
//! Walks the source tree depth-first (sorted by file name), recreating
//! directories with the source permission bits and streaming every file
//! byte for byte. The first failure aborts the copy; nothing already written
//! is removed.

use crate::error::AppError;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy the whole tree at `src` into `dst`, returning the relative paths of
/// the files written
pub fn copy_dir(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, AppError> {
    let metadata = fs::metadata(src).map_err(|e| {
        AppError::io("Failed to get source directory info", "getting info for", src, e)
    })?;

    create_dir(dst, &metadata)?;

    let mut copied_files = Vec::new();

    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            AppError::system(
                "Failed to read source directory",
                format!("Error reading directory {}: {}", path.display(), e),
            )
        })?;

        let relative = entry.path().strip_prefix(src).map_err(|e| {
            AppError::system(
                "Failed to resolve template path",
                format!("{} is outside {}: {}", entry.path().display(), src.display(), e),
            )
        })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            let metadata = entry.metadata().map_err(|e| {
                AppError::system(
                    "Failed to get source directory info",
                    format!("Error getting info for {}: {}", entry.path().display(), e),
                )
            })?;
            create_dir(&target, &metadata)?;
        } else {
            copy_file(entry.path(), &target)?;
            copied_files.push(relative.to_path_buf());
        }
    }

    Ok(copied_files)
}

/// Stream one file from `src` to `dst`, truncating any existing file
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64, AppError> {
    let mut source = File::open(src)
        .map_err(|e| AppError::io("Failed to open source file", "opening", src, e))?;

    let mut dest = File::create(dst)
        .map_err(|e| AppError::io("Failed to create destination file", "creating", dst, e))?;

    io::copy(&mut source, &mut dest).map_err(|e| {
        AppError::system(
            "Failed to copy file contents",
            format!("Error copying from {} to {}: {}", src.display(), dst.display(), e),
        )
    })
}

/// Create `path` (and missing parents) with the permission bits of `source`
fn create_dir(path: &Path, source: &fs::Metadata) -> Result<(), AppError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
        builder.mode(source.permissions().mode() & 0o7777);
    }
    #[cfg(not(unix))]
    let _ = source;

    builder.create(path).map_err(|e| {
        AppError::io(
            "Failed to create destination directory",
            "creating directory at",
            path,
            e,
        )
    })
}
