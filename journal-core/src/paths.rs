use crate::error::{Result, StoreError};
use chrono::{DateTime, Local};
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

pub const ENTRY_EXTENSION: &str = "json";

pub fn year_folder_name(time: &DateTime<Local>) -> String {
    format!("{}", time.format("%Y"))
}

pub fn month_folder_name(time: &DateTime<Local>) -> String {
    format!("{}", time.format("%m"))
}

pub fn day_folder_name(time: &DateTime<Local>) -> String {
    format!("{}", time.format("%d"))
}

pub fn entry_file_name(time: &DateTime<Local>) -> String {
    format!("{}.{ENTRY_EXTENSION}", time.format("%Y%m%d-%H%M%S"))
}

pub fn year_dir(root: &Path, time: &DateTime<Local>) -> PathBuf {
    root.join(year_folder_name(time))
}

pub fn month_dir(root: &Path, time: &DateTime<Local>) -> PathBuf {
    year_dir(root, time).join(month_folder_name(time))
}

pub fn day_dir(root: &Path, time: &DateTime<Local>) -> PathBuf {
    month_dir(root, time).join(day_folder_name(time))
}

/// `{root}/YYYY/MM/DD/YYYYMMDD-HHMMSS.json`
pub fn entry_path(root: &Path, time: &DateTime<Local>) -> PathBuf {
    day_dir(root, time).join(entry_file_name(time))
}

/// Recursively lists every `.json` file under `path`.
///
/// Symlinked directories are not descended into; symlinked files are listed.
/// Any directory that cannot be read aborts the listing with [`StoreError::Scan`].
pub fn scan_dir_for_json_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut file_paths = Vec::new();
    let scan_err = |source| StoreError::Scan {
        path: path.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(path).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let file_type = entry.file_type().map_err(scan_err)?;
        let p = entry.path();

        if file_type.is_dir() {
            file_paths.extend(scan_dir_for_json_files(&p)?);
        } else if (file_type.is_file() || file_type.is_symlink()) && is_entry_file(&p) {
            file_paths.push(p);
        }
    }

    Ok(file_paths)
}

fn is_entry_file(p: &Path) -> bool {
    p.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext == ENTRY_EXTENSION)
        .unwrap_or(false)
}
