//! On-disk cache of a parsed annotation directory.
//!
//! The cache file is one JSON document holding a serialized [`VocDataset`]:
//!
//! ```json
//! {"all_instances": [...], "label_counts": {"cat": 2}}
//! ```
//!
//! The file carries no record of which directory, image directory or label
//! filter produced it. Readers trust it verbatim.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::model::VocDataset;
use crate::error::VocLoadError;

/// Reads a cached dataset.
///
/// # Errors
/// Returns an error if the file cannot be opened or does not hold a
/// valid cache record.
pub fn read_cache(path: &Path) -> Result<VocDataset, VocLoadError> {
    let file = File::open(path).map_err(VocLoadError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| VocLoadError::CacheParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a dataset to the cache, replacing any existing file.
///
/// Missing parent directories are created first. The record is serialized
/// in full and written to a sibling `.tmp` file that is then renamed over
/// `path`, so a failed write never leaves a partial cache behind.
pub fn write_cache(path: &Path, dataset: &VocDataset) -> Result<(), VocLoadError> {
    let bytes = serde_json::to_vec(dataset).map_err(|source| VocLoadError::CacheWrite {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(VocLoadError::Io)?;
    }

    let tmp_path = temp_path_for(path);
    if let Err(err) = write_file(&tmp_path, &bytes).and_then(|()| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(VocLoadError::Io(err));
    }

    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("cache"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Reads a cache record from a JSON string.
pub fn from_cache_str(json: &str) -> Result<VocDataset, serde_json::Error> {
    serde_json::from_str(json)
}

/// Writes a cache record to a JSON string.
pub fn to_cache_string(dataset: &VocDataset) -> Result<String, serde_json::Error> {
    serde_json::to_string(dataset)
}
