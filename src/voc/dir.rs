//! Directory-level loading with an optional parse cache.

use std::fs;
use std::path::{Path, PathBuf};

use super::cache::{read_cache, write_cache};
use super::io_voc_xml::parse_annotation_file;
use super::labels::LabelFilter;
use super::model::VocDataset;
use crate::error::VocLoadError;

/// An annotation file that failed to parse and was left out of a scan.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: VocLoadError,
}

/// Result of scanning an annotation directory without the cache.
#[derive(Debug, Default)]
pub struct DirectoryScan {
    pub dataset: VocDataset,
    pub skipped: Vec<SkippedFile>,
}

/// Parse every annotation file in `ann_dir`, consulting the cache first.
///
/// If `cache_path` is given and a file exists there, its contents are
/// returned as-is. Otherwise the directory is scanned with
/// [`scan_annotation_dir`] and, when `cache_path` is given, the result is
/// written there before returning.
///
/// # Known limitation
/// The cache is keyed only by whether `cache_path` exists. It is not
/// invalidated when `ann_dir`, `image_dir` or `labels` change, nor when
/// files in the directory are added, edited or removed. Callers that vary
/// any of these must use distinct cache paths or delete the stale file.
///
/// # Errors
/// Fails if `ann_dir` cannot be listed, or if the cache cannot be read,
/// decoded or written. Individual annotation files that fail to parse are
/// logged and skipped.
pub fn parse_annotation_directory(
    ann_dir: &Path,
    image_dir: &Path,
    cache_path: Option<&Path>,
    labels: &LabelFilter,
) -> Result<VocDataset, VocLoadError> {
    if let Some(cache_path) = cache_path {
        if cache_path.exists() {
            log::debug!("loading annotations from cache {}", cache_path.display());
            return read_cache(cache_path);
        }
    }

    let scan = scan_annotation_dir(ann_dir, image_dir, labels)?;

    if let Some(cache_path) = cache_path {
        log::debug!("writing annotation cache {}", cache_path.display());
        write_cache(cache_path, &scan.dataset)?;
    }

    Ok(scan.dataset)
}

/// Parse every regular file directly inside `ann_dir`, in file-name order.
///
/// Subdirectories and other non-regular entries are ignored. A file that
/// fails to parse is logged at warn level, recorded in
/// [`DirectoryScan::skipped`] and does not stop the scan.
pub fn scan_annotation_dir(
    ann_dir: &Path,
    image_dir: &Path,
    labels: &LabelFilter,
) -> Result<DirectoryScan, VocLoadError> {
    let mut scan = DirectoryScan::default();

    for path in collect_annotation_files(ann_dir)? {
        match parse_annotation_file(&path, image_dir, labels) {
            Ok(parsed) => scan.dataset.extend(parsed),
            Err(error) => {
                log::warn!(
                    "Failed to parse annotation file {}: {}",
                    path.display(),
                    error
                );
                scan.skipped.push(SkippedFile { path, error });
            }
        }
    }

    log::info!(
        "parsed {} instance(s) from {} ({} file(s) skipped)",
        scan.dataset.instances.len(),
        ann_dir.display(),
        scan.skipped.len()
    );

    Ok(scan)
}

fn collect_annotation_files(dir: &Path) -> Result<Vec<PathBuf>, VocLoadError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).map_err(VocLoadError::Io)? {
        let entry = entry.map_err(VocLoadError::Io)?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|left, right| left.file_name().cmp(&right.file_name()));
    Ok(files)
}
