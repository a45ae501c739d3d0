use crate::config::has_extension_in;
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PhotoFileInfo {
    pub path: PathBuf,
    pub size: u64,
}

/// 遞迴掃描目錄下符合副檔名的檔案，保留檔案系統列舉順序（不排序）
pub fn scan_photo_files(
    directory: &Path,
    extensions: &HashSet<String>,
) -> Result<Vec<PhotoFileInfo>> {
    let files = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_extension_in(entry.path(), extensions))
        .filter_map(|entry| {
            let metadata = entry.metadata().ok()?;
            Some(PhotoFileInfo {
                path: entry.into_path(),
                size: metadata.len(),
            })
        })
        .collect();

    Ok(files)
}

/// 在 `max_depth` 層內是否存在至少一個符合副檔名的檔案
#[must_use]
pub fn contains_photo_file(
    directory: &Path,
    extensions: &HashSet<String>,
    max_depth: usize,
) -> bool {
    WalkDir::new(directory)
        .follow_links(false)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .any(|entry| entry.file_type().is_file() && has_extension_in(entry.path(), extensions))
}
