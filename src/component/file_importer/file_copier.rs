use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// 目的地已有大小完全相同（且非零）的檔案
///
/// 只比較大小，不比較內容
#[must_use]
pub fn is_same_size_duplicate(source_size: u64, target: &Path) -> bool {
    source_size > 0
        && fs::metadata(target)
            .is_ok_and(|metadata| metadata.is_file() && metadata.len() == source_size)
}

/// 複製檔案，目的地已存在時覆寫
///
/// 先寫入同資料夾的暫存檔再改名，失敗時目的地維持原狀
pub fn copy_file_replacing(source: &Path, target: &Path) -> Result<()> {
    let partial = partial_path(target);

    let copied = fs::copy(source, &partial)
        .with_context(|| format!("複製檔案失敗: {} -> {}", source.display(), partial.display()))
        .and_then(|_| {
            fs::rename(&partial, target).with_context(|| {
                format!("重新命名失敗: {} -> {}", partial.display(), target.display())
            })
        });

    if copied.is_err() {
        let _ = fs::remove_file(&partial);
    }

    copied
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(target.file_name().unwrap_or_default());
    name.push(".part");
    target.with_file_name(name)
}
