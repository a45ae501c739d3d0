use super::capture_month::CaptureMonth;
use crate::tools::read_date_tag;
use chrono::{DateTime, Local};
use log::debug;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// 拍攝時間標籤
pub const CAPTURE_DATE_TAG: &str = "DateTimeOriginal";
/// 中繼資料中的修改時間標籤
pub const MODIFY_DATE_TAG: &str = "ModifyDate";

/// 讀取嵌入式中繼資料的日期標籤
pub trait MetadataReader {
    /// 回傳格式化後的日期字串，標籤不存在或讀取失敗時回傳 `None`
    fn read_date_tag(&self, path: &Path, tag: &str) -> Option<String>;
}

/// 透過 exiftool 讀取中繼資料
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifTool;

impl MetadataReader for ExifTool {
    fn read_date_tag(&self, path: &Path, tag: &str) -> Option<String> {
        match read_date_tag(path, tag) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("讀取 {tag} 失敗: {e}");
                None
            }
        }
    }
}

/// 日期來源，依序嘗試直到取得可用的年月
pub trait DateSource {
    fn name(&self) -> &str;
    fn resolve(&self, path: &Path) -> Option<CaptureMonth>;
}

/// 從中繼資料的指定標籤取得年月
pub struct MetadataTagSource {
    reader: Arc<dyn MetadataReader>,
    tag: &'static str,
}

impl MetadataTagSource {
    pub fn new(reader: Arc<dyn MetadataReader>, tag: &'static str) -> Self {
        Self { reader, tag }
    }
}

impl DateSource for MetadataTagSource {
    fn name(&self) -> &str {
        self.tag
    }

    fn resolve(&self, path: &Path) -> Option<CaptureMonth> {
        let value = self.reader.read_date_tag(path, self.tag)?;
        CaptureMonth::parse(&value)
    }
}

/// 檔案系統的修改時間
#[derive(Debug, Default, Clone, Copy)]
pub struct FileModifiedSource;

impl DateSource for FileModifiedSource {
    fn name(&self) -> &str {
        "mtime"
    }

    fn resolve(&self, path: &Path) -> Option<CaptureMonth> {
        let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
        let local: DateTime<Local> = modified.into();
        Some(CaptureMonth::from_date(&local))
    }
}

/// 目前系統日期，最後的備援
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentDateSource;

impl DateSource for CurrentDateSource {
    fn name(&self) -> &str {
        "today"
    }

    fn resolve(&self, _path: &Path) -> Option<CaptureMonth> {
        Some(current_month())
    }
}

#[must_use]
pub fn current_month() -> CaptureMonth {
    CaptureMonth::from_date(&Local::now())
}
