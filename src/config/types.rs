use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoTypeTable {
    #[serde(rename = "JPEG_FILE")]
    pub jpeg_file: Vec<String>,
    #[serde(rename = "RAW_FILE")]
    pub raw_file: Vec<String>,
    #[serde(rename = "CAMERA_DIRECTORY")]
    pub camera_directory: Vec<String>,
}

impl PhotoTypeTable {
    /// 篩選條件對應的副檔名集合（小寫，含前導點）
    #[must_use]
    pub fn extensions_for(&self, filter: FileTypeFilter) -> HashSet<String> {
        let jpeg = self.jpeg_file.iter();
        let raw = self.raw_file.iter();

        let selected: Vec<&String> = match filter {
            FileTypeFilter::JpegOnly => jpeg.collect(),
            FileTypeFilter::RawOnly => raw.collect(),
            FileTypeFilter::Both => jpeg.chain(raw).collect(),
        };

        selected.into_iter().map(|ext| ext.to_lowercase()).collect()
    }

    #[must_use]
    pub fn is_photo_file(&self, path: &Path) -> bool {
        has_extension_in(path, &self.extensions_for(FileTypeFilter::Both))
    }
}

/// 副檔名比對（不分大小寫）
#[must_use]
pub fn has_extension_in(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&format!(".{}", ext.to_lowercase())))
}

/// 匯入的檔案類型篩選
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileTypeFilter {
    JpegOnly,
    RawOnly,
    Both,
}

impl FileTypeFilter {
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::JpegOnly, Self::RawOnly, Self::Both]
    }
}

impl fmt::Display for FileTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JpegOnly => write!(f, "僅 JPEG"),
            Self::RawOnly => write!(f, "僅 RAW"),
            Self::Both => write!(f, "JPEG 與 RAW"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// 目的地預設值，未設定時使用 ~/Pictures/Input
    #[serde(default)]
    pub default_destination: Option<String>,
    /// 覆寫預設的掛載根目錄清單
    #[serde(default)]
    pub mount_roots: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub photo_type_table: PhotoTypeTable,
    pub settings: UserSettings,
}
