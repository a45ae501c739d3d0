use crate::config::types::{Config, PhotoTypeTable, UserSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 編譯時嵌入的照片類型設定（不需要外部檔案）
const PHOTO_TYPE_TABLE_JSON: &str = include_str!("../data/photo_type_table.json");

const SETTINGS_DIR_NAME: &str = "photo_import";
const SETTINGS_FILE_NAME: &str = "settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        let photo_type_table = Self::load_embedded_photo_type_table()?;
        let settings = settings_path()
            .and_then(|path| load_settings_from(&path).ok())
            .unwrap_or_default();

        Ok(Self {
            photo_type_table,
            settings,
        })
    }

    /// 從編譯時嵌入的 JSON 載入照片類型表
    fn load_embedded_photo_type_table() -> Result<PhotoTypeTable> {
        serde_json::from_str(PHOTO_TYPE_TABLE_JSON).context("無法解析嵌入的照片類型設定")
    }
}

/// 使用者設定檔位置：<config_dir>/photo_import/settings.json
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

pub fn load_settings_from(path: &Path) -> Result<UserSettings> {
    if !path.exists() {
        return Ok(UserSettings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings from {}", path.display()))
}
