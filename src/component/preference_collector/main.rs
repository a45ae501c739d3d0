use crate::config::{Config, FileTypeFilter};
use crate::prompt::Prompter;
use crate::tools::{ensure_directory_exists, expand_home};
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

/// 使用者選擇的匯入設定，建立後不再變動
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPreferences {
    pub filter: FileTypeFilter,
    pub destination: PathBuf,
}

pub struct PreferenceCollector {
    default_destination: String,
    home: PathBuf,
}

impl PreferenceCollector {
    pub fn new(default_destination: impl Into<String>, home: impl Into<PathBuf>) -> Self {
        Self {
            default_destination: default_destination.into(),
            home: home.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let home = dirs::home_dir().context("無法取得使用者家目錄")?;
        let default_destination = config
            .settings
            .default_destination
            .clone()
            .unwrap_or_else(|| default_destination_for(&home));

        Ok(Self::new(default_destination, home))
    }

    #[must_use]
    pub fn default_destination(&self) -> &str {
        &self.default_destination
    }

    /// 依序詢問檔案類型與目的地
    ///
    /// 使用者取消檔案類型選單時回傳 `None`
    pub fn collect(&self, prompter: &mut dyn Prompter) -> Result<Option<ImportPreferences>> {
        let Some(filter) = self.prompt_filter(prompter)? else {
            return Ok(None);
        };

        let destination = self.prompt_destination(prompter)?;
        ensure_directory_exists(&destination)?;

        info!("匯入設定 - 類型: {filter}, 目的地: {}", destination.display());

        Ok(Some(ImportPreferences {
            filter,
            destination,
        }))
    }

    fn prompt_filter(&self, prompter: &mut dyn Prompter) -> Result<Option<FileTypeFilter>> {
        let filters = FileTypeFilter::all();
        let items: Vec<String> = filters.iter().map(ToString::to_string).collect();

        let selection = prompter.select("要匯入哪些檔案？", &items, filters.len() - 1)?;

        Ok(selection.and_then(|index| filters.get(index).copied()))
    }

    fn prompt_destination(&self, prompter: &mut dyn Prompter) -> Result<PathBuf> {
        let input = prompter.input_with_default("請輸入目的地資料夾", &self.default_destination)?;
        let input = input.trim();
        let chosen = if input.is_empty() {
            self.default_destination.as_str()
        } else {
            input
        };

        Ok(expand_home(chosen, &self.home))
    }
}

/// 預設目的地：<home>/Pictures/Input
#[must_use]
pub fn default_destination_for(home: &Path) -> String {
    home.join("Pictures").join("Input").display().to_string()
}
