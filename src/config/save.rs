use crate::config::load::settings_path;
use crate::config::types::UserSettings;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn save_settings(settings: &UserSettings) -> Result<()> {
    let path = settings_path().context("Failed to locate the user config directory")?;
    save_settings_to(settings, &path)
}

pub fn save_settings_to(settings: &UserSettings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;

    Ok(())
}

/// 記住最近一次使用的目的地，作為下次的預設值
/// 回傳是否有變更
pub fn remember_destination(settings: &mut UserSettings, destination: &str) -> bool {
    if settings.default_destination.as_deref() == Some(destination) {
        return false;
    }
    settings.default_destination = Some(destination.to_string());
    true
}
