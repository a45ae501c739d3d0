use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}

/// 展開開頭的 `~` 為使用者家目錄
///
/// 只處理 `~` 與 `~/...`，`~user` 形式維持原樣
#[must_use]
pub fn expand_home(input: &str, home: &Path) -> PathBuf {
    if input == "~" {
        return home.to_path_buf();
    }
    match input.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/alice");

        assert_eq!(expand_home("~", home), PathBuf::from("/home/alice"));
        assert_eq!(
            expand_home("~/Pictures/Input", home),
            PathBuf::from("/home/alice/Pictures/Input")
        );
        assert_eq!(expand_home("/srv/photos", home), PathBuf::from("/srv/photos"));
        assert_eq!(expand_home("~bob/photos", home), PathBuf::from("~bob/photos"));
    }

    #[test]
    fn test_ensure_directory_exists_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());
        validate_directory_exists(&nested).unwrap();
    }

    #[test]
    fn test_validate_rejects_file_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(validate_directory_exists(&file).is_err());
        assert!(validate_directory_exists(&temp_dir.path().join("missing")).is_err());
    }
}
