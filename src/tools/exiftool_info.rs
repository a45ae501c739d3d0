use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::Command;

const EXIFTOOL: &str = "exiftool";

/// 日期輸出格式，只取年與月
const DATE_FORMAT: &str = "%Y-%m";

/// 使用 exiftool 讀取單一日期標籤，並以 `%Y-%m` 格式輸出
///
/// 標籤不存在時 exiftool 仍會成功結束但輸出為空，此時回傳錯誤
pub fn read_date_tag(path: &Path, tag: &str) -> Result<String> {
    let output = Command::new(EXIFTOOL)
        .args(["-s3", "-d", DATE_FORMAT])
        .arg(format!("-{tag}"))
        .arg(path)
        .output()
        .with_context(|| format!("無法執行 exiftool: {}", path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("exiftool 執行失敗: {}", stderr.trim());
    }

    let value = first_line(&String::from_utf8_lossy(&output.stdout));
    if value.is_empty() {
        bail!("找不到標籤 {tag}: {}", path.display());
    }

    Ok(value)
}

/// 檢查 exiftool 是否可用，回傳版本字串
pub fn exiftool_version() -> Result<String> {
    let output = Command::new(EXIFTOOL)
        .arg("-ver")
        .output()
        .context("找不到 exiftool，請先安裝 (例如 apt install libimage-exiftool-perl)")?;

    if !output.status.success() {
        bail!("exiftool 無法正常執行");
    }

    Ok(first_line(&String::from_utf8_lossy(&output.stdout)))
}

fn first_line(stdout: &str) -> String {
    stdout.lines().next().unwrap_or_default().trim().to_string()
}
