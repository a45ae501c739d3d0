use anyhow::{Context, Result, bail};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const PROC_MOUNTS: &str = "/proc/mounts";

/// 掛載表中的一筆紀錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountEntry {
    pub device: String,
    pub mount_point: PathBuf,
}

/// 解析 /proc/mounts 格式的內容
#[must_use]
pub fn parse_mount_table(content: &str) -> Vec<MountEntry> {
    content
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let device = fields.next()?;
            let mount_point = fields.next()?;
            Some(MountEntry {
                device: decode_mount_field(device),
                mount_point: PathBuf::from(decode_mount_field(mount_point)),
            })
        })
        .collect()
}

/// 還原掛載表中的八進位跳脫字元（例如 `\040` 代表空白）
fn decode_mount_field(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() {
            let digits = &bytes[i + 1..i + 4];
            if digits.iter().all(|b| (b'0'..=b'7').contains(b)) {
                let value = digits.iter().fold(0u32, |acc, b| acc * 8 + u32::from(b - b'0'));
                if let Ok(byte) = u8::try_from(value) {
                    decoded.push(byte);
                    i += 4;
                    continue;
                }
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

/// 在掛載表中尋找掛載點對應的裝置
///
/// 同一掛載點重複掛載時，以最後一筆為準
#[must_use]
pub fn find_device(entries: &[MountEntry], mount_point: &Path) -> Option<String> {
    entries
        .iter()
        .rev()
        .find(|entry| entry.mount_point == mount_point)
        .map(|entry| entry.device.clone())
}

/// 透過系統掛載表解析掛載點對應的裝置
pub fn resolve_device(mount_point: &Path) -> Option<String> {
    match fs::read_to_string(PROC_MOUNTS) {
        Ok(content) => {
            if let Some(device) = find_device(&parse_mount_table(&content), mount_point) {
                return Some(device);
            }
        }
        Err(e) => debug!("無法讀取 {PROC_MOUNTS}: {e}"),
    }

    findmnt_source(mount_point)
        .map_err(|e| debug!("findmnt 查詢失敗: {e}"))
        .ok()
}

fn findmnt_source(mount_point: &Path) -> Result<String> {
    let output = Command::new("findmnt")
        .args(["-n", "-o", "SOURCE", "--target"])
        .arg(mount_point)
        .output()
        .context("無法執行 findmnt")?;

    if !output.status.success() {
        bail!("findmnt 找不到掛載點: {}", mount_point.display());
    }

    let source = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if source.is_empty() {
        bail!("findmnt 沒有輸出: {}", mount_point.display());
    }

    Ok(source)
}
