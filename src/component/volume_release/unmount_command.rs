use anyhow::{Context, Result, bail};
use log::debug;
use std::path::Path;
use std::process::Command;

/// 卸載裝置，優先使用 udisksctl（不需要 root），失敗再改用 umount
pub fn unmount(device: &str, mount_point: &Path) -> Result<()> {
    match run_udisksctl(device) {
        Ok(()) => Ok(()),
        Err(udisks_err) => {
            debug!("udisksctl 卸載失敗: {udisks_err:#}");
            run_umount(mount_point)
                .with_context(|| format!("udisksctl 也失敗: {udisks_err:#}"))
        }
    }
}

fn run_udisksctl(device: &str) -> Result<()> {
    let output = Command::new("udisksctl")
        .args(["unmount", "-b", device])
        .output()
        .context("無法執行 udisksctl")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("udisksctl 執行失敗: {}", stderr.trim());
    }

    Ok(())
}

fn run_umount(mount_point: &Path) -> Result<()> {
    let output = Command::new("umount")
        .arg(mount_point)
        .output()
        .context("無法執行 umount")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("umount 執行失敗: {}", stderr.trim());
    }

    Ok(())
}
