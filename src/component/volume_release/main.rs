use super::unmount_command::unmount;
use crate::tools::resolve_device;
use anyhow::Result;
use log::{info, warn};
use std::path::Path;

/// 退出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Released { device: String },
    UnmountFailed { device: String, reason: String },
    DeviceNotFound,
}

type ResolveFn = fn(&Path) -> Option<String>;
type UnmountFn = fn(&str, &Path) -> Result<()>;

/// 退出記憶卡
pub struct VolumeRelease {
    resolve: ResolveFn,
    unmount: UnmountFn,
}

impl Default for VolumeRelease {
    fn default() -> Self {
        Self::new(resolve_device, unmount)
    }
}

impl VolumeRelease {
    pub const fn new(resolve: ResolveFn, unmount: UnmountFn) -> Self {
        Self { resolve, unmount }
    }

    pub fn release(&self, mount_point: &Path) -> ReleaseOutcome {
        let Some(device) = (self.resolve)(mount_point) else {
            warn!("找不到 {} 對應的裝置", mount_point.display());
            return ReleaseOutcome::DeviceNotFound;
        };

        match (self.unmount)(&device, mount_point) {
            Ok(()) => {
                info!("已卸載 {device} ({})", mount_point.display());
                ReleaseOutcome::Released { device }
            }
            Err(e) => {
                warn!("卸載 {device} 失敗: {e:#}");
                ReleaseOutcome::UnmountFailed {
                    device,
                    reason: format!("{e:#}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn found(_: &Path) -> Option<String> {
        Some("/dev/sdb1".to_string())
    }

    fn not_found(_: &Path) -> Option<String> {
        None
    }

    fn unmount_ok(_: &str, _: &Path) -> Result<()> {
        Ok(())
    }

    fn unmount_busy(_: &str, _: &Path) -> Result<()> {
        bail!("target is busy")
    }

    fn unmount_unreachable(_: &str, _: &Path) -> Result<()> {
        panic!("找不到裝置時不應該嘗試卸載")
    }

    #[test]
    fn test_release_success() {
        let release = VolumeRelease::new(found, unmount_ok);
        assert_eq!(
            release.release(Path::new("/media/alice/EOS_DIGITAL")),
            ReleaseOutcome::Released {
                device: "/dev/sdb1".to_string()
            }
        );
    }

    #[test]
    fn test_unmount_failure_is_reported() {
        let release = VolumeRelease::new(found, unmount_busy);
        let outcome = release.release(Path::new("/media/alice/EOS_DIGITAL"));

        let ReleaseOutcome::UnmountFailed { device, reason } = outcome else {
            panic!("應該回報卸載失敗");
        };
        assert_eq!(device, "/dev/sdb1");
        assert!(reason.contains("busy"));
    }

    #[test]
    fn test_device_not_found() {
        let release = VolumeRelease::new(not_found, unmount_unreachable);
        assert_eq!(
            release.release(Path::new("/media/alice/EOS_DIGITAL")),
            ReleaseOutcome::DeviceNotFound
        );
    }
}
