use crate::config::{Config, FileTypeFilter, PhotoTypeTable};
use crate::tools::contains_photo_file;
use log::{debug, info};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 搜尋照片檔案的最大深度（資料夾本身為第 0 層）
pub const PHOTO_SEARCH_DEPTH: usize = 2;

/// 偵測到的照片來源
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateVolume {
    pub path: PathBuf,
}

impl CandidateVolume {
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().to_string())
    }
}

/// 記憶卡偵測器
pub struct VolumeLocator {
    mount_roots: Vec<PathBuf>,
    camera_directories: Vec<String>,
    photo_extensions: HashSet<String>,
}

impl VolumeLocator {
    pub fn new(mount_roots: Vec<PathBuf>, photo_type_table: &PhotoTypeTable) -> Self {
        Self {
            mount_roots,
            camera_directories: photo_type_table.camera_directory.clone(),
            photo_extensions: photo_type_table.extensions_for(FileTypeFilter::Both),
        }
    }

    /// 使用設定中的掛載根目錄，未設定時依目前使用者推導
    pub fn from_config(config: &Config) -> Self {
        let mount_roots = config.settings.mount_roots.as_ref().map_or_else(
            || {
                let user = env::var("USER").or_else(|_| env::var("LOGNAME")).ok();
                mount_roots_for_user(user.as_deref())
            },
            |roots| roots.iter().map(PathBuf::from).collect(),
        );

        Self::new(mount_roots, &config.photo_type_table)
    }

    #[must_use]
    pub fn mount_roots(&self) -> &[PathBuf] {
        &self.mount_roots
    }

    /// 依掛載根目錄順序、再依子資料夾列舉順序，回傳第一個符合的資料夾
    #[must_use]
    pub fn locate(&self) -> Option<CandidateVolume> {
        for root in &self.mount_roots {
            let entries = match fs::read_dir(root) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!("略過掛載根目錄 {}: {e}", root.display());
                    continue;
                }
            };

            for entry in entries.filter_map(std::result::Result::ok) {
                let candidate = entry.path();
                if !candidate.is_dir() {
                    continue;
                }

                if self.qualifies(&candidate) {
                    info!("偵測到照片來源: {}", candidate.display());
                    return Some(CandidateVolume { path: candidate });
                }
            }
        }

        None
    }

    /// 含有相機資料夾（例如 DCIM），或兩層內有照片檔案
    fn qualifies(&self, directory: &Path) -> bool {
        if fs::read_dir(directory).is_err() {
            debug!("無法讀取 {}", directory.display());
            return false;
        }

        let has_camera_directory = self
            .camera_directories
            .iter()
            .any(|name| directory.join(name).is_dir());

        has_camera_directory
            || contains_photo_file(directory, &self.photo_extensions, PHOTO_SEARCH_DEPTH)
    }
}

/// 預設掛載根目錄，依序搜尋
#[must_use]
pub fn mount_roots_for_user(user: Option<&str>) -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Some(user) = user.filter(|u| !u.is_empty()) {
        roots.push(Path::new("/media").join(user));
        roots.push(Path::new("/run/media").join(user));
    }

    roots.extend(["/media", "/mnt", "/Volumes"].into_iter().map(PathBuf::from));
    roots
}
