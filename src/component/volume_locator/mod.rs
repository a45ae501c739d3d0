//! 記憶卡偵測元件
//!
//! 在已知的掛載根目錄下尋找看起來像相機記憶卡的資料夾

mod main;

pub use main::{CandidateVolume, PHOTO_SEARCH_DEPTH, VolumeLocator, mount_roots_for_user};
