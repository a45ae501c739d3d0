//! 退出記憶卡元件
//!
//! 透過掛載表找出裝置後嘗試卸載，失敗只會回報警告

mod main;
mod unmount_command;

pub use main::{ReleaseOutcome, VolumeRelease};
pub use unmount_command::unmount;
