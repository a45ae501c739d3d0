//! 匯入偏好設定元件
//!
//! 詢問要匯入的檔案類型與目的地資料夾

mod main;

pub use main::{ImportPreferences, PreferenceCollector, default_destination_for};
