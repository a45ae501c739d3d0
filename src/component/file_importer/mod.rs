//! 照片匯入元件
//!
//! 掃描符合類型的檔案，依拍攝年月複製到 `<目的地>/<YYYY>/<YYYY>-<MM>/`，
//! 目的地已有同名且大小相同的檔案時視為重複並跳過

mod file_copier;
mod import_result;
mod importer;

pub use file_copier::{copy_file_replacing, is_same_size_duplicate};
pub use import_result::{FileOutcome, ImportOutcome, ImportTally};
pub use importer::{FileImporter, destination_path};
