//! 拍攝日期解析元件
//!
//! 依序嘗試拍攝時間、中繼資料修改時間、檔案修改時間與目前日期，
//! 取得第一個可用的年月

mod capture_month;
mod date_source;
mod resolver;

pub use capture_month::CaptureMonth;
pub use date_source::{
    CAPTURE_DATE_TAG, CurrentDateSource, DateSource, ExifTool, FileModifiedSource, MODIFY_DATE_TAG,
    MetadataReader, MetadataTagSource, current_month,
};
pub use resolver::DateResolver;
