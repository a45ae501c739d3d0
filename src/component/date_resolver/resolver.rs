use super::capture_month::CaptureMonth;
use super::date_source::{
    CAPTURE_DATE_TAG, CurrentDateSource, DateSource, FileModifiedSource, MODIFY_DATE_TAG,
    MetadataReader, MetadataTagSource, current_month,
};
use log::debug;
use std::path::Path;
use std::sync::Arc;

/// 日期解析器
pub struct DateResolver {
    sources: Vec<Box<dyn DateSource>>,
}

impl DateResolver {
    /// 自訂來源順序
    pub fn new(sources: Vec<Box<dyn DateSource>>) -> Self {
        Self { sources }
    }

    /// 標準順序：拍攝時間 → 中繼資料修改時間 → 檔案修改時間 → 今天
    pub fn standard(reader: Arc<dyn MetadataReader>) -> Self {
        Self::new(vec![
            Box::new(MetadataTagSource::new(Arc::clone(&reader), CAPTURE_DATE_TAG)),
            Box::new(MetadataTagSource::new(reader, MODIFY_DATE_TAG)),
            Box::new(FileModifiedSource),
            Box::new(CurrentDateSource),
        ])
    }

    pub fn resolve(&self, path: &Path) -> CaptureMonth {
        for source in &self.sources {
            if let Some(month) = source.resolve(path) {
                debug!("{} -> {month} ({})", path.display(), source.name());
                return month;
            }
        }

        // 自訂來源全部失敗時仍以今天為準
        current_month()
    }
}
