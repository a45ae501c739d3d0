use env_logger::Env;
use log::{debug, warn};

use crate::tools::exiftool_version;

/// 初始化日誌，預設只顯示警告，可用 `RUST_LOG` 覆寫
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    match exiftool_version() {
        Ok(version) => debug!("exiftool {version}"),
        Err(e) => warn!("{e:#}，將改用檔案修改時間分類"),
    }
}
