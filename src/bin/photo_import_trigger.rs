//! 記憶卡插入時由排程器呼叫
//!
//! 等待掛載完成後啟動一次 photo_import，並沿用其結束代碼

use anyhow::{Context, Result};
use log::info;
use photo_import::init;
use std::env;
use std::path::PathBuf;
use std::process::{Command, ExitCode};
use std::thread;
use std::time::Duration;

/// 等待系統完成自動掛載
const MOUNT_SETTLE_DELAY: Duration = Duration::from_secs(5);

const PROGRAM_NAME: &str = "photo_import";

fn main() -> Result<ExitCode> {
    init::init();

    thread::sleep(MOUNT_SETTLE_DELAY);

    let program = locate_program();
    info!("啟動 {}", program.display());

    let status = Command::new(&program)
        .status()
        .with_context(|| format!("無法啟動 {}", program.display()))?;

    let code = status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1);
    Ok(ExitCode::from(code))
}

/// 優先使用與本程式同目錄的執行檔，否則交給 PATH 搜尋
fn locate_program() -> PathBuf {
    let sibling = env::current_exe().ok().and_then(|exe| {
        let candidate = exe
            .parent()?
            .join(PROGRAM_NAME)
            .with_extension(env::consts::EXE_EXTENSION);
        candidate.is_file().then_some(candidate)
    });

    sibling.unwrap_or_else(|| PathBuf::from(PROGRAM_NAME))
}
