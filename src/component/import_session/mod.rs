//! 匯入流程
//!
//! 偵測記憶卡 → 詢問匯入設定 → 匯入 → 視需要退出記憶卡

mod main;

pub use main::{ImportSession, SessionOutcome};
