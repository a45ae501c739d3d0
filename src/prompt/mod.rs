//! 互動提示介面
//!
//! 將選單、文字輸入、確認與進度顯示抽象為 [`Prompter`]，
//! 讓匯入流程可以在沒有終端機的情況下以腳本化的實作測試

mod scripted;
mod terminal;

pub use scripted::{ScriptedAnswer, ScriptedPrompter};
pub use terminal::TerminalPrompter;

use anyhow::Result;

pub trait Prompter {
    /// 單選選單，使用者取消時回傳 `None`
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>>;

    /// 文字輸入，預先填入 `initial`
    fn input_with_default(&mut self, prompt: &str, initial: &str) -> Result<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// 回報百分比進度與目前處理中的項目
    fn progress(&mut self, percent: u8, message: &str);

    fn finish_progress(&mut self);
}
