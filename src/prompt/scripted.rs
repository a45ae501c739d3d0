use super::Prompter;
use anyhow::{Result, bail};
use std::collections::VecDeque;

/// 預先排定的回答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Select(Option<usize>),
    Input(String),
    Confirm(bool),
}

/// 依序回放預先排定回答的提示實作，用於無終端機的測試
///
/// 回答類型與提問不符或回答用盡時回傳錯誤
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<ScriptedAnswer>,
    /// 曾經出現過的提問文字
    pub prompts: Vec<String>,
    /// 收到的進度回報 (百分比, 訊息)
    pub progress_updates: Vec<(u8, String)>,
    pub progress_finished: bool,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<ScriptedAnswer> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("沒有預先排定的回答: {prompt}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String], _default: usize) -> Result<Option<usize>> {
        match self.next_answer(prompt)? {
            ScriptedAnswer::Select(Some(index)) if index >= items.len() => {
                bail!("選項索引超出範圍: {index}")
            }
            ScriptedAnswer::Select(selection) => Ok(selection),
            other => bail!("預期選單回答，實際為 {other:?}"),
        }
    }

    fn input_with_default(&mut self, prompt: &str, _initial: &str) -> Result<String> {
        match self.next_answer(prompt)? {
            ScriptedAnswer::Input(value) => Ok(value.trim().to_string()),
            other => bail!("預期文字回答，實際為 {other:?}"),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next_answer(prompt)? {
            ScriptedAnswer::Confirm(value) => Ok(value),
            other => bail!("預期確認回答，實際為 {other:?}"),
        }
    }

    fn progress(&mut self, percent: u8, message: &str) {
        self.progress_updates.push((percent, message.to_string()));
    }

    fn finish_progress(&mut self) {
        self.progress_finished = true;
    }
}
