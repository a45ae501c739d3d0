use super::Prompter;
use anyhow::Result;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

/// 以 dialoguer 與 indicatif 實作的終端機提示
pub struct TerminalPrompter {
    term: Term,
    progress_bar: Option<ProgressBar>,
}

impl TerminalPrompter {
    #[must_use]
    pub const fn new(term: Term) -> Self {
        Self {
            term,
            progress_bar: None,
        }
    }

    fn progress_bar(&mut self) -> &ProgressBar {
        self.progress_bar.get_or_insert_with(|| {
            let progress_bar = ProgressBar::new(100);
            progress_bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            progress_bar
        })
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_on_opt(&self.term)?;
        Ok(selection)
    }

    fn input_with_default(&mut self, prompt: &str, initial: &str) -> Result<String> {
        let value: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(value.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let confirm = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact_on(&self.term)?;
        Ok(confirm)
    }

    fn progress(&mut self, percent: u8, message: &str) {
        let progress_bar = self.progress_bar();
        progress_bar.set_position(u64::from(percent.min(100)));
        progress_bar.set_message(message.to_string());
    }

    fn finish_progress(&mut self) {
        if let Some(progress_bar) = self.progress_bar.take() {
            progress_bar.finish_with_message("完成");
        }
    }
}
