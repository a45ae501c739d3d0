use anyhow::Result;
use console::{Term, style};
use log::{info, warn};
use photo_import::component::ImportSession;
use photo_import::config::Config;
use photo_import::init;
use photo_import::prompt::TerminalPrompter;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    init::init();

    if !console::user_attended() {
        eprintln!("{}", style("需要互動式終端機才能執行").red().bold());
        warn!("stdout 不是終端機，無法顯示互動提示");
        return Ok(ExitCode::FAILURE);
    }

    let config = Config::new()?;
    let session = ImportSession::new(config)?;
    let mut prompter = TerminalPrompter::new(Term::stdout());

    match session.run(&mut prompter) {
        Ok(outcome) => {
            info!("Program exited: {outcome:?}");
            Ok(outcome.exit_code())
        }
        Err(e) => {
            warn!("Program error: {e:#}");
            eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}
