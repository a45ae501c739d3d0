use crate::component::date_resolver::{DateResolver, ExifTool};
use crate::component::file_importer::{FileImporter, ImportOutcome, ImportTally};
use crate::component::preference_collector::{ImportPreferences, PreferenceCollector};
use crate::component::volume_locator::{CandidateVolume, VolumeLocator};
use crate::component::volume_release::{ReleaseOutcome, VolumeRelease};
use crate::config::Config;
use crate::config::save::{remember_destination, save_settings};
use crate::prompt::Prompter;
use anyhow::Result;
use console::style;
use log::{info, warn};
use std::process::ExitCode;
use std::sync::Arc;

/// 整個流程的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Cancelled,
    NoVolume,
}

impl SessionOutcome {
    /// 找不到記憶卡時結束代碼為 1，其餘（包含取消）為 0
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Completed | Self::Cancelled => ExitCode::SUCCESS,
            Self::NoVolume => ExitCode::FAILURE,
        }
    }
}

pub struct ImportSession {
    config: Config,
    locator: VolumeLocator,
    collector: PreferenceCollector,
    importer: FileImporter,
    release: VolumeRelease,
    persist_settings: bool,
}

impl ImportSession {
    pub fn new(config: Config) -> Result<Self> {
        let locator = VolumeLocator::from_config(&config);
        let collector = PreferenceCollector::from_config(&config)?;
        let importer = FileImporter::new(
            config.photo_type_table.clone(),
            DateResolver::standard(Arc::new(ExifTool)),
        );

        Ok(Self {
            config,
            locator,
            collector,
            importer,
            release: VolumeRelease::default(),
            persist_settings: true,
        })
    }

    /// 以自訂元件組成流程，不會寫入使用者設定檔
    pub const fn with_parts(
        config: Config,
        locator: VolumeLocator,
        collector: PreferenceCollector,
        importer: FileImporter,
        release: VolumeRelease,
    ) -> Self {
        Self {
            config,
            locator,
            collector,
            importer,
            release,
            persist_settings: false,
        }
    }

    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<SessionOutcome> {
        println!("{}", style("=== 照片匯入 ===").cyan().bold());

        println!("{}", style("搜尋記憶卡中...").dim());
        let Some(volume) = self.locator.locate() else {
            self.print_no_volume();
            return Ok(SessionOutcome::NoVolume);
        };

        println!(
            "{} {}",
            style("偵測到記憶卡:").green(),
            style(volume.path.display()).cyan()
        );

        let prompt = format!("要從 {} 匯入照片嗎？", volume.display_name());
        if !prompter.confirm(&prompt, true)? {
            println!("{}", style("操作已取消").yellow());
            return Ok(SessionOutcome::Cancelled);
        }

        let Some(preferences) = self.collector.collect(prompter)? else {
            println!("{}", style("未選擇匯入類型，操作已取消").yellow());
            return Ok(SessionOutcome::Cancelled);
        };
        self.remember(&preferences);

        println!("{}", style("匯入檔案中...").cyan());
        let outcome = self.importer.import(&volume.path, &preferences, prompter)?;
        self.print_result(&outcome, &preferences);

        self.offer_release(&volume, prompter)?;

        info!("照片匯入流程結束");
        Ok(SessionOutcome::Completed)
    }

    fn remember(&self, preferences: &ImportPreferences) {
        if !self.persist_settings {
            return;
        }

        let mut settings = self.config.settings.clone();
        let destination = preferences.destination.display().to_string();
        if remember_destination(&mut settings, &destination) {
            if let Err(e) = save_settings(&settings) {
                warn!("無法儲存目的地設定: {e:#}");
            }
        }
    }

    fn offer_release(&self, volume: &CandidateVolume, prompter: &mut dyn Prompter) -> Result<()> {
        let prompt = format!("要退出 {} 嗎？", volume.display_name());
        if !prompter.confirm(&prompt, true)? {
            return Ok(());
        }

        match self.release.release(&volume.path) {
            ReleaseOutcome::Released { device } => {
                println!("{} {}", style("已安全退出:").green(), device);
            }
            ReleaseOutcome::UnmountFailed { device, reason } => {
                println!(
                    "{} {} ({})",
                    style("警告: 無法退出").yellow(),
                    device,
                    style(reason).dim()
                );
            }
            ReleaseOutcome::DeviceNotFound => {
                println!(
                    "{} {}",
                    style("警告: 找不到對應的裝置，請手動退出").yellow(),
                    volume.path.display()
                );
            }
        }

        Ok(())
    }

    fn print_no_volume(&self) {
        eprintln!("{}", style("找不到記憶卡").red().bold());
        for root in self.locator.mount_roots() {
            eprintln!("  {} {}", style("•").dim(), style(root.display()).dim());
        }
        warn!("在所有掛載根目錄中都找不到照片來源");
    }

    fn print_result(&self, outcome: &ImportOutcome, preferences: &ImportPreferences) {
        match outcome {
            ImportOutcome::NoMatchingFiles => {
                println!(
                    "{}",
                    style(format!("找不到符合「{}」的檔案", preferences.filter)).yellow()
                );
            }
            ImportOutcome::Completed(tally) => self.print_tally(tally, preferences),
        }
    }

    fn print_tally(&self, tally: &ImportTally, preferences: &ImportPreferences) {
        println!();
        println!("{}", style("=== 匯入結果 ===").cyan().bold());
        println!("  找到: {} 個檔案", tally.found);
        println!("  已複製: {} 個檔案", style(tally.copied).green());
        println!("  重複跳過: {} 個檔案", style(tally.skipped).yellow());
        println!(
            "  目的地: {}",
            style(preferences.destination.display()).cyan()
        );
    }
}
