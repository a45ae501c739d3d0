use super::file_copier::{copy_file_replacing, is_same_size_duplicate};
use super::import_result::{FileOutcome, ImportOutcome, ImportTally};
use crate::component::date_resolver::{CaptureMonth, DateResolver};
use crate::component::preference_collector::ImportPreferences;
use crate::config::PhotoTypeTable;
use crate::prompt::Prompter;
use crate::tools::{
    PhotoFileInfo, ensure_directory_exists, scan_photo_files, validate_directory_exists,
};
use anyhow::Result;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// 照片匯入器
pub struct FileImporter {
    photo_type_table: PhotoTypeTable,
    resolver: DateResolver,
}

impl FileImporter {
    pub const fn new(photo_type_table: PhotoTypeTable, resolver: DateResolver) -> Self {
        Self {
            photo_type_table,
            resolver,
        }
    }

    /// 將來源資料夾中符合類型的檔案依年月匯入目的地
    ///
    /// 沒有任何符合的檔案時不會在目的地建立任何資料夾
    pub fn import(
        &self,
        source: &Path,
        preferences: &ImportPreferences,
        prompter: &mut dyn Prompter,
    ) -> Result<ImportOutcome> {
        validate_directory_exists(source)?;

        let extensions = self.photo_type_table.extensions_for(preferences.filter);
        let files = scan_photo_files(source, &extensions)?;

        if files.is_empty() {
            info!("{} 中沒有符合 {} 的檔案", source.display(), preferences.filter);
            return Ok(ImportOutcome::NoMatchingFiles);
        }

        let total = files.len();
        let mut tally = ImportTally {
            found: total,
            ..ImportTally::default()
        };

        for (index, file) in files.iter().enumerate() {
            let outcome = self.import_file(file, &preferences.destination);
            tally.record(outcome);

            let file_name = file.path.file_name().unwrap_or_default().to_string_lossy();
            prompter.progress(percent(index + 1, total), &file_name);
        }

        prompter.finish_progress();

        info!(
            "匯入完成 - 找到: {}, 複製: {}, 跳過: {}",
            tally.found, tally.copied, tally.skipped
        );

        Ok(ImportOutcome::Completed(tally))
    }

    fn import_file(&self, file: &PhotoFileInfo, destination_root: &Path) -> FileOutcome {
        let Some(file_name) = file.path.file_name() else {
            return FileOutcome::CopyFailed;
        };

        let month = self.resolver.resolve(&file.path);
        let target = destination_path(destination_root, month, Path::new(file_name));

        if let Some(target_dir) = target.parent()
            && let Err(e) = ensure_directory_exists(target_dir)
        {
            warn!("{e:#}");
            return FileOutcome::CopyFailed;
        }

        if is_same_size_duplicate(file.size, &target) {
            debug!("跳過重複檔案: {}", target.display());
            return FileOutcome::SkippedDuplicate;
        }

        match copy_file_replacing(&file.path, &target) {
            Ok(()) => {
                debug!("複製檔案: {} -> {}", file.path.display(), target.display());
                FileOutcome::Copied
            }
            Err(e) => {
                warn!("{e:#}");
                FileOutcome::CopyFailed
            }
        }
    }
}

/// `<目的地>/<YYYY>/<YYYY>-<MM>/<原始檔名>`
#[must_use]
pub fn destination_path(
    destination_root: &Path,
    month: CaptureMonth,
    file_name: &Path,
) -> PathBuf {
    destination_root
        .join(month.year_folder())
        .join(month.month_folder())
        .join(file_name)
}

#[allow(clippy::cast_possible_truncation)]
fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (done.min(total) * 100 / total) as u8
}
