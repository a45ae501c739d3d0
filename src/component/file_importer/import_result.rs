/// 單一檔案的處理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Copied,
    SkippedDuplicate,
    CopyFailed,
}

/// 匯入統計
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportTally {
    /// 符合篩選條件的檔案數
    pub found: usize,
    /// 成功複製的檔案數
    pub copied: usize,
    /// 因重複而跳過的檔案數
    pub skipped: usize,
}

impl ImportTally {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Copied => self.copied += 1,
            FileOutcome::SkippedDuplicate => self.skipped += 1,
            FileOutcome::CopyFailed => {}
        }
    }
}

/// 匯入結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    NoMatchingFiles,
    Completed(ImportTally),
}
