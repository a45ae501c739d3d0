use chrono::Datelike;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// 開頭四位數年份，接著可選的分隔符號與一到兩位數月份
static YEAR_MONTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})[-:/._ ]?(\d{1,2})").expect("Invalid regex"));

/// 用來分類照片的年月
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureMonth {
    year: i32,
    month: u32,
}

impl CaptureMonth {
    /// 年份必須為四位數，月份必須介於 1 到 12
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=9999).contains(&year) && (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// 由日期建立，年份限制在四位數範圍內
    #[must_use]
    pub fn from_date(date: &impl Datelike) -> Self {
        Self {
            year: date.year().clamp(1, 9999),
            month: date.month(),
        }
    }

    /// 解析中繼資料輸出的日期字串，例如 `2024-03`、`2024:03:05 10:00:00`
    ///
    /// 空字串、錯誤訊息、`0000` 這類未知值都視為無法使用
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let captures = YEAR_MONTH_PATTERN.captures(value.trim())?;
        let year: i32 = captures[1].parse().ok()?;
        let month: u32 = captures[2].parse().ok()?;
        Self::new(year, month)
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// 年份資料夾名稱，例如 `2024`
    #[must_use]
    pub fn year_folder(&self) -> String {
        format!("{:04}", self.year)
    }

    /// 月份資料夾名稱，例如 `2024-03`
    #[must_use]
    pub fn month_folder(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for CaptureMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.month_folder())
    }
}
