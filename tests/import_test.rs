//! 匯入整合測試
//!
//! 以假的中繼資料讀取器與腳本化提示驗證匯入行為

use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{Local, TimeZone};
use photo_import::component::date_resolver::{
    CAPTURE_DATE_TAG, DateResolver, MODIFY_DATE_TAG, MetadataReader,
};
use photo_import::component::file_importer::{FileImporter, ImportOutcome, ImportTally};
use photo_import::component::preference_collector::ImportPreferences;
use photo_import::config::{Config, FileTypeFilter};
use photo_import::prompt::ScriptedPrompter;
use tempfile::TempDir;
use walkdir::WalkDir;

/// 依檔名回傳固定標籤值的讀取器
#[derive(Default)]
struct FakeExif {
    tags: HashMap<(String, String), String>,
}

impl FakeExif {
    fn with(mut self, file_name: &str, tag: &str, value: &str) -> Self {
        self.tags
            .insert((file_name.to_string(), tag.to_string()), value.to_string());
        self
    }
}

impl MetadataReader for FakeExif {
    fn read_date_tag(&self, path: &Path, tag: &str) -> Option<String> {
        let name = path.file_name()?.to_string_lossy().to_string();
        self.tags.get(&(name, tag.to_string())).cloned()
    }
}

fn write_file(path: &Path, content: &str, mtime: (i32, u32, u32)) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
    let (year, month, day) = mtime;
    let modified: SystemTime = Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap()
        .into();
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(modified)
        .unwrap();
}

fn importer(reader: FakeExif) -> FileImporter {
    let config = Config::new().unwrap();
    FileImporter::new(
        config.photo_type_table,
        DateResolver::standard(Arc::new(reader)),
    )
}

fn preferences(filter: FileTypeFilter, destination: &Path) -> ImportPreferences {
    ImportPreferences {
        filter,
        destination: destination.to_path_buf(),
    }
}

fn run_import(
    importer: &FileImporter,
    source: &Path,
    preferences: &ImportPreferences,
) -> ImportOutcome {
    let mut prompter = ScriptedPrompter::default();
    importer.import(source, preferences, &mut prompter).unwrap()
}

fn completed(outcome: ImportOutcome) -> ImportTally {
    match outcome {
        ImportOutcome::Completed(tally) => tally,
        ImportOutcome::NoMatchingFiles => panic!("應該有符合的檔案"),
    }
}

/// 目的地資料夾內所有檔案的相對路徑與內容
fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut files: Vec<(PathBuf, Vec<u8>)> = walkdir_files(root)
        .into_iter()
        .map(|path| {
            let content = fs::read(&path).unwrap();
            (path.strip_prefix(root).unwrap().to_path_buf(), content)
        })
        .collect();
    files.sort();
    files
}

fn walkdir_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

#[test]
fn test_mixed_card_scenario() {
    let card = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    let dcim = card.path().join("DCIM").join("100CANON");

    write_file(&dcim.join("IMG_0001.JPG"), "jpeg bytes", (2025, 1, 1));
    write_file(&dcim.join("IMG_0002.CR2"), "raw sensor bytes", (2023, 11, 2));
    write_file(&card.path().join("MISC").join("readme.txt"), "x", (2025, 1, 1));

    let reader = FakeExif::default()
        .with("IMG_0001.JPG", CAPTURE_DATE_TAG, "2024-03")
        .with("IMG_0002.CR2", CAPTURE_DATE_TAG, "")
        .with("IMG_0002.CR2", MODIFY_DATE_TAG, "0000:00:00 00:00:00");

    let tally = completed(run_import(
        &importer(reader),
        card.path(),
        &preferences(FileTypeFilter::Both, destination.path()),
    ));

    assert_eq!(
        tally,
        ImportTally {
            found: 2,
            copied: 2,
            skipped: 0,
        }
    );
    assert!(destination.path().join("2024/2024-03/IMG_0001.JPG").is_file());
    assert!(destination.path().join("2023/2023-11/IMG_0002.CR2").is_file());
}

#[test]
fn test_import_is_idempotent() {
    let card = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    write_file(&card.path().join("DCIM/IMG_0001.JPG"), "first", (2024, 5, 1));
    write_file(&card.path().join("DCIM/IMG_0002.JPG"), "second!", (2024, 6, 1));
    write_file(&card.path().join("DCIM/DSC_0003.NEF"), "raw", (2022, 9, 9));

    let importer = importer(FakeExif::default());
    let preferences = preferences(FileTypeFilter::Both, destination.path());

    let first = completed(run_import(&importer, card.path(), &preferences));
    let after_first = snapshot(destination.path());

    let second = completed(run_import(&importer, card.path(), &preferences));
    let after_second = snapshot(destination.path());

    assert_eq!(first.copied, 3);
    assert_eq!(second.found, 3);
    assert_eq!(second.copied, 0);
    assert_eq!(second.skipped, first.copied);
    assert_eq!(after_first, after_second);
}

#[test]
fn test_same_name_same_size_is_not_touched() {
    let card = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    write_file(&card.path().join("IMG_0001.JPG"), "AAAA", (2024, 3, 5));

    // 大小相同但內容不同，仍視為重複
    let existing = destination.path().join("2024/2024-03/IMG_0001.JPG");
    write_file(&existing, "BBBB", (2020, 1, 1));

    let reader = FakeExif::default().with("IMG_0001.JPG", CAPTURE_DATE_TAG, "2024-03");
    let tally = completed(run_import(
        &importer(reader),
        card.path(),
        &preferences(FileTypeFilter::JpegOnly, destination.path()),
    ));

    assert_eq!(tally.copied, 0);
    assert_eq!(tally.skipped, 1);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "BBBB");
}

#[test]
fn test_no_matching_files_creates_nothing() {
    let card = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    write_file(&card.path().join("DCIM/IMG_0001.JPG"), "jpeg", (2024, 3, 5));

    let outcome = run_import(
        &importer(FakeExif::default()),
        card.path(),
        &preferences(FileTypeFilter::RawOnly, destination.path()),
    );

    assert_eq!(outcome, ImportOutcome::NoMatchingFiles);
    assert_eq!(fs::read_dir(destination.path()).unwrap().count(), 0);
}

#[test]
fn test_single_digit_month_is_padded() {
    let card = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    write_file(&card.path().join("P1000001.RW2"), "raw", (2024, 1, 1));

    let reader = FakeExif::default().with("P1000001.RW2", MODIFY_DATE_TAG, "2021-4");
    completed(run_import(
        &importer(reader),
        card.path(),
        &preferences(FileTypeFilter::RawOnly, destination.path()),
    ));

    assert!(destination.path().join("2021/2021-04/P1000001.RW2").is_file());
}

#[test]
fn test_extension_match_ignores_case() {
    let card = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    write_file(&card.path().join("a.jpg"), "1", (2024, 2, 1));
    write_file(&card.path().join("b.JpEg"), "22", (2024, 2, 1));
    write_file(&card.path().join("c.png"), "333", (2024, 2, 1));

    let tally = completed(run_import(
        &importer(FakeExif::default()),
        card.path(),
        &preferences(FileTypeFilter::JpegOnly, destination.path()),
    ));

    assert_eq!(tally.found, 2);
    assert!(destination.path().join("2024/2024-02/b.JpEg").is_file());
}

#[test]
fn test_failed_file_does_not_stop_batch() {
    let card = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    write_file(&card.path().join("DCIM/A.JPG"), "first", (2024, 3, 1));
    write_file(&card.path().join("DCIM/B.JPG"), "second", (2023, 11, 1));

    // 以一般檔案佔住年份資料夾，B 的月份資料夾無法建立
    fs::write(destination.path().join("2023"), "not a directory").unwrap();

    let reader = FakeExif::default()
        .with("A.JPG", CAPTURE_DATE_TAG, "2024-03")
        .with("B.JPG", CAPTURE_DATE_TAG, "2023-11");
    let outcome = run_import(
        &importer(reader),
        card.path(),
        &preferences(FileTypeFilter::JpegOnly, destination.path()),
    );

    let tally = completed(outcome);
    assert_eq!(
        tally,
        ImportTally {
            found: 2,
            copied: 1,
            skipped: 0,
        }
    );
    assert!(destination.path().join("2024/2024-03/A.JPG").is_file());
    assert!(destination.path().join("2023").is_file());
}
