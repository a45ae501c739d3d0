//! 功能元件模組
//!
//! 每個子模組實現匯入流程中的一個階段

pub mod date_resolver;
pub mod file_importer;
pub mod import_session;
pub mod preference_collector;
pub mod volume_locator;
pub mod volume_release;

pub use date_resolver::DateResolver;
pub use file_importer::FileImporter;
pub use import_session::{ImportSession, SessionOutcome};
pub use preference_collector::PreferenceCollector;
pub use volume_locator::VolumeLocator;
pub use volume_release::VolumeRelease;
