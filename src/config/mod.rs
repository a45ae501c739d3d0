pub mod load;
pub mod save;
pub mod types;

pub use types::{Config, FileTypeFilter, PhotoTypeTable, UserSettings, has_extension_in};
