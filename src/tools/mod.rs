mod exiftool_info;
mod mount_table;
mod path_validator;
mod photo_scanner;

pub use exiftool_info::{exiftool_version, read_date_tag};
pub use mount_table::{MountEntry, find_device, parse_mount_table, resolve_device};
pub use path_validator::{ensure_directory_exists, expand_home, validate_directory_exists};
pub use photo_scanner::{PhotoFileInfo, contains_photo_file, scan_photo_files};
