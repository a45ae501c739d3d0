pub mod component;
pub mod config;
pub mod init;
pub mod prompt;
pub mod tools;
