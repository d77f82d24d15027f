//! CLI commands for mazegraph

pub mod dispatch;
pub mod info;
pub mod init_config;
pub mod search;
pub mod source;
