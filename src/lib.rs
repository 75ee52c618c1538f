pub mod client;
pub mod cmd;
pub mod config;
pub mod dirs;
pub mod display;
pub mod filelock;
pub mod header;
pub mod logs;
pub mod router;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod table;
pub mod types;
pub mod views;
