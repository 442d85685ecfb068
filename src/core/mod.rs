pub mod config;
pub mod launcher;
pub mod storage;
pub mod utils;
