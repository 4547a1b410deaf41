//! ユーティリティモジュール

pub mod config;
pub mod dom;
pub mod fetch;
pub mod format;
pub mod log_trace;
pub mod storage;
