//! 時系列トレースログ
//!
//! `log` クレートのロガーとして登録し、コンソールへ出力しつつ直近のエントリを保持する。
//! ブラウザのコンソールから `emeraldDumpLogs()` でJSONとして取り出せる。

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use wasm_bindgen::prelude::*;

const MAX_LOG_ENTRIES: usize = 1000;

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub target: String,
    pub message: String,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogTrace {
    pub fn new(capacity: usize) -> Self {
        LogTrace {
            logs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// 上限を超えたら古いものから捨てる
    pub fn push(&mut self, entry: LogEntry) {
        if self.logs.len() >= self.capacity {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn to_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: RefCell<LogTrace> = RefCell::new(LogTrace::new(MAX_LOG_ENTRIES));
}

struct TraceLogger;

static LOGGER: TraceLogger = TraceLogger;

impl Log for TraceLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        let line = format!("[{}] {}", record.target(), message);

        // コンソールにも出力
        match record.level() {
            Level::Error => web_sys::console::error_1(&line.into()),
            Level::Warn => web_sys::console::warn_1(&line.into()),
            Level::Info => web_sys::console::info_1(&line.into()),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
        }

        let entry = LogEntry {
            timestamp: js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default(),
            level: record.level().as_str().to_lowercase(),
            target: record.target().to_string(),
            message,
        };
        LOG_TRACE.with(|trace| trace.borrow_mut().push(entry));
    }

    fn flush(&self) {}
}

/// デバッグビルドは Debug、リリースビルドは Info
pub fn level_for(debug_build: bool) -> LevelFilter {
    if debug_build {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// ロガーを登録（2回目以降は無視）
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[wasm_bindgen(js_name = emeraldDumpLogs)]
pub fn dump_logs() -> String {
    LOG_TRACE.with(|trace| trace.borrow().to_json())
}
