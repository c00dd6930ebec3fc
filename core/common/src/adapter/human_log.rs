//! 人間向けログ（LogRecord → stderr に 1 行で要点のみ出力）
//!
//! -v/--verbose 指定時だけ配線される。fields は JSON のまま後ろに付ける。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

/// LogRecord を整形して stderr に出す Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

/// 1 行に整形する（テスト用に分離）
pub(crate) fn format_line(record: &LogRecord) -> String {
    let level = match record.level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
    };
    let mut line = format!("[{}] {}", level, record.message);
    if let Some(fields) = &record.fields {
        if let Ok(s) = serde_json::to_string(fields) {
            line.push(' ');
            line.push_str(&s);
        }
    }
    line
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(record));
        Ok(())
    }
}
