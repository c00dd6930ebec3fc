//! サブプロセス実行 Outbound ポート
//!
//! アプリ起動（open）やダイアログ（osascript）など、外部コマンド起動を trait で抽象化する。

use crate::error::Error;
use std::path::Path;

/// 完了まで待ったプロセスの結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// サブプロセス実行の抽象
///
/// 実装は `common::adapter::StdProcess`（std::process::Command）など。
pub trait Process: Send + Sync {
    /// プログラムを実行し、標準出力・標準エラーを取得する
    fn output(&self, program: &Path, args: &[String]) -> Result<ProcessOutput, Error>;

    /// プログラムを起動だけして待たない（起動失敗のみ Err）
    fn spawn_detached(&self, program: &Path, args: &[String]) -> Result<(), Error>;
}
