//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::command::Command;
use common::error::Error;

/// 解析済みのコマンドを実行する Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出し、戻り値を終了コードにする。
pub trait UseCaseRunner {
    fn run(&self, command: Command) -> Result<i32, Error>;
}
