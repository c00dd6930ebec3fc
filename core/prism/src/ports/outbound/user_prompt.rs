//! ユーザー対話 Outbound ポート（テキスト入力・確認・メッセージ表示）
//!
//! usecase は stdin/stderr やダイアログに直接触れず、この trait 経由で対話する。

use common::error::Error;

/// 対話プリミティブ
pub trait UserPrompt: Send + Sync {
    /// テキスト入力を求める。キャンセルされたら None
    fn ask_text(&self, title: &str, message: &str) -> Result<Option<String>, Error>;

    /// はい/いいえを確認する。default_yes なら既定の答えは「はい」
    fn confirm(&self, title: &str, message: &str, default_yes: bool) -> Result<bool, Error>;

    /// メッセージを表示する
    fn show_message(&self, title: &str, message: &str) -> Result<(), Error>;
}
