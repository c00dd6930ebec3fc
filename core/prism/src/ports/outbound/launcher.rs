//! アプリ起動・ファイルを開く Outbound ポート
//!
//! 起動したプロセスは待たない（起動失敗のみ LaunchFailed で返す）。

use common::error::Error;
use std::path::Path;

pub trait Launcher: Send + Sync {
    /// バンドルをアプリとして起動し、args を起動引数として渡す
    fn open_app(&self, bundle: &Path, args: &[String]) -> Result<(), Error>;

    /// ファイルをエディタで開く
    fn open_file(&self, path: &Path) -> Result<(), Error>;

    /// ファイルブラウザでパスを表示する
    fn reveal(&self, path: &Path) -> Result<(), Error>;
}
