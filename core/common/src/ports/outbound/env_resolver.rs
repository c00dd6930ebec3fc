//! 環境変数解決 Outbound ポート
//!
//! データ・キャッシュ・ログ・設定ディレクトリと、ホストが渡す設定値を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;
use std::path::PathBuf;

/// CLI オプションによるディレクトリ上書き（環境変数より優先）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirOverrides {
    pub data_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
}

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 実行時ディレクトリを解決する
    ///
    /// data / cache の優先順位:
    /// 1. CLI オプション（--data-dir / --cache-dir）
    /// 2. ホスト環境（alfred_workflow_data / alfred_workflow_cache）
    /// 3. $PRISM_HOME/data, $PRISM_HOME/cache
    /// 4. XDG_DATA_HOME / XDG_CACHE_HOME 配下の prism（未設定時は ~/.local/share, ~/.cache）
    fn resolve_dirs(&self, overrides: &DirOverrides) -> Result<Dirs, Error>;

    /// 任意の環境変数を読む（空文字は未設定扱い）
    fn var(&self, name: &str) -> Option<String>;
}
