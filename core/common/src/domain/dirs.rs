//! 実行時ディレクトリ（CLI オプション / ホスト環境 / PRISM_HOME / XDG の解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、prism 本体・キャッシュ・ログのパス計算に使う。

use std::path::PathBuf;

/// 解決済みの config / data / state / cache ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl Dirs {
    /// ログ格納ディレクトリ（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    /// 構造化ログのファイルパス
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join("prism.jsonl")
    }

    /// 任意設定ファイルのパス
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let dirs = Dirs {
            config_dir: PathBuf::from("/c"),
            data_dir: PathBuf::from("/d"),
            state_dir: PathBuf::from("/s"),
            cache_dir: PathBuf::from("/k"),
        };
        assert_eq!(dirs.log_file(), PathBuf::from("/s/logs/prism.jsonl"));
        assert_eq!(dirs.settings_file(), PathBuf::from("/c/settings.json"));
    }
}
