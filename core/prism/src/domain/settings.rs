//! 実行時設定（ブラウザ・bundle id 接頭辞・アイコン）と、usecase に渡す文脈

use std::path::PathBuf;

use serde::Deserialize;

use super::prism::PrismLayout;

pub const DEFAULT_BROWSER: &str = "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";
pub const DEFAULT_BUNDLE_ID_PREFIX: &str = "net.prism";

/// settings.json の内容（全キー任意）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub browser: Option<PathBuf>,
    #[serde(default)]
    pub bundle_id_prefix: Option<String>,
    #[serde(default)]
    pub icon_file: Option<PathBuf>,
}

/// 解決済みの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismSettings {
    /// ラップするブラウザの実行ファイル
    pub browser: PathBuf,
    pub bundle_id_prefix: String,
    /// 作成時に Resources へコピーするアイコン（None ならコピーしない）
    pub icon_file: Option<PathBuf>,
}

impl Default for PrismSettings {
    fn default() -> Self {
        Self {
            browser: PathBuf::from(DEFAULT_BROWSER),
            bundle_id_prefix: DEFAULT_BUNDLE_ID_PREFIX.to_string(),
            icon_file: None,
        }
    }
}

impl PrismSettings {
    /// ファイルの値を既定値に重ねる
    pub fn with_file(mut self, file: SettingsFile) -> Self {
        if let Some(b) = file.browser {
            self.browser = b;
        }
        if let Some(p) = file.bundle_id_prefix {
            self.bundle_id_prefix = p;
        }
        if file.icon_file.is_some() {
            self.icon_file = file.icon_file;
        }
        self
    }
}

/// 1 回のコマンド実行で使う文脈（グローバル状態の代わりに明示的に渡す）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismContext {
    pub layout: PrismLayout,
    pub settings: PrismSettings,
}
