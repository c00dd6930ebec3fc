//! prism エンティティと、識別子から導出されるディスク上のパス

use std::path::{Path, PathBuf};

use common::error::Error;

use super::prism_config::PrismConfig;
use super::prism_id::{IdScheme, PrismId};

/// 1 つの prism（ブラウザの独立インスタンス）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prism {
    pub id: PrismId,
    /// 表示名
    pub name: String,
    /// 一覧のサブタイトルに出す任意の説明
    pub description: Option<String>,
    /// ブラウザに渡す追加フラグ（順序を保持）
    pub options: Vec<String>,
}

impl Prism {
    pub fn scheme(&self) -> IdScheme {
        self.id.scheme()
    }

    /// 保存用の設定に変換する。name はトークン方式のときだけ書く
    pub fn to_config(&self) -> PrismConfig {
        PrismConfig {
            name: match self.scheme() {
                IdScheme::Token => Some(self.name.clone()),
                IdScheme::Name => None,
            },
            description: self.description.clone(),
            options: Some(self.options.clone()),
        }
    }
}

impl std::fmt::Display for Prism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}

/// 構築途中の prism（名前・識別子のどちらかは必須）
///
/// 既存の設定ファイルを `merge` で上書きしてから `resolve` で Prism にする。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrismDraft {
    pub id: Option<PrismId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub options: Vec<String>,
}

impl PrismDraft {
    pub fn named(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            description,
            ..Default::default()
        }
    }

    pub fn with_id(id: PrismId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// 読み込んだ設定をマージする（ファイル側に値があればそちらが勝つ）
    pub fn merge(&mut self, config: PrismConfig) {
        if let Some(d) = config.description {
            self.description = Some(d);
        }
        if let Some(o) = config.options {
            self.options = o;
        }
        if let Some(n) = config.name {
            self.name = Some(n);
        }
    }

    /// 識別子を確定して Prism にする
    ///
    /// 旧方式（表示名＝ディレクトリ名）では表示名は常に識別子。
    /// トークン方式で名前が無ければ MissingName。
    pub fn resolve(self, id: PrismId) -> Result<Prism, Error> {
        let name = match id.scheme() {
            IdScheme::Name => id.to_string(),
            IdScheme::Token => self.name.filter(|n| !n.trim().is_empty()).ok_or_else(|| {
                Error::missing_name(format!(
                    "No name specified or in config file for prism {}",
                    id
                ))
            })?,
        };
        Ok(Prism {
            id,
            name,
            description: self.description.filter(|d| !d.is_empty()),
            options: self.options,
        })
    }
}

/// 表示名の検証。名前は識別子やランチャー引数（`+name`、`?`、`id|url`）にも
/// なるので、識別子と同じ文字制限を課す
pub fn validate_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::invalid_argument("A prism name is required"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Error::invalid_argument(format!(
            "Invalid prism name '{}': names may not contain spaces",
            name
        )));
    }
    if name.contains(['/', '|']) {
        return Err(Error::invalid_argument(format!(
            "Invalid prism name '{}': '/' and '|' are not allowed",
            name
        )));
    }
    if name.starts_with(['.', '+', '?']) {
        return Err(Error::invalid_argument(format!(
            "Invalid prism name '{}': may not start with '.', '+' or '?'",
            name
        )));
    }
    Ok(())
}

/// data_dir / cache_dir の組（prism のパス計算の起点）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismLayout {
    pub data_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl PrismLayout {
    pub fn new(data_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    pub fn paths(&self, id: &PrismId) -> PrismPaths {
        PrismPaths {
            bundle: BundleLayout::at(self.data_dir.join(format!("{}.app", id))),
            staging: BundleLayout::at(self.data_dir.join(format!(".{}.app.staging", id))),
            cache_dir: self.cache_dir.join(id.as_str()),
            legacy_config_file: self.data_dir.join(format!("{}.json", id)),
        }
    }

    /// data_dir 直下のエントリ名から識別子を取り出す（`<id>.app` 以外は None）
    pub fn id_from_entry(entry: &Path) -> Option<PrismId> {
        let file_name = entry.file_name()?.to_str()?;
        let stem = file_name.strip_suffix(".app")?;
        PrismId::parse(stem).ok()
    }
}

/// 1 つの prism が所有するパス一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrismPaths {
    pub bundle: BundleLayout,
    /// 作成中のバンドル（完成後に bundle へ rename）
    pub staging: BundleLayout,
    /// ブラウザの user-data-dir
    pub cache_dir: PathBuf,
    /// 最初期の配置（data_dir/<id>.json）
    pub legacy_config_file: PathBuf,
}

/// `.app` バンドル内部の配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    pub root: PathBuf,
}

impl BundleLayout {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("prism.json")
    }

    pub fn contents_dir(&self) -> PathBuf {
        self.root.join("Contents")
    }

    pub fn info_plist(&self) -> PathBuf {
        self.contents_dir().join("Info.plist")
    }

    pub fn macos_dir(&self) -> PathBuf {
        self.contents_dir().join("MacOS")
    }

    pub fn script_file(&self) -> PathBuf {
        self.macos_dir().join("run.sh")
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.contents_dir().join("Resources")
    }

    pub fn icon_file(&self) -> PathBuf {
        self.resources_dir().join("icon.icns")
    }
}
