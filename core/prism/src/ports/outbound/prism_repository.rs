//! prism の永続化 Outbound ポート
//!
//! バンドル・キャッシュディレクトリ・設定ファイル・起動スクリプトの読み書きを担う。
//! バンドルとキャッシュは常に組で作成・移動・削除する。

use crate::domain::{Prism, PrismConfig, PrismDraft, PrismId, PrismPaths};
use common::error::Error;
use std::path::PathBuf;

/// ディレクトリ走査で見つかった 1 件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListedPrism {
    Ok(Prism),
    /// 設定が壊れている・名前が解決できない（一覧全体は止めない）
    Broken { id: PrismId, error: Error },
}

/// prism の保存先（Outbound ポート）
pub trait PrismRepository: Send + Sync {
    /// 識別子から導出されるパス
    fn paths(&self, id: &PrismId) -> PrismPaths;

    /// 下書きから Prism を構築する。識別子が無ければ新しいトークンを発行し、
    /// 既存の設定ファイルがあれば読み込んでマージする。
    fn construct(&self, draft: PrismDraft) -> Result<Prism, Error>;

    /// 既存の prism を識別子で読み込む
    fn load(&self, id: &PrismId) -> Result<Prism, Error> {
        self.construct(PrismDraft::with_id(id.clone()))
    }

    /// バンドルディレクトリが存在するか
    fn exists(&self, id: &PrismId) -> bool;

    /// 設定ファイルを読む（無ければ None）
    fn load_config(&self, id: &PrismId) -> Result<Option<PrismConfig>, Error>;

    /// 設定ファイルを上書き保存する
    fn save_config(&self, prism: &Prism) -> Result<(), Error>;

    /// 起動スクリプトを現在の設定から作り直し、そのパスを返す
    fn build_script(&self, prism: &Prism) -> Result<PathBuf, Error>;

    /// data_dir を走査して全 prism を返す
    fn list(&self) -> Result<Vec<ListedPrism>, Error>;

    /// バンドル一式とキャッシュディレクトリを作る（どちらかが既にあれば AlreadyExists）
    fn create(&self, prism: &Prism) -> Result<(), Error>;

    /// 表示名を変更し、変更後の Prism を返す
    fn rename(&self, prism: &Prism, new_name: &str) -> Result<Prism, Error>;

    /// バンドルとキャッシュを再帰的に削除する
    fn delete(&self, prism: &Prism) -> Result<(), Error>;
}
