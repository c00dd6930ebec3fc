//! ユーザーが渡したキー（識別子または表示名）から prism を引く

use std::sync::Arc;

use common::error::Error;

use crate::domain::{Prism, PrismId};
use crate::ports::outbound::{ListedPrism, PrismRepository};

/// `<key>.app` があればそれを、無ければ表示名の完全一致を返す
pub fn resolve_prism(repo: &Arc<dyn PrismRepository>, key: &str) -> Result<Prism, Error> {
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::invalid_argument("A prism identifier is required"));
    }
    if let Ok(id) = PrismId::parse(key) {
        if repo.exists(&id) {
            return repo.load(&id);
        }
    }
    find_by_name(repo, key)?
        .ok_or_else(|| Error::not_found(format!("There is no prism with id {}", key)))
}

/// 表示名が一致する prism（読めないエントリは無視する）
pub fn find_by_name(repo: &Arc<dyn PrismRepository>, name: &str) -> Result<Option<Prism>, Error> {
    Ok(repo.list()?.into_iter().find_map(|listed| match listed {
        ListedPrism::Ok(p) if p.name == name => Some(p),
        _ => None,
    }))
}

/// 名前 name が既存の prism（表示名または旧方式のディレクトリ名）と衝突するか
pub fn name_in_use(repo: &Arc<dyn PrismRepository>, name: &str) -> Result<bool, Error> {
    if let Ok(id) = PrismId::parse(name) {
        if repo.exists(&id) {
            return Ok(true);
        }
    }
    Ok(find_by_name(repo, name)?.is_some())
}
