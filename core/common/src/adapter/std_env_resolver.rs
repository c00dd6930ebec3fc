//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::Dirs;
use crate::error::Error;
use crate::ports::outbound::{DirOverrides, EnvResolver};
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "prism";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self, overrides: &DirOverrides) -> Result<Dirs, Error> {
        resolve_dirs_with(overrides, |name| self.var(name))
    }

    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok().filter(|s| !s.is_empty())
    }
}

/// 環境変数の読み取り関数を受け取ってディレクトリを解決する（テストから直接呼ぶ）
pub(crate) fn resolve_dirs_with(
    overrides: &DirOverrides,
    var: impl Fn(&str) -> Option<String>,
) -> Result<Dirs, Error> {
    let prism_home = var("PRISM_HOME").map(PathBuf::from);
    let home = var("HOME").map(PathBuf::from);

    // XDG 変数 > ~/<fallback>。どちらも無ければエラー
    let xdg = |xdg_var: &str, fallback: &str| -> Result<PathBuf, Error> {
        var(xdg_var)
            .map(PathBuf::from)
            .or_else(|| home.as_ref().map(|h| h.join(fallback)))
            .map(|base| base.join(APP_DIR))
            .ok_or_else(|| Error::env("HOME is not set"))
    };

    let under_home = |sub: &str| prism_home.as_ref().map(|h| h.join(sub));

    let data_dir = match overrides
        .data_dir
        .clone()
        .or_else(|| var("alfred_workflow_data").map(PathBuf::from))
        .or_else(|| under_home("data"))
    {
        Some(p) => p,
        None => xdg("XDG_DATA_HOME", ".local/share")?,
    };
    let cache_dir = match overrides
        .cache_dir
        .clone()
        .or_else(|| var("alfred_workflow_cache").map(PathBuf::from))
        .or_else(|| under_home("cache"))
    {
        Some(p) => p,
        None => xdg("XDG_CACHE_HOME", ".cache")?,
    };
    let state_dir = match under_home("state") {
        Some(p) => p,
        None => xdg("XDG_STATE_HOME", ".local/state")?,
    };
    let config_dir = match under_home("config") {
        Some(p) => p,
        None => xdg("XDG_CONFIG_HOME", ".config")?,
    };

    Ok(Dirs {
        config_dir,
        data_dir,
        state_dir,
        cache_dir,
    })
}
