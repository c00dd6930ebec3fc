//! edit / open コマンドのユースケース（設定ファイルを外部アプリに渡す）

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};

use crate::ports::outbound::{Launcher, PrismRepository};

use super::resolve::resolve_prism;

pub struct EditUseCase {
    repo: Arc<dyn PrismRepository>,
    fs: Arc<dyn FileSystem>,
    launcher: Arc<dyn Launcher>,
    log: Arc<dyn Log>,
}

impl EditUseCase {
    pub fn new(
        repo: Arc<dyn PrismRepository>,
        fs: Arc<dyn FileSystem>,
        launcher: Arc<dyn Launcher>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            repo,
            fs,
            launcher,
            log,
        }
    }

    /// 設定ファイルをエディタで開く
    ///
    /// バンドル内に設定ファイルが無い（旧方式・旧配置）ときは現在の値で書き出してから開く。
    pub fn edit(&self, key: &str) -> Result<Option<String>, Error> {
        let prism = resolve_prism(&self.repo, key)?;
        let config = self.repo.paths(&prism.id).bundle.config_file();
        if !self.fs.exists(&config) {
            self.repo.save_config(&prism)?;
        }
        self.trace("edit", prism.id.as_str());
        self.launcher.open_file(&config)?;
        Ok(None)
    }

    /// 設定ファイルを Finder で表示する
    pub fn open(&self, key: &str) -> Result<Option<String>, Error> {
        let prism = resolve_prism(&self.repo, key)?;
        let config = self.repo.paths(&prism.id).bundle.config_file();
        self.trace("open", prism.id.as_str());
        self.launcher.reveal(&config)?;
        Ok(None)
    }

    fn trace(&self, kind: &str, id: &str) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "handing config file to launcher")
                .layer("usecase")
                .kind(kind)
                .field("id", id),
        );
    }
}
