//! prism の保存先の標準実装（FileSystem 経由）
//!
//! data_dir/<id>.app をバンドル、cache_dir/<id> をブラウザのプロファイルとして扱う。
//! 作成は data_dir/.<id>.app.staging で組み立ててから rename で配置する。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{FileSystem, IdGenerator, Log, LogLevel, LogRecord};

use crate::domain::{
    info_plist, launch_script, validate_name, BundleLayout, IdScheme, Prism, PrismConfig,
    PrismContext, PrismDraft, PrismId, PrismLayout, PrismPaths,
};
use crate::ports::outbound::{ListedPrism, PrismRepository};

/// FileSystem 上の prism リポジトリ
pub struct FsPrismRepository {
    fs: Arc<dyn FileSystem>,
    id_gen: Arc<dyn IdGenerator>,
    log: Arc<dyn Log>,
    ctx: PrismContext,
}

impl FsPrismRepository {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        id_gen: Arc<dyn IdGenerator>,
        log: Arc<dyn Log>,
        ctx: PrismContext,
    ) -> Self {
        Self {
            fs,
            id_gen,
            log,
            ctx,
        }
    }

    fn layout(&self) -> &PrismLayout {
        &self.ctx.layout
    }

    fn write_config_at(&self, bundle: &BundleLayout, prism: &Prism) -> Result<(), Error> {
        let text = prism.to_config().render()?;
        self.fs.write(&bundle.config_file(), &text)
    }

    fn write_script_at(
        &self,
        bundle: &BundleLayout,
        prism: &Prism,
        cache_dir: &Path,
    ) -> Result<PathBuf, Error> {
        self.fs.create_dir_all(&bundle.macos_dir())?;
        let script = bundle.script_file();
        let body = launch_script::render(&self.ctx.settings.browser, &prism.options, cache_dir);
        self.fs.write(&script, &body)?;
        self.fs.set_executable(&script)?;
        Ok(script)
    }

    /// staging にバンドル一式を組み立てる
    fn assemble(&self, prism: &Prism, paths: &PrismPaths) -> Result<(), Error> {
        let staging = &paths.staging;
        self.fs.create_dir(&staging.root)?;
        self.write_config_at(staging, prism)?;

        self.fs.create_dir(&staging.contents_dir())?;
        let bundle_id = info_plist::bundle_id(&self.ctx.settings.bundle_id_prefix, prism.id.as_str());
        self.fs.write(&staging.info_plist(), &info_plist::render(&bundle_id))?;

        self.fs.create_dir(&staging.macos_dir())?;
        self.write_script_at(staging, prism, &paths.cache_dir)?;

        self.fs.create_dir(&staging.resources_dir())?;
        match &self.ctx.settings.icon_file {
            Some(icon) => self.fs.copy_file(icon, &staging.icon_file())?,
            None => self.fs.write_bytes(&staging.icon_file(), info_plist::DEFAULT_ICON)?,
        }
        Ok(())
    }

    fn discard(&self, path: &Path) {
        if self.fs.exists(path) {
            if let Err(e) = self.fs.remove_dir_all(path) {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, "failed to clean up after create")
                        .layer("adapter")
                        .kind("fs")
                        .field("path", path.display().to_string())
                        .field("error", e.to_string()),
                );
            }
        }
    }

    fn rename_name_keyed(&self, prism: &Prism, new_name: &str) -> Result<Prism, Error> {
        let new_id = PrismId::parse(new_name)?;
        if new_id.scheme() != IdScheme::Name {
            return Err(Error::invalid_argument(format!(
                "Invalid prism name '{}': looks like a generated identifier",
                new_name
            )));
        }
        let from = self.paths(&prism.id);
        let to = self.paths(&new_id);
        if !self.fs.exists(&from.bundle.root) {
            return Err(Error::not_found(format!("There is no prism with id {}", prism.id)));
        }
        if !self.fs.exists(&from.cache_dir) {
            return Err(Error::not_found(format!(
                "Cache dir for {} does not exist: {}",
                prism.name,
                from.cache_dir.display()
            )));
        }
        if self.fs.exists(&to.bundle.root) || self.fs.exists(&to.cache_dir) {
            return Err(Error::already_exists(format!(
                "A prism named {} already exists",
                new_name
            )));
        }

        self.fs.rename(&from.bundle.root, &to.bundle.root)?;
        if let Err(e) = self.fs.rename(&from.cache_dir, &to.cache_dir) {
            // バンドルだけ移動した状態を残さない
            if let Err(revert) = self.fs.rename(&to.bundle.root, &from.bundle.root) {
                return Err(Error::io_msg(format!(
                    "{}; reverting the app bundle also failed: {}",
                    e, revert
                )));
            }
            return Err(e);
        }

        let renamed = Prism {
            id: new_id,
            name: new_name.to_string(),
            description: prism.description.clone(),
            options: prism.options.clone(),
        };
        // スクリプト内のプロファイルパスを新しい場所に合わせる
        self.write_script_at(&to.bundle, &renamed, &to.cache_dir)?;
        Ok(renamed)
    }
}

impl PrismRepository for FsPrismRepository {
    fn paths(&self, id: &PrismId) -> PrismPaths {
        self.layout().paths(id)
    }

    fn construct(&self, draft: PrismDraft) -> Result<Prism, Error> {
        let id = match (&draft.id, &draft.name) {
            (Some(id), _) => id.clone(),
            (None, Some(_)) => PrismId::parse(&self.id_gen.next_token())?,
            (None, None) => {
                return Err(Error::invalid_argument(
                    "A prism must have an identifier or a name",
                ))
            }
        };
        let mut draft = draft;
        if let Some(config) = self.load_config(&id)? {
            draft.merge(config);
        }
        draft.resolve(id)
    }

    fn exists(&self, id: &PrismId) -> bool {
        self.fs.exists(&self.paths(id).bundle.root)
    }

    fn load_config(&self, id: &PrismId) -> Result<Option<PrismConfig>, Error> {
        let paths = self.paths(id);
        let file = [paths.bundle.config_file(), paths.legacy_config_file]
            .into_iter()
            .find(|p| self.fs.exists(p));
        match file {
            Some(path) => {
                let text = self.fs.read_to_string(&path)?;
                PrismConfig::parse(&text)
                    .map(Some)
                    .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
            }
            None => Ok(None),
        }
    }

    fn save_config(&self, prism: &Prism) -> Result<(), Error> {
        let paths = self.paths(&prism.id);
        if !self.fs.exists(&paths.bundle.root) {
            return Err(Error::not_found(format!("There is no prism with id {}", prism.id)));
        }
        self.write_config_at(&paths.bundle, prism)
    }

    fn build_script(&self, prism: &Prism) -> Result<PathBuf, Error> {
        let paths = self.paths(&prism.id);
        if !self.fs.exists(&paths.bundle.root) {
            return Err(Error::not_found(format!("There is no prism with id {}", prism.id)));
        }
        self.write_script_at(&paths.bundle, prism, &paths.cache_dir)
    }

    fn list(&self) -> Result<Vec<ListedPrism>, Error> {
        let data_dir = &self.layout().data_dir;
        if !self.fs.exists(data_dir) {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        for entry in self.fs.read_dir(data_dir)? {
            let Some(id) = PrismLayout::id_from_entry(&entry) else {
                continue;
            };
            match self.load(&id) {
                Ok(prism) => out.push(ListedPrism::Ok(prism)),
                Err(error) => {
                    let _ = self.log.log(
                        &LogRecord::new(LogLevel::Warn, "unreadable prism in listing")
                            .layer("adapter")
                            .kind("config")
                            .field("id", id.as_str())
                            .field("error", error.to_string()),
                    );
                    out.push(ListedPrism::Broken { id, error });
                }
            }
        }
        Ok(out)
    }

    fn create(&self, prism: &Prism) -> Result<(), Error> {
        let paths = self.paths(&prism.id);
        if self.fs.exists(&paths.bundle.root) {
            return Err(Error::already_exists(format!(
                "App dir for {} already exists",
                prism.name
            )));
        }
        if self.fs.exists(&paths.cache_dir) {
            return Err(Error::already_exists(format!(
                "Cache dir for {} already exists",
                prism.name
            )));
        }
        self.fs.create_dir_all(&self.layout().data_dir)?;
        self.fs.create_dir_all(&self.layout().cache_dir)?;
        // 前回の中断で残った staging は作り直す
        self.discard(&paths.staging.root);

        if let Err(e) = self.assemble(prism, &paths) {
            self.discard(&paths.staging.root);
            return Err(e);
        }
        if let Err(e) = self.fs.create_dir(&paths.cache_dir) {
            self.discard(&paths.staging.root);
            return Err(e);
        }
        if let Err(e) = self.fs.rename(&paths.staging.root, &paths.bundle.root) {
            self.discard(&paths.staging.root);
            self.discard(&paths.cache_dir);
            return Err(e);
        }
        Ok(())
    }

    fn rename(&self, prism: &Prism, new_name: &str) -> Result<Prism, Error> {
        validate_name(new_name)?;
        match prism.scheme() {
            IdScheme::Token => {
                let renamed = Prism {
                    name: new_name.to_string(),
                    ..prism.clone()
                };
                self.save_config(&renamed)?;
                Ok(renamed)
            }
            IdScheme::Name => self.rename_name_keyed(prism, new_name),
        }
    }

    fn delete(&self, prism: &Prism) -> Result<(), Error> {
        let paths = self.paths(&prism.id);
        for dir in [&paths.bundle.root, &paths.cache_dir] {
            if !self.fs.exists(dir) {
                return Err(Error::not_found(format!(
                    "Cannot delete prism {}: {} does not exist",
                    prism.name,
                    dir.display()
                )));
            }
        }
        self.fs.remove_dir_all(&paths.bundle.root)?;
        self.fs.remove_dir_all(&paths.cache_dir)?;
        Ok(())
    }
}
