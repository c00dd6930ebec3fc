//! start コマンドのユースケース
//!
//! 起動スクリプトを毎回作り直してからバンドルを起動する。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{help, StartTarget};
use crate::ports::outbound::{Launcher, PrismRepository, UserPrompt};

use super::create::CreateUseCase;
use super::resolve::resolve_prism;

pub struct StartUseCase {
    repo: Arc<dyn PrismRepository>,
    launcher: Arc<dyn Launcher>,
    prompt: Arc<dyn UserPrompt>,
    create: Arc<CreateUseCase>,
    log: Arc<dyn Log>,
}

impl StartUseCase {
    pub fn new(
        repo: Arc<dyn PrismRepository>,
        launcher: Arc<dyn Launcher>,
        prompt: Arc<dyn UserPrompt>,
        create: Arc<CreateUseCase>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            repo,
            launcher,
            prompt,
            create,
            log,
        }
    }

    pub fn run(&self, argument: &str) -> Result<Option<String>, Error> {
        match StartTarget::parse(argument) {
            StartTarget::Create(input) => self.create.run(Some(&input)),
            StartTarget::Help => {
                self.prompt.show_message(help::TITLE, help::TEXT)?;
                Ok(None)
            }
            StartTarget::Prism { key, url } => {
                let prism = resolve_prism(&self.repo, &key)?;
                self.repo.build_script(&prism)?;
                let bundle = self.repo.paths(&prism.id).bundle.root;
                let args: Vec<String> = url.into_iter().collect();
                self.launcher.open_app(&bundle, &args)?;
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Info, "started prism")
                        .layer("usecase")
                        .kind("start")
                        .field("id", prism.id.as_str())
                        .field("with_url", !args.is_empty()),
                );
                Ok(None)
            }
        }
    }
}
