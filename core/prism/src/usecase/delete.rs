//! delete コマンドのユースケース

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::ports::outbound::{PrismRepository, UserPrompt};

use super::resolve::resolve_prism;

pub struct DeleteUseCase {
    repo: Arc<dyn PrismRepository>,
    prompt: Arc<dyn UserPrompt>,
    log: Arc<dyn Log>,
}

impl DeleteUseCase {
    pub fn new(
        repo: Arc<dyn PrismRepository>,
        prompt: Arc<dyn UserPrompt>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self { repo, prompt, log }
    }

    /// 確認の上で削除する。断られたら何もせず None
    pub fn run(&self, key: &str) -> Result<Option<String>, Error> {
        let prism = resolve_prism(&self.repo, key)?;
        let confirmed = self.prompt.confirm(
            "Delete prism",
            &format!("Are you sure you want to delete {}?", prism.name),
            true,
        )?;
        if !confirmed {
            return Ok(None);
        }

        self.repo.delete(&prism)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "deleted prism")
                .layer("usecase")
                .kind("delete")
                .field("id", prism.id.as_str()),
        );
        Ok(Some(format!("Deleted prism {}", prism.name)))
    }
}
