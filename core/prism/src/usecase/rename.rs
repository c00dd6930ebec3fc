//! rename コマンドのユースケース

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::validate_name;
use crate::ports::outbound::{PrismRepository, UserPrompt};

use super::resolve::{name_in_use, resolve_prism};

const PROMPT_TITLE: &str = "Rename prism";

pub struct RenameUseCase {
    repo: Arc<dyn PrismRepository>,
    prompt: Arc<dyn UserPrompt>,
    log: Arc<dyn Log>,
}

impl RenameUseCase {
    pub fn new(
        repo: Arc<dyn PrismRepository>,
        prompt: Arc<dyn UserPrompt>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self { repo, prompt, log }
    }

    /// 新しい名前を聞いて変更する。キャンセルなら None
    pub fn run(&self, key: &str) -> Result<Option<String>, Error> {
        let prism = resolve_prism(&self.repo, key)?;
        let Some(new_name) = self.ask_name(&prism.name)? else {
            return Ok(None);
        };
        if new_name == prism.name {
            return Ok(None);
        }
        if name_in_use(&self.repo, &new_name)? {
            return Err(Error::already_exists(format!(
                "A prism named {} already exists",
                new_name
            )));
        }

        let renamed = self.repo.rename(&prism, &new_name)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "renamed prism")
                .layer("usecase")
                .kind("rename")
                .field("id", renamed.id.as_str())
                .field("from", prism.name.as_str())
                .field("to", renamed.name.as_str()),
        );
        Ok(Some(format!("Renamed prism {} to {}", prism.name, renamed.name)))
    }

    /// 空白を含まない名前が入力されるまで聞き直す
    fn ask_name(&self, current: &str) -> Result<Option<String>, Error> {
        let message = format!("New name for {} (no spaces)", current);
        loop {
            let Some(answer) = self.prompt.ask_text(PROMPT_TITLE, &message)? else {
                return Ok(None);
            };
            let answer = answer.trim().to_string();
            match validate_name(&answer) {
                Ok(()) => return Ok(Some(answer)),
                Err(e) => self.prompt.show_message(PROMPT_TITLE, &e.to_string())?,
            }
        }
    }
}
