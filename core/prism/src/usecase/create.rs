//! create コマンドのユースケース

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::query::split_name_description;
use crate::domain::{validate_name, PrismDraft};
use crate::ports::outbound::{PrismRepository, UserPrompt};

use super::resolve::name_in_use;

const PROMPT_TITLE: &str = "Prism name";
const PROMPT_MESSAGE: &str = "Give a name for this prism. The name may not contain spaces. \
You may add a description after the name (e.g. myPrism This is a flashy prism)";

pub struct CreateUseCase {
    repo: Arc<dyn PrismRepository>,
    prompt: Arc<dyn UserPrompt>,
    log: Arc<dyn Log>,
}

impl CreateUseCase {
    pub fn new(
        repo: Arc<dyn PrismRepository>,
        prompt: Arc<dyn UserPrompt>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self { repo, prompt, log }
    }

    /// 作成して確認メッセージを返す。名前の入力をキャンセルしたら None
    pub fn run(&self, input: Option<&str>) -> Result<Option<String>, Error> {
        let input = match input.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => s.to_string(),
            None => match self.prompt.ask_text(PROMPT_TITLE, PROMPT_MESSAGE)? {
                Some(s) => s,
                None => return Ok(None),
            },
        };

        let (name, description) = split_name_description(&input);
        validate_name(name)?;
        if name_in_use(&self.repo, name)? {
            return Err(Error::already_exists(format!(
                "A prism named {} already exists",
                name
            )));
        }

        let prism = self.repo.construct(PrismDraft::named(name, description))?;
        self.repo.create(&prism)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "created prism")
                .layer("usecase")
                .kind("create")
                .field("id", prism.id.as_str())
                .field("name", prism.name.as_str()),
        );
        Ok(Some(format!("Created prism {}", prism.name)))
    }
}
