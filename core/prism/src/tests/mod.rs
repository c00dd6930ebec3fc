//! ユースケースのテスト（一時ディレクトリ上の実ファイル + 記録する偽のプロンプト・ランチャー）

mod run_app_tests;

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use common::adapter::{NoopLog, StdFileSystem};
use common::error::Error;
use common::ports::outbound::IdGenerator;
use tempfile::TempDir;

use crate::adapter::{FsPrismRepository, SkimFuzzyFilter};
use crate::domain::{PrismContext, PrismId, PrismLayout, PrismSettings};
use crate::ports::outbound::{Launcher, PrismRepository, UserPrompt};
use crate::wiring::{assemble, App, Ports};

pub(crate) const TOKENS: [&str; 4] = [
    "aaaaaaaa-0000-4000-8000-000000000001",
    "aaaaaaaa-0000-4000-8000-000000000002",
    "aaaaaaaa-0000-4000-8000-000000000003",
    "aaaaaaaa-0000-4000-8000-000000000004",
];

/// 決まった順にトークンを返す
pub(crate) struct FixedIds(AtomicUsize);

impl IdGenerator for FixedIds {
    fn next_token(&self) -> String {
        TOKENS[self.0.fetch_add(1, Ordering::SeqCst) % TOKENS.len()].to_string()
    }
}

/// 用意した答えを順に返し、呼ばれた内容を記録するプロンプト
#[derive(Default)]
pub(crate) struct ScriptedPrompt {
    texts: Mutex<VecDeque<Option<String>>>,
    confirms: Mutex<VecDeque<bool>>,
    pub asked: Mutex<Vec<String>>,
    pub messages: Mutex<Vec<(String, String)>>,
}

impl ScriptedPrompt {
    pub fn answering(texts: &[Option<&str>]) -> Self {
        let prompt = Self::default();
        *prompt.texts.lock().unwrap() = texts.iter().map(|t| t.map(str::to_string)).collect();
        prompt
    }

    pub fn confirming(answer: bool) -> Self {
        let prompt = Self::default();
        prompt.confirms.lock().unwrap().push_back(answer);
        prompt
    }
}

impl UserPrompt for ScriptedPrompt {
    fn ask_text(&self, title: &str, _message: &str) -> Result<Option<String>, Error> {
        self.asked.lock().unwrap().push(title.to_string());
        Ok(self.texts.lock().unwrap().pop_front().flatten())
    }

    fn confirm(&self, title: &str, _message: &str, default_yes: bool) -> Result<bool, Error> {
        self.asked.lock().unwrap().push(title.to_string());
        Ok(self
            .confirms
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(default_yes))
    }

    fn show_message(&self, title: &str, message: &str) -> Result<(), Error> {
        self.messages
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Launched {
    App(PathBuf, Vec<String>),
    File(PathBuf),
    Reveal(PathBuf),
}

/// 起動要求を記録するだけのランチャー
#[derive(Default)]
pub(crate) struct RecordingLauncher {
    pub calls: Mutex<Vec<Launched>>,
}

impl Launcher for RecordingLauncher {
    fn open_app(&self, bundle: &Path, args: &[String]) -> Result<(), Error> {
        self.calls
            .lock()
            .unwrap()
            .push(Launched::App(bundle.to_path_buf(), args.to_vec()));
        Ok(())
    }

    fn open_file(&self, path: &Path) -> Result<(), Error> {
        self.calls
            .lock()
            .unwrap()
            .push(Launched::File(path.to_path_buf()));
        Ok(())
    }

    fn reveal(&self, path: &Path) -> Result<(), Error> {
        self.calls
            .lock()
            .unwrap()
            .push(Launched::Reveal(path.to_path_buf()));
        Ok(())
    }
}

/// 一時ディレクトリ上に組み立てた App と、検証用のハンドル
pub(crate) struct TestEnv {
    pub tmp: TempDir,
    pub app: App,
    pub repo: Arc<dyn PrismRepository>,
    pub prompt: Arc<ScriptedPrompt>,
    pub launcher: Arc<RecordingLauncher>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_prompt(ScriptedPrompt::default())
    }

    pub fn with_prompt(prompt: ScriptedPrompt) -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = PrismContext {
            layout: PrismLayout::new(tmp.path().join("data"), tmp.path().join("cache")),
            settings: PrismSettings {
                browser: PathBuf::from("/opt/browser/bin/chrome"),
                ..PrismSettings::default()
            },
        };
        let prompt = Arc::new(prompt);
        let launcher = Arc::new(RecordingLauncher::default());
        let fs = Arc::new(StdFileSystem);
        // 検証用に同じ設定・同じファイルを見るリポジトリを別に持つ（トークン発行は使わない）
        let repo: Arc<dyn PrismRepository> = Arc::new(FsPrismRepository::new(
            fs.clone(),
            Arc::new(FixedIds(AtomicUsize::new(TOKENS.len() - 1))),
            Arc::new(NoopLog),
            ctx.clone(),
        ));
        let app = assemble(
            Ports {
                fs,
                id_gen: Arc::new(FixedIds(AtomicUsize::new(0))),
                prompt: prompt.clone(),
                launcher: launcher.clone(),
                fuzzy: Arc::new(SkimFuzzyFilter::new()),
                logger: Arc::new(NoopLog),
            },
            ctx,
        );
        Self {
            tmp,
            app,
            repo,
            prompt,
            launcher,
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.tmp.path().join("data")
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.tmp.path().join("cache")
    }

    /// 作成ユースケース経由で作り、その識別子を返す
    pub fn create(&self, input: &str) -> PrismId {
        self.app.create_use_case.run(Some(input)).unwrap();
        let name = input.split_whitespace().next().unwrap();
        self.repo
            .list()
            .unwrap()
            .into_iter()
            .find_map(|l| match l {
                crate::ports::outbound::ListedPrism::Ok(p) if p.name == name => Some(p.id),
                _ => None,
            })
            .unwrap()
    }

    /// 旧方式（名前＝ディレクトリ名）の prism を直接置く
    pub fn place_legacy(&self, name: &str) -> PrismId {
        let id = PrismId::parse(name).unwrap();
        let paths = self.repo.paths(&id);
        std::fs::create_dir_all(&paths.bundle.root).unwrap();
        std::fs::create_dir_all(&paths.cache_dir).unwrap();
        id
    }
}
