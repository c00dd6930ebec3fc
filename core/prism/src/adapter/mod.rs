//! prism 固有のアダプター（ports::outbound の実装）

mod cli_prompt;
mod fs_prism_repository;
mod open_launcher;
mod osascript_prompt;
mod settings_loader;
mod skim_fuzzy_filter;

pub use cli_prompt::CliPrompt;
pub use fs_prism_repository::FsPrismRepository;
pub use open_launcher::OpenLauncher;
pub use osascript_prompt::OsascriptPrompt;
pub use settings_loader::load_settings;
pub use skim_fuzzy_filter::SkimFuzzyFilter;
