//! Outbound ポート: アプリが外界（prism の保存先・ユーザー対話・アプリ起動・検索）を使うための trait

pub mod fuzzy_filter;
pub mod launcher;
pub mod prism_repository;
pub mod user_prompt;

pub use fuzzy_filter::FuzzyFilter;
pub use launcher::Launcher;
pub use prism_repository::{ListedPrism, PrismRepository};
pub use user_prompt::UserPrompt;
