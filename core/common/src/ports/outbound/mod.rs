//! Outbound ポート: アプリが外界（FS・プロセス・環境変数・ID 生成・ログ）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod id_generator;
pub mod log;
pub mod process;

pub use env_resolver::{DirOverrides, EnvResolver};
pub use fs::{FileMetadata, FileSystem};
pub use id_generator::IdGenerator;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use process::{Process, ProcessOutput};
