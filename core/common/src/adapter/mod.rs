//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase は ports::outbound の trait 経由でのみファイル・プロセス・環境変数に触れる。
//! ここには標準実装（Std*）とテスト用の実装（NoopLog 等）を置く。

pub mod file_json_log;
pub mod human_log;
pub mod std_env_resolver;
pub mod std_fs;
pub mod std_id_generator;
pub mod std_process;

pub use crate::ports::outbound::{FileMetadata, FileSystem, Process};
pub use file_json_log::{FileJsonLog, NoopLog, TeeLog};
pub use human_log::StderrLog;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use std_id_generator::StdIdGenerator;
pub use std_process::StdProcess;
