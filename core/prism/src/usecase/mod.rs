//! ユースケース（コマンドごとの手順）
//!
//! 外界へのアクセスはすべて ports::outbound 経由。各 run はホストに出すメッセージを返す。

mod create;
mod delete;
mod edit;
mod list;
mod rename;
mod resolve;
mod start;

pub use create::CreateUseCase;
pub use delete::DeleteUseCase;
pub use edit::EditUseCase;
pub use list::{ListUseCase, EMPTY_HINT, EMPTY_TITLE};
pub use rename::RenameUseCase;
pub use start::StartUseCase;
