//! prism コマンドの enum（Command Pattern）
//!
//! ホストから渡されたコマンド名と引数を enum に落とし、main の match で 1 か所にディスパッチする。

use common::error::Error;

/// prism のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示
    Help,

    /// 一覧（list [query]）
    List { query: String },

    /// 作成（create [name [description]]）。None なら対話で名前を聞く
    Create { input: Option<String> },

    /// 設定ファイルを編集（edit <id>）
    Edit { key: String },

    /// Finder で表示（open <id>）
    Open { key: String },

    /// 表示名の変更（rename <id>）
    Rename { key: String },

    /// 削除（delete <id>）
    Delete { key: String },

    /// 起動（start <id>[|url]）
    Start { argument: String },
}

impl Command {
    /// コマンド名と引数から Command に解析する
    ///
    /// ホストは 1 つの文字列を渡すので、複数の語は空白 1 つで連結し直す。
    /// 未知の名前は InvalidArgument（clap を通った名前は常に既知）。
    pub fn parse_with_args(name: &str, args: &[String]) -> Result<Self, Error> {
        let joined = args.join(" ");
        Ok(match name {
            "help" => Command::Help,
            "list" => Command::List { query: joined },
            "create" => Command::Create {
                input: (!joined.trim().is_empty()).then_some(joined),
            },
            "edit" => Command::Edit { key: joined },
            "open" => Command::Open { key: joined },
            "rename" => Command::Rename { key: joined },
            "delete" => Command::Delete { key: joined },
            "start" => Command::Start { argument: joined },
            _ => {
                return Err(Error::invalid_argument(format!(
                    "Command '{}' is not implemented.",
                    name
                )))
            }
        })
    }

    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::List { .. } => "list",
            Command::Create { .. } => "create",
            Command::Edit { .. } => "edit",
            Command::Open { .. } => "open",
            Command::Rename { .. } => "rename",
            Command::Delete { .. } => "delete",
            Command::Start { .. } => "start",
        }
    }
}
