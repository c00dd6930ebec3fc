//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。コマンド境界（main）まで `?` で伝播させ、
//! メッセージを stderr に出して `exit_code()` で終了する。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（名前・識別子の欠落、不正な識別子など）
    #[error("{0}")]
    InvalidArgument(String),

    /// 設定から表示名を解決できない
    #[error("{0}")]
    MissingName(String),

    /// 作成・リネーム時の衝突
    #[error("{0}")]
    AlreadyExists(String),

    /// 存在しない prism を対象にした
    #[error("{0}")]
    NotFound(String),

    /// ファイルシステム操作の失敗
    #[error("{0}")]
    Io(String),

    /// プロセス起動の失敗
    #[error("{0}")]
    LaunchFailed(String),

    /// JSON の解析・生成の失敗
    #[error("JSON error: {0}")]
    Json(String),

    /// 環境変数からの解決失敗
    #[error("{0}")]
    Env(String),

    /// その他の内部エラー
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn missing_name(msg: impl Into<String>) -> Self {
        Error::MissingName(msg.into())
    }

    pub fn already_exists(msg: impl Into<String>) -> Self {
        Error::AlreadyExists(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn launch_failed(msg: impl Into<String>) -> Self {
        Error::LaunchFailed(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// 使い方の表示が必要なエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// 終了コード（sysexits.h 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::MissingName(_) | Error::Json(_) => 65,
            Error::NotFound(_) => 66,
            Error::LaunchFailed(_) => 69,
            Error::System(_) | Error::Env(_) => 70,
            Error::AlreadyExists(_) => 73,
            Error::Io(_) => 74,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::system("test");
        assert_eq!(err.exit_code(), 70);
        assert!(!err.is_usage());
    }

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        assert_eq!(Error::not_found("x").exit_code(), 66);
        assert_eq!(Error::already_exists("x").exit_code(), 73);
        assert_eq!(Error::io_msg("x").exit_code(), 74);
        assert_eq!(Error::launch_failed("x").exit_code(), 69);
        assert_eq!(Error::missing_name("x").exit_code(), 65);
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
