//! prism の識別子（ディスク上のディレクトリ名のキー）
//!
//! 新規作成はランダムな UUID トークン、過去のデータは表示名そのものをキーにしている。
//! どちらも同じ型で扱い、境界（CLI 引数・ディレクトリ走査）で一度だけ検証する。

use common::error::Error;

/// 識別子の方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScheme {
    /// 作成時に生成した不透明トークン。表示名は prism.json のみに持つ
    Token,
    /// 表示名をそのままディレクトリ名にした旧方式
    Name,
}

/// 検証済みの prism 識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrismId(String);

impl PrismId {
    /// 文字列を検証して識別子にする
    ///
    /// 空・空白を含む・`/` `|` を含む・`.` `+` `?` で始まるものは拒否する。
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::invalid_argument("A prism identifier is required"));
        }
        if s.chars().any(|c| c.is_whitespace() || c == '/' || c == '|') {
            return Err(Error::invalid_argument(format!(
                "Invalid prism identifier '{}': whitespace, '/' and '|' are not allowed",
                s
            )));
        }
        if s.starts_with(['.', '+', '?']) {
            return Err(Error::invalid_argument(format!(
                "Invalid prism identifier '{}': may not start with '.', '+' or '?'",
                s
            )));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn scheme(&self) -> IdScheme {
        if uuid::Uuid::parse_str(&self.0).is_ok() {
            IdScheme::Token
        } else {
            IdScheme::Name
        }
    }
}

impl std::ops::Deref for PrismId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for PrismId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for PrismId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_scheme() {
        let id = PrismId::parse("6f1c2a7e-3b4d-4e5f-8a9b-0c1d2e3f4a5b").unwrap();
        assert_eq!(id.scheme(), IdScheme::Token);
    }

    #[test]
    fn test_name_scheme() {
        let id = PrismId::parse("Work").unwrap();
        assert_eq!(id.scheme(), IdScheme::Name);
        assert_eq!(id.as_str(), "Work");
    }

    #[test]
    fn test_rejects_invalid() {
        for bad in ["", "a b", "a/b", "a|b", ".hidden", "+new", "?"] {
            let err = PrismId::parse(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{:?} should be rejected", bad);
        }
    }
}
