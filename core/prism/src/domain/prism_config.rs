//! prism.json の読み書き
//!
//! 読み込みは 2 形式を受け付ける: 素の JSON と、`//` 行コメント付きの JSON。
//! コメント行を除いたあと、最初の `{` 行より前の前置きテキストも読み飛ばす。
//! 書き込みは手編集の案内コメントを先頭に付ける。

use common::error::Error;
use serde::{Deserialize, Serialize};

const COMMENT_MARKER: &str = "//";

const PREAMBLE: &str = "\
// Prism configuration. Lines starting with // are ignored.
//
//   name         label shown in the prism list
//   description  optional subtitle shown under the name
//   options      extra browser flags, applied in order on every start,
//                for example [\"--incognito\", \"--app=https://example.com\"]
//
// The launch script is rebuilt from this file every time the prism starts.
";

/// 設定ファイルの内容。欠けているキーは None（メモリ上の値を残す）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrismConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl PrismConfig {
    /// 設定ファイルの文字列を解析する
    pub fn parse(text: &str) -> Result<Self, Error> {
        let body = strip_comments(text);
        let body = skip_preamble(&body);
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(body)?)
    }

    /// 設定ファイルの文字列を生成する（案内コメント + 整形 JSON + 改行）
    pub fn render(&self) -> Result<String, Error> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(format!("{}{}\n", PREAMBLE, json))
    }
}

/// 前後空白を除いて `//` で始まる行を取り除く
pub fn strip_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with(COMMENT_MARKER))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 最初に `{` で始まる行より前を読み飛ばす
fn skip_preamble(body: &str) -> &str {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.trim_start().starts_with('{') {
            return &body[offset..];
        }
        offset += line.len();
    }
    // オブジェクトが無い場合は元の文字列で JSON エラーにする（空なら空設定）
    if body.trim().is_empty() {
        ""
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strict_json() {
        let cfg = PrismConfig::parse(r#"{"description": "mail", "options": ["--a", "--b"]}"#).unwrap();
        assert_eq!(cfg.description.as_deref(), Some("mail"));
        assert_eq!(cfg.options, Some(vec!["--a".to_string(), "--b".to_string()]));
        assert_eq!(cfg.name, None);
    }

    #[test]
    fn test_comment_lines_are_ignored() {
        let with_comments = "// header\n{\n  // the name\n  \"name\": \"Work\",\n    // indented comment\n  \"options\": []\n}\n";
        let without = "{\n  \"name\": \"Work\",\n  \"options\": []\n}\n";
        assert_eq!(
            PrismConfig::parse(with_comments).unwrap(),
            PrismConfig::parse(without).unwrap()
        );
    }

    #[test]
    fn test_preamble_text_is_skipped() {
        let text = "Edit the options below, then save.\nOne flag per entry.\n{\"options\": [\"--x\"]}";
        let cfg = PrismConfig::parse(text).unwrap();
        assert_eq!(cfg.options, Some(vec!["--x".to_string()]));
    }

    #[test]
    fn test_unknown_and_missing_fields() {
        let cfg = PrismConfig::parse(r#"{"version": 3}"#).unwrap();
        assert_eq!(cfg, PrismConfig::default());
    }

    #[test]
    fn test_empty_file_is_empty_config() {
        assert_eq!(PrismConfig::parse("").unwrap(), PrismConfig::default());
        assert_eq!(PrismConfig::parse("// only comments\n").unwrap(), PrismConfig::default());
    }

    #[test]
    fn test_broken_json_is_json_error() {
        let err = PrismConfig::parse("{\"name\": ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_render_is_stable_across_reload() {
        let cfg = PrismConfig {
            name: Some("Work".to_string()),
            description: Some("with \"quotes\" and // slashes".to_string()),
            options: Some(vec!["--app=https://example.com".to_string(), "--incognito".to_string()]),
        };
        let first = cfg.render().unwrap();
        let reloaded = PrismConfig::parse(&first).unwrap();
        assert_eq!(reloaded, cfg);
        assert_eq!(reloaded.render().unwrap(), first);
    }

    #[test]
    fn test_render_keeps_description() {
        let cfg = PrismConfig {
            name: None,
            description: Some("keep me".to_string()),
            options: Some(vec![]),
        };
        let text = cfg.render().unwrap();
        assert!(text.contains("\"description\": \"keep me\""));
        assert!(text.contains("\"options\": []"));
    }
}
