//! ホスト（ランチャー）に返す一覧項目
//!
//! `{"items": [{"title", "subtitle", "arg", "valid"}]}` 形式で stdout に出す。

use serde::Serialize;

/// 選択可能な 1 項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// 選択時にホストが次のコマンドへ渡す値
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    pub valid: bool,
}

impl ListItem {
    /// 選択できる項目
    pub fn action(title: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            arg: Some(arg.into()),
            valid: true,
        }
    }

    /// 表示だけの項目
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            arg: None,
            valid: false,
        }
    }

    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }
}

/// `list` の出力全体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOutput {
    pub items: Vec<ListItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_output() {
        let out = ListOutput {
            items: vec![
                ListItem::action("Mail", "abc").with_subtitle(Some("inbox".to_string())),
                ListItem::info("No prisms found"),
            ],
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["items"][0]["title"], "Mail");
        assert_eq!(json["items"][0]["subtitle"], "inbox");
        assert_eq!(json["items"][0]["arg"], "abc");
        assert_eq!(json["items"][0]["valid"], true);
        assert!(json["items"][1].get("arg").is_none());
        assert_eq!(json["items"][1]["valid"], false);
    }
}
