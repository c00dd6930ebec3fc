//! 一覧クエリと start 引数の解釈
//!
//! 先頭の記号でモードを切り替える:
//! - `+name [description]` 作成候補
//! - `?` ヘルプ
//! - それ以外は既存 prism の一覧。空白を含むと `<タイトル完全一致> <引数>`、含まなければあいまい検索

/// 作成モードの記号
pub const CREATE_SIGIL: char = '+';
/// ヘルプモードの記号
pub const HELP_SIGIL: char = '?';
/// start 引数の識別子と URL の区切り
pub const ARG_SEPARATOR: char = '|';

/// `list` のクエリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    /// 作成候補（name が空なら汎用の「新規作成」項目）
    Create {
        raw: String,
        name: Option<String>,
        description: Option<String>,
    },
    Help,
    Browse(BrowseFilter),
}

/// 一覧モードの絞り込み
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseFilter {
    All,
    Fuzzy(String),
    /// タイトル完全一致の 1 件に、末尾テキストを起動引数として付ける
    Exact { title: String, argument: String },
}

impl ListQuery {
    pub fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix(CREATE_SIGIL) {
            let (name, description) = split_name_description(rest);
            return ListQuery::Create {
                raw: raw.to_string(),
                name: (!name.is_empty()).then(|| name.to_string()),
                description,
            };
        }
        if raw.starts_with(HELP_SIGIL) {
            return ListQuery::Help;
        }
        let query = raw.trim();
        if query.is_empty() {
            return ListQuery::Browse(BrowseFilter::All);
        }
        match query.split_once(' ') {
            Some((title, argument)) => ListQuery::Browse(BrowseFilter::Exact {
                title: title.to_string(),
                argument: argument.trim().to_string(),
            }),
            None => ListQuery::Browse(BrowseFilter::Fuzzy(query.to_string())),
        }
    }
}

/// 先頭の空白区切りトークンを名前、残りを説明として分ける
pub fn split_name_description(input: &str) -> (&str, Option<String>) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((name, rest)) => {
            let rest = rest.trim();
            (name, (!rest.is_empty()).then(|| rest.to_string()))
        }
        None => (input, None),
    }
}

/// `start` の引数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartTarget {
    /// `+...` は作成のショートカット（残りは name [description]）
    Create(String),
    Help,
    Prism { key: String, url: Option<String> },
}

impl StartTarget {
    /// `<identifier>|<url>` を最初の区切りで分ける
    pub fn parse(argument: &str) -> Self {
        let (key, url) = match argument.split_once(ARG_SEPARATOR) {
            Some((k, u)) => (k, Some(u.trim()).filter(|u| !u.is_empty())),
            None => (argument, None),
        };
        let key = key.trim();
        if let Some(rest) = key.strip_prefix(CREATE_SIGIL) {
            return StartTarget::Create(rest.trim().to_string());
        }
        if key == HELP_SIGIL.to_string() {
            return StartTarget::Help;
        }
        StartTarget::Prism {
            key: key.to_string(),
            url: url.map(str::to_string),
        }
    }
}

/// 一覧項目の arg（識別子 + 起動引数）
pub fn start_argument(key: &str, url: &str) -> String {
    format!("{}{}{}", key, ARG_SEPARATOR, url)
}
