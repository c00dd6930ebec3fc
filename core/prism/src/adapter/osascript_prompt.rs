//! macOS のダイアログでの対話（/usr/bin/osascript を Process 経由で実行）
//!
//! ランチャーから呼ばれたときは端末が無いので、こちらを使う。

use std::path::PathBuf;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::Process;

use crate::ports::outbound::UserPrompt;

const OSASCRIPT: &str = "/usr/bin/osascript";

pub struct OsascriptPrompt {
    process: Arc<dyn Process>,
    program: PathBuf,
}

impl OsascriptPrompt {
    pub fn new(process: Arc<dyn Process>) -> Self {
        Self {
            process,
            program: PathBuf::from(OSASCRIPT),
        }
    }

    /// スクリプトを実行する。非 0 終了（キャンセル含む）は None
    fn eval(&self, script: String) -> Result<Option<String>, Error> {
        let out = self.process.output(&self.program, &["-e".to_string(), script])?;
        if out.code != 0 {
            return Ok(None);
        }
        Ok(Some(out.stdout))
    }
}

/// AppleScript の文字列リテラルにする
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `display dialog` の結果から `<key>:<value>` の値を取り出す
///
/// 結果は `button returned:OK, text returned:abc` の形で返る。
/// text returned は常に末尾なので、そこから行末までを値とする。
fn returned_value(result: &str, key: &str) -> Option<String> {
    let marker = format!("{}:", key);
    let start = result.find(&marker)? + marker.len();
    let rest = result[start..].trim_end_matches(['\r', '\n']);
    if key == "text returned" {
        return Some(rest.to_string());
    }
    Some(rest.split(',').next().unwrap_or_default().trim().to_string())
}

fn text_dialog(title: &str, message: &str) -> String {
    format!(
        "display dialog {} with title {} default answer \"\"",
        quote(message),
        quote(title)
    )
}

fn confirm_dialog(title: &str, message: &str, default_yes: bool) -> String {
    let default = if default_yes { "Yes" } else { "No" };
    format!(
        "display dialog {} with title {} buttons {{\"No\", \"Yes\"}} default button {} cancel button \"No\"",
        quote(message),
        quote(title),
        quote(default)
    )
}

fn message_dialog(title: &str, message: &str) -> String {
    format!(
        "display dialog {} with title {} buttons {{\"OK\"}} default button \"OK\"",
        quote(message),
        quote(title)
    )
}

impl UserPrompt for OsascriptPrompt {
    fn ask_text(&self, title: &str, message: &str) -> Result<Option<String>, Error> {
        Ok(self
            .eval(text_dialog(title, message))?
            .and_then(|out| returned_value(&out, "text returned")))
    }

    fn confirm(&self, title: &str, message: &str, default_yes: bool) -> Result<bool, Error> {
        Ok(self
            .eval(confirm_dialog(title, message, default_yes))?
            .and_then(|out| returned_value(&out, "button returned"))
            .is_some_and(|b| b == "Yes"))
    }

    fn show_message(&self, title: &str, message: &str) -> Result<(), Error> {
        self.eval(message_dialog(title, message)).map(|_| ())
    }
}
