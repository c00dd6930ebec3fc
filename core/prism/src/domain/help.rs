//! 同梱のヘルプ文

pub const TEXT: &str = include_str!("../../resources/help.md");
pub const TITLE: &str = "Chrome Prism Help";

/// `* ` で始まる行（一覧のヘルプ項目になる）
pub fn bullet_lines(text: &str) -> Vec<&str> {
    text.lines().filter_map(|l| l.strip_prefix("* ")).collect()
}
