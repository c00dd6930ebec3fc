//! Info.plist（バンドルの識別情報）の生成

const TEMPLATE: &str = include_str!("../../resources/Info.plist.tmpl");

/// 既定のバンドルアイコン（`icon_file` 設定で差し替え可）
pub const DEFAULT_ICON: &[u8] = include_bytes!("../../resources/icon.icns");

/// バンドル表示名（全 prism 共通）
pub const BUNDLE_NAME: &str = "Chrome Prism";

/// `<prefix>.<id>` の bundle id を作る。識別子に使えない文字は `-` にする
pub fn bundle_id(prefix: &str, id: &str) -> String {
    let sanitized: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}.{}", prefix.trim_end_matches('.'), sanitized)
}

/// テンプレートに bundle id と表示名を差し込む
pub fn render(bundle_id: &str) -> String {
    TEMPLATE
        .replace("{bundle_name}", &xml_escape(BUNDLE_NAME))
        .replace("{bundle_id}", &xml_escape(bundle_id))
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
