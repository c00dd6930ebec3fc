//! 起動スクリプト（Contents/MacOS/run.sh）の生成
//!
//! 並び: ブラウザ本体 → 固定フラグ → ユーザー指定 options（保存順）→ --user-data-dir → "$@"。
//! プロファイル指定は常にフラグの最後に置き、その後ろに起動引数（URL 等）をそのまま渡す。

use std::path::Path;

/// 常に先頭に付けるフラグ
pub const BASELINE_FLAGS: &[&str] = &["--no-first-run"];

/// スクリプト本文を生成する
pub fn render(browser: &Path, options: &[String], cache_dir: &Path) -> String {
    let mut script = String::from("#!/bin/sh\n");
    script.push_str(&format!(
        "exec {} \\\n",
        double_quote(&browser.to_string_lossy())
    ));
    for flag in BASELINE_FLAGS {
        script.push_str(&format!("  {} \\\n", flag));
    }
    // options は手編集された値なのでそのまま書く（引用は利用者の責任）
    for opt in options {
        script.push_str(&format!("  {} \\\n", opt));
    }
    script.push_str(&format!(
        "  --user-data-dir={} \\\n",
        single_quote(&cache_dir.to_string_lossy())
    ));
    script.push_str("  \"$@\"\n");
    script
}

fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME: &str = "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";

    #[test]
    fn test_render_order() {
        let script = render(
            Path::new(CHROME),
            &["--incognito".to_string(), "--app=https://mail.example.com".to_string()],
            Path::new("/cache/abc"),
        );
        assert_eq!(
            script,
            "#!/bin/sh\n\
             exec \"/Applications/Google Chrome.app/Contents/MacOS/Google Chrome\" \\\n\
             \x20 --no-first-run \\\n\
             \x20 --incognito \\\n\
             \x20 --app=https://mail.example.com \\\n\
             \x20 --user-data-dir='/cache/abc' \\\n\
             \x20 \"$@\"\n"
        );
    }

    #[test]
    fn test_options_change_script() {
        let before = render(Path::new(CHROME), &[], Path::new("/cache/abc"));
        let after = render(Path::new(CHROME), &["--kiosk".to_string()], Path::new("/cache/abc"));
        assert!(!before.contains("--kiosk"));
        assert!(after.contains("  --kiosk \\\n"));
        let kiosk = after.find("--kiosk").unwrap();
        let baseline = after.find("--no-first-run").unwrap();
        let profile = after.find("--user-data-dir=").unwrap();
        assert!(baseline < kiosk && kiosk < profile);
    }

    #[test]
    fn test_quotes_in_paths() {
        let script = render(Path::new("/a \"b\"/$c"), &[], Path::new("/cache/it's"));
        assert!(script.contains("exec \"/a \\\"b\\\"/\\$c\" \\\n"));
        assert!(script.contains("--user-data-dir='/cache/it'\\''s'"));
    }
}
