//! settings.json と環境変数から PrismSettings を組み立てる

use std::path::{Path, PathBuf};

use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};

use crate::domain::prism_config::strip_comments;
use crate::domain::{PrismSettings, SettingsFile};

/// 既定値 < settings.json < 環境変数 の順に重ねる
///
/// ファイルが無ければ既定値のまま。壊れていれば Json エラー。
pub fn load_settings(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
    settings_file: &Path,
) -> Result<PrismSettings, Error> {
    let mut settings = PrismSettings::default();
    if fs.exists(settings_file) {
        let text = fs.read_to_string(settings_file)?;
        let file: SettingsFile = serde_json::from_str(&strip_comments(&text))
            .map_err(|e| Error::json(format!("{}: {}", settings_file.display(), e)))?;
        settings = settings.with_file(file);
    }

    if let Some(browser) = env.var("PRISM_BROWSER") {
        settings.browser = PathBuf::from(browser);
    }
    if let Some(prefix) = env
        .var("alfred_workflow_bundleid")
        .or_else(|| env.var("PRISM_BUNDLE_ID_PREFIX"))
    {
        settings.bundle_id_prefix = prefix;
    }
    if let Some(icon) = env.var("PRISM_ICON_FILE") {
        settings.icon_file = Some(PathBuf::from(icon));
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{DEFAULT_BROWSER, DEFAULT_BUNDLE_ID_PREFIX};
    use common::adapter::StdFileSystem;
    use common::domain::Dirs;
    use common::ports::outbound::DirOverrides;
    use std::collections::HashMap;

    struct MapEnv(HashMap<&'static str, &'static str>);

    impl EnvResolver for MapEnv {
        fn resolve_dirs(&self, _overrides: &DirOverrides) -> Result<Dirs, Error> {
            Err(Error::env("not used"))
        }

        fn var(&self, name: &str) -> Option<String> {
            self.0.get(name).map(|v| v.to_string())
        }
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = load_settings(
            &StdFileSystem,
            &MapEnv(HashMap::new()),
            &tmp.path().join("settings.json"),
        )
        .unwrap();
        assert_eq!(settings.browser, PathBuf::from(DEFAULT_BROWSER));
        assert_eq!(settings.bundle_id_prefix, DEFAULT_BUNDLE_ID_PREFIX);
        assert_eq!(settings.icon_file, None);
    }

    #[test]
    fn test_env_overrides_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("settings.json");
        std::fs::write(
            &file,
            "// local settings\n{\"browser\": \"/opt/chromium\", \"bundle_id_prefix\": \"org.example\"}\n",
        )
        .unwrap();
        let env = MapEnv(HashMap::from([("alfred_workflow_bundleid", "com.host.workflow")]));
        let settings = load_settings(&StdFileSystem, &env, &file).unwrap();
        assert_eq!(settings.browser, PathBuf::from("/opt/chromium"));
        assert_eq!(settings.bundle_id_prefix, "com.host.workflow");
    }

    #[test]
    fn test_broken_file_is_json_error() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("settings.json");
        std::fs::write(&file, "{ not json").unwrap();
        let err = load_settings(&StdFileSystem, &MapEnv(HashMap::new()), &file).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
