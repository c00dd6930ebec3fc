use std::path::PathBuf;

use crate::domain::command::Command;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use common::ports::outbound::DirOverrides;

/// CLI から受け取った生の設定（command は文字列のまま保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    pub verbose: bool,
    pub data_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    /// コマンド名（None の場合は Help）
    pub command_name: Option<String>,
    pub command_args: Vec<String>,
}

impl Config {
    pub fn dir_overrides(&self) -> DirOverrides {
        DirOverrides {
            data_dir: self.data_dir.clone(),
            cache_dir: self.cache_dir.clone(),
        }
    }
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

/// (名前, 説明, 引数の表示名)
const SUBCOMMANDS: &[(&str, &str, Option<&str>)] = &[
    ("list", "List prisms as launcher items (+name to create, ? for help)", Some("query")),
    ("create", "Create a new prism: NAME [DESCRIPTION...]", Some("name")),
    ("edit", "Open a prism's prism.json in a text editor", Some("id")),
    ("open", "Reveal a prism's files in Finder", Some("id")),
    ("rename", "Rename a prism (asks for the new name)", Some("id")),
    ("delete", "Delete a prism and its profile directory", Some("id")),
    ("start", "Start a prism: ID[|URL]", Some("argument")),
    ("help", "Display this help message", None),
];

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Echo structured logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("data-dir")
                .long("data-dir")
                .value_name("directory")
                .help("Directory holding the prism application bundles")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("cache-dir")
                .long("cache-dir")
                .value_name("directory")
                .help("Directory holding the browser profile of each prism")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

pub fn build_clap_command() -> clap::Command {
    let mut cmd = clap::Command::new("prism")
        .about("Manage isolated browser instances (prisms)")
        .subcommand_required(false);
    for (name, about, value_name) in SUBCOMMANDS {
        let mut sub = clap::Command::new(*name).about(*about);
        if let Some(value_name) = value_name {
            sub = sub.arg(
                clap::Arg::new("args")
                    .value_name(*value_name)
                    .num_args(0..)
                    .trailing_var_arg(true)
                    .allow_hyphen_values(true),
            );
        }
        cmd = cmd.subcommand(sub);
    }
    global_args(cmd)
}

pub fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let (command_name, command_args) = match matches.subcommand() {
        None | Some(("help", _)) => (None, Vec::new()),
        Some((name, m)) => (
            Some(name.to_string()),
            m.get_many::<String>("args")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
        ),
    };
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        data_dir: matches.get_one::<PathBuf>("data-dir").cloned(),
        cache_dir: matches.get_one::<PathBuf>("cache-dir").cloned(),
        command_name,
        command_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }
    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "prism", &mut std::io::stdout());
}

/// Config を Command に変換する
pub fn config_to_command(config: &Config) -> Result<Command, Error> {
    if config.help {
        return Ok(Command::Help);
    }
    match &config.command_name {
        Some(name) => Command::parse_with_args(name, &config.command_args),
        None => Ok(Command::Help),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Config {
        let matches = build_clap_command().try_get_matches_from(argv).unwrap();
        matches_to_config(&matches)
    }

    #[test]
    fn test_config_default_is_help() {
        let config = Config::default();
        assert_eq!(config_to_command(&config).unwrap(), Command::Help);
    }

    #[test]
    fn test_global_options() {
        let config = parse(&["prism", "-v", "--data-dir", "/d", "--cache-dir", "/c", "list"]);
        assert!(config.verbose);
        assert_eq!(config.data_dir, Some(PathBuf::from("/d")));
        assert_eq!(config.cache_dir, Some(PathBuf::from("/c")));
        assert_eq!(config.command_name.as_deref(), Some("list"));
        assert!(config.command_args.is_empty());
    }

    #[test]
    fn test_positional_words_are_joined() {
        let config = parse(&["prism", "list", "Foo", "http://example.com"]);
        assert_eq!(
            config_to_command(&config).unwrap(),
            Command::List {
                query: "Foo http://example.com".to_string()
            }
        );
    }

    #[test]
    fn test_hyphen_values_pass_through() {
        let config = parse(&["prism", "create", "Mail", "--work", "mail"]);
        assert_eq!(
            config_to_command(&config).unwrap(),
            Command::Create {
                input: Some("Mail --work mail".to_string())
            }
        );
    }

    #[test]
    fn test_help_flag_and_subcommand() {
        assert_eq!(config_to_command(&parse(&["prism", "-h"])).unwrap(), Command::Help);
        assert_eq!(config_to_command(&parse(&["prism", "help"])).unwrap(), Command::Help);
        assert_eq!(config_to_command(&parse(&["prism"])).unwrap(), Command::Help);
    }

    #[test]
    fn test_unknown_command_name_is_usage_error() {
        let config = Config {
            command_name: Some("tell_list".to_string()),
            ..Default::default()
        };
        assert!(config_to_command(&config).unwrap_err().is_usage());
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let err = build_clap_command()
            .try_get_matches_from(["prism", "tell_list"])
            .unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_generate_completion() {
        let matches = build_clap_command()
            .try_get_matches_from(["prism", "--generate", "bash"])
            .unwrap();
        assert_eq!(matches.get_one::<Shell>("generate"), Some(&Shell::Bash));
    }
}
