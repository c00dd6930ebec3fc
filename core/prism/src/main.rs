mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::command::Command;
use ports::inbound::UseCaseRunner;
use wiring::{wire_prism, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn dispatch(&self, command: Command) -> Result<i32, Error> {
        let message = match command {
            Command::Help => {
                print_help();
                None
            }
            Command::List { query } => {
                let output = self.app.list_use_case.run(&query)?;
                println!("{}", serde_json::to_string(&output)?);
                None
            }
            Command::Create { input } => self.app.create_use_case.run(input.as_deref())?,
            Command::Edit { key } => self.app.edit_use_case.edit(&key)?,
            Command::Open { key } => self.app.edit_use_case.open(&key)?,
            Command::Rename { key } => self.app.rename_use_case.run(&key)?,
            Command::Delete { key } => self.app.delete_use_case.run(&key)?,
            Command::Start { argument } => self.app.start_use_case.run(&argument)?,
        };
        if let Some(message) = message {
            println!("{}", message);
        }
        Ok(0)
    }

    fn lifecycle(&self, level: LogLevel, message: &str, command: &str) -> LogRecord {
        LogRecord::new(level, message)
            .layer("cli")
            .kind("lifecycle")
            .field("command", command)
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, command: Command) -> Result<i32, Error> {
        let name = command.name();
        let _ = self
            .app
            .logger
            .log(&self.lifecycle(LogLevel::Info, "command started", name));
        let result = self.dispatch(command);
        let record = match &result {
            Ok(code) => self
                .lifecycle(LogLevel::Info, "command finished", name)
                .field("exit_code", *code),
            Err(e) => self
                .lifecycle(LogLevel::Error, "command failed", name)
                .field("error", e.to_string())
                .field("exit_code", e.exit_code()),
        };
        let _ = self.app.logger.log(&record);
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("prism: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

const USAGE: &str =
    "Usage: prism [-h] [-v] [--data-dir directory] [--cache-dir directory] [<command> [args...]]";

fn print_usage() {
    eprintln!("{}", USAGE);
}

fn print_help() {
    println!("{}", USAGE);
    println!("  -h, --help            Display this help message.");
    println!("  -v, --verbose         Echo structured logs to stderr.");
    println!("  --data-dir <dir>      Directory holding the prism application bundles.");
    println!("  --cache-dir <dir>     Directory holding the browser profile of each prism.");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  PRISM_HOME      Base directory; data/, cache/, state/ and config/ live under it.");
    println!("  PRISM_BROWSER   Browser executable wrapped by each prism.");
    println!("  alfred_workflow_data / alfred_workflow_cache   Set by the launcher host; used for data and cache.");
    println!();
    println!("Commands:");
    println!("  list [query]           Print launcher items as JSON (+name to create, ? for help).");
    println!("  create [name [desc]]   Create a new prism. Asks for a name when none is given.");
    println!("  edit <id>              Open the prism's prism.json in a text editor.");
    println!("  open <id>              Reveal the prism's prism.json in Finder.");
    println!("  rename <id>            Rename a prism.");
    println!("  delete <id>            Delete a prism and its profile directory.");
    println!("  start <id>[|url]       Start a prism, optionally opening a URL.");
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let command = config_to_command(&config)?;
    if command == Command::Help {
        print_help();
        return Ok(0);
    }
    let app = wire_prism(&config.dir_overrides(), config.verbose)?;
    Runner { app }.run(command)
}
