//! `open` コマンドによる起動（完了を待たない）

use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::Process;

use crate::ports::outbound::Launcher;

const OPEN: &str = "/usr/bin/open";

pub struct OpenLauncher {
    process: Arc<dyn Process>,
    program: PathBuf,
}

impl OpenLauncher {
    pub fn new(process: Arc<dyn Process>) -> Self {
        Self::with_program(process, OPEN)
    }

    pub fn with_program(process: Arc<dyn Process>, program: impl Into<PathBuf>) -> Self {
        Self {
            process,
            program: program.into(),
        }
    }

    fn spawn(&self, args: Vec<String>) -> Result<(), Error> {
        self.process.spawn_detached(&self.program, &args)
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Launcher for OpenLauncher {
    fn open_app(&self, bundle: &Path, args: &[String]) -> Result<(), Error> {
        let mut argv = vec![path_arg(bundle)];
        if !args.is_empty() {
            argv.push("--args".to_string());
            argv.extend(args.iter().cloned());
        }
        self.spawn(argv)
    }

    fn open_file(&self, path: &Path) -> Result<(), Error> {
        self.spawn(vec!["-t".to_string(), path_arg(path)])
    }

    fn reveal(&self, path: &Path) -> Result<(), Error> {
        self.spawn(vec!["-R".to_string(), path_arg(path)])
    }
}
