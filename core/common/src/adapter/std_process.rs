//! 標準サブプロセス実行（std::process::Command を委譲）

use crate::error::Error;
use crate::ports::outbound::{Process, ProcessOutput};
use std::path::Path;
use std::process::Stdio;

/// 標準ライブラリの Command を使う Process 実装
#[derive(Debug, Clone, Default)]
pub struct StdProcess;

impl Process for StdProcess {
    fn output(&self, program: &Path, args: &[String]) -> Result<ProcessOutput, Error> {
        let out = std::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                Error::io_msg(format!(
                    "Failed to execute '{}': {}",
                    program.display(),
                    e
                ))
            })?;
        Ok(ProcessOutput {
            code: out.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
        })
    }

    fn spawn_detached(&self, program: &Path, args: &[String]) -> Result<(), Error> {
        // 子プロセスは待たない（Child を drop しても kill されない）
        std::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| {
                Error::launch_failed(format!(
                    "Failed to launch '{}': {}",
                    program.display(),
                    e
                ))
            })
    }
}
