//! 端末での対話（stdin から読み、問いかけは stderr に出す）

use std::io::{BufRead, Write};
use std::sync::Mutex;

use common::error::Error;

use crate::ports::outbound::UserPrompt;

/// 端末向け UserPrompt
///
/// stdout は一覧 JSON 等の出力に使うため、問いかけはすべて stderr に書く。
pub struct CliPrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl CliPrompt<std::io::BufReader<std::io::Stdin>, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::BufReader::new(std::io::stdin()), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> CliPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn write_prompt(&self, text: &str) -> Result<(), Error> {
        let mut out = self
            .output
            .lock()
            .map_err(|_| Error::system("prompt output lock poisoned"))?;
        out.write_all(text.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| Error::io_msg(format!("Failed to write prompt: {}", e)))
    }

    /// 1 行読む。EOF なら None
    fn read_line(&self) -> Result<Option<String>, Error> {
        let mut input = self
            .input
            .lock()
            .map_err(|_| Error::system("prompt input lock poisoned"))?;
        let mut line = String::new();
        let n = input
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read input: {}", e)))?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R, W> UserPrompt for CliPrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn ask_text(&self, title: &str, message: &str) -> Result<Option<String>, Error> {
        self.write_prompt(&format!("{}\n{}: ", title, message))?;
        self.read_line()
    }

    fn confirm(&self, title: &str, message: &str, default_yes: bool) -> Result<bool, Error> {
        let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
        self.write_prompt(&format!("{}\n{} {} ", title, message, hint))?;
        let Some(answer) = self.read_line()? else {
            return Ok(false);
        };
        Ok(match answer.trim().to_ascii_lowercase().as_str() {
            "" => default_yes,
            "y" | "yes" => true,
            _ => false,
        })
    }

    fn show_message(&self, title: &str, message: &str) -> Result<(), Error> {
        self.write_prompt(&format!("{}: {}\n", title, message))
    }
}
