use crate::utils::error::{GymError, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented terminal. Reads answers from any `BufRead` and writes the
/// dialogue to any `Write`, so sessions can be driven from memory in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Writes `prompt` without a newline and reads one answer.
    /// End of input means the user walked away: `UserAborted`. A line that
    /// is not UTF-8 has been consumed whole and is reported as `InvalidInput`.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            tracing::debug!("End of input while waiting for: {}", prompt.trim());
            return Err(GymError::UserAborted);
        }

        let answer = String::from_utf8(raw).map_err(|e| GymError::InvalidInput {
            field: "answer encoding".to_string(),
            value: String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
