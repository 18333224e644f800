// input.rs

use rustyline::error::ReadlineError;
use rustyline::{CompletionType, Config, DefaultEditor};
use std::io::{self, BufRead, Write};

/// Where the session reads its answers from. `Ok(None)` is end of input.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Interactive terminal input with line editing.
pub struct EditorSource {
    rl: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ReadlineError> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .build();
        let rl = DefaultEditor::with_config(config)?;
        Ok(Self { rl })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.rl.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(err)) => Err(err),
            Err(err) => Err(io::Error::other(err)),
        }
    }
}

/// Plain line reader: writes the prompt, then reads one line.
pub struct BufReadSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> BufReadSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.prompt_out)
    }
}

impl<R: BufRead, W: Write> LineSource for BufReadSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
