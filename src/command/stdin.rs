//! Line-oriented command source over stdin (std only).

use std::io::{self, BufRead, BufReader, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::control::InterruptSignal;

use super::source::CommandSource;

/// How often a blocked read looks at the interrupt flag.
const INTERRUPT_POLL: Duration = Duration::from_millis(50);

/// Command source reading lines from stdin or any other reader.
///
/// Lines are read on a helper thread, so a read blocked on the terminal
/// still returns promptly once the interrupt is raised. After an interrupt
/// `next_line` returns `None` and the caller checks the flag.
///
/// With a prompt set, input that ends at the prompt (EOF or interrupt)
/// finishes the prompt line so the next message starts on its own line.
pub struct StdinSource<I> {
    lines: Receiver<String>,
    interrupt: I,
    prompt: Option<&'static str>,
    out: Box<dyn Write>,
}

impl<I: InterruptSignal> StdinSource<I> {
    /// Read from the process stdin.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader thread cannot be spawned.
    pub fn spawn(interrupt: I) -> io::Result<Self> {
        Self::from_reader(BufReader::new(io::stdin()), interrupt)
    }

    /// Read from `reader` on a helper thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader thread cannot be spawned.
    pub fn from_reader<R>(reader: R, interrupt: I) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("command-reader".into())
            .spawn(move || {
                for line in reader.lines() {
                    match line {
                        Ok(line) => {
                            if tx.send(line).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "command input failed");
                            break;
                        }
                    }
                }
            })?;

        Ok(Self {
            lines: rx,
            interrupt,
            prompt: None,
            out: Box::new(io::stdout()),
        })
    }

    /// Print `prompt` before waiting for each line.
    pub fn with_prompt(mut self, prompt: &'static str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Write the prompt to `out` instead of stdout.
    pub fn with_prompt_output<W: Write + 'static>(mut self, out: W) -> Self {
        self.out = Box::new(out);
        self
    }

    fn wait_for_line(&mut self) -> Option<String> {
        loop {
            if self.interrupt.is_raised() {
                return None;
            }
            match self.lines.recv_timeout(INTERRUPT_POLL) {
                Ok(line) => return Some(line),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }
}

impl<I: InterruptSignal> CommandSource for StdinSource<I> {
    type Line = String;

    fn next_line(&mut self) -> Option<String> {
        if let Some(prompt) = self.prompt {
            let _ = self.out.write_all(prompt.as_bytes());
            let _ = self.out.flush();
        }

        let line = self.wait_for_line();
        if line.is_none() && self.prompt.is_some() {
            let _ = self.out.write_all(b"\n");
            let _ = self.out.flush();
        }
        line
    }
}
