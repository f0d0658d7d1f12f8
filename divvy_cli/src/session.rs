use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use divvy_db::{Command, Engine, Ledger, Outcome};

use crate::config::Config;
use crate::output;

pub struct Session {
    engine: Engine,
    config: Config,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub executed: usize,
    pub failed: usize,
    pub quit: bool,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            engine: Engine::new(),
            config,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        self.engine.ledger()
    }

    /// Parses and executes one line. `None` means there was nothing to run.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Outcome>> {
        let Some(command) = Command::parse(line)? else {
            return Ok(None);
        };

        debug!(?command, "executing");
        let outcome = self.engine.execute(command)?;
        Ok(Some(outcome))
    }

    /// Feeds every line of `input` through the session until `quit` or EOF.
    ///
    /// A failing line is reported on `errors` and skipped, unless the config
    /// is strict, in which case it ends the run with that error.
    pub fn drive<R, W, E>(
        &mut self,
        input: R,
        out: &mut W,
        errors: &mut E,
        prompt: Option<&str>,
    ) -> Result<Summary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = Summary::default();
        let mut lines = input.lines().enumerate();

        loop {
            if let Some(prompt) = prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            let Some((index, line)) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;
            let line_no = index + 1;

            match self.handle_line(&line) {
                Ok(None) => {}
                Ok(Some(outcome)) => {
                    summary.executed += 1;
                    for rendered in
                        output::render(&outcome, self.config.format, self.config.precision)?
                    {
                        writeln!(out, "{rendered}")?;
                    }
                    if outcome == Outcome::Quit {
                        summary.quit = true;
                        break;
                    }
                }
                Err(err) => {
                    summary.failed += 1;
                    if self.config.strict {
                        return Err(err.context(format!("line {line_no}: {}", line.trim())));
                    }
                    debug!(line = line_no, error = %err, "command failed");
                    writeln!(errors, "Error (line {line_no}): {err}")?;
                }
            }
        }

        Ok(summary)
    }
}
