//! # Console Module
//!
//! The interactive menu loop that drives a `Registry`.
//!
//! The console reads one line per prompt. Integer prompts re-ask until the
//! line parses; end of input at any prompt exits the loop as if `5` had been
//! chosen. Input and output are generic so the loop runs the same against
//! stdin/stdout and against in-memory buffers.

mod menu;

pub use menu::*;

use staterec_core::{Listing, Record, Registry, StateError};
use std::io::{BufRead, Write};

/// Result of handling one menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive console over a reader, a writer, and the registry it owns.
pub struct Console<R, W> {
    input: R,
    output: W,
    registry: Registry,
    json_mode: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console that prints listings as description lines.
    pub fn new(input: R, output: W, registry: Registry) -> Self {
        Self {
            input,
            output,
            registry,
            json_mode: false,
        }
    }

    /// Print listings as a JSON array instead.
    #[must_use]
    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consume the console, returning the writer and the registry.
    pub fn into_parts(self) -> (W, Registry) {
        (self.output, self.registry)
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Only I/O failures are returned; every other error is reported on the
    /// console and the loop continues.
    pub fn run(&mut self) -> Result<(), StateError> {
        tracing::info!(policy = %self.registry.policy(), "console started");

        loop {
            write!(self.output, "{}", MENU_TEXT)?;

            let Some(number) = self.read_integer(CHOICE_PROMPT)? else {
                tracing::debug!("input closed at menu prompt");
                return self.exit();
            };

            let flow = match MenuChoice::try_from(number) {
                Ok(choice) => self.dispatch(choice)?,
                Err(e) => {
                    tracing::debug!(number, "invalid menu choice");
                    self.report(&e)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Handle one menu choice.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, StateError> {
        tracing::debug!(?choice, "menu selection");

        match choice {
            MenuChoice::CreateBase => self.create(false),
            MenuChoice::CreateExtended => self.create(true),
            MenuChoice::Delete => self.delete(),
            MenuChoice::ShowAll => {
                self.show_all()?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                self.exit()?;
                Ok(Flow::Exit)
            }
        }
    }

    fn create(&mut self, extended: bool) -> Result<Flow, StateError> {
        let Some(identifier) = self.read_line(ID_PROMPT)? else {
            return self.exit_flow();
        };
        let Some(primary) = self.read_integer(STATE_PROMPT)? else {
            return self.exit_flow();
        };

        let created = if extended {
            let Some(secondary) = self.read_integer(SECONDARY_STATE_PROMPT)? else {
                return self.exit_flow();
            };
            self.registry
                .create_extended(identifier, primary, secondary)
                .map(summarize)
        } else {
            self.registry.create_base(identifier, primary).map(summarize)
        };

        match created {
            Ok((kind, identifier)) => {
                tracing::info!(%kind, identifier = %identifier, "record created");
                writeln!(
                    self.output,
                    "Created {} record with ID: {}",
                    kind, identifier
                )?;
            }
            Err(e) => self.report(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow, StateError> {
        let Some(identifier) = self.read_line(DELETE_ID_PROMPT)? else {
            return self.exit_flow();
        };

        match self.registry.delete_by_identifier(&identifier) {
            Ok(removed) => {
                tracing::info!(kind = %removed.kind(), identifier = %identifier, "record deleted");
                writeln!(self.output, "Deleted record with ID: {}", identifier)?;
            }
            Err(e) => self.report(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn show_all(&mut self) -> Result<(), StateError> {
        match self.registry.list_all() {
            Listing::Empty => {
                writeln!(self.output, "{}", staterec_core::primitives::EMPTY_LISTING_MESSAGE)?;
            }
            Listing::Entries(descriptions) => {
                if self.json_mode {
                    let records: Vec<&Record> = self.registry.iter().collect();
                    writeln!(
                        self.output,
                        "{}",
                        serde_json::to_string_pretty(&records).unwrap_or_default()
                    )?;
                } else {
                    for line in descriptions {
                        writeln!(self.output, "{}", line)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<(), StateError> {
        writeln!(self.output, "{}", EXIT_MESSAGE)?;
        self.output.flush()?;
        Ok(())
    }

    fn exit_flow(&mut self) -> Result<Flow, StateError> {
        tracing::debug!("input closed mid-command");
        self.exit()?;
        Ok(Flow::Exit)
    }

    /// Print a non-fatal error on the console.
    fn report(&mut self, error: &StateError) -> Result<(), StateError> {
        writeln!(self.output, "{}", error)?;
        Ok(())
    }

    /// Prompt and read one trimmed line. `None` means end of input.
    ///
    /// Lines that are not valid UTF-8 are reported and the prompt is repeated.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, StateError> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }

            match decode_line(buf) {
                Ok(line) => return Ok(Some(line)),
                Err(e) => {
                    tracing::warn!("rejected non-UTF-8 input");
                    self.report(&e)?;
                }
            }
        }
    }

    /// Prompt until the line parses as an integer. `None` means end of input.
    fn read_integer(&mut self, prompt: &str) -> Result<Option<i64>, StateError> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match parse_integer(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::warn!(input = %line, "rejected non-integer input");
                    self.report(&e)?;
                }
            }
        }
    }
}

/// Parse console text as an `i64`.
pub fn parse_integer(text: &str) -> Result<i64, StateError> {
    text.trim().parse::<i64>().map_err(|_| {
        StateError::InvalidInput(format!("expected an integer, got '{}'", text.trim()))
    })
}

/// Decode one raw input line and trim surrounding whitespace.
pub fn decode_line(raw: Vec<u8>) -> Result<String, StateError> {
    String::from_utf8(raw)
        .map(|line| line.trim().to_string())
        .map_err(|_| StateError::InvalidInput("line is not valid UTF-8".to_string()))
}

fn summarize(record: &Record) -> (staterec_core::RecordKind, String) {
    (record.kind(), record.identifier().to_string())
}
