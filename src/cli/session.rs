use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::application::{Ledger, LedgerError, SettlementReport};
use crate::domain::{parse_amount, Amount, ParseAmountError};
use crate::io::{export_report_to_file, write_report, ReportFormat};

use super::command::{is_quit, split_names, Command, NewEntry};
use super::render::{render_entries, render_participants, INSTRUCTIONS};

/// Knobs the shell takes from the command line.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Answer to the first `Enter total:` prompt
    pub total: Option<Amount>,
    /// Answer to the first `Enter people:` prompt
    pub people: Option<String>,
    /// Settle without asking for confirmation
    pub assume_yes: bool,
    pub format: ReportFormat,
    /// Also write the final report here
    pub output: Option<PathBuf>,
}

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    Quit,
    Settled(SettlementReport),
}

/// Interactive shell around a `Ledger`: reads one line at a time, turns it
/// into a ledger operation and renders the result.
pub struct Session<R, W> {
    ledger: Ledger,
    input: R,
    out: W,
    options: SessionOptions,
}

/// Whether the loop keeps going after a step.
enum Step {
    Continue,
    Finish(SessionOutcome),
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ledger: Ledger, input: R, out: W, options: SessionOptions) -> Self {
        Self {
            ledger,
            input,
            out,
            options,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        writeln!(self.out, "\nWelcome to billsplit!\n")?;
        writeln!(self.out, "{}\n", INSTRUCTIONS)?;

        let outcome = self.run_inner()?;

        writeln!(self.out, "\nGoodbye!\n")?;
        self.out.flush()?;
        Ok(outcome)
    }

    fn run_inner(&mut self) -> Result<SessionOutcome> {
        if let Step::Finish(outcome) = self.setup_total()? {
            return Ok(outcome);
        }
        if let Step::Finish(outcome) = self.setup_people()? {
            return Ok(outcome);
        }

        writeln!(self.out, "Proceed to make entries.\n")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(SessionOutcome::Quit);
            };

            let step = match Command::parse(&line) {
                Command::Quit => Step::Finish(SessionOutcome::Quit),
                Command::AddItem(raw) => self.add_entry(&raw)?,
                Command::ListItems => {
                    render_entries(&mut self.out, &self.ledger.list_items())?;
                    Step::Continue
                }
                Command::ListParticipants => {
                    render_participants(&mut self.out, &self.ledger.list_participants())?;
                    Step::Continue
                }
                Command::RemoveItem => self.remove_entry()?,
                Command::Settle => self.settle()?,
                Command::ShowHelp => {
                    writeln!(self.out, "{}\n", INSTRUCTIONS)?;
                    Step::Continue
                }
                Command::Unknown(raw) => {
                    debug!(input = %raw, "unknown action");
                    writeln!(self.out, "Unknown action! Repeating instructions.\n")?;
                    writeln!(self.out, "{}\n", INSTRUCTIONS)?;
                    Step::Continue
                }
            };

            if let Step::Finish(outcome) = step {
                return Ok(outcome);
            }
        }
    }

    // ========================
    // Setup prompts
    // ========================

    fn setup_total(&mut self) -> Result<Step> {
        if let Some(total) = self.options.total.take() {
            match self.ledger.declare_total(total) {
                Ok(()) => return Ok(Step::Continue),
                Err(err) => writeln!(self.out, "{}. Retry..\n", err)?,
            }
        }

        while self.ledger.total().is_none() {
            write!(self.out, "Enter total: ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Step::Finish(SessionOutcome::Quit));
            };
            if is_quit(&line) {
                return Ok(Step::Finish(SessionOutcome::Quit));
            }

            let amount = match parse_amount(&line) {
                Ok(amount) => amount,
                Err(ParseAmountError::Empty) => {
                    writeln!(self.out, "Missing total. Cannot proceed. Retry..\n")?;
                    continue;
                }
                Err(_) => {
                    writeln!(
                        self.out,
                        "Failed to read total. Need a number. Data provided: {}. Retry..\n",
                        line.trim()
                    )?;
                    continue;
                }
            };

            if let Err(err) = self.ledger.declare_total(amount) {
                writeln!(self.out, "Invalid number entered. Want: >0, Got: {}. {}\n", amount, err)?;
            }
        }
        Ok(Step::Continue)
    }

    fn setup_people(&mut self) -> Result<Step> {
        if let Some(people) = self.options.people.take() {
            match self.ledger.declare_participants(split_names(&people)) {
                Ok(()) => return Ok(Step::Continue),
                Err(err) => writeln!(self.out, "{}. Try again...\n", err)?,
            }
        }

        while self.ledger.list_participants().is_empty() {
            write!(self.out, "Enter people: ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(Step::Finish(SessionOutcome::Quit));
            };
            if is_quit(&line) {
                return Ok(Step::Finish(SessionOutcome::Quit));
            }

            if let Err(err) = self.ledger.declare_participants(split_names(&line)) {
                writeln!(self.out, "{}. Try again...\n", err)?;
            }
        }
        Ok(Step::Continue)
    }

    // ========================
    // Entry operations
    // ========================

    fn add_entry(&mut self, raw: &str) -> Result<Step> {
        let result = NewEntry::parse(raw).and_then(|entry| {
            self.ledger
                .add_item(&entry.name, entry.price, &entry.sharers)
        });

        match result {
            Ok(item) => {
                debug!(item = %item.name, "recorded entry");
            }
            Err(err) => {
                warn!(error = %err, entry = %raw, "rejected entry");
                writeln!(self.out, "{}. Ignoring this entry.", err)?;
                match err {
                    LedgerError::UnknownParticipant(_) => {
                        writeln!(self.out, "Below are accepted names:")?;
                        render_participants(&mut self.out, &self.ledger.list_participants())?;
                    }
                    LedgerError::MalformedEntry(_) | LedgerError::EmptySharerList(_) => {
                        writeln!(self.out, "Enter 'print instructions'/'p' to see instructions\n")?;
                    }
                    _ => {}
                }
            }
        }
        Ok(Step::Continue)
    }

    fn remove_entry(&mut self) -> Result<Step> {
        writeln!(self.out, "\nChoose entry from below list. Enter item name to remove entry.")?;
        render_entries(&mut self.out, &self.ledger.list_items())?;

        let Some(line) = self.read_line()? else {
            return Ok(Step::Finish(SessionOutcome::Quit));
        };
        if is_quit(&line) {
            return Ok(Step::Finish(SessionOutcome::Quit));
        }

        match self.ledger.remove_item(&line) {
            Ok(item) => writeln!(self.out, "Removed entry {}.\n", item.name)?,
            Err(err) => writeln!(self.out, "{}. Start again\n", err)?,
        }
        Ok(Step::Continue)
    }

    // ========================
    // Settlement
    // ========================

    fn settle(&mut self) -> Result<Step> {
        if !self.ledger.has_items() {
            writeln!(self.out, "{}.\n", LedgerError::NoItemsRecorded)?;
            return Ok(Step::Continue);
        }

        if !self.options.assume_yes {
            writeln!(self.out, "Enter 'yes'/'y' if everything looks good:")?;
            render_entries(&mut self.out, &self.ledger.list_items())?;

            let Some(answer) = self.read_line()? else {
                return Ok(Step::Finish(SessionOutcome::Quit));
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Step::Continue);
            }
            if is_quit(answer) {
                return Ok(Step::Finish(SessionOutcome::Quit));
            }
            if !answer.contains('y') {
                writeln!(self.out, "Not proceeding with calculations.")?;
                return Ok(Step::Continue);
            }
        }

        let report = self.ledger.settle()?;
        write_report(&mut self.out, &report, self.options.format)?;

        if let Some(path) = &self.options.output {
            match export_report_to_file(path, &report, self.options.format) {
                Ok(()) => writeln!(self.out, "\nReport written to {}", path.display())?,
                Err(err) => {
                    warn!(error = %format!("{:#}", err), "failed to export report");
                    writeln!(self.out, "\n{:#}", err)?;
                }
            }
        }

        Ok(Step::Finish(SessionOutcome::Settled(report)))
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
