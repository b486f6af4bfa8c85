pub mod command;
pub mod render;
pub mod session;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::application::{Ledger, LedgerConfig, DEFAULT_TOLERANCE};
use crate::domain::{format_amount, parse_amount};
use crate::io::ReportFormat;

pub use command::*;
pub use session::*;

/// billsplit - split a shared bill, tax and tip included
#[derive(Parser, Debug)]
#[command(name = "billsplit")]
#[command(about = "Split a shared bill among its participants, scaling tax and tip by what each one ordered")]
#[command(version)]
pub struct Cli {
    /// Bill total (skips the first prompt), e.g. "120" or "120.50"
    #[arg(long)]
    pub total: Option<String>,

    /// Participants as "<name1>,<name2>,..." (skips the first prompt)
    #[arg(long)]
    pub people: Option<String>,

    /// Drift tolerated between the total and the split before warning
    #[arg(long, env = "BILLSPLIT_TOLERANCE", default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Output format of the final report
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Also write the final report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Settle without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = LedgerConfig::new(self.tolerance).context("Invalid --tolerance")?;

        let total = self
            .total
            .as_deref()
            .map(parse_amount)
            .transpose()
            .context("Invalid total format. Use '120.00' or '120'")?;

        let options = SessionOptions {
            total,
            people: self.people,
            assume_yes: self.yes,
            format: self.format,
            output: self.output,
        };

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(Ledger::new(config), stdin.lock(), stdout.lock(), options);

        match session.run()? {
            SessionOutcome::Settled(report) => {
                tracing::debug!(
                    accounted = %format_amount(report.accounted),
                    "session settled"
                );
            }
            SessionOutcome::Quit => tracing::debug!("session quit before settling"),
        }
        Ok(())
    }
}
