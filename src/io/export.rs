use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::application::SettlementReport;
use crate::domain::format_amount;

use super::table::render_settlement;

/// Output format for a settlement report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Write a settlement report in the requested format.
pub fn write_report<W: Write>(
    mut writer: W,
    report: &SettlementReport,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Table => render_settlement(&mut writer, report)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
        ReportFormat::Csv => write_report_csv(&mut writer, report)?,
    }
    writer.flush()?;
    Ok(())
}

fn write_report_csv<W: Write>(writer: W, report: &SettlementReport) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["name", "direct", "charge", "items"])?;
    for charge in &report.charges {
        csv_writer.write_record([
            charge.name.clone(),
            format_amount(charge.direct),
            format_amount(charge.charge),
            charge.items.join(";"),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a settlement report to a file, replacing any existing content.
pub fn export_report_to_file(
    path: &Path,
    report: &SettlementReport,
    format: ReportFormat,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file '{}'", path.display()))?;
    write_report(BufWriter::new(file), report, format)
        .with_context(|| format!("Failed to write report to '{}'", path.display()))
}
