use std::io::{self, Write};

use crate::application::{SettlementReport, SettlementWarning};
use crate::domain::format_amount;

/// Width of the horizontal rule under table headers
pub const RULE_WIDTH: usize = 50;

/// Render a settlement report as an aligned text table.
pub fn render_settlement<W: Write>(out: &mut W, report: &SettlementReport) -> io::Result<()> {
    writeln!(out)?;
    for warning in &report.warnings {
        match warning {
            SettlementWarning::Discrepancy { unaccounted } => {
                writeln!(out, "WARNING!! {} not accounted for.", format_amount(*unaccounted))?
            }
            SettlementWarning::ResidualUndistributed { residual } => writeln!(
                out,
                "WARNING!! nothing was spent on items, {} could not be split.",
                format_amount(*residual)
            )?,
        }
    }

    writeln!(out, "Total amount: {}", format_amount(report.total))?;
    writeln!(out, "Total tax:    {}", format_amount(report.residual))?;
    writeln!(out)?;
    writeln!(out, "{:<10} | {:>10} | {}", "NAME", "CHARGE", "ITEMS")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for charge in &report.charges {
        writeln!(
            out,
            "{:<10} | {:>10} | {}",
            truncate(&charge.name, 10),
            format_amount(charge.charge),
            charge.items.join(",")
        )?;
    }
    Ok(())
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
