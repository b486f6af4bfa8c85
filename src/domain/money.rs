use std::fmt;

/// Money is carried as a plain `f64` in the bill's single currency.
/// Shares of an item (price / sharers) are rarely whole cents, so rounding is
/// deferred to display and drift is checked against a configured tolerance.
pub type Amount = f64;

/// Format an amount as a human-readable currency string.
/// Example: 50.0 -> "50.00", -12.344 -> "-12.34"
pub fn format_amount(amount: Amount) -> String {
    // Avoid printing "-0.00" for values that round to zero.
    if amount.abs() < 0.005 {
        return "0.00".to_string();
    }
    format!("{:.2}", amount)
}

/// Parse a decimal string into an amount.
/// Example: "50.00" -> 50.0, "12.5" -> 12.5, " 100 " -> 100.0
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Amount = input
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat(input.to_string()))?;

    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite(input.to_string()));
    }

    Ok(amount)
}

/// Strip every whitespace character from a name, so "Mary Ann" and
/// "MaryAnn" refer to the same participant.
pub fn normalize_name(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "missing amount"),
            ParseAmountError::InvalidFormat(raw) => {
                write!(f, "need a number, got '{}'", raw)
            }
            ParseAmountError::NotFinite(raw) => write!(f, "'{}' is not a finite amount", raw),
        }
    }
}

impl std::error::Error for ParseAmountError {}
