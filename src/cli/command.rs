use crate::application::LedgerError;
use crate::domain::{parse_amount, Amount};

/// Separator between the fields of an entry line, and the marker used to
/// recognize one.
pub const FIELD_SEPARATOR: char = ':';
pub const SHARER_SEPARATOR: char = ',';

/// One line of session input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// A raw `<item-name>:<price>:<sharers>` line, parsed by `NewEntry::parse`
    AddItem(String),
    RemoveItem,
    ListItems,
    ListParticipants,
    Settle,
    ShowHelp,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "quit" | "q" => Command::Quit,
            "list entry" | "le" => Command::ListItems,
            "list people" | "lp" => Command::ListParticipants,
            "done" | "d" => Command::Settle,
            "remove" | "r" => Command::RemoveItem,
            "print instructions" | "p" => Command::ShowHelp,
            _ if line.contains(FIELD_SEPARATOR) => Command::AddItem(line.to_string()),
            _ => Command::Unknown(line.to_string()),
        }
    }
}

pub fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "quit" | "q")
}

/// An entry line split into its fields, ready for `Ledger::add_item`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub name: String,
    pub price: Amount,
    pub sharers: Vec<String>,
}

impl NewEntry {
    pub fn parse(line: &str) -> Result<Self, LedgerError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let [name, price, sharers] = fields.as_slice() else {
            return Err(LedgerError::MalformedEntry(line.to_string()));
        };

        let price = parse_amount(price)?;
        let sharers = sharers
            .split(SHARER_SEPARATOR)
            .map(|s| s.to_string())
            .collect();

        Ok(Self {
            name: name.trim().to_string(),
            price,
            sharers,
        })
    }
}

/// Split a `<name1>,<name2>,...` line into raw names.
pub fn split_names(line: &str) -> Vec<&str> {
    line.split(SHARER_SEPARATOR).collect()
}
