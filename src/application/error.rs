use thiserror::Error;

use crate::domain::ParseAmountError;

/// Every way a ledger operation can be refused.
/// None of these end a session; the shell reports them and asks again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Duplicate entry of item {0}")]
    DuplicateItem(String),

    #[error("Item {0} not found in entries")]
    ItemNotFound(String),

    #[error("Unrecognized person {0} in entry")]
    UnknownParticipant(String),

    #[error("Entry {0} is not of expected format <item-name>:<price>:<person1>,<person2>,...")]
    MalformedEntry(String),

    #[error("Failed to find people for item {0}")]
    EmptySharerList(String),

    #[error("Item name must not be empty")]
    InvalidItemName,

    #[error("No items recorded yet, nothing to split")]
    NoItemsRecorded,

    #[error("Names not in expected format <name1>,<name2>,...")]
    NoParticipants,

    #[error("Participants are already declared for this bill")]
    ParticipantsAlreadyDeclared,

    #[error("Total is already declared for this bill")]
    TotalAlreadyDeclared,

    #[error("Total has not been declared yet")]
    TotalNotDeclared,
}

impl From<ParseAmountError> for LedgerError {
    fn from(err: ParseAmountError) -> Self {
        LedgerError::InvalidAmount(err.to_string())
    }
}
