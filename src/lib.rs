pub mod application;
pub mod cli;
pub mod domain;
pub mod io;
pub mod logging;

pub use application::{Ledger, LedgerConfig, LedgerError, SettlementReport};
pub use domain::*;
