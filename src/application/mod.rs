// Application layer: the ledger aggregate, its configuration, errors and
// the settlement report handed to clients for rendering.

pub mod config;
pub mod error;
pub mod reporting;
pub mod service;

pub use config::*;
pub use error::*;
pub use reporting::*;
pub use service::*;
