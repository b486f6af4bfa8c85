pub mod export;
pub mod table;

pub use export::*;
pub use table::render_settlement;
