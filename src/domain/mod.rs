mod item;
mod money;
mod participant;
mod settlement;

pub use item::*;
pub use money::*;
pub use participant::*;
pub use settlement::*;
