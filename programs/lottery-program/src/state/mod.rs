pub use lottery::*;
pub use ticket::*;

pub mod lottery;
pub mod ticket;
