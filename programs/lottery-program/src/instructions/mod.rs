pub mod claim;
pub mod draw;
pub mod initialize;
pub mod purchase;

pub use claim::*;
pub use draw::*;
pub use initialize::*;
pub use purchase::*;
