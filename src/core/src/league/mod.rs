pub mod league;
pub mod schedule;
pub mod standings;

pub use league::*;
pub use schedule::*;
pub use standings::*;
