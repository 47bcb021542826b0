pub mod health;
pub mod skills;

pub use health::*;
pub use skills::*;
