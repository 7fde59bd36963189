mod base;
mod timestamp;

pub use base::*;
pub use timestamp::*;
