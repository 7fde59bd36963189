mod interface;
#[cfg(feature = "std")]
mod wall_clock;

pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use wall_clock::*;
