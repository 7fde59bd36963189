mod interface;
mod suffix;
#[cfg(feature = "std")]
mod thread_random;

pub use interface::*;
pub use suffix::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use thread_random::*;
