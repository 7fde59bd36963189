#[cfg(feature = "std")]
mod global;
mod interface;
#[cfg(feature = "std")]
mod lock_mono;
#[cfg(feature = "std")]
mod mutex;
mod basic_mono;
mod oneshot;
mod state;

pub use basic_mono::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use global::*;
pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use lock_mono::*;
#[cfg(feature = "std")]
pub(crate) use mutex::*;
pub use oneshot::*;
pub use state::*;
