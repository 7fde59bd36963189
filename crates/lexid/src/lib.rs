//! Compact, fixed-length, lexicographically sortable identifiers.
//!
//! An identifier is a millisecond timestamp written in a custom alphabet and
//! left-padded to a fixed width, followed by random symbols. Monotonic
//! generators increment the previous identifier instead of minting a new one
//! when called again within the same millisecond.
//!
//! ```
//! let id = lexid::generate_monotonic().unwrap();
//! assert_eq!(id.len(), lexid::TIME_LENGTH + lexid::RANDOM_LENGTH);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod alphabet;
mod codec;
mod config;
mod error;
mod generator;
mod id;
mod increment;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::alphabet::*;
pub use crate::codec::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::increment::*;
pub use crate::rand::*;
pub use crate::time::*;
