#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// O module
pub mod o;
pub use o::*;

pub mod error;
pub use error::{NONE_GET_ERROR, NoneGetError};

pub mod fallback;
pub use fallback::{Fallback, Value};

pub mod nullable;
pub use nullable::Nullable;

#[cfg(feature = "serde")]
mod serde_impl;
