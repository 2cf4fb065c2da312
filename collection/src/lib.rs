#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
pub use alloc::{string::String, vec::Vec};

pub mod collection;
pub mod error;

pub use collection::Collection;
pub use error::CollectionError;
