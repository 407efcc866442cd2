#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod coerce;
mod date_time;
mod error;
mod value;

pub mod codec;
pub mod collection;
mod query_params;

// Public API
pub use collection::Collection;
pub use error::{Error, Result};
pub use query_params::QueryParams;
pub use value::QueryValue;

/// Date-time type returned by [`QueryParams::get_as_date_time`]
pub type DateTime = chrono::DateTime<chrono::FixedOffset>;
