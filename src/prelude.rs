//! Commonly used imports
//!
//! Use `use railway::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Fault, Outcome, Presence, UNIT, Unit};

// Constructors
pub use crate::{err, none, ok, some, try_capture};

// Async extension traits
#[cfg(feature = "async")]
pub use crate::future::{FaultFuture, OutcomeFuture};
