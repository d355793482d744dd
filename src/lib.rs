//! # Railway: Composable Success/Error Pipelines
//!
//! Chain fallible or optional computations without manual branching.
//!
//! ## Core Types
//!
//! - **[`Outcome<S, E>`]**: Either `Ok(content)` or `Err(error)`
//! - **[`Presence<T>`]**: Either `Some(content)` or `None`
//! - **[`Unit`]**: The "it completed" marker
//! - **[`Fault`]**: A panic captured by [`try_capture`]
//!
//! ## Key Features
//!
//! - **Short-circuiting**: Once an outcome is `Err`, success-path combinators are no-ops
//! - **Explicit capture**: Panics become errors only inside [`try_capture`]
//! - **Async Support**: Every combinator has a [`future`] counterpart that awaits in order
//!
//! ## Example
//!
//! ```
//! use railway::*;
//!
//! fn port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>().map_err(|e| format!("{raw}: {e}")).into()
//! }
//!
//! let address = port("80")
//!     .combine(port("443"), |http, https| format!("{http}/{https}"))
//!     .get_or_else(|e| e);
//! assert_eq!(address, "80/443");
//!
//! let first_failure = port("x").combine(port("y"), |a, b| a + b);
//! assert_eq!(first_failure, Outcome::Err("x: invalid digit found in string".to_string()));
//! ```
//!
//! ## Common Functions
//!
//! **Constructing:**
//! - [`ok(content)`](ok) / [`err(error)`](err) - Build an outcome
//! - [`some(content)`](some) / [`none()`](none) - Build a presence
//! - [`try_capture(f)`](try_capture) - Run `f`, turning a panic into `Err(Fault)`
//!
//! **Composing:**
//! - [`map`], [`bind`], [`map_error`], [`combine`], [`bind_then_try`]
//!
//! **Leaving the railway:**
//! - [`reduce`], [`get_or_default`], [`get_or_else`]
//! - [`try_retrieve`], [`get_error`], [`try_get_error`] for branch-based code
//!
//! ## Features
//!
//! - `async` (default): the [`future`] module and its extension traits

pub mod combinators;
mod fault;
mod imperative;
mod outcome;
mod presence;
mod unit;

#[cfg(feature = "async")]
pub mod future;
pub mod prelude;

pub use combinators::*;
pub use fault::*;
pub use imperative::*;
pub use outcome::*;
pub use presence::*;
pub use unit::*;
