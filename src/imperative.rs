//! Escape hatches for branch-based call sites.
//!
//! These exist to interoperate with code that checks a flag and branches
//! instead of chaining combinators. Prefer [`reduce`](crate::reduce) and
//! friends where possible.

use crate::outcome::Outcome;
use crate::presence::Presence;

/// Extracts the content of an `Ok` together with a found flag.
///
/// Returns `(true, content)` for `Ok` and `(false, S::default())` for `Err`.
///
/// # Examples
///
/// ```rust
/// use railway::{err, ok, try_retrieve};
///
/// let (found, port) = try_retrieve(ok::<u16, &str>(8080));
/// assert!(found);
/// assert_eq!(port, 8080);
///
/// assert_eq!(try_retrieve(err::<u16, &str>("unset")), (false, 0));
/// ```
#[inline]
pub fn try_retrieve<S, E>(outcome: Outcome<S, E>) -> (bool, S)
where
    S: Default,
{
    match outcome {
        Outcome::Ok(content) => (true, content),
        Outcome::Err(_) => (false, S::default()),
    }
}

/// Returns the error of an `Err`.
///
/// # Panics
///
/// Panics if the outcome is `Ok`. Guard with
/// [`Outcome::is_error`] first, or use [`try_get_error`].
///
/// # Examples
///
/// ```rust
/// use railway::{err, get_error};
///
/// assert_eq!(get_error(err::<(), &str>("refused")), "refused");
/// ```
///
/// ```should_panic
/// use railway::{get_error, ok};
///
/// get_error(ok::<u8, &str>(1)); // panics
/// ```
#[track_caller]
pub fn get_error<S, E>(outcome: Outcome<S, E>) -> E {
    match outcome {
        Outcome::Err(error) => error,
        Outcome::Ok(_) => {
            tracing::error!("get_error called on a success outcome");
            panic!("cannot get an error from an outcome that is a success")
        }
    }
}

/// Returns the error of an `Err` as a [`Presence`], `None` for `Ok`.
#[inline]
pub fn try_get_error<S, E>(outcome: Outcome<S, E>) -> Presence<E> {
    outcome.error()
}
