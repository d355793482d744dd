//! Railway combinators over [`Outcome`].
//!
//! Every combinator here is total on a well-formed outcome. Success-path
//! combinators pass an `Err` through untouched and never call their callback;
//! [`map_error`] is the mirror image on the error channel.
//!
//! # Core Combinators
//!
//! - [`map`] - Transforms the content of an `Ok`
//! - [`bind`] - Chains a function that itself returns an [`Outcome`]
//! - [`reduce`] - Folds both channels into a single value
//! - [`map_error`] - Transforms the error of an `Err`
//! - [`combine`] - Joins two outcomes, first failure wins
//! - [`get_or_default`] / [`get_or_else`] - Leaves the railway with a fallback
//!
//! # Capture Boundary
//!
//! Callbacks are assumed not to panic. A panic inside `map`, `bind`,
//! `reduce` or `combine` unwinds straight through to the caller. The only
//! place a panic becomes a modeled error is [`try_capture`] (and
//! [`bind_then_try`], which is built on it).
//!
//! # Examples
//!
//! ```
//! use railway::{Outcome, err, ok};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|e| e.to_string()).into()
//! }
//!
//! let total = parse("20")
//!     .combine(parse("22"), |a, b| a + b)
//!     .map(|sum| sum * 2)
//!     .get_or_else(|_| 0);
//! assert_eq!(total, 84);
//!
//! let failed = parse("x").bind(|n| if n > 0 { ok(n) } else { err("negative".to_string()) });
//! assert!(failed.is_error());
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::fault::Fault;
use crate::outcome::{Outcome, err, ok};

/// Maps the content of an `Ok` with `f`, passing an `Err` through unchanged.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, err, map, ok};
///
/// assert_eq!(map(ok::<i32, &str>(2), |x| x + 1), Outcome::Ok(3));
/// assert_eq!(map(err::<i32, &str>("boom"), |x| x + 1), Outcome::Err("boom"));
/// ```
#[inline]
pub fn map<S, S2, E, F>(outcome: Outcome<S, E>, f: F) -> Outcome<S2, E>
where
    F: FnOnce(S) -> S2,
{
    match outcome {
        Outcome::Ok(content) => ok(f(content)),
        Outcome::Err(error) => err(error),
    }
}

/// Chains an outcome-producing function onto an `Ok`.
///
/// On `Ok`, returns `f(content)` as is. On `Err`, short-circuits: `f` is
/// never called and the error is returned re-typed. In a chain of binds the
/// first `Err` suppresses every later callback.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, bind, err, ok};
///
/// let checked = |n: i32| if n >= 0 { ok(n) } else { err(format!("{n} < 0")) };
///
/// assert_eq!(bind(ok(4), checked), Outcome::Ok(4));
/// assert_eq!(bind(ok(-1), checked), Outcome::Err("-1 < 0".to_string()));
/// ```
#[inline]
pub fn bind<S, S2, E, F>(outcome: Outcome<S, E>, f: F) -> Outcome<S2, E>
where
    F: FnOnce(S) -> Outcome<S2, E>,
{
    reduce(outcome, f, err)
}

/// Folds an outcome into a single value.
///
/// Exactly one of `on_success` / `on_error` is called, with the payload of
/// the matching channel.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, err, ok, reduce};
///
/// fn describe(o: Outcome<u8, &str>) -> String {
///     reduce(o, |n| format!("got {n}"), |e| format!("failed: {e}"))
/// }
///
/// assert_eq!(describe(ok(3)), "got 3");
/// assert_eq!(describe(err("timeout")), "failed: timeout");
/// ```
#[inline]
pub fn reduce<S, E, R, FS, FE>(outcome: Outcome<S, E>, on_success: FS, on_error: FE) -> R
where
    FS: FnOnce(S) -> R,
    FE: FnOnce(E) -> R,
{
    match outcome {
        Outcome::Ok(content) => on_success(content),
        Outcome::Err(error) => on_error(error),
    }
}

/// Maps the error of an `Err` with `f`, passing an `Ok` through unchanged.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, err, map_error, ok};
///
/// assert_eq!(map_error(err::<i32, i32>(404), |code| format!("HTTP {code}")), Outcome::Err("HTTP 404".to_string()));
/// assert_eq!(map_error(ok::<i32, i32>(1), |code| format!("HTTP {code}")), Outcome::Ok(1));
/// ```
#[inline]
pub fn map_error<S, E, E2, F>(outcome: Outcome<S, E>, f: F) -> Outcome<S, E2>
where
    F: FnOnce(E) -> E2,
{
    match outcome {
        Outcome::Ok(content) => ok(content),
        Outcome::Err(error) => err(f(error)),
    }
}

/// Combines two outcomes sharing an error type.
///
/// The left operand takes priority: if `a` is `Err` its error is returned
/// and neither `b` nor `f` is looked at. Otherwise `b`'s error is returned if
/// it has one, and `f(a, b)` wrapped in `Ok` if both succeeded. Larger
/// combinations are built by nesting pairwise `combine` calls.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, combine, err, ok};
///
/// assert_eq!(combine(ok::<i32, &str>(1), ok(2), |a, b| a + b), Outcome::Ok(3));
/// assert_eq!(combine(ok::<i32, &str>(1), err::<i32, &str>("e2"), |a, b| a + b), Outcome::Err("e2"));
/// assert_eq!(combine(err::<i32, &str>("e1"), err::<i32, &str>("e2"), |a, b| a + b), Outcome::Err("e1"));
/// ```
#[inline]
pub fn combine<S1, S2, C, E, F>(a: Outcome<S1, E>, b: Outcome<S2, E>, f: F) -> Outcome<C, E>
where
    F: FnOnce(S1, S2) -> C,
{
    bind(a, |left| map(b, |right| f(left, right)))
}

/// Returns the content of an `Ok`, or the result of `fallback` for an `Err`.
///
/// `fallback` is lazy: it runs once on the `Err` path and never on `Ok`.
///
/// # Examples
///
/// ```
/// use railway::{err, get_or_default, ok};
///
/// assert_eq!(get_or_default(ok::<u32, &str>(8), || 0), 8);
/// assert_eq!(get_or_default(err::<u32, &str>("missing"), || 0), 0);
/// ```
#[inline]
pub fn get_or_default<S, E, F>(outcome: Outcome<S, E>, fallback: F) -> S
where
    F: FnOnce() -> S,
{
    reduce(outcome, |content| content, |_| fallback())
}

/// Returns the content of an `Ok`, or `on_error(error)` for an `Err`.
///
/// # Examples
///
/// ```
/// use railway::{err, get_or_else, ok};
///
/// assert_eq!(get_or_else(ok::<usize, &str>(1), |e| e.len()), 1);
/// assert_eq!(get_or_else(err::<usize, &str>("boom"), |e| e.len()), 4);
/// ```
#[inline]
pub fn get_or_else<S, E, F>(outcome: Outcome<S, E>, on_error: F) -> S
where
    F: FnOnce(E) -> S,
{
    reduce(outcome, |content| content, on_error)
}

/// Runs `f` under a panic-capture boundary.
///
/// A normal return becomes `Ok(value)`; a panic is caught and becomes
/// `Err(Fault)` carrying the original panic payload. This is the only
/// combinator that turns panics into modeled errors.
///
/// The default panic hook still reports the panic before it is captured.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, try_capture};
///
/// assert_eq!(try_capture(|| 2 + 2).get_or_else(|_| 0), 4);
///
/// let captured = try_capture(|| -> i32 { panic!("division by zero") });
/// let Outcome::Err(fault) = captured else { unreachable!() };
/// assert_eq!(fault.message(), "division by zero");
/// ```
pub fn try_capture<S, F>(f: F) -> Outcome<S, Fault>
where
    F: FnOnce() -> S,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(content) => ok(content),
        Err(payload) => err(captured(payload)),
    }
}

pub(crate) fn captured(payload: Box<dyn Any + Send>) -> Fault {
    let fault = Fault::from_panic(payload);
    tracing::debug!(panic = %fault.message(), "captured panic as fault");
    fault
}

/// Binds `f` onto an `Ok` under a panic-capture boundary.
///
/// Shorthand for `bind(outcome, |c| try_capture(|| f(c)))`, for chains whose
/// error channel is already [`Fault`].
///
/// # Examples
///
/// ```
/// use railway::{Outcome, bind_then_try, try_capture};
///
/// let parsed = bind_then_try(try_capture(|| "12"), |s| s.parse::<u8>().expect("digits"));
/// assert_eq!(parsed.get_or_else(|_| 0), 12);
///
/// let failed = bind_then_try(try_capture(|| "x"), |s| s.parse::<u8>().expect("digits"));
/// assert!(matches!(failed, Outcome::Err(f) if f.message().starts_with("digits")));
/// ```
pub fn bind_then_try<S, S2, F>(outcome: Outcome<S, Fault>, f: F) -> Outcome<S2, Fault>
where
    F: FnOnce(S) -> S2,
{
    bind(outcome, |content| try_capture(|| f(content)))
}

impl<S, E> Outcome<S, E> {
    /// Maps the content of an `Ok`. See [`map`].
    #[inline]
    pub fn map<S2, F>(self, f: F) -> Outcome<S2, E>
    where
        F: FnOnce(S) -> S2,
    {
        map(self, f)
    }

    /// Chains an outcome-producing function. See [`bind`].
    #[inline]
    pub fn bind<S2, F>(self, f: F) -> Outcome<S2, E>
    where
        F: FnOnce(S) -> Outcome<S2, E>,
    {
        bind(self, f)
    }

    /// Folds both channels into one value. See [`reduce`].
    #[inline]
    pub fn reduce<R, FS, FE>(self, on_success: FS, on_error: FE) -> R
    where
        FS: FnOnce(S) -> R,
        FE: FnOnce(E) -> R,
    {
        reduce(self, on_success, on_error)
    }

    /// Maps the error of an `Err`. See [`map_error`].
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<S, E2>
    where
        F: FnOnce(E) -> E2,
    {
        map_error(self, f)
    }

    /// Combines with another outcome, `self` taking priority. See [`combine`].
    #[inline]
    pub fn combine<S2, C, F>(self, other: Outcome<S2, E>, f: F) -> Outcome<C, E>
    where
        F: FnOnce(S, S2) -> C,
    {
        combine(self, other, f)
    }

    /// See [`get_or_default`].
    #[inline]
    pub fn get_or_default<F>(self, fallback: F) -> S
    where
        F: FnOnce() -> S,
    {
        get_or_default(self, fallback)
    }

    /// See [`get_or_else`].
    #[inline]
    pub fn get_or_else<F>(self, on_error: F) -> S
    where
        F: FnOnce(E) -> S,
    {
        get_or_else(self, on_error)
    }
}

impl<S> Outcome<S, Fault> {
    /// Binds `f` under a panic-capture boundary. See [`bind_then_try`].
    #[inline]
    pub fn bind_then_try<S2, F>(self, f: F) -> Outcome<S2, Fault>
    where
        F: FnOnce(S) -> S2,
    {
        bind_then_try(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_map_transforms_ok() {
        let o: Outcome<i32, &str> = ok(20);
        assert_eq!(o.map(|x| x.to_string()), Outcome::Ok("20".to_string()));
    }

    #[test]
    fn test_map_passes_err_without_calling_f() {
        let calls = Cell::new(0);
        let o: Outcome<i32, &str> = err("boom");
        let mapped = o.map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });

        assert_eq!(mapped, Outcome::Err("boom"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_bind_returns_callback_outcome_directly() {
        let o: Outcome<i32, &str> = ok(1);
        assert_eq!(o.bind(|_| err::<i32, &str>("inner")), Outcome::Err("inner"));
        assert_eq!(o.bind(|x| ok::<i32, &str>(x + 1)), Outcome::Ok(2));
    }

    #[test]
    fn test_bind_chain_stops_at_first_err() {
        let log = RefCell::new(Vec::new());
        let log_ref = &log;
        let step = move |name: &'static str, fail: bool| {
            move |x: i32| {
                log_ref.borrow_mut().push(name);
                if fail { err(name) } else { ok(x + 1) }
            }
        };

        let out: Outcome<i32, &str> = ok(0)
            .bind(step("first", false))
            .bind(step("second", true))
            .bind(step("third", false))
            .bind(step("fourth", false));

        assert_eq!(out, Outcome::Err("second"));
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_reduce_calls_exactly_one_branch() {
        let success_calls = Cell::new(0);
        let error_calls = Cell::new(0);
        let on_success = |x: i32| {
            success_calls.set(success_calls.get() + 1);
            x
        };
        let on_error = |e: &str| {
            error_calls.set(error_calls.get() + 1);
            e.len() as i32
        };

        assert_eq!(reduce(ok(5), on_success, on_error), 5);
        assert_eq!((success_calls.get(), error_calls.get()), (1, 0));

        assert_eq!(reduce(err("four"), on_success, on_error), 4);
        assert_eq!((success_calls.get(), error_calls.get()), (1, 1));
    }

    #[test]
    fn test_map_error_leaves_ok_untouched() {
        let calls = Cell::new(0);
        let o: Outcome<i32, i32> = ok(3);
        let mapped = o.map_error(|code| {
            calls.set(calls.get() + 1);
            format!("code {code}")
        });

        assert_eq!(mapped, Outcome::Ok(3));
        assert_eq!(calls.get(), 0);
        assert_eq!(err::<i32, i32>(7).map_error(|c| c * 10), Outcome::Err(70));
    }

    #[test]
    fn test_combine_priority() {
        let add = |a: i32, b: i32| a + b;

        assert_eq!(combine(err::<i32, &str>("e1"), err("e2"), add), Outcome::Err("e1"));
        assert_eq!(combine(ok(1), err::<i32, &str>("e2"), add), Outcome::Err("e2"));
        assert_eq!(combine(err::<i32, &str>("e1"), ok(2), add), Outcome::Err("e1"));
        assert_eq!(combine(ok::<i32, &str>(1), ok(2), add), Outcome::Ok(3));
    }

    #[test]
    fn test_combine_never_calls_f_on_err() {
        let calls = Cell::new(0);
        let out = combine(ok::<i32, &str>(1), err::<i32, &str>("e2"), |a, b| {
            calls.set(calls.get() + 1);
            a + b
        });

        assert_eq!(out, Outcome::Err("e2"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_combine_nests_for_more_operands() {
        let a: Outcome<i32, &str> = ok(1);
        let b: Outcome<&str, &str> = ok("two");
        let c: Outcome<f64, &str> = ok(3.0);

        let all = a.combine(b, |x, y| (x, y)).combine(c, |(x, y), z| format!("{x}-{y}-{z}"));
        assert_eq!(all, Outcome::Ok("1-two-3".to_string()));

        let broken = ok::<i32, &str>(1)
            .combine(err::<i32, &str>("middle"), |x, y| x + y)
            .combine(err::<i32, &str>("last"), |x, y| x + y);
        assert_eq!(broken, Outcome::Err("middle"));
    }

    #[test]
    fn test_get_or_default_is_lazy() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            0
        };

        assert_eq!(get_or_default(ok::<i32, &str>(9), fallback), 9);
        assert_eq!(calls.get(), 0);
        assert_eq!(get_or_default(err::<i32, &str>("boom"), fallback), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_get_or_else_receives_error() {
        let seen = RefCell::new(None);
        let value = err::<String, &str>("the error").get_or_else(|e| {
            *seen.borrow_mut() = Some(e);
            String::from("recovered")
        });

        assert_eq!(value, "recovered");
        assert_eq!(*seen.borrow(), Some("the error"));
    }

    #[test]
    fn test_try_capture_ok() {
        let captured = try_capture(|| "fine".len());
        assert!(matches!(captured, Outcome::Ok(4)));
    }

    #[test]
    fn test_try_capture_preserves_fault_identity() {
        let code = 0xff;
        let captured = try_capture(|| -> u8 { panic!("bad byte {code}") });

        match captured {
            Outcome::Err(fault) => {
                assert_eq!(fault.message(), "bad byte 255");
                assert!(fault.is::<String>());
            }
            Outcome::Ok(_) => panic!("expected a fault"),
        }
    }

    #[test]
    fn test_try_capture_keeps_static_str_payload() {
        let captured = try_capture(|| -> u8 { panic!("bad byte") });

        match captured {
            Outcome::Err(fault) => {
                assert_eq!(fault.message(), "bad byte");
                assert!(fault.is::<&str>());
                assert!(!fault.is::<String>());
            }
            Outcome::Ok(_) => panic!("expected a fault"),
        }
    }

    #[test]
    #[should_panic(expected = "escapes map")]
    fn test_map_does_not_capture_panics() {
        let _ = ok::<i32, &str>(1).map(|_| -> i32 { panic!("escapes map") });
    }

    #[test]
    fn test_bind_then_try() {
        let parsed = try_capture(|| "41").bind_then_try(|s| s.parse::<i32>().expect("numeric") + 1);
        assert!(matches!(parsed, Outcome::Ok(42)));

        let failed = try_capture(|| "forty").bind_then_try(|s| s.parse::<i32>().expect("numeric"));
        match failed {
            Outcome::Err(fault) => assert!(fault.message().starts_with("numeric")),
            Outcome::Ok(_) => panic!("expected a fault"),
        }
    }

    #[test]
    fn test_bind_then_try_skips_f_on_existing_fault() {
        let calls = Cell::new(0);
        let start: Outcome<i32, Fault> = err(Fault::new("earlier"));
        let out = start.bind_then_try(|x| {
            calls.set(calls.get() + 1);
            x
        });

        assert_eq!(calls.get(), 0);
        assert!(matches!(out, Outcome::Err(f) if f.message() == "earlier"));
    }
}
