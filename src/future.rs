//! Asynchronous railway combinators.
//!
//! Every function here takes a future that eventually yields an [`Outcome`]
//! and has the same semantics as its synchronous namesake in
//! [`combinators`](crate::combinators), with one ordering rule: the outcome
//! future is awaited to completion before its tag is inspected, and any
//! callback future is created and awaited only after that.
//!
//! Nothing here spawns tasks or polls two futures concurrently. In particular
//! [`combine`] and [`combine_async`] await `a` before `b` is ever polled, and
//! drop `b` unpolled when `a` fails. Dropping a returned future cancels it the
//! usual way; no cancellation is intercepted.
//!
//! Functions suffixed `_async` take callbacks that themselves return futures.
//! The same operations are available as methods through [`OutcomeFuture`]
//! and [`FaultFuture`].
//!
//! # Examples
//!
//! ```
//! use railway::future::OutcomeFuture;
//! use railway::{Outcome, err, ok};
//!
//! async fn fetch_user(id: u32) -> Outcome<String, String> {
//!     if id == 1 { ok("ada".to_string()) } else { err(format!("no user {id}")) }
//! }
//!
//! async fn greeting(id: u32) -> String {
//!     fetch_user(id)
//!         .ok_map(|name| format!("hello, {name}"))
//!         .get_or_else(|e| e)
//!         .await
//! }
//! # let _ = greeting(1);
//! ```

use std::future::{Future, ready};
use std::panic::{self, AssertUnwindSafe};

use futures_util::FutureExt;

use crate::combinators;
use crate::fault::Fault;
use crate::outcome::{Outcome, err, ok};

/// Awaits `outcome`, then maps the content of an `Ok` with `f`.
pub async fn map<Fut, S, S2, E, F>(outcome: Fut, f: F) -> Outcome<S2, E>
where
    Fut: Future<Output = Outcome<S, E>>,
    F: FnOnce(S) -> S2,
{
    combinators::map(outcome.await, f)
}

/// Awaits `outcome`, then maps the content of an `Ok` with an async `f`.
///
/// `f` is not called, and no future is created, when `outcome` yields `Err`.
pub async fn map_async<Fut, S, S2, E, F, FutS>(outcome: Fut, f: F) -> Outcome<S2, E>
where
    Fut: Future<Output = Outcome<S, E>>,
    F: FnOnce(S) -> FutS,
    FutS: Future<Output = S2>,
{
    match outcome.await {
        Outcome::Ok(content) => ok(f(content).await),
        Outcome::Err(error) => err(error),
    }
}

/// Awaits `outcome`, then chains an outcome-producing function onto an `Ok`.
pub async fn bind<Fut, S, S2, E, F>(outcome: Fut, f: F) -> Outcome<S2, E>
where
    Fut: Future<Output = Outcome<S, E>>,
    F: FnOnce(S) -> Outcome<S2, E>,
{
    combinators::bind(outcome.await, f)
}

/// Awaits `outcome`, then chains an async outcome-producing function onto an `Ok`.
pub async fn bind_async<Fut, S, S2, E, F, FutS>(outcome: Fut, f: F) -> Outcome<S2, E>
where
    Fut: Future<Output = Outcome<S, E>>,
    F: FnOnce(S) -> FutS,
    FutS: Future<Output = Outcome<S2, E>>,
{
    reduce_async(outcome, f, |error| ready(err(error))).await
}

/// Awaits `outcome`, then folds it with `on_success` or `on_error`.
pub async fn reduce<Fut, S, E, R, FS, FE>(outcome: Fut, on_success: FS, on_error: FE) -> R
where
    Fut: Future<Output = Outcome<S, E>>,
    FS: FnOnce(S) -> R,
    FE: FnOnce(E) -> R,
{
    combinators::reduce(outcome.await, on_success, on_error)
}

/// Awaits `outcome`, then folds it with the async branch matching its tag.
///
/// Only the selected branch's future is ever created.
pub async fn reduce_async<Fut, S, E, R, FS, FE, FutS, FutE>(
    outcome: Fut,
    on_success: FS,
    on_error: FE,
) -> R
where
    Fut: Future<Output = Outcome<S, E>>,
    FS: FnOnce(S) -> FutS,
    FE: FnOnce(E) -> FutE,
    FutS: Future<Output = R>,
    FutE: Future<Output = R>,
{
    match outcome.await {
        Outcome::Ok(content) => on_success(content).await,
        Outcome::Err(error) => on_error(error).await,
    }
}

/// Awaits `outcome`, then maps the error of an `Err` with `f`.
pub async fn map_error<Fut, S, E, E2, F>(outcome: Fut, f: F) -> Outcome<S, E2>
where
    Fut: Future<Output = Outcome<S, E>>,
    F: FnOnce(E) -> E2,
{
    combinators::map_error(outcome.await, f)
}

/// Awaits `outcome`, then maps the error of an `Err` with an async `f`.
pub async fn map_error_async<Fut, S, E, E2, F, FutE>(outcome: Fut, f: F) -> Outcome<S, E2>
where
    Fut: Future<Output = Outcome<S, E>>,
    F: FnOnce(E) -> FutE,
    FutE: Future<Output = E2>,
{
    match outcome.await {
        Outcome::Ok(content) => ok(content),
        Outcome::Err(error) => err(f(error).await),
    }
}

/// Awaits `a`, then `b`, and combines their contents with `f`.
///
/// `a` is awaited to completion first. If it yields `Err`, that error is
/// returned and `b` is dropped without being polled.
pub async fn combine<FutA, FutB, S1, S2, C, E, F>(a: FutA, b: FutB, f: F) -> Outcome<C, E>
where
    FutA: Future<Output = Outcome<S1, E>>,
    FutB: Future<Output = Outcome<S2, E>>,
    F: FnOnce(S1, S2) -> C,
{
    match a.await {
        Outcome::Ok(left) => combinators::map(b.await, |right| f(left, right)),
        Outcome::Err(error) => err(error),
    }
}

/// Awaits `a`, then `b`, and combines their contents with an async `f`.
///
/// Same ordering as [`combine`]; `f`'s future is created only when both
/// operands succeeded.
pub async fn combine_async<FutA, FutB, S1, S2, C, E, F, FutC>(
    a: FutA,
    b: FutB,
    f: F,
) -> Outcome<C, E>
where
    FutA: Future<Output = Outcome<S1, E>>,
    FutB: Future<Output = Outcome<S2, E>>,
    F: FnOnce(S1, S2) -> FutC,
    FutC: Future<Output = C>,
{
    let left = match a.await {
        Outcome::Ok(left) => left,
        Outcome::Err(error) => return err(error),
    };
    map_async(b, |right| f(left, right)).await
}

/// Awaits `outcome`, returning its content or the lazily computed `fallback`.
pub async fn get_or_default<Fut, S, E, F>(outcome: Fut, fallback: F) -> S
where
    Fut: Future<Output = Outcome<S, E>>,
    F: FnOnce() -> S,
{
    combinators::get_or_default(outcome.await, fallback)
}

/// Awaits `outcome`, returning its content or `on_error(error)`.
pub async fn get_or_else<Fut, S, E, F>(outcome: Fut, on_error: F) -> S
where
    Fut: Future<Output = Outcome<S, E>>,
    F: FnOnce(E) -> S,
{
    combinators::get_or_else(outcome.await, on_error)
}

/// Awaits `outcome`, returning its content or awaiting `on_error(error)`.
pub async fn get_or_else_async<Fut, S, E, F, FutS>(outcome: Fut, on_error: F) -> S
where
    Fut: Future<Output = Outcome<S, E>>,
    F: FnOnce(E) -> FutS,
    FutS: Future<Output = S>,
{
    reduce_async(outcome, ready, on_error).await
}

/// Runs the future produced by `f` under a panic-capture boundary.
///
/// A panic while creating the future or while polling it becomes
/// `Err(Fault)`; a normal completion becomes `Ok(value)`.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, future};
///
/// async fn load() -> Vec<u8> {
///     panic!("device gone")
/// }
///
/// let guarded = future::try_capture(load);
/// # let _ = guarded;
/// ```
pub async fn try_capture<S, F, Fut>(f: F) -> Outcome<S, Fault>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = S>,
{
    let future = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(future) => future,
        Err(payload) => return err(combinators::captured(payload)),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(content) => ok(content),
        Err(payload) => err(combinators::captured(payload)),
    }
}

/// Awaits `outcome`, then binds a synchronous `f` under a panic-capture boundary.
pub async fn bind_then_try<Fut, S, S2, F>(outcome: Fut, f: F) -> Outcome<S2, Fault>
where
    Fut: Future<Output = Outcome<S, Fault>>,
    F: FnOnce(S) -> S2,
{
    combinators::bind_then_try(outcome.await, f)
}

/// Awaits `outcome`, then binds an async `f` under a panic-capture boundary.
pub async fn bind_then_try_async<Fut, S, S2, F, FutS>(outcome: Fut, f: F) -> Outcome<S2, Fault>
where
    Fut: Future<Output = Outcome<S, Fault>>,
    F: FnOnce(S) -> FutS,
    FutS: Future<Output = S2>,
{
    bind_async(outcome, |content| try_capture(move || f(content))).await
}

/// Extension trait for futures yielding an [`Outcome`].
///
/// This trait is automatically implemented for all such futures. Each method
/// forwards to the free function of the same operation in this module.
pub trait OutcomeFuture<S, E>: Future<Output = Outcome<S, E>> + Sized {
    /// Maps the content of an `Ok`. See [`map`].
    fn ok_map<S2, F>(self, f: F) -> impl Future<Output = Outcome<S2, E>>
    where
        F: FnOnce(S) -> S2,
    {
        map(self, f)
    }

    /// Maps the content of an `Ok` with an async function. See [`map_async`].
    fn ok_map_async<S2, F, FutS>(self, f: F) -> impl Future<Output = Outcome<S2, E>>
    where
        F: FnOnce(S) -> FutS,
        FutS: Future<Output = S2>,
    {
        map_async(self, f)
    }

    /// Chains an outcome-producing function. See [`bind`].
    fn ok_and_then<S2, F>(self, f: F) -> impl Future<Output = Outcome<S2, E>>
    where
        F: FnOnce(S) -> Outcome<S2, E>,
    {
        bind(self, f)
    }

    /// Chains an async outcome-producing function. See [`bind_async`].
    fn ok_and_then_async<S2, F, FutS>(self, f: F) -> impl Future<Output = Outcome<S2, E>>
    where
        F: FnOnce(S) -> FutS,
        FutS: Future<Output = Outcome<S2, E>>,
    {
        bind_async(self, f)
    }

    /// Folds both channels. See [`reduce`].
    fn reduce<R, FS, FE>(self, on_success: FS, on_error: FE) -> impl Future<Output = R>
    where
        FS: FnOnce(S) -> R,
        FE: FnOnce(E) -> R,
    {
        reduce(self, on_success, on_error)
    }

    /// Folds both channels with async branches. See [`reduce_async`].
    fn reduce_async<R, FS, FE, FutS, FutE>(
        self,
        on_success: FS,
        on_error: FE,
    ) -> impl Future<Output = R>
    where
        FS: FnOnce(S) -> FutS,
        FE: FnOnce(E) -> FutE,
        FutS: Future<Output = R>,
        FutE: Future<Output = R>,
    {
        reduce_async(self, on_success, on_error)
    }

    /// Maps the error of an `Err`. See [`map_error`].
    fn err_map<E2, F>(self, f: F) -> impl Future<Output = Outcome<S, E2>>
    where
        F: FnOnce(E) -> E2,
    {
        map_error(self, f)
    }

    /// Maps the error of an `Err` with an async function. See [`map_error_async`].
    fn err_map_async<E2, F, FutE>(self, f: F) -> impl Future<Output = Outcome<S, E2>>
    where
        F: FnOnce(E) -> FutE,
        FutE: Future<Output = E2>,
    {
        map_error_async(self, f)
    }

    /// Combines with another outcome future, `self` first. See [`combine`].
    fn combine<S2, C, FutB, F>(self, other: FutB, f: F) -> impl Future<Output = Outcome<C, E>>
    where
        FutB: Future<Output = Outcome<S2, E>>,
        F: FnOnce(S, S2) -> C,
    {
        combine(self, other, f)
    }

    /// Combines with another outcome future using an async function. See [`combine_async`].
    fn combine_async<S2, C, FutB, F, FutC>(
        self,
        other: FutB,
        f: F,
    ) -> impl Future<Output = Outcome<C, E>>
    where
        FutB: Future<Output = Outcome<S2, E>>,
        F: FnOnce(S, S2) -> FutC,
        FutC: Future<Output = C>,
    {
        combine_async(self, other, f)
    }

    /// See [`get_or_default`].
    fn get_or_default<F>(self, fallback: F) -> impl Future<Output = S>
    where
        F: FnOnce() -> S,
    {
        get_or_default(self, fallback)
    }

    /// See [`get_or_else`].
    fn get_or_else<F>(self, on_error: F) -> impl Future<Output = S>
    where
        F: FnOnce(E) -> S,
    {
        get_or_else(self, on_error)
    }

    /// See [`get_or_else_async`].
    fn get_or_else_async<F, FutS>(self, on_error: F) -> impl Future<Output = S>
    where
        F: FnOnce(E) -> FutS,
        FutS: Future<Output = S>,
    {
        get_or_else_async(self, on_error)
    }
}

impl<S, E, T> OutcomeFuture<S, E> for T where T: Future<Output = Outcome<S, E>> {}

/// Extension trait for futures yielding an [`Outcome`] with a [`Fault`] error channel.
pub trait FaultFuture<S>: Future<Output = Outcome<S, Fault>> + Sized {
    /// Binds a synchronous `f` under a panic-capture boundary. See [`bind_then_try`].
    fn ok_then_try<S2, F>(self, f: F) -> impl Future<Output = Outcome<S2, Fault>>
    where
        F: FnOnce(S) -> S2,
    {
        bind_then_try(self, f)
    }

    /// Binds an async `f` under a panic-capture boundary. See [`bind_then_try_async`].
    fn ok_then_try_async<S2, F, FutS>(self, f: F) -> impl Future<Output = Outcome<S2, Fault>>
    where
        F: FnOnce(S) -> FutS,
        FutS: Future<Output = S2>,
    {
        bind_then_try_async(self, f)
    }
}

impl<S, T> FaultFuture<S> for T where T: Future<Output = Outcome<S, Fault>> {}
