use either::Either;

use crate::presence::Presence;

/// The two-channel outcome of a computation: a success content or an error.
///
/// `Outcome` carries no behavior of its own beyond tag inspection. The
/// railway combinators (`map`, `bind`, `reduce`, ...) live in
/// [`combinators`](crate::combinators) and are also reachable as methods.
///
/// # Examples
///
/// ```rust
/// use railway::{Outcome, err, ok};
///
/// let parsed: Outcome<i32, String> = ok(42);
/// let failed: Outcome<i32, String> = err("not a number".to_string());
///
/// assert!(parsed.is_success());
/// assert!(failed.is_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<S, E> {
    /// Successful computation carrying its content
    Ok(S),
    /// Failed computation carrying a modeled error
    Err(E),
}

/// Construct a successful outcome.
#[inline]
pub const fn ok<S, E>(content: S) -> Outcome<S, E> {
    Outcome::Ok(content)
}

/// Construct a failed outcome.
#[inline]
pub const fn err<S, E>(error: E) -> Outcome<S, E> {
    Outcome::Err(error)
}

impl<S, E> Outcome<S, E> {
    /// Returns `true` if the outcome is `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let x: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert!(x.is_success());
    ///
    /// let y: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert!(!y.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if the outcome is `Err`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Converts from `Outcome<S, E>` to `Presence<S>`, discarding the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::{Outcome, Presence};
    ///
    /// let x: Outcome<i32, &str> = Outcome::Ok(2);
    /// assert_eq!(x.success(), Presence::Some(2));
    ///
    /// let y: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(y.success(), Presence::None);
    /// ```
    #[inline]
    pub fn success(self) -> Presence<S> {
        match self {
            Outcome::Ok(content) => Presence::Some(content),
            Outcome::Err(_) => Presence::None,
        }
    }

    /// Converts from `Outcome<S, E>` to `Presence<E>`, discarding the content.
    #[inline]
    pub fn error(self) -> Presence<E> {
        match self {
            Outcome::Ok(_) => Presence::None,
            Outcome::Err(error) => Presence::Some(error),
        }
    }

    /// Converts from `&Outcome<S, E>` to `Outcome<&S, &E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// let x: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert_eq!(x.as_ref(), Outcome::Err(&"boom".to_string()));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&S, &E> {
        match self {
            Outcome::Ok(content) => Outcome::Ok(content),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts from `&mut Outcome<S, E>` to `Outcome<&mut S, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut S, &mut E> {
        match self {
            Outcome::Ok(content) => Outcome::Ok(content),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts into the standard library [`Result`], so outcomes compose with `?`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::{Outcome, err, ok};
    ///
    /// fn halve(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 { ok(n / 2) } else { err(format!("{n} is odd")) }
    /// }
    ///
    /// fn quarter(n: i32) -> Result<i32, String> {
    ///     let half = halve(n).into_result()?;
    ///     halve(half).into_result()
    /// }
    ///
    /// assert_eq!(quarter(8), Ok(2));
    /// assert_eq!(quarter(6), Err("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, E> {
        match self {
            Outcome::Ok(content) => Ok(content),
            Outcome::Err(error) => Err(error),
        }
    }

    /// Converts into an [`Either`], errors on the left and content on the right.
    #[inline]
    pub fn into_either(self) -> Either<E, S> {
        match self {
            Outcome::Ok(content) => Either::Right(content),
            Outcome::Err(error) => Either::Left(error),
        }
    }
}

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(content) => Outcome::Ok(content),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    fn from(outcome: Outcome<S, E>) -> Self {
        outcome.into_result()
    }
}

impl<S, E> From<Either<E, S>> for Outcome<S, E> {
    fn from(either: Either<E, S>) -> Self {
        match either {
            Either::Left(error) => Outcome::Err(error),
            Either::Right(content) => Outcome::Ok(content),
        }
    }
}
