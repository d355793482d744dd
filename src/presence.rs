//! The one-channel presence type and its combinators.
//!
//! [`Presence`] is the degenerate case of the railway algebra: [`Outcome`](crate::Outcome)
//! with the error payload removed. Absence is not an error, so there is no
//! fault-capture or asynchronous form here.

/// A value that is either present or absent.
///
/// # Examples
///
/// ```rust
/// use railway::{Presence, none, some};
///
/// let five = some(5).bind(|x| some(x + 1));
/// assert_eq!(five, Presence::Some(6));
///
/// let nothing: Presence<i32> = none();
/// assert_eq!(nothing.map(|x| x * 2), Presence::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Presence<T> {
    /// A present value
    Some(T),
    /// No value
    None,
}

/// Construct a present value.
#[inline]
pub const fn some<T>(content: T) -> Presence<T> {
    Presence::Some(content)
}

/// Construct an absent value.
#[inline]
pub const fn none<T>() -> Presence<T> {
    Presence::None
}

impl<T> Presence<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Presence::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Presence::None)
    }

    /// Converts from `&Presence<T>` to `Presence<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Presence<&T> {
        match self {
            Presence::Some(content) => Presence::Some(content),
            Presence::None => Presence::None,
        }
    }

    /// Maps the content with `f`. `f` is never called on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::{Presence, some};
    ///
    /// assert_eq!(some(2).map(|x| x * 10), Presence::Some(20));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Presence<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Presence::Some(content) => Presence::Some(f(content)),
            Presence::None => Presence::None,
        }
    }

    /// Chains a presence-producing function. Short-circuits on `None`
    /// without calling `f`.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Presence<U>
    where
        F: FnOnce(T) -> Presence<U>,
    {
        match self {
            Presence::Some(content) => f(content),
            Presence::None => Presence::None,
        }
    }

    /// Returns the content, or the result of `fallback` when absent.
    ///
    /// `fallback` only runs on the `None` path.
    #[inline]
    pub fn get_or_default<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Presence::Some(content) => content,
            Presence::None => fallback(),
        }
    }

    /// Imperative accessor for branch-based call sites.
    ///
    /// Returns `(true, content)` when present and `(false, T::default())`
    /// when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::{Presence, some};
    ///
    /// assert_eq!(some(3).try_retrieve(), (true, 3));
    /// assert_eq!(Presence::<i32>::None.try_retrieve(), (false, 0));
    /// ```
    #[inline]
    pub fn try_retrieve(self) -> (bool, T)
    where
        T: Default,
    {
        match self {
            Presence::Some(content) => (true, content),
            Presence::None => (false, T::default()),
        }
    }

    /// Converts into the standard library [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Some(content) => Some(content),
            Presence::None => None,
        }
    }
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::None
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(content) => Presence::Some(content),
            None => Presence::None,
        }
    }
}

impl<T> From<Presence<T>> for Option<T> {
    fn from(presence: Presence<T>) -> Self {
        presence.into_option()
    }
}
