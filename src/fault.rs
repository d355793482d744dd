//! Faults: panics captured at the [`try_capture`](crate::try_capture) boundary.

use std::any::Any;
use std::fmt;

/// A panic converted into a modeled error.
///
/// The original panic payload is kept, so the fault's identity survives the
/// capture: it can be downcast back to the value passed to `panic!` /
/// [`std::panic::panic_any`], or re-raised with [`Fault::resume`].
///
/// `Fault` is `Send` but not `Sync`, because panic payloads are only `Send`.
/// It converts with `?` into `Box<dyn Error>`, but not into
/// `Box<dyn Error + Send + Sync>` or `anyhow::Error`. Callers that need a
/// `Sync` error should map it first, e.g.
/// `map_error(|fault| fault.message().to_owned())`.
#[derive(thiserror::Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
    payload: Box<dyn Any + Send>,
}

impl Fault {
    /// Create a fault from a message, as if `panic!("{message}")` had been caught.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Fault {
            payload: Box::new(message.clone()),
            message,
        }
    }

    /// Wrap a payload obtained from `catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Fault {
            message: payload_message(payload.as_ref()),
            payload,
        }
    }

    /// The rendered panic message; `unknown panic` for non-string payloads.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original panic payload.
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Returns `true` if the payload is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Downcast the payload to a concrete type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::{Outcome, try_capture};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Disconnected(u16);
    ///
    /// let captured = try_capture(|| -> i32 { std::panic::panic_any(Disconnected(8080)) });
    /// let Outcome::Err(fault) = captured else { unreachable!() };
    /// assert_eq!(fault.downcast_ref::<Disconnected>(), Some(&Disconnected(8080)));
    /// ```
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Consume the fault, returning the original payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Re-raise the captured panic with its original payload.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
