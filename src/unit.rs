use std::fmt;

/// A zero-information marker for computations whose only result is "it completed".
///
/// Every `Unit` equals every other `Unit`; [`UNIT`] is the canonical instance.
///
/// # Examples
///
/// ```rust
/// use railway::{Outcome, UNIT, Unit, ok};
///
/// let saved: Outcome<Unit, String> = ok(UNIT);
/// assert_eq!(saved, Outcome::Ok(Unit));
/// assert_eq!(UNIT.to_string(), "Unit");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

/// The canonical [`Unit`] instance.
pub const UNIT: Unit = Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unit")
    }
}

impl From<()> for Unit {
    fn from((): ()) -> Self {
        Unit
    }
}
