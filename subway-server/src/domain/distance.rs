//! Segment distance type.

use std::fmt;
use std::num::NonZeroU32;

/// Error returned when constructing a distance of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("distance must be a positive whole number")]
pub struct InvalidDistance;

/// A strictly positive distance between two adjacent stations.
///
/// Distances are whole units so that path totals never accumulate
/// fractional error.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let d = Distance::new(10).unwrap();
/// assert_eq!(d.get(), 10);
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(NonZeroU32);

impl Distance {
    pub fn new(value: u32) -> Result<Self, InvalidDistance> {
        NonZeroU32::new(value).map(Distance).ok_or(InvalidDistance)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the remainder left after carving `part` off this distance.
    ///
    /// Returns `None` when `part` is at least as long as `self`, since the
    /// remainder would not be positive.
    pub fn checked_sub(self, part: Distance) -> Option<Distance> {
        self.get()
            .checked_sub(part.get())
            .and_then(|rest| Distance::new(rest).ok())
    }

    /// Joins two adjacent distances.
    ///
    /// Returns `None` if the sum does not fit in a `u32`.
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.get()).map(Distance)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
