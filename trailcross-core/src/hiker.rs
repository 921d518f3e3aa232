//! Hikers and the pace at which they cross a bridge.

use thiserror::Error;

/// A hiker who must cross one or more bridges.
///
/// Speeds are distance units per time unit and are always positive and
/// finite once constructed.
///
/// # Examples
/// ```
/// use trailcross_core::Hiker;
///
/// # fn main() -> Result<(), trailcross_core::HikerError> {
/// let hiker = Hiker::new("B", 50.0)?;
/// assert_eq!(hiker.id(), "B");
/// assert!((hiker.crossing_time(100) - 2.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Hiker {
    id: String,
    speed: f64,
}

/// Errors returned by [`Hiker::new`].
#[derive(Debug, Error, PartialEq)]
pub enum HikerError {
    /// The identifier was empty.
    #[error("hiker id must not be empty")]
    EmptyId,
    /// The speed was zero, negative, or not a finite number.
    #[error("hiker {id} has invalid speed {speed}; speed must be positive and finite")]
    InvalidSpeed {
        /// Identifier of the rejected hiker.
        id: String,
        /// Speed as supplied.
        speed: f64,
    },
}

impl Hiker {
    /// Validates and constructs a [`Hiker`].
    ///
    /// # Errors
    /// Returns [`HikerError::EmptyId`] for a blank identifier and
    /// [`HikerError::InvalidSpeed`] when `speed` is not a positive finite
    /// number.
    pub fn new(id: impl Into<String>, speed: f64) -> Result<Self, HikerError> {
        let hiker_id: String = id.into();
        if hiker_id.is_empty() {
            return Err(HikerError::EmptyId);
        }
        if !(speed.is_finite() && speed > 0.0) {
            return Err(HikerError::InvalidSpeed {
                id: hiker_id,
                speed,
            });
        }
        Ok(Self {
            id: hiker_id,
            speed,
        })
    }

    /// Unique identifier of the hiker.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Crossing speed in distance units per time unit.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Time this hiker needs to cross a bridge of `length` at their own pace.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "crossing time is length divided by speed"
    )]
    pub fn crossing_time(&self, length: u32) -> f64 {
        f64::from(length) / self.speed
    }
}
