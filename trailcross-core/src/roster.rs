//! Hiker and bridge registries passed explicitly into resolution.

use thiserror::Error;

use crate::{Bridge, BridgeError, Hiker, HikerError};

const SAMPLE_HIKERS: [(&str, f64); 7] = [
    ("A", 100.0),
    ("B", 50.0),
    ("C", 20.0),
    ("D", 10.0),
    ("E", 2.5),
    ("F", 25.0),
    ("G", 15.0),
];

const SAMPLE_BRIDGES: [(&str, u32, &[&str]); 3] = [
    ("1", 100, &["A", "B", "C", "D"]),
    ("2", 250, &["A", "B", "C", "D", "E"]),
    ("3", 150, &["A", "B", "C", "D", "E", "F", "G"]),
];

/// Errors raised while building a [`Roster`] from raw records.
#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    /// A hiker record failed validation.
    #[error(transparent)]
    Hiker(#[from] HikerError),
    /// A bridge record failed validation.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// The hiker registry and bridge registry for one planning run.
///
/// # Examples
/// ```
/// use trailcross_core::Roster;
///
/// # fn main() -> Result<(), trailcross_core::RosterError> {
/// let roster = Roster::sample()?;
/// assert_eq!(roster.hikers().len(), 7);
/// assert_eq!(roster.bridges().len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roster {
    hikers: Vec<Hiker>,
    bridges: Vec<Bridge>,
}

impl Roster {
    /// Construct a roster from validated hikers and bridges.
    #[must_use]
    pub const fn new(hikers: Vec<Hiker>, bridges: Vec<Bridge>) -> Self {
        Self { hikers, bridges }
    }

    /// The built-in sample: seven hikers and three bridges measured in feet
    /// and feet per minute.
    ///
    /// # Errors
    /// Returns [`RosterError`] if a built-in record fails validation.
    pub fn sample() -> Result<Self, RosterError> {
        let hikers = SAMPLE_HIKERS
            .into_iter()
            .map(|(id, speed)| Hiker::new(id, speed))
            .collect::<Result<Vec<_>, _>>()?;
        let bridges = SAMPLE_BRIDGES
            .into_iter()
            .map(|(id, length, listed)| Bridge::new(id, length, listed.iter().copied()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(hikers, bridges))
    }

    /// Hikers in registry order.
    #[must_use]
    pub fn hikers(&self) -> &[Hiker] {
        &self.hikers
    }

    /// Bridges in registry order.
    #[must_use]
    pub fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }
}
