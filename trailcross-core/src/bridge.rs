//! Bridges, the hikers listed to cross them, and their resolved form.

use thiserror::Error;

use crate::Hiker;

/// A narrow bridge and the ordered list of hiker IDs that must cross it.
///
/// The listed order decides the escort sequence once hikers are resolved.
///
/// # Examples
/// ```
/// use trailcross_core::Bridge;
///
/// # fn main() -> Result<(), trailcross_core::BridgeError> {
/// let bridge = Bridge::new("1", 100, ["A", "B", "C", "D"])?;
/// assert_eq!(bridge.length(), 100);
/// assert_eq!(bridge.hiker_ids(), ["A", "B", "C", "D"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    id: String,
    length: u32,
    hiker_ids: Vec<String>,
}

/// Errors returned by [`Bridge::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The identifier was empty.
    #[error("bridge id must not be empty")]
    EmptyId,
    /// The bridge length was zero.
    #[error("bridge {id} must have a positive length")]
    ZeroLength {
        /// Identifier of the rejected bridge.
        id: String,
    },
}

impl Bridge {
    /// Validates and constructs a [`Bridge`].
    ///
    /// # Errors
    /// Returns [`BridgeError::EmptyId`] for a blank identifier and
    /// [`BridgeError::ZeroLength`] when `length` is zero.
    pub fn new<I, S>(id: impl Into<String>, length: u32, hiker_ids: I) -> Result<Self, BridgeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bridge_id: String = id.into();
        if bridge_id.is_empty() {
            return Err(BridgeError::EmptyId);
        }
        if length == 0 {
            return Err(BridgeError::ZeroLength { id: bridge_id });
        }
        Ok(Self {
            id: bridge_id,
            length,
            hiker_ids: hiker_ids.into_iter().map(Into::into).collect(),
        })
    }

    /// Unique identifier of the bridge.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Length in distance units.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Hiker IDs in the order they were listed.
    #[must_use]
    pub fn hiker_ids(&self) -> &[String] {
        &self.hiker_ids
    }
}

/// A bridge whose hiker IDs have been joined against the hiker registry.
///
/// Built by [`resolve`](crate::resolve). The ferry hiker is the fastest
/// resolved hiker; on equal speeds the first one listed keeps the role.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBridge {
    id: String,
    length: u32,
    hikers: Vec<Hiker>,
    ferry: Option<usize>,
    unresolved: Vec<String>,
}

impl ResolvedBridge {
    pub(crate) fn empty(bridge: &Bridge) -> Self {
        Self {
            id: bridge.id.clone(),
            length: bridge.length,
            hikers: Vec::with_capacity(bridge.hiker_ids.len()),
            ferry: None,
            unresolved: Vec::new(),
        }
    }

    /// Append a resolved hiker, promoting it to ferry when strictly faster.
    pub(crate) fn push_hiker(&mut self, hiker: Hiker) {
        let promote = self
            .ferry()
            .is_none_or(|ferry| hiker.speed() > ferry.speed());
        let index = self.hikers.len();
        self.hikers.push(hiker);
        if promote {
            self.ferry = Some(index);
        }
    }

    pub(crate) fn push_unresolved(&mut self, hiker_id: &str) {
        self.unresolved.push(hiker_id.to_owned());
    }

    /// Identifier of the underlying bridge.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Length in distance units.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Resolved hikers in listed order.
    #[must_use]
    pub fn hikers(&self) -> &[Hiker] {
        &self.hikers
    }

    /// The fastest resolved hiker, absent when nobody resolved.
    #[must_use]
    pub fn ferry(&self) -> Option<&Hiker> {
        self.ferry.and_then(|index| self.hikers.get(index))
    }

    /// Listed IDs that were not found in the hiker registry.
    #[must_use]
    pub fn unresolved_ids(&self) -> &[String] {
        &self.unresolved
    }
}
