//! Type definitions for counts, allocation limits and run options

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{SeqBufError, SeqBufResult};

/// Element type stored in a sequence buffer
pub type Element = i32;

/// A validated, non-negative element count
///
/// The value always fits in [`Element`], so every index of a buffer of this
/// size can be stored as its own value.
///
/// # Examples
///
/// ```
/// use seqbuf::Count;
///
/// let count: Count = "5".parse()?;
/// assert_eq!(count.get(), 5);
/// assert!(Count::new(-1).is_err());
/// # Ok::<(), seqbuf::SeqBufError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "usize"))]
pub struct Count(usize);

impl Count {
    /// Largest count that can be requested
    #[allow(clippy::cast_sign_loss)]
    pub const MAX: usize = Element::MAX as usize;

    /// Validate a signed count
    ///
    /// # Errors
    ///
    /// Returns [`SeqBufError::InvalidArgument`] for negative values and
    /// [`SeqBufError::AllocationFailed`] for values that do not fit in
    /// [`Element`].
    pub fn new(n: i64) -> SeqBufResult<Self> {
        if n < 0 {
            return Err(SeqBufError::InvalidArgument(n));
        }
        let requested = usize::try_from(n).unwrap_or(usize::MAX);
        if requested > Self::MAX {
            return Err(SeqBufError::AllocationFailed { requested });
        }
        Ok(Self(requested))
    }

    /// Number of elements
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::str::FromStr for Count {
    type Err = SeqBufError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .parse::<Element>()
            .map_err(|_| SeqBufError::InvalidInput(s.to_string()))?;
        Self::new(i64::from(n))
    }
}

impl TryFrom<i64> for Count {
    type Error = SeqBufError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Count> for usize {
    fn from(count: Count) -> Self {
        count.0
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Limits applied when allocating a buffer
///
/// A ceiling makes oversized requests fail the same way a real
/// out-of-memory condition does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocLimits {
    /// Maximum number of elements a buffer may hold (None means unlimited)
    pub max_elements: Option<usize>,
}

impl AllocLimits {
    /// No ceiling
    #[must_use]
    pub fn unlimited() -> Self {
        Self { max_elements: None }
    }

    /// Ceiling of `max_elements` elements
    #[must_use]
    pub fn with_max_elements(max_elements: usize) -> Self {
        Self {
            max_elements: Some(max_elements),
        }
    }

    /// Check if a request for `requested` elements is within the ceiling
    #[must_use]
    pub fn permits(&self, requested: usize) -> bool {
        self.max_elements.is_none_or(|max| requested <= max)
    }
}

/// Options for a complete read, allocate, print run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Write the prompt before reading the count
    pub prompt: bool,
    /// Allocation limits for the buffer
    pub limits: AllocLimits,
}

impl RunOptions {
    /// Create default options: prompt shown, no ceiling
    #[must_use]
    pub fn new() -> Self {
        Self {
            prompt: true,
            limits: AllocLimits::unlimited(),
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new()
    }
}
