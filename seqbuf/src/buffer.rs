//! Owned buffer of sequential integers

use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use tracing::debug;

use crate::{
    errors::{SeqBufError, SeqBufResult},
    types::{AllocLimits, Count, Element},
};

/// A contiguous, single-owner buffer holding `count` integers
///
/// The storage is freed when the buffer is dropped or passed to
/// [`SequenceBuffer::release`]. Since `release` takes the buffer by value,
/// it cannot be used afterwards.
///
/// # Examples
///
/// ```
/// use seqbuf::SequenceBuffer;
///
/// let mut buffer = SequenceBuffer::create(3)?;
/// buffer.populate();
///
/// let lines: Vec<String> = buffer.render().map(|e| e.to_string()).collect();
/// assert_eq!(lines, vec!["arr[0] = 0", "arr[1] = 1", "arr[2] = 2"]);
///
/// buffer.release();
/// # Ok::<(), seqbuf::SeqBufError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceBuffer {
    data: Vec<Element>,
}

impl SequenceBuffer {
    /// Allocate storage for `count` integers with no ceiling
    ///
    /// # Errors
    ///
    /// Returns [`SeqBufError::InvalidArgument`] if `count` is negative, and
    /// [`SeqBufError::AllocationFailed`] if `count` does not fit in
    /// [`Element`] or the storage cannot be obtained.
    pub fn create(count: i64) -> SeqBufResult<Self> {
        Self::create_with(count, &AllocLimits::unlimited())
    }

    /// Allocate storage for `count` integers under `limits`
    ///
    /// # Errors
    ///
    /// Same as [`SequenceBuffer::create`]. A count above the ceiling is
    /// reported as [`SeqBufError::AllocationFailed`].
    pub fn create_with(count: i64, limits: &AllocLimits) -> SeqBufResult<Self> {
        let count = Count::new(count).inspect_err(|e| debug!("rejected count: {e}"))?;
        Self::with_count(count, limits)
    }

    /// Allocate storage for an already validated count
    ///
    /// Slots are zero-filled until [`SequenceBuffer::populate`] runs.
    ///
    /// # Errors
    ///
    /// Returns [`SeqBufError::AllocationFailed`] if the ceiling is exceeded
    /// or the allocator cannot provide the storage.
    pub fn with_count(count: Count, limits: &AllocLimits) -> SeqBufResult<Self> {
        let requested = count.get();
        if !limits.permits(requested) {
            debug!(
                requested,
                max = ?limits.max_elements,
                "allocation exceeds ceiling"
            );
            return Err(SeqBufError::AllocationFailed { requested });
        }

        let mut data = Vec::new();
        data.try_reserve_exact(requested).map_err(|e| {
            debug!(requested, "allocation failed: {e}");
            SeqBufError::AllocationFailed { requested }
        })?;
        data.resize(requested, 0);

        debug!(
            requested,
            bytes = requested * size_of::<Element>(),
            "allocated buffer"
        );
        Ok(Self { data })
    }

    /// Write each slot's own index into it, in increasing order
    pub fn populate(&mut self) {
        for (slot, value) in self.data.iter_mut().zip(0..) {
            *slot = value;
        }
        debug!(len = self.data.len(), "populated buffer");
    }

    /// Lazily render one `arr[<index>] = <value>` entry per slot
    ///
    /// The returned iterator can be cloned to walk the entries again.
    #[must_use]
    pub fn render(&self) -> Render<'_> {
        Render {
            inner: self.data.iter().enumerate(),
        }
    }

    /// Free the storage
    pub fn release(self) {
        debug!(len = self.data.len(), "released buffer");
        drop(self);
    }

    /// Number of slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer has no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `index`, if in bounds
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Element> {
        self.data.get(index).copied()
    }

    /// View the slots as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }
}

/// One rendered buffer slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Slot index
    pub index: usize,
    /// Value stored in the slot
    pub value: Element,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arr[{}] = {}", self.index, self.value)
    }
}

/// Iterator over the rendered entries of a [`SequenceBuffer`]
#[derive(Debug, Clone)]
pub struct Render<'a> {
    inner: Enumerate<slice::Iter<'a, Element>>,
}

impl Iterator for Render<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, &value)| Entry { index, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Render<'_> {}

impl FusedIterator for Render<'_> {}
