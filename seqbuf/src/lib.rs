#![deny(
    unsafe_code,
    unused_must_use,
    unreachable_pub,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]

//! Sequential Integer Buffer
//!
//! Reads an element count, allocates an owned buffer of that many integers,
//! fills each slot with its own index and renders the contents one line per
//! slot as `arr[<index>] = <value>`.
//!
//! # Features
//!
//! - **Validated counts**: negative or malformed counts are rejected before
//!   any allocation
//! - **Fallible allocation**: out-of-memory is reported as an error instead
//!   of aborting, and an optional ceiling can force the same failure
//! - **Lazy rendering**: entries are produced on demand and can be walked
//!   again by cloning the iterator
//! - **Logging** (`logging` feature): stderr tracing subscriber setup
//!
//! # Examples
//!
//! ## Buffer Lifecycle
//!
//! ```
//! use seqbuf::SequenceBuffer;
//!
//! let mut buffer = SequenceBuffer::create(5)?;
//! buffer.populate();
//!
//! for entry in buffer.render() {
//!     println!("{entry}");
//! }
//! assert_eq!(buffer.get(4), Some(4));
//!
//! buffer.release();
//! # Ok::<(), seqbuf::SeqBufError>(())
//! ```
//!
//! ## Allocation Ceiling
//!
//! ```
//! use seqbuf::{AllocLimits, SeqBufError, SequenceBuffer};
//!
//! let limits = AllocLimits::with_max_elements(10);
//! let err = SequenceBuffer::create_with(11, &limits).unwrap_err();
//!
//! assert!(matches!(err, SeqBufError::AllocationFailed { requested: 11 }));
//! assert_eq!(err.to_string(), "Memory allocation failed");
//! ```
//!
//! ## Full Run
//!
//! ```
//! use seqbuf::{RunOptions, run};
//!
//! let options = RunOptions { prompt: false, ..RunOptions::default() };
//! let mut out = Vec::new();
//! run("0\n".as_bytes(), &mut out, &options)?;
//!
//! assert!(out.is_empty());
//! # Ok::<(), seqbuf::SeqBufError>(())
//! ```

mod buffer;
mod driver;
mod errors;
#[cfg(feature = "logging")]
pub mod logger;
mod parser;
mod types;

pub use buffer::{Entry, Render, SequenceBuffer};
pub use driver::{PROMPT, run};
pub use errors::{SeqBufError, SeqBufResult};
pub use parser::read_count;
pub use types::{AllocLimits, Count, Element, RunOptions};
