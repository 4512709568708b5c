//! End-to-end run: prompt, read, allocate, populate, print, release

use std::io::{BufRead, Write};

use tracing::{info, instrument};

use crate::{
    buffer::SequenceBuffer, errors::SeqBufResult, parser::read_count, types::RunOptions,
};

/// Prompt written before the count is read
pub const PROMPT: &str = "Enter the number of integers: ";

/// Run the whole sequence against `input` and `output`
///
/// Returns the number of `arr[...]` lines written. Every error is raised
/// before the first line, so a failed run writes at most the prompt.
///
/// # Errors
///
/// Returns an error if the count is missing, malformed or negative, if the
/// buffer cannot be allocated, or if writing to `output` fails.
///
/// # Examples
///
/// ```
/// use seqbuf::{RunOptions, run};
///
/// let mut out = Vec::new();
/// let written = run("2\n".as_bytes(), &mut out, &RunOptions::default())?;
///
/// assert_eq!(written, 2);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Enter the number of integers: arr[0] = 0\narr[1] = 1\n"
/// );
/// # Ok::<(), seqbuf::SeqBufError>(())
/// ```
#[instrument(level = "debug", skip_all, fields(prompt = options.prompt))]
pub fn run<R, W>(input: R, mut output: W, options: &RunOptions) -> SeqBufResult<usize>
where
    R: BufRead,
    W: Write,
{
    if options.prompt {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;
    }

    let count = read_count(input)?;
    let mut buffer = SequenceBuffer::with_count(count, &options.limits)?;
    buffer.populate();

    let mut written = 0;
    for entry in buffer.render() {
        writeln!(output, "{entry}")?;
        written += 1;
    }
    output.flush()?;

    buffer.release();
    info!(count = %count, "printed sequence");
    Ok(written)
}
