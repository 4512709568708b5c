//! Parser for the element count read from an input stream

use std::io::{BufRead, ErrorKind};

use crate::{
    errors::{SeqBufError, SeqBufResult},
    types::Count,
};

/// Longest token kept in memory; longer tokens are reported truncated
const MAX_TOKEN_LEN: usize = 64;

/// Read a count from the first whitespace-delimited token of `reader`
///
/// Leading whitespace is skipped. Reading stops at the first whitespace
/// byte after the token, so whatever follows is never read.
///
/// # Errors
///
/// - [`SeqBufError::MissingInput`] if the input ends before any token
/// - [`SeqBufError::InvalidInput`] if the token is not an integer in range
/// - [`SeqBufError::InvalidArgument`] if the integer is negative
/// - [`SeqBufError::Io`] if reading fails
///
/// # Examples
///
/// ```
/// use seqbuf::read_count;
///
/// let count = read_count("\n  42 trailing\n".as_bytes())?;
/// assert_eq!(count.get(), 42);
/// # Ok::<(), seqbuf::SeqBufError>(())
/// ```
pub fn read_count<R: BufRead>(reader: R) -> SeqBufResult<Count> {
    let (token, truncated) = read_token(reader)?;
    if token.is_empty() {
        return Err(SeqBufError::MissingInput);
    }

    let Ok(text) = std::str::from_utf8(&token) else {
        return Err(SeqBufError::InvalidInput(
            String::from_utf8_lossy(&token).into_owned(),
        ));
    };
    if truncated {
        return Err(SeqBufError::InvalidInput(format!("{text}...")));
    }
    text.parse::<Count>()
}

/// Collect the bytes of the first token, keeping at most [`MAX_TOKEN_LEN`]
///
/// Returns the kept bytes and whether the token was longer.
fn read_token<R: BufRead>(mut reader: R) -> SeqBufResult<(Vec<u8>, bool)> {
    let mut token = Vec::new();
    let mut len = 0;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            used += 1;
            if byte.is_ascii_whitespace() {
                if len > 0 {
                    done = true;
                    break;
                }
            } else {
                if len < MAX_TOKEN_LEN {
                    token.push(byte);
                }
                len += 1;
            }
        }
        reader.consume(used);
        if done {
            break;
        }
    }

    Ok((token, len > MAX_TOKEN_LEN))
}
