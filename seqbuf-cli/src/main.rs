//! `seqbuf` command: read a count, allocate, fill with indices, print, free.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use seqbuf::{AllocLimits, RunOptions, SeqBufError, logger::init_logging, run};
use tracing::debug;

/// Print `arr[i] = i` for each index of a freshly allocated integer buffer.
///
/// The element count is read from standard input.
#[derive(Debug, Parser)]
#[command(name = "seqbuf", version, about)]
struct Cli {
    /// Log filter directive for diagnostics on stderr
    #[arg(long, env = "SEQBUF_LOG", default_value = "warn")]
    log_level: String,

    /// Fail allocation of buffers larger than this many elements
    #[arg(long, env = "SEQBUF_MAX_COUNT")]
    max_count: Option<usize>,

    /// Do not print the prompt before reading the count
    #[arg(long)]
    no_prompt: bool,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            prompt: !self.no_prompt,
            limits: AllocLimits {
                max_elements: self.max_count,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    debug!(?cli, "starting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(io::stdin().lock(), &mut out, &cli.run_options());
    // Keep the prompt ahead of any error message
    let flushed = out.flush().map_err(SeqBufError::from);

    match result.and_then(|written| flushed.map(|()| written)) {
        Ok(written) => {
            debug!(written, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}
