//! Command implementations

pub mod assist;
pub mod bench;
pub mod play;
pub mod solve;

pub use assist::run_assist;
pub use bench::{BenchReport, run_bench};
pub use play::run_play;
pub use solve::run_solve;

use std::io::{self, Write};

/// Prompt on stdout and read one trimmed line from stdin
///
/// Returns `None` at end of input.
pub(crate) fn read_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
