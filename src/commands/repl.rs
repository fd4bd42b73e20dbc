//! Interactive search mode
//!
//! Reads one query per line, with surrounding whitespace removed, and prints
//! its matches until a blank line or end of input.

use super::search::Searcher;
use crate::error::Result;
use crate::output::write_search_report;
use log::warn;
use std::io::{BufRead, Write};

/// Prompt printed before each query
pub const PROMPT: &str = "Search: ";

/// Run the interactive loop over `input`, writing to `output`
///
/// A query that fails to compile is reported and the loop continues.
/// Returns the number of queries run.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_interactive<R: BufRead, W: Write>(
    searcher: &Searcher,
    mut input: R,
    output: &mut W,
) -> Result<usize> {
    let mut queries = 0;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            break;
        }

        match searcher.run(query) {
            Ok(report) => {
                write_search_report(output, &report)?;
                queries += 1;
            }
            Err(e) => {
                warn!("Query '{query}' rejected: {e}");
                writeln!(output, "Error: {e}")?;
            }
        }
    }

    Ok(queries)
}
