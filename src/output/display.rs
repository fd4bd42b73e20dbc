//! Display functions for command results

use super::formatters::{create_progress_bar, format_hit, match_summary};
use crate::commands::{AlphabetSummary, BenchmarkResult, SearchReport};
use colored::Colorize;
use std::io::{self, Write};

/// Write a search report: the summary line, then one line per hit
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_search_report<W: Write>(out: &mut W, report: &SearchReport) -> io::Result<()> {
    writeln!(out, "{}", match_summary(report.hits.len()).bright_cyan())?;
    for hit in &report.hits {
        writeln!(out, "{}", format_hit(hit))?;
    }
    Ok(())
}

/// Print a search report to stdout
///
/// # Errors
/// Returns an error if stdout is closed.
pub fn print_search_report(report: &SearchReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_search_report(&mut out, report)
}

/// Print the letters of an alphabet
pub fn print_alphabet_summary(summary: &AlphabetSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ALPHABET:".bright_cyan().bold(),
        summary.locale.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Case pairs:       {}", summary.pairs.len());
    println!("   Longest letter:   {} bytes", summary.max_letter_len);

    println!("\n{}", "Letters:".bright_cyan().bold());
    for (lower, upper) in &summary.pairs {
        println!("   {lower}  {upper}");
    }

    println!("\n{}", "Patterns:".bright_cyan().bold());
    println!("   Lowercase:  {}", summary.lower_pattern);
    println!("   Uppercase:  {}", summary.upper_pattern);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest matches:   {}",
        format!("{}", result.min_matches).green()
    );
    println!(
        "   Most matches:     {}",
        format!("{}", result.max_matches).yellow()
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Matches per query:".bright_cyan().bold());
    let largest = result.distribution.values().copied().max().unwrap_or(0);
    for (&matches, &count) in &result.distribution {
        let pct = (count as f64 / result.total_queries as f64) * 100.0;
        let bar = create_progress_bar(count as f64, largest as f64, 40);
        println!("   {matches:4}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SearchHit;
    use std::time::Duration;

    #[test]
    fn report_lists_summary_then_hits() {
        let report = SearchReport {
            query: "c?t".to_string(),
            hits: vec![
                SearchHit {
                    text: "cat".to_string(),
                    jokers: Some("a".to_string()),
                },
                SearchHit {
                    text: "cot".to_string(),
                    jokers: Some("o".to_string()),
                },
            ],
            duration: Duration::ZERO,
        };

        let mut out = Vec::new();
        write_search_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("A total of 2 matches found."));
        assert_eq!(lines[1], "cat\ta");
        assert_eq!(lines[2], "cot\to");
    }

    #[test]
    fn empty_report_has_only_summary() {
        let report = SearchReport {
            query: "zz".to_string(),
            hits: Vec::new(),
            duration: Duration::ZERO,
        };

        let mut out = Vec::new();
        write_search_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("A total of 0 matches found."));
    }
}
