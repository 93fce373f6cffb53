// syllables-cli: shared utilities for the command-line tool.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::process;

use syllables_en::{Estimate, Rule, SyllableEstimator};

/// Error type for command-line runs.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading words or writing results failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// How each result line is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print the rule trace after each count.
    pub explain: bool,
    /// Prefix each count with the word and a tab.
    pub with_word: bool,
}

/// Install the logger. `RUST_LOG` wins when set; otherwise `verbose` selects
/// `debug` and the default is `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Estimate each word and write one result per word to `out`.
pub fn count_words<E, I, W>(
    estimator: &E,
    words: I,
    options: OutputOptions,
    out: &mut W,
) -> Result<usize, CliError>
where
    E: SyllableEstimator,
    I: IntoIterator,
    I::Item: AsRef<str>,
    W: Write,
{
    let mut counted = 0;
    for word in words {
        write_result(estimator, word.as_ref(), options, out)?;
        counted += 1;
    }
    Ok(counted)
}

/// Read one word per line from `input` and count each. Blank lines are skipped.
pub fn count_lines<E, R, W>(
    estimator: &E,
    input: R,
    options: OutputOptions,
    out: &mut W,
) -> Result<usize, CliError>
where
    E: SyllableEstimator,
    R: BufRead,
    W: Write,
{
    let mut counted = 0;
    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        write_result(estimator, word, options, out)?;
        counted += 1;
    }
    log::debug!("counted {counted} words from input");
    Ok(counted)
}

fn write_result<E, W>(
    estimator: &E,
    word: &str,
    options: OutputOptions,
    out: &mut W,
) -> Result<(), CliError>
where
    E: SyllableEstimator,
    W: Write,
{
    if options.explain {
        let estimate = estimator.explain(word);
        log::debug!("{word:?}: {} rule(s) fired", estimate.rules.len());
        writeln!(out, "{}", format_count(word, estimate.syllables, options.with_word))?;
        write!(out, "{}", render_explanation(&estimate))?;
    } else {
        let count = estimator.estimate(word);
        writeln!(out, "{}", format_count(word, count, options.with_word))?;
    }
    Ok(())
}

/// Format one result line: `count` or `word<TAB>count`.
pub fn format_count(word: &str, count: u32, with_word: bool) -> String {
    if with_word {
        format!("{word}\t{count}")
    } else {
        count.to_string()
    }
}

/// Render the rule trace of an estimate as indented lines.
///
/// ```text
///   clusters: u(1) e(1) = 2
///   syllabic "-les" after a consonant -> 2
/// ```
pub fn render_explanation(estimate: &Estimate) -> String {
    let mut text = String::new();

    let clusters: Vec<String> = estimate
        .clusters
        .iter()
        .map(|c| format!("{}({})", c.text, c.value))
        .collect();
    if !clusters.is_empty() {
        let _ = writeln!(
            text,
            "  clusters: {} = {}",
            clusters.join(" "),
            estimate.base_count()
        );
    } else if !estimate.rules.contains(&Rule::ShortWord) {
        let _ = writeln!(text, "  clusters: none = 0");
    }

    let mut total = estimate.base_count() as i32;
    for rule in &estimate.rules {
        total = match rule {
            Rule::ShortWord => 1,
            _ => total + rule.delta(),
        };
        let _ = writeln!(text, "  {rule} -> {total}");
    }

    if estimate.was_floored() {
        let _ = writeln!(text, "  floored to 1");
    }
    text
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
