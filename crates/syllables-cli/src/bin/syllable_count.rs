// syllable-count: Estimate the number of syllables in English words.
//
// Prints one count per word. Words come from the command line, or from stdin
// (one per line) when none are given.
//
// Usage:
//   syllable-count [OPTIONS] [WORD...]
//
// Examples:
//   syllable-count beautiful          # 3
//   syllable-count -w -e bundles      # word, count and rule trace
//   cat words.txt | syllable-count -w

use std::io::{self, Write};

use clap::Parser;
use syllables_cli::{OutputOptions, count_lines, count_words};
use syllables_en::EnglishEstimator;

#[derive(Parser, Debug)]
#[command(name = "syllable-count")]
#[command(about = "Estimate syllables in English words from spelling alone")]
struct Args {
    /// Words to count. Reads one word per line from stdin when omitted.
    words: Vec<String>,

    /// Show the vowel clusters and rules behind each count
    #[arg(short, long)]
    explain: bool,

    /// Print each word before its count, separated by a tab
    #[arg(short, long)]
    with_word: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    syllables_cli::init_logging(args.verbose);

    let options = OutputOptions {
        explain: args.explain,
        with_word: args.with_word,
    };
    let estimator = EnglishEstimator;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if args.words.is_empty() {
        log::debug!("reading words from stdin");
        let stdin = io::stdin();
        count_lines(&estimator, stdin.lock(), options, &mut out)
    } else {
        count_words(&estimator, &args.words, options, &mut out)
    };

    if let Err(e) = result.and_then(|_| out.flush().map_err(Into::into)) {
        syllables_cli::fatal(&e.to_string());
    }
}
