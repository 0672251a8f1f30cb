// spellgram-suggest: Print ranked suggestions for words.
//
// Words already in the dictionary are printed as correct; others get up to
// N suggestions with their similarity scores.
//
// Usage:
//   spellgram-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   --above-threshold       Only list suggestions scoring at least the threshold
//   (plus the common options, see --help)

use std::io::{self, BufRead, Write};

use spellgram::SpellChecker;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if spellgram_cli::wants_help(&args) {
        println!("spellgram-suggest: Print ranked spelling suggestions.");
        println!();
        println!("Usage: spellgram-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads lines from stdin; every word on a line is checked.");
        println!();
        println!("Options:");
        println!("      --above-threshold      Only list suggestions reaching the threshold");
        println!("{}", spellgram_cli::COMMON_OPTIONS_HELP);
        return;
    }

    let common = spellgram_cli::parse_common_args(&args);
    spellgram_cli::init_logging(common.verbosity);

    let above_threshold = common.rest.iter().any(|a| a == "--above-threshold");
    let words: Vec<&String> = common.rest.iter().filter(|a| !a.starts_with('-')).collect();

    let checker = spellgram_cli::load_checker(common.dict_path.as_deref(), common.options)
        .unwrap_or_else(|e| spellgram_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let report = |text: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        if above_threshold {
            for entry in checker.suggestions(text) {
                print_entry(&checker, &entry.word, &entry.suggestions, out);
            }
        } else {
            for word in text.split_whitespace() {
                let suggestions = checker.suggest(word);
                print_entry(&checker, &word.to_lowercase(), &suggestions, out);
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            report(&line, &mut out);
        }
    } else {
        for word in words {
            report(word, &mut out);
        }
    }
}

fn print_entry(
    checker: &SpellChecker,
    word: &str,
    suggestions: &[spellgram::Suggestion],
    out: &mut io::BufWriter<io::StdoutLock<'_>>,
) {
    if checker.spell(word) {
        let _ = writeln!(out, "{word} (correct)");
    } else if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in suggestions {
            let _ = writeln!(out, "  {:<20} {:.4}", s.word, s.score);
        }
    }
}
