// spellgram-correct: Replace every word of the input with its best match.
//
// Each input line is lowercased, split on whitespace, corrected word by
// word and printed with single spaces between words.
//
// Usage:
//   spellgram-correct [-d DICT_PATH] [OPTIONS] [TEXT...]

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if spellgram_cli::wants_help(&args) {
        println!("spellgram-correct: Correct spelling word by word.");
        println!();
        println!("Usage: spellgram-correct [-d DICT_PATH] [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, they are corrected as one line.");
        println!("Otherwise reads lines from stdin and prints one corrected line each.");
        println!();
        println!("Options:");
        println!("{}", spellgram_cli::COMMON_OPTIONS_HELP);
        return;
    }

    let common = spellgram_cli::parse_common_args(&args);
    spellgram_cli::init_logging(common.verbosity);

    let checker = spellgram_cli::load_checker(common.dict_path.as_deref(), common.options)
        .unwrap_or_else(|e| spellgram_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if common.rest.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let _ = writeln!(out, "{}", checker.correct_text(&line));
        }
    } else {
        let _ = writeln!(out, "{}", checker.correct_text(&common.rest.join(" ")));
    }
}
