// spellgram-eval: Measure correction quality on labelled misspellings.
//
// Reads `misspelling<TAB>expected` lines (blank lines and lines starting
// with '#' are skipped) and classifies each case:
//   fixed   -- the top correction equals the expected word
//   top-N   -- the expected word is among the suggestions
//   broken  -- neither
//
// Usage:
//   spellgram-eval [-d DICT_PATH] [OPTIONS] [CASES_FILE]
//
// Reads cases from stdin when no file is given.

use std::io::{self, Read};
use std::time::Instant;

use spellgram::SpellChecker;

#[derive(Debug, Default)]
struct Report {
    total: usize,
    fixed: usize,
    in_suggestions: usize,
    broken: Vec<(String, String, String)>,
    seconds: f64,
}

impl Report {
    fn accuracy(&self) -> f64 {
        ratio(self.fixed, self.total)
    }

    fn recall(&self) -> f64 {
        ratio(self.fixed, self.fixed + self.broken.len())
    }

    fn precision(&self) -> f64 {
        ratio(self.fixed, self.fixed + self.in_suggestions)
    }

    fn words_per_second(&self) -> f64 {
        if self.seconds > 0.0 {
            self.total as f64 / self.seconds
        } else {
            0.0
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn parse_cases(source: &str) -> Vec<(String, String)> {
    source
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| {
            let (input, expected) = l.split_once('\t')?;
            Some((input.trim().to_string(), expected.trim().to_lowercase()))
        })
        .collect()
}

fn evaluate(checker: &SpellChecker, cases: &[(String, String)]) -> Report {
    let mut report = Report::default();
    let start = Instant::now();
    for (input, expected) in cases {
        report.total += 1;
        let corrected = checker.correct(input);
        if &corrected == expected {
            report.fixed += 1;
        } else if checker.suggest(input).iter().any(|s| &s.word == expected) {
            report.in_suggestions += 1;
        } else {
            report.broken.push((input.clone(), expected.clone(), corrected));
        }
    }
    report.seconds = start.elapsed().as_secs_f64();
    report
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if spellgram_cli::wants_help(&args) {
        println!("spellgram-eval: Measure correction quality on labelled misspellings.");
        println!();
        println!("Usage: spellgram-eval [-d DICT_PATH] [OPTIONS] [CASES_FILE]");
        println!();
        println!("CASES_FILE holds `misspelling<TAB>expected` lines; stdin is read if omitted.");
        println!();
        println!("Options:");
        println!("{}", spellgram_cli::COMMON_OPTIONS_HELP);
        return;
    }

    let common = spellgram_cli::parse_common_args(&args);
    spellgram_cli::init_logging(common.verbosity);

    let source = match common.rest.first() {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| spellgram_cli::fatal(&format!("failed to read {path}: {e}"))),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| spellgram_cli::fatal(&format!("error reading stdin: {e}")));
            buf
        }
    };
    let cases = parse_cases(&source);
    if cases.is_empty() {
        spellgram_cli::fatal("no evaluation cases found");
    }

    let checker = spellgram_cli::load_checker(common.dict_path.as_deref(), common.options)
        .unwrap_or_else(|e| spellgram_cli::fatal(&e));
    let max_suggestions = checker.options().max_suggestions;
    let report = evaluate(&checker, &cases);

    println!("{:<34} {:>12}", "Metric", "Value");
    println!("{:<34} {:>12.4}", "Accuracy", report.accuracy());
    println!("{:<34} {:>12.1}", "Speed (words/sec)", report.words_per_second());
    println!("{:<34} {:>12.4}", "Recall", report.recall());
    println!("{:<34} {:>12.4}", "Precision", report.precision());
    println!("{:<34} {:>12}", "Fixed", report.fixed);
    println!(
        "{:<34} {:>12}",
        format!("Non-fixed with correction in top-{max_suggestions}"),
        report.in_suggestions
    );
    println!("{:<34} {:>12}", "Broken", report.broken.len());

    if !report.broken.is_empty() {
        println!();
        println!("Broken cases:");
        for (input, expected, corrected) in &report.broken {
            println!("  {input} -> {corrected} (expected {expected})");
        }
    }
}
