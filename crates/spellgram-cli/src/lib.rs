// spellgram-cli: shared utilities for CLI tools.

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use env_logger::Builder;
use log::{LevelFilter, info};
use spellgram::{MatcherOptions, SpellChecker};

/// Dictionary file name looked up inside search directories.
const WORDS_FILE: &str = "words.txt";

/// Environment variable naming a dictionary file or directory.
const DICT_PATH_ENV: &str = "SPELLGRAM_DICT_PATH";

/// Search for a dictionary file and create a SpellChecker over it.
///
/// Search order:
/// 1. `dict_path` argument (if provided), as a file or a directory
/// 2. `SPELLGRAM_DICT_PATH` environment variable, as a file or a directory
/// 3. `~/.spellgram/words.txt`
/// 4. Current working directory (looks for `words.txt` directly)
pub fn load_checker(
    dict_path: Option<&str>,
    options: MatcherOptions,
) -> Result<SpellChecker, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            info!("using dictionary {}", path.display());
            return SpellChecker::from_path(path, options)
                .map_err(|e| format!("failed to create SpellChecker: {e}"));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        WORDS_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
        paths.push(PathBuf::from(p).join(WORDS_FILE));
    }

    // 2. Environment variable
    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(WORDS_FILE));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".spellgram").join(WORDS_FILE));
    }

    // 4. Current directory
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Matcher options and flags shared by every tool.
#[derive(Debug, Clone)]
pub struct CommonArgs {
    pub dict_path: Option<String>,
    pub options: MatcherOptions,
    pub verbosity: u8,
    /// Arguments not consumed by the common parser.
    pub rest: Vec<String>,
}

/// Parse the options every tool accepts:
///
/// - `-d, --dict-path PATH` (also `--dict-path=PATH`)
/// - `-k, --gram-size K`
/// - `-n, --max-suggestions N`
/// - `-t, --threshold T`
/// - `--deadline-ms MS`
/// - `--full-scan`
/// - `-v` (repeatable, or `-vv`, `-vvv`)
///
/// Invalid values terminate the process with an error message.
pub fn parse_common_args(args: &[String]) -> CommonArgs {
    let mut dict_path = None;
    let mut gram_size: Option<usize> = None;
    let mut options = MatcherOptions::default();
    let mut verbosity = 0u8;
    let mut rest = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
            continue;
        }
        match arg.as_str() {
            "-d" | "--dict-path" => dict_path = Some(value_of(arg, iter.next()).to_string()),
            "-k" | "--gram-size" => gram_size = Some(parse_value(arg, iter.next())),
            "-n" | "--max-suggestions" => options.max_suggestions = parse_value(arg, iter.next()),
            "-t" | "--threshold" => options.threshold = parse_value(arg, iter.next()),
            "--deadline-ms" => {
                options.deadline = Some(Duration::from_millis(parse_value(arg, iter.next())));
            }
            "--full-scan" => options.use_index = false,
            flag if is_verbosity_flag(flag) => {
                verbosity = verbosity.saturating_add((flag.len() - 1) as u8);
            }
            _ => rest.push(arg.clone()),
        }
    }

    if let Some(k) = gram_size {
        options.gram_size = spellgram::GramSize::new(k).unwrap_or_else(|e| fatal(&e.to_string()));
    }

    CommonArgs {
        dict_path,
        options,
        verbosity,
        rest,
    }
}

fn is_verbosity_flag(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v')
}

fn value_of<'a>(flag: &str, value: Option<&'a String>) -> &'a str {
    match value {
        Some(v) => v,
        None => fatal(&format!("{flag} requires a value")),
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    let raw = value_of(flag, value);
    raw.parse()
        .unwrap_or_else(|_| fatal(&format!("invalid value for {flag}: {raw}")))
}

/// Initialize logging to stderr.
///
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Help text for the options parsed by [`parse_common_args`].
pub const COMMON_OPTIONS_HELP: &str = "\
  -d, --dict-path PATH       Comma-separated word list, or a directory holding words.txt
  -k, --gram-size K          N-gram size (default: 2)
  -n, --max-suggestions N    Maximum number of suggestions (default: 5)
  -t, --threshold T          Minimum score for threshold-filtered output (default: 0.3)
      --deadline-ms MS       Stop scanning after MS milliseconds per call
      --full-scan            Score every dictionary word instead of using the gram index
  -v                         Increase log verbosity (repeatable)
  -h, --help                 Print this help";
