use clap::{CommandFactory, Parser};
use lths_lib::{search_with_config, MatchRecord, SearchConfig};
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "lths")]
#[command(version = "0.1.0")]
#[command(
    about = "LTHS: Linear Time Hamming Search",
    long_about = "Search for a pattern in a text with k-mismatches under the Hamming distance model"
)]
struct Cli {
    /// The pattern (needle)
    pattern: OsString,

    /// K-mismatches threshold
    k_mismatches: usize,

    /// The text to search (haystack)
    text: OsString,

    /// Alphabet string, e.g. ACGT (default: the symbols of the pattern)
    #[arg(short = 'A', long)]
    alphabet: Option<OsString>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    run(std::env::args_os(), &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Parse `args` (program name first), search, and map the outcome to an
/// exit status
///
/// - no arguments: usage on `out`, success
/// - `--help` / `--version`: printed on `out`, success
/// - any other parse error: message on `err`, failure
/// - failed validation: error and usage on `err`, failure
fn run<O: Write, E: Write>(
    args: impl IntoIterator<Item = OsString>,
    out: &mut O,
    err: &mut E,
) -> ExitCode {
    let args: Vec<OsString> = args.into_iter().collect();

    if args.len() <= 1 {
        return match write!(out, "{}", Cli::command().render_help()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            if e.use_stderr() {
                // the exit status already reports the failure
                let _ = write!(err, "{}", e.render());
                return ExitCode::FAILURE;
            }
            return match write!(out, "{}", e.render()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
    };

    init_tracing(cli.verbose);

    match search_command(&cli, out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // the exit status already reports the failure
            let _ = writeln!(err, "Error: {e:#}\n\n{}", Cli::command().render_usage());
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing: use RUST_LOG if set, otherwise warn (info with -v)
///
/// Logs go to stderr so stdout carries only match lines.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
    if installed.is_err() {
        debug!("Global subscriber already installed");
    }
}

fn config_from_cli(cli: &Cli) -> SearchConfig {
    let config = SearchConfig::new(cli.pattern.as_encoded_bytes(), cli.k_mismatches);
    match &cli.alphabet {
        Some(symbols) => config.with_alphabet(symbols.as_encoded_bytes()),
        None => config,
    }
}

/// Validate the arguments, run the search and print every match
fn search_command<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<usize> {
    let config = config_from_cli(cli);
    let text = cli.text.as_encoded_bytes();

    config.print();
    info!("  n = {}", text.len());

    let matcher = search_with_config(&config, text)?;
    debug!("  sigma = {}", matcher.sigma());

    let mut out = BufWriter::new(out);
    let found = write_matches(&mut out, matcher)?;
    out.flush()?;

    info!("Found {} matches", found);
    Ok(found)
}

/// Write one `<start>,<mismatches>\t<substring>` line per match
fn write_matches<'t, W: Write>(
    out: &mut W,
    matches: impl IntoIterator<Item = MatchRecord<'t>>,
) -> io::Result<usize> {
    let mut count = 0;
    for record in matches {
        write!(out, "{},{}\t", record.start, record.mismatches)?;
        out.write_all(record.substring)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lths_lib::{search, SearchError};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("lths").chain(args.iter().copied()))
    }

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("lths").chain(list.iter().copied()).map(OsString::from).collect()
    }

    /// Run the command and capture (status, stdout, stderr)
    fn run_with(args: Vec<OsString>) -> (ExitCode, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args, &mut out, &mut err);
        (
            code,
            String::from_utf8_lossy(&out).into_owned(),
            String::from_utf8_lossy(&err).into_owned(),
        )
    }

    fn output(pattern: &str, k: usize, text: &str) -> String {
        let mut buf = Vec::new();
        let matcher = search(pattern.as_bytes(), k, text.as_bytes()).unwrap();
        write_matches(&mut buf, matcher).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positionals() {
        let cli = parse(&["abc", "1", "xabcx"]).unwrap();
        assert_eq!(cli.pattern, "abc");
        assert_eq!(cli.k_mismatches, 1);
        assert_eq!(cli.text, "xabcx");
        assert!(cli.alphabet.is_none());
    }

    #[test]
    fn test_parse_alphabet() {
        let cli = parse(&["-A", "ACGT", "GAT", "1", "GATTACA"]).unwrap();
        assert_eq!(cli.alphabet.as_deref(), Some(std::ffi::OsStr::new("ACGT")));
        let config = config_from_cli(&cli);
        assert_eq!(config.alphabet, Some(b"ACGT".to_vec()));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(parse(&["abc"]).is_err());
        assert!(parse(&["abc", "1"]).is_err());
        assert!(parse(&["abc", "1", "text", "extra"]).is_err());
    }

    #[test]
    fn test_negative_or_non_numeric_k() {
        assert!(parse(&["abc", "-1", "text"]).is_err());
        assert!(parse(&["abc", "one", "text"]).is_err());
    }

    #[test]
    fn test_help_is_not_an_error() {
        let err = parse(&["--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_validation_failure() {
        let cli = parse(&["abcdef", "0", "abc"]).unwrap();
        let err = search_command(&cli, &mut Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SearchError>(),
            Some(SearchError::PatternLongerThanText { .. })
        ));

        let cli = parse(&["abc", "3", "abcabc"]).unwrap();
        let err = search_command(&cli, &mut Vec::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid k-mismatches value: k=3 must be less than pattern length 3"
        );
    }

    #[test]
    fn test_report_format() {
        assert_eq!(output("abc", 0, "xabcx"), "1,0\tabc\n");
        assert_eq!(output("ab", 1, "ac"), "0,1\tac\n");
        assert_eq!(output("aa", 0, "ab"), "");
    }

    #[test]
    fn test_report_multiple_lines() {
        assert_eq!(output("ana", 1, "banana"), "1,0\tana\n3,0\tana\n");
    }

    #[test]
    fn test_run_without_arguments_prints_usage() {
        let (code, out, err) = run_with(args(&[]));
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("Usage:"));
        assert!(err.is_empty());

        let (code, _, _) = run_with(Vec::new());
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_run_help_and_version_succeed() {
        let (code, out, _) = run_with(args(&["--help"]));
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("Usage:"));

        let (code, out, _) = run_with(args(&["--version"]));
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("0.1.0"));
    }

    #[test]
    fn test_run_wrong_argument_count_fails() {
        let cases: [&[&str]; 3] = [&["abc"], &["abc", "1"], &["abc", "1", "text", "extra"]];
        for list in cases {
            let (code, out, err) = run_with(args(list));
            assert_eq!(code, ExitCode::FAILURE, "args {:?}", list);
            assert!(out.is_empty());
            assert!(err.contains("Usage:"));
        }
    }

    #[test]
    fn test_run_bad_threshold_fails() {
        let (code, _, err) = run_with(args(&["abc", "-1", "text"]));
        assert_eq!(code, ExitCode::FAILURE);
        assert!(!err.is_empty());
    }

    #[test]
    fn test_run_validation_failure() {
        let (code, out, err) = run_with(args(&["abcdef", "0", "abc"]));
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: Pattern is longer than text"));
        assert!(err.contains("Usage:"));

        let (code, _, err) = run_with(args(&["abc", "3", "abcabc"]));
        assert_eq!(code, ExitCode::FAILURE);
        assert!(err.starts_with("Error: Invalid k-mismatches value"));
    }

    #[test]
    fn test_run_prints_matches() {
        let (code, out, err) = run_with(args(&["abc", "0", "xabcx"]));
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "1,0\tabc\n");
        assert!(err.is_empty());

        // no matches is still success
        let (code, out, _) = run_with(args(&["aa", "0", "ab"]));
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_accepts_non_utf8_text() {
        use std::os::unix::ffi::OsStringExt;

        let mut list = args(&["ab", "0"]);
        list.push(OsString::from_vec(b"ab\xe9ab".to_vec()));

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(list, &mut out, &mut err);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, b"0,0\tab\n3,0\tab\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_rejects_non_ascii_pattern() {
        use std::os::unix::ffi::OsStringExt;

        let mut list = vec![OsString::from("lths"), OsString::from_vec(b"a\xe9".to_vec())];
        list.extend(args(&["0", "abcabc"]).into_iter().skip(1));

        let (code, out, err) = run_with(list);
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        assert!(err.contains("is not ASCII"));
    }
}
