use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use tracing::{debug, info, Level};

use exprcheck::language::Analysis;
use exprcheck::parsing;
use exprcheck::problem;
use exprcheck::rendering::{Identity, Render, Syntax, Terminal};

static PROMPT: &str = "Enter a string to check if it is a valid arithmetic expression: ";

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_UNREADABLE: i32 = 2;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("exprcheck")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Check lines of semicolon-terminated arithmetic statements.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("raw-control-chars")
                .short('R')
                .long("raw-control-chars")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit ANSI escape codes for highlighting even if output is redirected to a pipe or file."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log what the checker is doing to standard error. Repeat for more detail."),
        )
        .subcommand(
            Command::new("check")
                .about("Check every line of the given file")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the lines you want to check, or '-' for standard input."),
                ),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let raw = matches.get_flag("raw-control-chars");

    let renderer = choose_renderer(raw);

    let code = match matches.subcommand_matches("check") {
        Some(submatches) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(String::as_str)
                .unwrap_or("-");

            check_file(Path::new(filename), renderer.as_ref())
        }
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            interactive(&mut stdin.lock(), &mut stdout.lock(), renderer.as_ref())
        }
    };

    std::process::exit(code);
}

fn choose_renderer(raw: bool) -> Box<dyn Render> {
    if raw
        || std::io::stdout()
            .is_terminal()
    {
        Box::new(Terminal)
    } else {
        Box::new(Identity)
    }
}

/// Prompt for a line, check it, and report, until the input closes. Lines
/// which are not valid UTF-8 are checked with the offending bytes replaced.
fn interactive(input: &mut impl BufRead, output: &mut impl Write, renderer: &dyn Render) -> i32 {
    let mut buffer = Vec::new();

    loop {
        if let Err(error) = write!(output, "{}", PROMPT).and_then(|_| output.flush()) {
            debug!(?error);
            return EXIT_UNREADABLE;
        }

        buffer.clear();
        match input.read_until(b'\n', &mut buffer) {
            Ok(0) => {
                if let Err(error) = writeln!(output) {
                    debug!(?error);
                }
                return EXIT_SUCCESS;
            }
            Ok(_) => {}
            Err(error) => {
                eprintln!("{}: {}", renderer.style(Syntax::Error, "error"), error);
                return EXIT_UNREADABLE;
            }
        }

        let line = String::from_utf8_lossy(&buffer);
        let text = line.trim_end_matches(['\n', '\r']);
        let analysis = parsing::validate(text);

        let mut result = String::new();
        if let Some(violation) = analysis
            .verdict
            .violation()
        {
            result.push_str(&problem::concise_violation(violation));
            result.push('\n');
        }
        result.push_str(&problem::report_with(&analysis, renderer));

        if let Err(error) = writeln!(output, "{}", result) {
            debug!(?error);
            return EXIT_UNREADABLE;
        }
    }
}

/// Check each line of a file, returning the process exit status.
fn check_file(filename: &Path, renderer: &dyn Render) -> i32 {
    info!("Checking file: {}", filename.display());

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, renderer));
            return EXIT_UNREADABLE;
        }
    };

    let analyses = parsing::validate_lines(&content);

    for (line, analysis) in content
        .lines()
        .zip(&analyses)
    {
        if let Some(violation) = analysis
            .verdict
            .violation()
        {
            eprintln!("{}", problem::full_violation(violation, line, renderer));
        }
        println!("{}", problem::report_with(analysis, renderer));
    }

    exit_status(&analyses)
}

/// Success only if every line was valid.
fn exit_status(analyses: &[Analysis]) -> i32 {
    let failures = analyses
        .iter()
        .filter(|analysis| !analysis.is_valid())
        .count();

    debug!("{} invalid line{}", failures, if failures == 1 { "" } else { "s" });

    if failures > 0 {
        EXIT_INVALID
    } else {
        EXIT_SUCCESS
    }
}
