use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, CommandFactory, Parser};
use sunum::{
    error::Diagnostic,
    interpreter::{
        config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NESTING, InterpreterConfig},
        evaluator::core::Interpreter,
    },
    run_source,
};
use tracing_subscriber::EnvFilter;

const SYNTAX_SAMPLE: &str = r#"Language syntax example:
  # This is a comment
  my_var = '10' /
  num write my_var /
  write "Hello World!" /
  x = '5' +* '2' / # x is 10
  x > '5' ? write "YES" ; ! write "NO" /
  func greet() write "hi" / end
  run greet /"#;

/// sunum runs scripts written in a small line-oriented language of numbers,
/// strings and named statement groups.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = SYNTAX_SAMPLE)]
struct Args {
    /// Script file to execute.
    file: Option<PathBuf>,

    /// Start an interactive session. Type `exit/` to leave.
    #[arg(short, long, conflicts_with_all = ["file", "eval"])]
    interactive: bool,

    /// Execute SOURCE given on the command line instead of a file.
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "file")]
    eval: Option<String>,

    /// How many `run` statements may be nested.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// How deeply parentheses, operators, conditions and `func` bodies may
    /// nest within one statement.
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(args.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    let config = InterpreterConfig::default().with_max_depth(args.max_depth)
                                             .with_max_nesting(args.max_nesting);

    if args.interactive {
        return interactive(config);
    }

    let source = if let Some(source) = args.eval {
        source
    } else if let Some(path) = &args.file {
        match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        }
    } else {
        // Without anything to run, show the usage text.
        if let Err(e) = Args::command().print_help() {
            eprintln!("{e}");
        }
        return ExitCode::SUCCESS;
    };

    let mut interpreter = Interpreter::with_config(config, io::stdout());
    report(&run_source(&source, &mut interpreter));
    ExitCode::SUCCESS
}

/// Reads one line at a time and runs it against a single interpreter, so
/// variables and categories persist between lines.
fn interactive(config: InterpreterConfig) -> ExitCode {
    println!("Interactive mode. Type 'exit/' to quit.");

    let mut interpreter = Interpreter::with_config(config, io::stdout());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
            None => break,
        };

        let line = line.trim();
        if line == "exit/" {
            break;
        }
        if line.is_empty() {
            continue;
        }

        report(&run_source(line, &mut interpreter));
    }

    println!("Leaving interactive mode.");
    ExitCode::SUCCESS
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "error",
        1 => "sunum=debug",
        _ => "sunum=trace",
    }
}
