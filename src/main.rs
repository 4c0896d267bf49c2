use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{LevelFilter, warn};
use ltrcalc::{EvalError, Evaluator, Options};

const PROMPT: &str = "Enter an arithmetic expression: ";

/// ltrcalc evaluates integer arithmetic expressions strictly from left to
/// right; only parentheses change the order.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Ignore a ')' that has no matching '(' instead of failing.
    #[arg(short, long)]
    lenient_parens: bool,

    /// Print diagnostics to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Read from standard input when omitted.
    /// May start with a sign, as in `-5+3`.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

impl Args {
    fn evaluator(&self) -> Evaluator {
        Evaluator::new(Options { strict_parens: !self.lenient_parens })
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let expression = match &args.expression {
        Some(expression) => expression.clone(),
        None => {
            read_expression(io::stdin().lock(), io::stdout()).unwrap_or_else(|e| {
                eprintln!("Failed to read an expression from standard input: {e}");
                std::process::exit(1);
            })
        },
    };

    let result = args.evaluator().evaluate(&expression);
    if let Err(e) = &result {
        warn!("{e}");
    }

    println!("{}", render(result));
}

/// Formats an outcome as `Result => <value>:<success>`, with `0` as the value
/// on failure.
fn render(result: Result<i64, EvalError>) -> String {
    let (value, state) = match result {
        Ok(value) => (value, true),
        Err(_) => (0, false),
    };
    format!("Result => {value}:{state}")
}

fn read_expression(mut input: impl BufRead, mut output: impl Write) -> io::Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    let level = match verbosity {
        0 => None,
        1 => Some(LevelFilter::Warn),
        2 => Some(LevelFilter::Info),
        3 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}
