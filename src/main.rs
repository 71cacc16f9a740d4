use std::process::ExitCode;

use clap::Parser;
use ssbc::{evaluate, format_tokens, parse, ErrorInfo};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// ssbc (Super Simple BODMAS Calculator) evaluates an arithmetic expression
/// made of numbers, `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the expression in postfix notation instead of its value.
    #[arg(short, long)]
    postfix: bool,

    /// Log each stage to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate, e.g. "(300+23)*(43-21)/(84+7)".
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(level),
        )
        .init();
}

fn run(args: &Args) -> Result<String, ErrorInfo> {
    if args.postfix {
        parse(&args.expression).map(|tokens| format_tokens(&tokens))
    } else {
        evaluate(&args.expression).map(|value| value.to_string())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
