use std::{fs, process};

use chaincalc::{error::CalcError, interpreter::dialect::Dialect, run};
use clap::Parser;

/// chaincalc evaluates one arithmetic expression strictly left to right.
///
/// An expression that holds nothing to evaluate prints nothing and succeeds;
/// a missing expression prints "empty expression" and fails.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the expression argument as a path to read the expression from.
    #[arg(short, long)]
    file: bool,

    /// Which grouping and function syntax to accept.
    #[arg(short, long, value_enum, default_value_t = Dialect::Extended)]
    dialect: Dialect,

    /// The expression, e.g. "2+(3*4)" or "pow(2,10)".
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let expression = if args.file {
        args.expression.as_deref().map(read_expression)
    } else {
        args.expression
    };

    match run(expression.as_deref(), args.dialect) {
        Ok(Some(result)) => println!("result: {result}"),
        Ok(None) => {},
        Err(e @ CalcError::InputAbsent) => {
            println!("{e}");
            process::exit(1);
        },
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}

fn read_expression(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        process::exit(1);
    })
}
