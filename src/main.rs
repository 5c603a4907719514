use std::io::{self, BufRead, Write};

use clap::Parser;
use intcalc::eval_expression;

/// intcalc is an easy to use interactive calculator for integer arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression and exits instead of starting the
    /// interactive loop.
    #[arg(short, long)]
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(source) = args.expression {
        evaluate_line(&source);
        return;
    }

    println!("Welcome to the intcalc calculator");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("Enter the expression: ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            // EOF ends the session cleanly.
            Ok(0) => break,
            Ok(_) => evaluate_line(&line),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            },
        }
    }
}

/// Runs one line through the pipeline, printing `Result: <value>` on success.
/// Any failure is fatal: the message goes to stderr and the process exits
/// with a non-zero status, abandoning further input.
fn evaluate_line(source: &str) {
    match eval_expression(source) {
        Ok(value) => println!("Result: {value}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}
