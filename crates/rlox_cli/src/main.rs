//! rlox: The Lox scanner CLI.
//!
//! Usage:
//!   rlox [script]
//!
//! With a script file, scans it and prints the token sequence; exits with
//! status 65 if any lexical error was reported. With no arguments, starts an
//! interactive prompt where errors never terminate the session.

use clap::Parser as ClapParser;
use std::io::{self, BufRead, Write};
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "rlox", about = "rlox - A Lox scanner written in Rust")]
struct Cli {
    /// Lox script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<String>,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.script {
        Some(ref script) => run_script(script),
        None => run_prompt(),
    };
    process::exit(exit_code);
}

fn run_script(path: &str) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            print_error(&format!("Could not read '{}': {}", path, e));
            return 1;
        }
    };

    let diagnostics = run(&source);
    if diagnostics.has_errors() {
        65
    } else {
        0
    }
}

fn run_prompt() -> i32 {
    let stdin = io::stdin();
    loop {
        print!("lox> ");
        if io::stdout().flush().is_err() {
            return 1;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return 0, // end of input
            Ok(_) => {
                // Errors are reported per line; the session keeps going.
                let _ = run(&line);
            }
            Err(e) => {
                print_error(&format!("Could not read input: {}", e));
                return 1;
            }
        }
    }
}

/// Scan one compilation unit, print its tokens, and report its diagnostics.
fn run(source: &str) -> rlox_diagnostics::DiagnosticCollection {
    let result = rlox_scanner::scan(source);
    for token in &result.tokens {
        println!("{}", token);
    }
    for diagnostic in result.diagnostics.diagnostics() {
        eprintln!("{}", diagnostic);
    }
    result.diagnostics
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
