//! `ujson-fmt` re-indents JSON from stdin to stdout.
//!
//! Usage:
//!   ujson-fmt [--allow-empty] [--indent N] [--max-depth N]
//!
//! Set `RUST_LOG=trace` to see codec logging on stderr.

use std::io::{self, Read};
use std::process::ExitCode;

use ujson::options::MAX_INDENT;
use ujson::{parse_with_options, write_to, ParseOptions, SerializeOptions};

fn main() -> ExitCode {
    env_logger::init();

    let mut parse_options = ParseOptions::default();
    let mut serialize_options = SerializeOptions::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--allow-empty" => parse_options.allow_empty = true,
            "--indent" | "--max-depth" => {
                let Some(n) = args.next().and_then(|v| v.parse::<usize>().ok()) else {
                    eprintln!("{arg} expects a non-negative integer");
                    return ExitCode::from(2);
                };
                if arg == "--indent" {
                    if n > MAX_INDENT {
                        eprintln!("--indent must be at most {MAX_INDENT}");
                        return ExitCode::from(2);
                    }
                    serialize_options.indent = n;
                } else {
                    parse_options.max_depth = n;
                }
            }
            other => {
                eprintln!("Unknown argument: {other}");
                return ExitCode::from(2);
            }
        }
    }

    let mut buf = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut buf) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let value = match parse_with_options(&buf, &parse_options) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e} ({} bytes remaining)", e.remaining(buf.len()));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_to(io::stdout().lock(), &value, &serialize_options) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
