//! Reads a gallery detail page from stdin and prints the parsed record as JSON.
//!
//! Set `RUST_LOG=debug` to see which parts of the page fell back to defaults.

use std::io::{self, Read};
use std::process::ExitCode;

use eh_detail::parse_bytes;

fn main() -> ExitCode {
    env_logger::builder().format_timestamp(None).init();

    let mut body = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut body) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    match parse_bytes(&body) {
        Ok(detail) => match serde_json::to_string_pretty(&detail) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Failed to serialize record: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("{:?}: {err}", err.kind());
            ExitCode::from(2)
        }
    }
}
