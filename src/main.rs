use std::process::ExitCode;

use clap::Parser;
use log::info;
use serde::Serialize;

use passgen::{GenerationOptions, estimate_entropy, generate, validate};

/// Generate a random password from a set of character-class toggles.
#[derive(Debug, Parser)]
#[command(name = "passgen", version, about)]
struct Cli {
    /// Password length (8-16)
    #[arg(short, long, value_name = "LENGTH")]
    length: Option<String>,

    /// Leave lowercase letters out of the pool
    #[arg(long)]
    no_lowercase: bool,

    /// Include uppercase letters
    #[arg(short = 'u', long)]
    uppercase: bool,

    /// Include digits
    #[arg(short = 'n', long)]
    numbers: bool,

    /// Include symbols
    #[arg(short = 's', long)]
    symbols: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    password: &'a str,
    length: usize,
    entropy_bits: f64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    // An absent --length goes through validation like an empty form field.
    let raw_length = cli.length.as_deref().unwrap_or("");
    let length = match validate(raw_length) {
        Ok(length) => length,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let options = GenerationOptions {
        include_lowercase: !cli.no_lowercase,
        include_uppercase: cli.uppercase,
        include_numbers: cli.numbers,
        include_symbols: cli.symbols,
        length: Some(length),
    };

    let password = match generate(&options) {
        Ok(password) => password,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let entropy_bits = estimate_entropy(password.as_str());
    info!("generated a {}-character password", password.len());

    if cli.json {
        let output = Output {
            password: password.as_str(),
            length: password.len(),
            entropy_bits,
        };
        match serde_json::to_string(&output) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{password}");
        eprintln!("~{entropy_bits:.0} bits of entropy");
    }

    ExitCode::SUCCESS
}
