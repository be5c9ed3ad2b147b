use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "runejson-cli",
    about = "Decode runejson input and print it as JSON",
    version
)]
struct Args {
    /// Only validate the input; print "ok" on success
    #[arg(short, long)]
    check: bool,

    /// Pretty-print JSON on output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Maximum nesting depth of arrays and objects
    #[arg(long, default_value_t = runejson::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log parser activity to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    builder.parse_default_env();
    builder.init();
}

fn open_input(input: Option<&PathBuf>) -> Result<Box<dyn Read>> {
    Ok(match input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        ),
        None => Box::new(stdin()),
    })
}

fn run(args: &Args) -> Result<bool> {
    let options = runejson::Options {
        max_depth: args.max_depth,
    };
    let reader = open_input(args.input.as_ref())?;
    let parser = runejson::Parser::with_options(reader, options)?;
    log::debug!("buffered {} code points", parser.len());

    let value = match parser.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {}", e);
            if e.is_unsupported() {
                eprintln!("note: the input uses a JSON feature this parser does not support");
            }
            return Ok(false);
        }
    };

    if args.check {
        println!("ok");
        return Ok(true);
    }

    let json: serde_json::Value = value.into();
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", serde_json::to_string(&json)?);
    }
    Ok(true)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    if run(&args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
