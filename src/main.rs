// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! microdriver CLI
//!
//! Executes a `.http` file, or lets the user pick one from a directory.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use microdriver::{console, Error, ExecutorConfig, HeaderScope, ParserConfig, Runner};

/// Parsed command line
#[derive(Debug)]
struct Options {
    path: PathBuf,
    parser: ParserConfig,
    executor: ExecutorConfig,
}

enum Command {
    Run(Options),
    Help,
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the response body
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("microdriver=warn".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("microdriver {}", microdriver::VERSION);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            console::error(&e);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console::error(&e);
            if e.is_timeout() {
                console::error("The request timed out; raise the limit with --timeout <SECS>");
            }
            tracing::debug!(network = e.is_network(), error = ?e, "Run failed");
            ExitCode::from(1)
        }
    }
}

async fn run(options: Options) -> Result<(), Error> {
    let runner = Runner::with_config(options.parser, options.executor)?;
    let response = runner.run(&options.path).await?;

    console::write_response(&mut std::io::stdout(), &response)?;
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Command, Error> {
    let mut path = None;
    let mut parser = ParserConfig::new();
    let mut executor = ExecutorConfig::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--headers-before-body" => {
                parser = parser.header_scope(HeaderScope::BeforeBody);
            }
            "--timeout" => {
                let value = iter
                    .next()
                    .ok_or_else(|| Error::config("--timeout requires a value in seconds"))?;
                let secs: u64 = value
                    .parse()
                    .map_err(|_| Error::config(format!("Invalid timeout '{}'", value)))?;
                executor = executor.timeout(Duration::from_secs(secs));
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(Error::config(format!("Unknown option: {}", flag)));
            }
            positional => {
                if path.is_some() {
                    return Err(Error::config(format!("Unexpected argument: {}", positional)));
                }
                path = Some(PathBuf::from(positional));
            }
        }
    }

    let path = match path {
        Some(path) => path,
        None => env::current_dir()?,
    };

    Ok(Command::Run(Options {
        path,
        parser,
        executor,
    }))
}

fn print_usage() {
    println!(
        r#"microdriver - run a .http request file

USAGE:
    microdriver [OPTIONS] [PATH]

ARGS:
    PATH    A .http file to execute, or a directory to pick one from
            (defaults to the current directory)

OPTIONS:
    --timeout <SECS>        Abort the request after SECS seconds
    --headers-before-body   Only read headers above the first blank line
    -h, --help              Show this help message
    -V, --version           Show version information

ENVIRONMENT:
    RUST_LOG                Log filter, e.g. RUST_LOG=microdriver=debug
"#
    );
}
