mod db;
mod export;
mod report;
mod show;

use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: db-tools <export|report|show> [--output PATH]";

#[tokio::main]
async fn main() -> ExitCode {
    // Log setup
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let output = parse_output(&args[1..]);

    let result = match command.as_str() {
        "export" => export::run(output.as_deref()).await,
        "report" => report::run(output.as_deref()).await,
        "show" => show::run().await,
        _ => {
            eprintln!("unknown command '{command}'");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{command} failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_output(args: &[String]) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--output" {
            return iter.next().cloned();
        }
    }
    None
}
