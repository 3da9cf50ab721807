use clap::Parser;
use iprange::cli::Cli;
use iprange::commands::execute;
use iprange::config::{init_logging, Config};
use iprange::output::print_message;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env();
    if let Err(e) = init_logging(&config) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let report = execute(&cli.command, cli.output_mode());
    print_message(&report.message, report.success);
    report.exit_code()
}
