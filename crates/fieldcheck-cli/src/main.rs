//! fieldcheck CLI.

use clap::Parser;

use fieldcheck_cli::cli::{Cli, Command};
use fieldcheck_cli::commands::{load_config, run_normalize, run_validate};
use fieldcheck_cli::logging::init_logging;
use fieldcheck_cli::summary::{print_changes, print_report, tags_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Tags => {
            println!("{}", tags_table());
            0
        }
        Command::Normalize(args) => {
            match load_config(cli.config.as_deref()).and_then(|config| run_normalize(args, config))
            {
                Ok(changes) => {
                    print_changes(&changes, args.write);
                    0
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Validate(args) => {
            match load_config(cli.config.as_deref()).and_then(|config| run_validate(args, config))
            {
                Ok(report) => {
                    print_report(&report);
                    if report.is_valid() { 0 } else { 1 }
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
    };
    std::process::exit(exit_code);
}
