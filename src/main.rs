// verbump - commit hook entry point and CLI

use clap::Parser;
use std::process;
use verbump::cli::{Cli, CliDispatcher};
use verbump::utils::error::UserError;
use verbump::utils::logging::init_tracing;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_deref());

    let result = CliDispatcher::execute(cli.command, cli.config.as_deref());

    if let Err(err) = result {
        let user_error = UserError::from_bump_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
