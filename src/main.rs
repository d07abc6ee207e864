use colored::Colorize;
use std::io::{self, IsTerminal};
use std::process;

use caldate::CaldateError;

fn main() {
    pretty_env_logger::init();

    // colored only looks at stdout; errors go to stderr
    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = caldate::cli::run() {
        match &e {
            CaldateError::Usage { reason } => {
                log::debug!("usage error: {}", reason);
                eprintln!("{}", e);
            }
            _ => eprintln!("{} {}", "ERROR:".red().bold(), e),
        }
        process::exit(e.exit_code());
    }
}
