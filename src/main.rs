use std::path::Path;
use std::process;

use log::{error, LevelFilter};

use spritesplit::cli::build_cli;
use spritesplit::commands::{Command, SplitCommand};
use spritesplit::utils::logger::Logger;

fn main() {
    // Wrong arity prints usage and exits non-zero inside clap
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = matches.get_one::<String>("log-file").map(Path::new);

    if let Err(e) = Logger::init_global_logger(log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let command = match SplitCommand::new(&matches) {
        Ok(command) => command,
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = command.execute() {
        error!("Command execution error: {}", e);
        process::exit(1);
    }
}
