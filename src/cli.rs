//! Command-line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `spritesplit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("spritesplit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Split sprite images into one cropped PNG per opaque region")
        .arg(
            Arg::new("input_folder")
                .help("Folder containing png/jpg/jpeg/bmp/gif images")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output_folder")
                .help("Folder receiving one subfolder of regions per image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("connectivity")
                .long("connectivity")
                .help("Pixel connectivity used to group opaque pixels (4 or 8)")
                .value_name("N")
                .value_parser(["4", "8"])
                .default_value("4")
                .required(false),
        )
        .arg(
            Arg::new("preserve-alpha")
                .long("preserve-alpha")
                .help("Keep source alpha values inside each region instead of making them fully opaque")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("List the regions that would be written without writing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Do not draw a progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log output to this file")
                .value_name("FILE")
                .required(false),
        )
}
