use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use bandslicer::utils::logger::Logger;
use bandslicer::commands::{CommandFactory, BandslicerCommandFactory};

fn main() {
    let matches = ClapCommand::new("bandslicer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Slice review-page screenshots into one image per review")
        .arg(
            Arg::new("input")
                .help("Input screenshot (or batch manifest with --batch)")
                .required_unless_present("list-profiles")
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("slice")
                .short('s')
                .long("slice")
                .help("Crop bands and save them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("overlay")
                .long("overlay")
                .help("Draw the detected layout in red onto a copy of the screenshot")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Treat the input as a batch manifest")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-profiles")
                .long("list-profiles")
                .help("List the available layout profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("profile")
                .short('p')
                .long("profile")
                .help("Layout profile name")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("profile-file")
                .long("profile-file")
                .help("TOML file with additional layout profiles")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("column")
                .long("column")
                .help("Override the column probed for boundaries")
                .value_name("X")
                .required(false),
        )
        .arg(
            Arg::new("tolerance")
                .long("tolerance")
                .help("Override the per-channel color tolerance (0 = exact)")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("bands")
                .long("bands")
                .help("Bands to save, 1-based (e.g. '1,3')")
                .value_name("LIST")
                .required(false),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Save every detected band")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .short('d')
                .long("output-dir")
                .help("Directory for sliced bands")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image for --overlay")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("name-template")
                .long("name-template")
                .help("Band file name, with {movie} {page} {review} {band} {stem}")
                .value_name("TEMPLATE")
                .required(false),
        )
        .arg(
            Arg::new("movie")
                .long("movie")
                .help("Movie slug for the name template")
                .value_name("SLUG")
                .required(false),
        )
        .arg(
            Arg::new("page")
                .long("page")
                .help("Page number for the name template")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("review")
                .long("review")
                .help("Review number for the name template")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("overwrite")
                .long("overwrite")
                .help("Replace existing band files instead of skipping them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Operations log file")
                .value_name("FILE")
                .default_value("bandslicer.log"),
        )
        .get_matches();

    let log_file = matches.get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or("bandslicer.log");
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("bandslicer-global.log", matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = BandslicerCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
