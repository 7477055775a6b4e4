mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, show, system, vlans};
use runconf_common::config::Config;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    // Decorations would corrupt the JSON on stdout
    let cfg = Config {
        quiet: if commands.json { u8::MAX } else { commands.quiet },
        json: commands.json,
    };

    let result = match commands.command {
        Commands::Show { file } => {
            print::header("running-config", cfg.quiet);
            show::show(&file, &cfg)
        }
        Commands::Vlans { file } => {
            print::header("vlans", cfg.quiet);
            vlans::vlans(&file, &cfg)
        }
        Commands::System { file } => {
            print::header("system", cfg.quiet);
            system::system(&file, &cfg)
        }
    };

    match result {
        Ok(()) => {
            print::end_of_program(cfg.quiet);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
