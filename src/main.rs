use cidr_calculator::cli::{self, Cli};
use cidr_calculator::logging;
use cidr_calculator::output;
use cidr_calculator::Settings;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Cli::parse();
    logging::init(&args.log_config)?;
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let outcome = Settings::from_env().and_then(|settings| cli::run(&args, &settings));
    match outcome {
        Ok(rendered) => {
            print!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if e.is_internal() {
                log::error!("Internal failure: {e}");
            } else {
                log::debug!("Request rejected: {e}");
            }
            eprint!("{}", output::render_error(&e, args.format));
            Ok(ExitCode::FAILURE)
        }
    }
}
