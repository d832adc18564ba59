use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ppm_pixelator::cli::{self, Cli};
use ppm_pixelator::logger;

use tracing::info;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help goes to stdout and is a success; parse failures exit with 1.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logger::init();

    match pixelate_image(&cli) {
        Ok(()) => {
            info!("Pixelation successful!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn pixelate_image(cli: &Cli) -> anyhow::Result<()> {
    info!("Starting pixelator...");

    cli::run(cli).with_context(|| format!("could not produce '{}'", cli.output_file.display()))
}
