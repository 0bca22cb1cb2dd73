use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use history_cuts_cli::cli_args::Args;
use history_cuts_cli::session::{Outcome, Session};
use history_cuts_core::error::Result;
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse();

    let source = args.history_source()?;
    let emitter = args.script_emitter();
    debug!("Output directory: `{}`", emitter.directory.display());

    let mut session =
        Session::new(stdin().lock(), stdout().lock(), source, emitter).with_dry_run(args.dry_run);

    let outcome = session.run()?;
    if let Outcome::Written(path) = &outcome {
        debug!("Session finished, script at `{}`", path.display());
    } else {
        debug!("Session finished: {:?}", outcome);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
