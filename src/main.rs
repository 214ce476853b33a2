use ttrack::commands::Cli;
use ttrack::msg_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
